use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation flag shared between a search and its caller.
///
/// Pathfinders check the token once per frontier expansion. Clones observe
/// the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that searches holding this token stop.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Clear a previous cancellation so the token can be reused.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// `Err(Cancelled)` if `token` is present and triggered.
#[inline]
pub(crate) fn check(token: Option<&CancelToken>) -> Result<(), crate::PathError> {
    match token {
        Some(t) if t.is_cancelled() => Err(crate::PathError::Cancelled),
        _ => Ok(()),
    }
}
