use std::fmt;
use std::str::FromStr;

use crate::astar::Astar;
use crate::bfs::Bfs;
use crate::cancel::CancelToken;
use crate::traits::Pathfinder;

/// Available search algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PathfinderKind {
    #[default]
    AStar,
    Bfs,
}

impl fmt::Display for PathfinderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AStar => "a_star",
            Self::Bfs => "bfs",
        })
    }
}

impl FromStr for PathfinderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a_star" | "astar" | "a*" => Ok(Self::AStar),
            "bfs" => Ok(Self::Bfs),
            other => Err(format!("unknown algorithm {other:?} (expected astar or bfs)")),
        }
    }
}

/// How the BFS turns its visited set into a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BfsReconstruction {
    /// Walk from the start, always stepping to the visited neighbour closest
    /// (straight-line) to the end. Not guaranteed shortest.
    #[default]
    Greedy,
    /// Backtrack recorded flood predecessors from the end. Shortest in steps.
    Predecessor,
}

/// How the BFS flood phase propagates the visited marker.
///
/// Both strategies produce the same visited set. Only consulted in
/// [`BfsReconstruction::Greedy`] mode; predecessor tracking always floods with
/// a queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FloodStrategy {
    /// Repeated sweeps over the whole grid, at most `rows * columns - 1`
    /// rounds, stopping once a round marks nothing new.
    #[default]
    Relaxation,
    /// Queue-driven flood fill.
    Queue,
}

/// Search settings chosen before a [`Session`](crate::Session) starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub algorithm: PathfinderKind,
    pub bfs_reconstruction: BfsReconstruction,
    pub flood_strategy: FloodStrategy,
}

impl SearchConfig {
    /// Default settings with the given algorithm.
    pub fn with_algorithm(algorithm: PathfinderKind) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Instantiate the configured pathfinder.
    pub fn build(&self) -> Box<dyn Pathfinder> {
        self.build_with(None)
    }

    /// Instantiate the configured pathfinder, checking `cancel` at every
    /// frontier expansion.
    pub fn build_cancellable(&self, cancel: CancelToken) -> Box<dyn Pathfinder> {
        self.build_with(Some(cancel))
    }

    fn build_with(&self, cancel: Option<CancelToken>) -> Box<dyn Pathfinder> {
        match self.algorithm {
            PathfinderKind::AStar => {
                let mut a = Astar::new();
                if let Some(t) = cancel {
                    a = a.with_cancel(t);
                }
                Box::new(a)
            }
            PathfinderKind::Bfs => {
                let mut b = Bfs::with_mode(self.bfs_reconstruction, self.flood_strategy);
                if let Some(t) = cancel {
                    b = b.with_cancel(t);
                }
                Box::new(b)
            }
        }
    }
}
