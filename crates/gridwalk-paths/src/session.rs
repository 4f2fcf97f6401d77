use gridwalk_core::{Grid, Point};

use crate::cancel::CancelToken;
use crate::config::{PathfinderKind, SearchConfig};
use crate::error::PathError;
use crate::path::Path;
use crate::traits::Pathfinder;

/// A grid paired with the pathfinder chosen for it.
///
/// The algorithm is fixed when the session is created. The grid can be
/// reshaped between searches through [`grid_mut`](Self::grid_mut).
pub struct Session {
    grid: Grid,
    config: SearchConfig,
    pathfinder: Box<dyn Pathfinder>,
}

impl Session {
    /// A fully populated `rows` x `columns` grid searched per `config`.
    pub fn new(rows: i32, columns: i32, config: SearchConfig) -> Result<Self, PathError> {
        Ok(Self::with_grid(Grid::new(rows, columns)?, config))
    }

    pub fn with_grid(grid: Grid, config: SearchConfig) -> Self {
        Self {
            grid,
            config,
            pathfinder: config.build(),
        }
    }

    /// Rebuild the pathfinder so it observes `token`.
    pub fn cancellable(mut self, token: CancelToken) -> Self {
        self.pathfinder = self.config.build_cancellable(token);
        self
    }

    pub fn find_path(&mut self, start: Point, end: Point) -> Result<Path, PathError> {
        self.pathfinder.find_path(&mut self.grid, start, end)
    }

    pub fn kind(&self) -> PathfinderKind {
        self.pathfinder.kind()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
