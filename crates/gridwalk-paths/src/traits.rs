use gridwalk_core::{Grid, Point};

use crate::config::PathfinderKind;
use crate::error::PathError;
use crate::path::Path;

/// A grid path search, interchangeable across algorithms.
pub trait Pathfinder {
    /// Find a path from `start` to `end`, both inclusive.
    ///
    /// Returns [`PathError::OutOfBounds`] if either endpoint lies outside the
    /// grid, and an empty [`Path`] if `end` cannot be reached. The grid is
    /// borrowed mutably because breadth-first search uses the cells' visited
    /// flags as scratch space.
    fn find_path(&mut self, grid: &mut Grid, start: Point, end: Point) -> Result<Path, PathError>;

    /// Which algorithm this is.
    fn kind(&self) -> PathfinderKind;
}
