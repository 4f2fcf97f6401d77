use std::collections::VecDeque;

use gridwalk_core::{Cell, Grid, Point};

use crate::cancel::{self, CancelToken};
use crate::config::{BfsReconstruction, FloodStrategy, PathfinderKind};
use crate::error::PathError;
use crate::path::Path;
use crate::traits::Pathfinder;

/// Breadth-first flood search.
///
/// A search runs in two phases. [`calculate_visited`](Self::calculate_visited)
/// floods the visited flag outward from the start through present cells;
/// [`build_path`](Self::build_path) then turns the visited set into a path.
///
/// In the default [`BfsReconstruction::Greedy`] mode the path is built by
/// walking from the start and always stepping to the visited neighbour nearest
/// (straight-line) to the end, first in +y, +x, −y, −x order on ties. This walk
/// keeps no predecessors: it can be longer than the shortest path, and around
/// obstacles it can bounce between cells, in which case it fails with
/// [`PathError::PathfindingStuck`]. [`BfsReconstruction::Predecessor`] records
/// flood parents instead and returns a shortest path.
#[derive(Debug, Clone, Default)]
pub struct Bfs {
    reconstruction: BfsReconstruction,
    flood: FloodStrategy,
    cancel: Option<CancelToken>,
    // predecessor mode caches, indexed column-major like the grid
    parents: Vec<Option<Point>>,
    queue: VecDeque<Point>,
}

#[inline]
fn slot(grid: &Grid, p: Point) -> usize {
    p.x as usize * grid.rows() as usize + p.y as usize
}

impl Bfs {
    /// Greedy reconstruction over a relaxation flood.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(reconstruction: BfsReconstruction, flood: FloodStrategy) -> Self {
        Self {
            reconstruction,
            flood,
            ..Self::default()
        }
    }

    /// Check `token` once per flood round, queue pop and walk step.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn reconstruction(&self) -> BfsReconstruction {
        self.reconstruction
    }

    pub fn flood_strategy(&self) -> FloodStrategy {
        self.flood
    }

    /// Reset every visited flag, then mark everything reachable from `start`.
    ///
    /// Returns the number of cells visited. An absent start visits nothing.
    pub fn calculate_visited(&mut self, grid: &mut Grid, start: Point) -> Result<usize, PathError> {
        grid.check_bounds(start)?;
        grid.reset_visited();
        if !grid.mark_visited(start) {
            log::debug!("bfs: start {start} has no cell");
            return Ok(0);
        }

        match (self.reconstruction, self.flood) {
            (BfsReconstruction::Predecessor, _) | (_, FloodStrategy::Queue) => {
                self.flood_queue(grid, start)?
            }
            (BfsReconstruction::Greedy, FloodStrategy::Relaxation) => self.flood_relax(grid)?,
        }

        let visited = grid.visited_count();
        log::debug!(
            "bfs: flood from {start} reached {visited} of {} cells",
            grid.cell_count()
        );
        Ok(visited)
    }

    fn flood_relax(&self, grid: &mut Grid) -> Result<(), PathError> {
        let rounds = grid.len().saturating_sub(1);
        for round in 0..rounds {
            cancel::check(self.cancel.as_ref())?;
            let mut changed = false;
            for x in 0..grid.columns() {
                for y in 0..grid.rows() {
                    let p = Point::new(x, y);
                    if !grid.is_visited(p) {
                        continue;
                    }
                    for n in p.neighbors_4() {
                        changed |= grid.mark_visited(n);
                    }
                }
            }
            if !changed {
                log::trace!("bfs: relaxation settled after {} rounds", round + 1);
                break;
            }
        }
        Ok(())
    }

    fn flood_queue(&mut self, grid: &mut Grid, start: Point) -> Result<(), PathError> {
        self.parents.clear();
        self.parents.resize(grid.len(), None);
        self.queue.clear();
        self.queue.push_back(start);

        while let Some(cp) = self.queue.pop_front() {
            cancel::check(self.cancel.as_ref())?;
            for n in cp.neighbors_4() {
                if grid.mark_visited(n) {
                    let i = slot(grid, n);
                    self.parents[i] = Some(cp);
                    self.queue.push_back(n);
                }
            }
        }
        Ok(())
    }

    /// Turn the current visited set into a path from `start` to `end`.
    ///
    /// Returns an empty path if `end` is unvisited. Predecessor mode relies on
    /// the parents recorded by the last [`calculate_visited`](Self::calculate_visited)
    /// on this same grid.
    pub fn build_path(&self, grid: &Grid, start: Point, end: Point) -> Result<Path, PathError> {
        grid.check_bounds(start)?;
        grid.check_bounds(end)?;
        if !grid.is_visited(end) {
            log::debug!("bfs: {end} not reached from {start}");
            return Ok(Path::empty());
        }
        match self.reconstruction {
            BfsReconstruction::Greedy => self.walk_greedy(grid, start, end),
            BfsReconstruction::Predecessor => self.backtrack(grid, start, end),
        }
    }

    fn walk_greedy(&self, grid: &Grid, start: Point, end: Point) -> Result<Path, PathError> {
        // A walk that never repeats a cell can hold at most every visited cell.
        let limit = grid.visited_count();
        let mut cells = vec![*grid.cell_at(start)?];
        let mut cur = start;

        while cur != end {
            cancel::check(self.cancel.as_ref())?;
            let next = grid
                .neighbors4(cur)
                .filter(|&n| grid.is_visited(n))
                .min_by_key(|n| n.distance_squared(end));
            let Some(next) = next else {
                log::warn!("bfs: greedy walk toward {end} has no visited neighbour at {cur}");
                return Err(PathError::PathfindingStuck {
                    at: cur,
                    partial: cells.into(),
                });
            };
            cells.push(*grid.cell_at(next)?);
            if cells.len() > limit {
                log::warn!("bfs: greedy walk toward {end} cycles through {next}");
                return Err(PathError::PathfindingStuck {
                    at: next,
                    partial: cells.into(),
                });
            }
            cur = next;
        }
        Ok(cells.into())
    }

    fn backtrack(&self, grid: &Grid, start: Point, end: Point) -> Result<Path, PathError> {
        if self.parents.len() != grid.len() {
            return Err(PathError::CorruptState(end));
        }
        let mut cells: Vec<Cell> = Vec::new();
        let mut cur = end;
        loop {
            cells.push(*grid.cell_at(cur)?);
            if cur == start {
                break;
            }
            match self.parents[slot(grid, cur)] {
                Some(p) if cells.len() < grid.len() => cur = p,
                _ => {
                    log::error!("bfs: predecessor chain from {end} broken at {cur}");
                    return Err(PathError::CorruptState(cur));
                }
            }
        }
        cells.reverse();
        Ok(cells.into())
    }
}

impl Pathfinder for Bfs {
    fn find_path(&mut self, grid: &mut Grid, start: Point, end: Point) -> Result<Path, PathError> {
        grid.check_bounds(start)?;
        grid.check_bounds(end)?;
        self.calculate_visited(grid, start)?;
        let path = self.build_path(grid, start, end)?;
        log::debug!("bfs: {start} -> {end}: {} cells", path.len());
        Ok(path)
    }

    fn kind(&self) -> PathfinderKind {
        PathfinderKind::Bfs
    }
}
