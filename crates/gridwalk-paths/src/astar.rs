use std::collections::{HashMap, HashSet};

use gridwalk_core::{Grid, Point};

use crate::cancel::{self, CancelToken};
use crate::config::PathfinderKind;
use crate::distance::{euclidean, manhattan};
use crate::error::PathError;
use crate::node::SearchNode;
use crate::path::Path;
use crate::queue::PriorityQueue;
use crate::traits::Pathfinder;

/// A* search over the 4-neighbourhood.
///
/// Frontier priority is `g + h` with `h` the Manhattan distance to the goal;
/// each step costs the Euclidean distance between the two cells. A position
/// is pushed onto the frontier only when it is not already waiting there: an
/// improved `g` for a waiting position updates its score and predecessor but
/// leaves its queued priority as it was. On a fully populated grid the result
/// is still a shortest path, but around removed cells that stale priority can
/// let the goal surface first through a longer route.
///
/// A* never touches the cells' visited flags, so [`search`](Self::search)
/// only needs a shared borrow and may run concurrently on one grid.
#[derive(Debug, Clone, Default)]
pub struct Astar {
    cancel: Option<CancelToken>,
}

impl Astar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `token` before every frontier expansion.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Compute a path from `start` to `end`, both inclusive.
    ///
    /// Returns an empty path if `end` is unreachable or either endpoint has no
    /// cell.
    pub fn search(&self, grid: &Grid, start: Point, end: Point) -> Result<Path, PathError> {
        grid.check_bounds(start)?;
        grid.check_bounds(end)?;
        if !grid.is_present(start) || !grid.is_present(end) {
            log::debug!("astar: {start} -> {end}: endpoint has no cell");
            return Ok(Path::empty());
        }

        let mut open: PriorityQueue<SearchNode> = PriorityQueue::new();
        let mut open_set: HashSet<Point> = HashSet::new();
        let mut came_from: HashMap<Point, Point> = HashMap::new();
        let mut g_score: HashMap<Point, f64> = HashMap::new();

        g_score.insert(start, 0.0);
        open.enqueue(SearchNode::new(start, manhattan(start, end)));
        open_set.insert(start);

        let mut expanded = 0usize;
        while !open.is_empty() {
            cancel::check(self.cancel.as_ref())?;

            let current = open.dequeue()?.position;
            open_set.remove(&current);

            if current == end {
                let path = reconstruct(grid, &came_from, start, current);
                log::debug!(
                    "astar: {start} -> {end}: {} cells after {expanded} expansions",
                    path.len()
                );
                return Ok(path);
            }

            expanded += 1;
            let Some(&current_g) = g_score.get(&current) else {
                log::error!("astar: frontier node {current} has no g-score");
                return Err(PathError::CorruptState(current));
            };
            log::trace!("astar: expand {current} g={current_g}");

            for n in grid.neighbors4(current) {
                if !grid.is_present(n) {
                    continue;
                }
                let tentative_g = current_g + euclidean(current, n);
                if g_score.get(&n).is_none_or(|&g| tentative_g < g) {
                    came_from.insert(n, current);
                    g_score.insert(n, tentative_g);
                    let total = tentative_g + manhattan(n, end);
                    if open_set.insert(n) {
                        open.enqueue(SearchNode::new(n, total));
                    }
                }
            }
        }

        log::debug!("astar: {start} -> {end}: unreachable after {expanded} expansions");
        Ok(Path::empty())
    }
}

/// Walk `came_from` back from `goal` to `start`. A position without a cell
/// truncates the path at that point.
fn reconstruct(grid: &Grid, came_from: &HashMap<Point, Point>, start: Point, goal: Point) -> Path {
    let mut cells = Vec::new();
    let mut cur = goal;
    loop {
        match grid.cell(cur) {
            Some(c) => cells.push(*c),
            None => {
                log::error!("astar: {}", PathError::CorruptState(cur));
                break;
            }
        }
        if cur == start {
            break;
        }
        match came_from.get(&cur) {
            Some(&prev) => cur = prev,
            None => {
                log::error!("astar: predecessor chain broken at {cur}");
                break;
            }
        }
    }
    cells.reverse();
    cells.into()
}

impl Pathfinder for Astar {
    fn find_path(&mut self, grid: &mut Grid, start: Point, end: Point) -> Result<Path, PathError> {
        self.search(grid, start, end)
    }

    fn kind(&self) -> PathfinderKind {
        PathfinderKind::AStar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_by_three_corner_to_corner() {
        let g = Grid::new(3, 3).unwrap();
        let path = Astar::new().search(&g, Point::ZERO, Point::new(2, 2)).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.steps(), 4);
        assert!((path.cost() - 4.0).abs() < 1e-9);
        assert_eq!(path.first().map(|c| c.pos()), Some(Point::ZERO));
        assert_eq!(path.last().map(|c| c.pos()), Some(Point::new(2, 2)));
        assert!(path.is_connected());
    }

    #[test]
    fn same_start_and_end() {
        let g = Grid::new(4, 4).unwrap();
        let p = Point::new(2, 1);
        let path = Astar::new().search(&g, p, p).unwrap();
        assert_eq!(path.points(), vec![p]);
    }

    #[test]
    fn repeated_searches_agree() {
        let g = Grid::new(6, 9).unwrap();
        let a = Astar::new();
        let first = a.search(&g, Point::new(1, 5), Point::new(8, 0)).unwrap();
        let second = a.search(&g, Point::new(1, 5), Point::new(8, 0)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn routes_through_the_only_gap() {
        // 5x5 with a wall at x = 2 except the bottom row.
        let mut g = Grid::new(5, 5).unwrap();
        for y in 0..4 {
            g.remove_cell(Point::new(2, y)).unwrap();
        }
        let path = Astar::new().search(&g, Point::ZERO, Point::new(4, 0)).unwrap();
        assert!(path.is_connected());
        assert!(path.points().contains(&Point::new(2, 4)));
        assert_eq!(path.steps(), 12);
        assert!(path.iter().all(|c| g.is_present(c.pos())));
    }

    #[test]
    fn stale_priority_detours_around_holes() {
        use crate::bfs::Bfs;
        use crate::config::{BfsReconstruction, FloodStrategy};

        let mut g = Grid::new(6, 11).unwrap();
        for (x, y) in [(3, 2), (5, 3), (6, 2), (8, 3), (8, 4)] {
            g.remove_cell(Point::new(x, y)).unwrap();
        }
        let start = Point::new(0, 2);
        let end = Point::new(10, 3);
        let path = Astar::new().search(&g, start, end).unwrap();
        let expected: Vec<Point> = [
            (0, 2), (0, 3), (1, 3), (2, 3), (3, 3), (4, 3), (4, 4), (5, 4),
            (6, 4), (7, 4), (7, 3), (7, 2), (8, 2), (9, 2), (10, 2), (10, 3),
        ]
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect();
        assert!(path.is_connected());
        assert_eq!(path.points(), expected);
        assert_eq!(path.steps(), 15);

        let shortest = Bfs::with_mode(BfsReconstruction::Predecessor, FloodStrategy::Queue)
            .find_path(&mut g, start, end)
            .unwrap();
        assert_eq!(shortest.steps(), 13);
    }

    #[test]
    fn unreachable_goal_is_empty() {
        let mut g = Grid::new(3, 3).unwrap();
        for y in 0..3 {
            g.remove_cell(Point::new(1, y)).unwrap();
        }
        let path = Astar::new().search(&g, Point::ZERO, Point::new(2, 2)).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn absent_goal_is_empty() {
        let mut g = Grid::new(3, 3).unwrap();
        g.remove_cell(Point::new(2, 2)).unwrap();
        let path = Astar::new().search(&g, Point::ZERO, Point::new(2, 2)).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn does_not_touch_visited_flags() {
        let mut g = Grid::new(3, 3).unwrap();
        let path = Astar::new()
            .find_path(&mut g, Point::ZERO, Point::new(2, 2))
            .unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(g.visited_count(), 0);
    }

    #[test]
    fn out_of_bounds_endpoints() {
        let g = Grid::new(3, 3).unwrap();
        let a = Astar::new();
        assert!(matches!(
            a.search(&g, Point::ZERO, Point::new(0, 3)),
            Err(PathError::OutOfBounds { pos, rows: 3, columns: 3 }) if pos == Point::new(0, 3)
        ));
        assert!(matches!(
            a.search(&g, Point::new(-1, 0), Point::ZERO),
            Err(PathError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn cancelled_search() {
        let token = CancelToken::new();
        let g = Grid::new(3, 3).unwrap();
        let a = Astar::new().with_cancel(token.clone());
        assert!(a.search(&g, Point::ZERO, Point::new(2, 2)).is_ok());
        token.cancel();
        assert_eq!(
            a.search(&g, Point::ZERO, Point::new(2, 2)),
            Err(PathError::Cancelled)
        );
    }
}
