//! Host side of a gridwalk search: lays out the grid, runs the configured
//! pathfinder, draws the result and moves an avatar along it.
//!
//! Shared by the `walk` binary and its tests.

use gridwalk_core::{Grid, Point};
use gridwalk_paths::{Path, PathError, SearchConfig, Session};

pub const ROWS: i32 = 10;
pub const COLUMNS: i32 = 10;
/// Avatar speed in cells per second.
pub const MOVE_SPEED: f64 = 2.0;
/// Simulated frame time in seconds.
pub const FRAME_DT: f64 = 1.0 / 60.0;
/// Distance at which the avatar counts as having reached a waypoint.
const ARRIVE_EPSILON: f64 = 0.1;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Everything the host decides before the search runs.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkOptions {
    pub rows: i32,
    pub columns: i32,
    pub start: Point,
    pub end: Point,
    pub holes: Vec<Point>,
    pub config: SearchConfig,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            rows: ROWS,
            columns: COLUMNS,
            start: Point::new(0, 0),
            end: Point::new(2, 2),
            holes: Vec::new(),
            config: SearchConfig::default(),
        }
    }
}

impl WalkOptions {
    /// Build the session: populate the grid, then punch out the holes.
    pub fn session(&self) -> Result<Session, PathError> {
        let mut grid = Grid::new(self.rows, self.columns)?;
        for &h in &self.holes {
            grid.remove_cell(h)?;
        }
        Ok(Session::with_grid(grid, self.config))
    }
}

/// Parse `"x,y"` into a point.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw the grid with +y pointing up.
///
/// `#` absent, `S`/`E` endpoints, `*` path, `o` visited by a flood, `.` open.
pub fn render(grid: &Grid, path: &Path, start: Point, end: Point) -> String {
    let on_path = path.points();
    let mut out = String::new();
    for y in (0..grid.rows()).rev() {
        for x in 0..grid.columns() {
            let p = Point::new(x, y);
            let ch = match grid.cell(p) {
                None => '#',
                Some(_) if p == start => 'S',
                Some(_) if p == end => 'E',
                Some(_) if on_path.contains(&p) => '*',
                Some(c) if c.visited => 'o',
                Some(_) => '.',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

/// The path the avatar will follow and whether it ends at the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: Path,
    pub reaches_end: bool,
}

/// Search from `start` to `end`. A stuck greedy walk still yields its partial
/// path, flagged as not reaching `end`.
pub fn plan(session: &mut Session, start: Point, end: Point) -> Result<Route, PathError> {
    let path = match session.find_path(start, end) {
        Ok(path) => path,
        Err(PathError::PathfindingStuck { at, partial }) => {
            log::warn!("walk stuck at {at}; following the partial path");
            partial
        }
        Err(e) => return Err(e),
    };
    let reaches_end = path.last().is_some_and(|c| c.pos() == end);
    Ok(Route { path, reaches_end })
}

// ---------------------------------------------------------------------------
// Avatar
// ---------------------------------------------------------------------------

/// A marker that glides from cell to cell at a fixed speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Avatar {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
}

impl Avatar {
    pub fn at(p: Point, speed: f64) -> Self {
        Self {
            x: f64::from(p.x),
            y: f64::from(p.y),
            speed,
        }
    }

    fn distance_to(&self, p: Point) -> f64 {
        (f64::from(p.x) - self.x).hypot(f64::from(p.y) - self.y)
    }

    /// Advance toward `target` by at most `speed * dt`, never overshooting.
    pub fn step_toward(&mut self, target: Point, dt: f64) {
        let max_delta = self.speed * dt;
        let dist = self.distance_to(target);
        if dist <= max_delta || dist == 0.0 {
            self.x = f64::from(target.x);
            self.y = f64::from(target.y);
        } else {
            self.x += (f64::from(target.x) - self.x) / dist * max_delta;
            self.y += (f64::from(target.y) - self.y) / dist * max_delta;
        }
    }

    /// Move along `path` one frame at a time, returning the number of frames
    /// taken. Each waypoint counts as reached within a tenth of a cell.
    pub fn follow(&mut self, path: &Path, dt: f64) -> usize {
        let mut frames = 0;
        for cell in path {
            let target = cell.pos();
            while self.distance_to(target) > ARRIVE_EPSILON {
                self.step_toward(target, dt);
                frames += 1;
            }
            log::info!("avatar reached {target} after {frames} frames");
        }
        frames
    }
}
