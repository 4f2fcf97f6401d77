//! The [`Cell`] type: one grid position plus its visited flag.

use crate::geom::Point;

/// A grid cell.
///
/// `visited` is scratch state for breadth-first search; it is reset at the
/// start of every flood and ignored by A*.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub visited: bool,
}

impl Cell {
    /// An unvisited cell at `p`.
    #[inline]
    pub const fn at(p: Point) -> Self {
        Self {
            x: p.x,
            y: p.y,
            visited: false,
        }
    }

    /// The cell's position.
    #[inline]
    pub const fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Set the visited flag (builder).
    #[inline]
    pub const fn with_visited(mut self, visited: bool) -> Self {
        self.visited = visited;
        self
    }
}
