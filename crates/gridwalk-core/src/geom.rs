//! Geometry primitives: [`Point`] and the 4-neighbourhood offsets.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. `x` indexes columns, `y` indexes rows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Orthogonal offsets in exploration order: +y, +x, −y, −x.
///
/// Both pathfinders break ties by this order, so it must not change.
pub const DIRS_4: [Point; 4] = [
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
];

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four orthogonal neighbours in [`DIRS_4`] order, unfiltered.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        DIRS_4.map(|d| self + d)
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent_4(self, other: Point) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// Squared straight-line distance to `other`. Orders identically to
    /// [`distance`](Self::distance) without rounding.
    #[inline]
    pub fn distance_squared(self, other: Point) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_exploration_order() {
        let p = Point::new(3, 3);
        assert_eq!(
            p.neighbors_4(),
            [
                Point::new(3, 4),
                Point::new(4, 3),
                Point::new(3, 2),
                Point::new(2, 3),
            ]
        );
    }

    #[test]
    fn distances() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(a.distance_squared(b), 25);
        assert!((a.distance(b) - 5.0).abs() < f64::EPSILON);
        assert!((a.distance(Point::new(1, 0)) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn adjacency() {
        let p = Point::new(1, 1);
        assert!(p.is_adjacent_4(Point::new(1, 2)));
        assert!(p.is_adjacent_4(Point::new(0, 1)));
        assert!(!p.is_adjacent_4(Point::new(2, 2)));
        assert!(!p.is_adjacent_4(p));
    }

    #[test]
    fn display_and_ops() {
        assert_eq!(Point::new(2, -1).to_string(), "(2, -1)");
        assert_eq!(Point::new(1, 2) + Point::new(3, 4), Point::new(4, 6));
        assert_eq!(Point::new(1, 2) - Point::new(3, 4), Point::new(-2, -2));
        assert_eq!(Point::from((5, 6)), Point::new(5, 6).shift(0, 0));
    }
}
