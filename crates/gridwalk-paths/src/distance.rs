use gridwalk_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    f64::from((a.x - b.x).abs() + (a.y - b.y).abs())
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    a.distance(b)
}
