use std::cmp::Ordering;

use gridwalk_core::Point;

/// A frontier entry: a position and its estimated total cost.
///
/// Ordered by `cost` alone under [`f64::total_cmp`]. Nodes of equal cost
/// compare equal, so the order in which a [`PriorityQueue`](crate::PriorityQueue)
/// yields them depends on the heap's internal layout: repeatable for an
/// identical sequence of operations, otherwise unspecified.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub position: Point,
    pub cost: f64,
}

impl SearchNode {
    #[inline]
    pub const fn new(position: Point, cost: f64) -> Self {
        Self { position, cost }
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.total_cmp(&other.cost)
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
