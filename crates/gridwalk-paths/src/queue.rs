use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::PathError;

/// Binary min-heap: [`dequeue`](Self::dequeue) yields the smallest element.
///
/// Thin wrapper over [`BinaryHeap`] with reversed ordering.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Insert `item`. O(log n).
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.heap.push(Reverse(item));
    }

    /// Remove and return the smallest element. O(log n).
    ///
    /// Fails with [`PathError::EmptyQueue`]; check [`is_empty`](Self::is_empty)
    /// first.
    #[inline]
    pub fn dequeue(&mut self) -> Result<T, PathError> {
        self.heap
            .pop()
            .map(|Reverse(item)| item)
            .ok_or(PathError::EmptyQueue)
    }

    /// The smallest element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(item)| item)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SearchNode;
    use gridwalk_core::Point;

    #[test]
    fn dequeues_lowest_cost_first() {
        let mut q = PriorityQueue::new();
        for (i, cost) in [5.0, 1.5, 3.0, 0.0, 4.25].into_iter().enumerate() {
            q.enqueue(SearchNode::new(Point::new(i as i32, 0), cost));
        }
        assert_eq!(q.len(), 5);
        assert_eq!(q.peek().map(|n| n.cost), Some(0.0));
        let mut costs = Vec::new();
        while !q.is_empty() {
            costs.push(q.dequeue().unwrap().cost);
        }
        assert_eq!(costs, vec![0.0, 1.5, 3.0, 4.25, 5.0]);
    }

    #[test]
    fn empty_dequeue_fails() {
        let mut q: PriorityQueue<SearchNode> = PriorityQueue::default();
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), Err(PathError::EmptyQueue));
        q.enqueue(SearchNode::new(Point::ZERO, 1.0));
        assert!(q.dequeue().is_ok());
        assert_eq!(q.dequeue(), Err(PathError::EmptyQueue));
    }

    #[test]
    fn infinite_and_negative_costs_order_totally() {
        let mut q = PriorityQueue::new();
        q.enqueue(SearchNode::new(Point::ZERO, f64::INFINITY));
        q.enqueue(SearchNode::new(Point::ZERO, -2.0));
        q.enqueue(SearchNode::new(Point::ZERO, 7.0));
        assert_eq!(q.dequeue().unwrap().cost, -2.0);
        assert_eq!(q.dequeue().unwrap().cost, 7.0);
        assert_eq!(q.dequeue().unwrap().cost, f64::INFINITY);
    }
}
