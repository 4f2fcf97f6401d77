use gridwalk_core::{Cell, Point};

use crate::distance::euclidean;

/// An ordered sequence of cells from start to end, both inclusive.
///
/// An empty path means no path exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// The "no path" result.
    pub const fn empty() -> Self {
        Self { cells: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves: one fewer than the number of cells.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    #[inline]
    pub fn first(&self) -> Option<&Cell> {
        self.cells.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Cell> {
        self.cells.last()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Cell positions in path order.
    pub fn points(&self) -> Vec<Point> {
        self.cells.iter().map(Cell::pos).collect()
    }

    /// Sum of Euclidean distances between consecutive cells.
    pub fn cost(&self) -> f64 {
        self.cells
            .windows(2)
            .map(|w| euclidean(w[0].pos(), w[1].pos()))
            .sum()
    }

    /// Whether every consecutive pair is one orthogonal step apart.
    pub fn is_connected(&self) -> bool {
        self.cells
            .windows(2)
            .all(|w| w[0].pos().is_adjacent_4(w[1].pos()))
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
