//! The [`Grid`] type: exclusive owner of one [`Cell`] per position.
//!
//! Cells are stored column-major (`[column][row]`, i.e. `[x][y]`) in a single
//! flat buffer. The shape is fixed at construction; the only way a position
//! can lose its cell is [`Grid::remove_cell`], and searches borrow the grid for
//! their whole run, so a cell never disappears mid-search.

use std::fmt;

use crate::cell::Cell;
use crate::geom::{DIRS_4, Point};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised by grid construction and bounds-checked access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Rows or columns was not strictly positive.
    InvalidDimensions { rows: i32, columns: i32 },
    /// The position lies outside `0..columns` × `0..rows`.
    OutOfBounds { pos: Point, rows: i32, columns: i32 },
    /// The position is in bounds but its cell was removed.
    MissingCell(Point),
    /// A cell provider returned a cell whose coordinates differ from its slot.
    MisplacedCell { slot: Point, cell: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, columns } => {
                write!(f, "invalid grid dimensions {rows}x{columns}")
            }
            Self::OutOfBounds { pos, rows, columns } => {
                write!(f, "position {pos} outside {columns} columns x {rows} rows")
            }
            Self::MissingCell(p) => write!(f, "no cell at {p}"),
            Self::MisplacedCell { slot, cell } => {
                write!(f, "cell {cell} provided for slot {slot}")
            }
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A fixed-shape 2D grid of cells.
///
/// Every stored cell sits at its own position. Outside this crate the only
/// mutation of a stored cell is its visited flag:
///
/// ```compile_fail
/// use gridwalk_core::{Grid, Point};
///
/// let mut grid = Grid::new(2, 2).unwrap();
/// grid.cell_mut(Point::ZERO).unwrap().x = 1;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    columns: i32,
    cells: Vec<Option<Cell>>,
}

impl Grid {
    /// Create a grid with every position populated by an unvisited cell.
    pub fn new(rows: i32, columns: i32) -> Result<Self, GridError> {
        Self::from_fn(rows, columns, |p| Some(Cell::at(p)))
    }

    /// Create a grid whose cells come from `provider`, called once per
    /// position in column-major order. Returning `None` leaves the position
    /// absent.
    pub fn from_fn<F>(rows: i32, columns: i32, mut provider: F) -> Result<Self, GridError>
    where
        F: FnMut(Point) -> Option<Cell>,
    {
        if rows <= 0 || columns <= 0 {
            return Err(GridError::InvalidDimensions { rows, columns });
        }
        let mut cells = Vec::with_capacity(rows as usize * columns as usize);
        for x in 0..columns {
            for y in 0..rows {
                let slot = Point::new(x, y);
                let cell = provider(slot);
                match cell {
                    Some(c) if c.pos() != slot => {
                        return Err(GridError::MisplacedCell {
                            slot,
                            cell: c.pos(),
                        });
                    }
                    _ => {}
                }
                cells.push(cell);
            }
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Number of rows (extent along y).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns (extent along x).
    #[inline]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Total number of positions, present or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one position.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `0 ≤ x < columns` and `0 ≤ y < rows`.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.columns && y >= 0 && y < self.rows
    }

    /// [`in_bounds`](Self::in_bounds) for a point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.in_bounds(p.x, p.y)
    }

    /// Fail with [`GridError::OutOfBounds`] unless `p` is in bounds.
    pub fn check_bounds(&self, p: Point) -> Result<(), GridError> {
        if self.contains(p) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                pos: p,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.x as usize * self.rows as usize + p.y as usize)
        } else {
            None
        }
    }

    /// In-bounds orthogonal neighbours of `p`, in +y, +x, −y, −x order.
    ///
    /// Absent cells are still reported; callers filter on presence.
    pub fn neighbors4(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        DIRS_4
            .into_iter()
            .map(move |d| p + d)
            .filter(|&n| self.contains(n))
    }

    /// The cell at `p`, or `None` if out of bounds or absent.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).and_then(|i| self.cells[i].as_ref())
    }

    // Crate-private so cell coordinates cannot be rewritten from outside.
    #[inline]
    pub(crate) fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index(p).and_then(|i| self.cells[i].as_mut())
    }

    /// Bounds-checked cell lookup.
    pub fn cell_at(&self, p: Point) -> Result<&Cell, GridError> {
        self.check_bounds(p)?;
        self.cell(p).ok_or(GridError::MissingCell(p))
    }

    /// Whether `p` is in bounds and holds a cell.
    #[inline]
    pub fn is_present(&self, p: Point) -> bool {
        self.cell(p).is_some()
    }

    /// Whether the cell at `p` exists and is marked visited.
    #[inline]
    pub fn is_visited(&self, p: Point) -> bool {
        self.cell(p).is_some_and(|c| c.visited)
    }

    /// Mark the cell at `p` visited. Returns `true` if it was newly marked.
    #[inline]
    pub fn mark_visited(&mut self, p: Point) -> bool {
        match self.cell_mut(p) {
            Some(c) if !c.visited => {
                c.visited = true;
                true
            }
            _ => false,
        }
    }

    /// Clear every visited flag.
    pub fn reset_visited(&mut self) {
        for c in self.cells.iter_mut().flatten() {
            c.visited = false;
        }
    }

    /// Number of present cells.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Number of present cells marked visited.
    pub fn visited_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.visited).count()
    }

    /// Iterate over present cells in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().flatten()
    }

    /// Remove the cell at `p`, returning it if one was present.
    pub fn remove_cell(&mut self, p: Point) -> Result<Option<Cell>, GridError> {
        self.check_bounds(p)?;
        let i = p.x as usize * self.rows as usize + p.y as usize;
        Ok(self.cells[i].take())
    }

    /// Put a fresh unvisited cell back at `p`. Returns `true` if the position
    /// was previously absent.
    pub fn restore_cell(&mut self, p: Point) -> Result<bool, GridError> {
        self.check_bounds(p)?;
        let i = p.x as usize * self.rows as usize + p.y as usize;
        let was_absent = self.cells[i].is_none();
        if was_absent {
            self.cells[i] = Some(Cell::at(p));
        }
        Ok(was_absent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_populates_every_position() {
        let g = Grid::new(3, 4).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.columns(), 4);
        assert_eq!(g.len(), 12);
        assert_eq!(g.cell_count(), 12);
        for x in 0..4 {
            for y in 0..3 {
                let c = g.cell_at(Point::new(x, y)).unwrap();
                assert_eq!(c.pos(), Point::new(x, y));
                assert!(!c.visited);
            }
        }
    }

    #[test]
    fn invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions {
                rows: 0,
                columns: 5
            })
        );
        assert!(Grid::new(3, -1).is_err());
    }

    #[test]
    fn bounds_use_columns_for_x_and_rows_for_y() {
        let g = Grid::new(2, 5).unwrap();
        assert!(g.in_bounds(4, 1));
        assert!(!g.in_bounds(1, 4));
        assert!(!g.in_bounds(-1, 0));
        assert!(!g.in_bounds(5, 0));
        assert_eq!(
            g.cell_at(Point::new(5, 0)),
            Err(GridError::OutOfBounds {
                pos: Point::new(5, 0),
                rows: 2,
                columns: 5
            })
        );
    }

    #[test]
    fn neighbors_are_ordered_and_clipped() {
        let g = Grid::new(3, 3).unwrap();
        let mid: Vec<_> = g.neighbors4(Point::new(1, 1)).collect();
        assert_eq!(
            mid,
            vec![
                Point::new(1, 2),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(0, 1),
            ]
        );
        let corner: Vec<_> = g.neighbors4(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(0, 1), Point::new(1, 0)]);
        let far: Vec<_> = g.neighbors4(Point::new(2, 2)).collect();
        assert_eq!(far, vec![Point::new(2, 1), Point::new(1, 2)]);
    }

    #[test]
    fn provider_can_leave_holes() {
        let g = Grid::from_fn(3, 3, |p| (p != Point::new(1, 1)).then(|| Cell::at(p))).unwrap();
        assert_eq!(g.cell_count(), 8);
        assert_eq!(
            g.cell_at(Point::new(1, 1)),
            Err(GridError::MissingCell(Point::new(1, 1)))
        );
        // Neighbour queries are shape-only.
        assert_eq!(g.neighbors4(Point::new(1, 0)).count(), 3);
    }

    #[test]
    fn provider_rejects_misplaced_cells() {
        let err = Grid::from_fn(2, 2, |_| Some(Cell::at(Point::ZERO))).unwrap_err();
        assert_eq!(
            err,
            GridError::MisplacedCell {
                slot: Point::new(0, 1),
                cell: Point::ZERO
            }
        );
    }

    #[test]
    fn visited_flags() {
        let mut g = Grid::new(2, 2).unwrap();
        assert!(g.mark_visited(Point::new(1, 1)));
        assert!(!g.mark_visited(Point::new(1, 1)));
        assert!(!g.mark_visited(Point::new(9, 9)));
        assert!(g.is_visited(Point::new(1, 1)));
        assert_eq!(g.visited_count(), 1);
        g.reset_visited();
        assert_eq!(g.visited_count(), 0);
    }

    #[test]
    fn cells_stay_at_their_positions() {
        let mut g = Grid::new(3, 4).unwrap();
        for x in 0..g.columns() {
            for y in 0..g.rows() {
                g.mark_visited(Point::new(x, y));
            }
        }
        g.reset_visited();
        g.remove_cell(Point::new(2, 1)).unwrap();
        g.restore_cell(Point::new(2, 1)).unwrap();
        assert!(g.iter().all(|c| g.cell(c.pos()) == Some(c)));
        assert_eq!(g.iter().count(), 12);
    }

    #[test]
    fn remove_and_restore() {
        let mut g = Grid::new(2, 2).unwrap();
        let p = Point::new(0, 1);
        g.mark_visited(p);
        let removed = g.remove_cell(p).unwrap();
        assert_eq!(removed, Some(Cell::at(p).with_visited(true)));
        assert!(!g.is_present(p));
        assert_eq!(g.remove_cell(p).unwrap(), None);
        assert!(g.restore_cell(p).unwrap());
        assert!(!g.restore_cell(p).unwrap());
        assert_eq!(g.cell(p), Some(&Cell::at(p)));
        assert!(g.remove_cell(Point::new(2, 0)).is_err());
    }

    #[test]
    fn iter_is_column_major() {
        let g = Grid::new(2, 2).unwrap();
        let order: Vec<_> = g.iter().map(Cell::pos).collect();
        assert_eq!(
            order,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(1, 1),
            ]
        );
    }
}
