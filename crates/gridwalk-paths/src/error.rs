use std::fmt;

use gridwalk_core::{GridError, Point};

use crate::path::Path;

/// Failures a search can report. "No path" is not among them: an unreachable
/// end yields an empty [`Path`].
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// Start or end lies outside the grid.
    OutOfBounds { pos: Point, rows: i32, columns: i32 },
    /// Dequeue on an empty frontier. Indicates a frontier-management bug.
    EmptyQueue,
    /// A reconstructed position has no cell.
    CorruptState(Point),
    /// The greedy walk had no visited neighbour to move to, or began
    /// revisiting cells. Carries the walk up to that point.
    PathfindingStuck { at: Point, partial: Path },
    /// The search's [`CancelToken`](crate::CancelToken) was triggered.
    Cancelled,
    /// Any other grid access failure.
    Grid(GridError),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, rows, columns } => {
                write!(f, "position {pos} outside {columns} columns x {rows} rows")
            }
            Self::EmptyQueue => write!(f, "dequeue from empty frontier"),
            Self::CorruptState(p) => write!(f, "cell at {p} vanished during search"),
            Self::PathfindingStuck { at, partial } => write!(
                f,
                "path walk stuck at {at} after {} cells",
                partial.len()
            ),
            Self::Cancelled => write!(f, "search cancelled"),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PathError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::OutOfBounds { pos, rows, columns } => {
                Self::OutOfBounds { pos, rows, columns }
            }
            GridError::MissingCell(p) => Self::CorruptState(p),
            other => Self::Grid(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn grid_errors_map_onto_search_errors() {
        let oob = GridError::OutOfBounds {
            pos: Point::new(5, 0),
            rows: 3,
            columns: 3,
        };
        assert_eq!(
            PathError::from(oob),
            PathError::OutOfBounds {
                pos: Point::new(5, 0),
                rows: 3,
                columns: 3
            }
        );
        assert_eq!(
            PathError::from(GridError::MissingCell(Point::new(1, 1))),
            PathError::CorruptState(Point::new(1, 1))
        );
        let dims = PathError::from(GridError::InvalidDimensions {
            rows: 0,
            columns: 0,
        });
        assert!(dims.source().is_some());
        assert_eq!(dims.to_string(), "grid: invalid grid dimensions 0x0");
    }
}
