//! Grid errors.

use std::fmt;

use crate::geom::{CellId, Dims};

/// Errors reported at the grid boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The id does not address a cell of the grid.
    InvalidCell { id: CellId, len: usize },
    /// The grid would have no cells.
    EmptyDims(Dims),
    /// The cell count overflows, or a side does not fit a point coordinate.
    TooLarge(Dims),
    /// Start and end were asked to share a cell.
    SameEndpoints(CellId),
    /// A search cannot begin on a wall or on the end cell.
    BlockedOrigin(CellId),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCell { id, len } => {
                write!(f, "invalid cell {id}: grid has {len} cells")
            }
            Self::EmptyDims(dims) => write!(f, "grid dimensions {dims} hold no cells"),
            Self::TooLarge(dims) => write!(f, "grid dimensions {dims} are too large"),
            Self::SameEndpoints(id) => write!(f, "start and end cannot both be {id}"),
            Self::BlockedOrigin(id) => {
                write!(f, "cannot start a search from {id}: it is a wall or the end")
            }
        }
    }
}

impl std::error::Error for GridError {}
