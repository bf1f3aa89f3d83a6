use thiserror::Error;

use super::types::{CellLocation, Mark};

/// Rejected board operations. The board is left unchanged whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Board size must be at least {min}, got {size}")]
    InvalidSize { size: usize, min: usize },
    #[error("Board size {size} is too large")]
    TooLarge { size: usize },
    #[error("Cannot play using an empty mark")]
    InvalidMark,
    #[error("Cell {location} is out of bounds for board of size {size}")]
    OutOfBounds { location: CellLocation, size: usize },
    #[error("Cell {location} has already been filled with {mark}")]
    CellOccupied { location: CellLocation, mark: Mark },
}
