//! Common types: player marks and board errors.

use crate::bitgrid::BitGridError;
use core::fmt;

/// One of the two player marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    pub fn other(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol used on rendered grids.
    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Errors returned by Board operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bit grid error (invalid size).
    BitGridError(BitGridError),
    /// Specified cell index is out of range.
    CellOutOfRange,
    /// Target cell already holds a mark.
    CellOccupied,
}

impl From<BitGridError> for BoardError {
    fn from(err: BitGridError) -> Self {
        match err {
            BitGridError::CellOutOfBounds { .. } => BoardError::CellOutOfRange,
            other => BoardError::BitGridError(other),
        }
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitGridError(e) => write!(f, "BitGrid error: {}", e),
            BoardError::CellOutOfRange => write!(f, "Cell index is out of range"),
            BoardError::CellOccupied => write!(f, "Cell already holds a mark"),
        }
    }
}
