//! Game board state, one `BitGrid` per mark.

use crate::bitgrid::BitGrid;
use crate::common::{BoardError, Mark};
use crate::config::{CELLS, GRID_SIZE};
use core::fmt;

type Grid = BitGrid<u16, GRID_SIZE>;

/// Main board state: the cells held by each mark.
///
/// The two grids are disjoint; a cell holds at most one mark and is never
/// unmarked except by [`Board::clear`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    xs: Grid,
    os: Grid,
}

impl Board {
    /// Create an empty board (no cells marked).
    pub fn new() -> Self {
        Board {
            xs: Grid::new(),
            os: Grid::new(),
        }
    }

    /// Cells held by `mark`.
    pub fn marks(&self, mark: Mark) -> Grid {
        match mark {
            Mark::X => self.xs,
            Mark::O => self.os,
        }
    }

    /// Cells held by either mark.
    pub fn occupied(&self) -> Grid {
        self.xs | self.os
    }

    /// Returns `true` when all nine cells hold a mark.
    pub fn is_full(&self) -> bool {
        self.occupied().count_ones() == CELLS
    }

    /// The mark at `cell`, or `None` for an empty cell.
    pub fn cell(&self, cell: usize) -> Result<Option<Mark>, BoardError> {
        if self.xs.get(cell)? {
            Ok(Some(Mark::X))
        } else if self.os.get(cell)? {
            Ok(Some(Mark::O))
        } else {
            Ok(None)
        }
    }

    /// Snapshot of all cells in index order.
    pub fn cells(&self) -> [Option<Mark>; CELLS] {
        core::array::from_fn(|i| {
            if self.xs.get(i).unwrap_or(false) {
                Some(Mark::X)
            } else if self.os.get(i).unwrap_or(false) {
                Some(Mark::O)
            } else {
                None
            }
        })
    }

    /// Place `mark` at `cell`, rejecting occupied or out-of-range targets.
    pub fn mark(&mut self, cell: usize, mark: Mark) -> Result<(), BoardError> {
        if self.occupied().get(cell)? {
            return Err(BoardError::CellOccupied);
        }
        match mark {
            Mark::X => self.xs.set(cell)?,
            Mark::O => self.os.set(cell)?,
        }
        Ok(())
    }

    /// Clear every cell.
    pub fn clear(&mut self) {
        self.xs.clear_all();
        self.os.clear_all();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in 0..GRID_SIZE {
            write!(f, "  ")?;
            for col in 0..GRID_SIZE {
                let ch = match self.cell(row * GRID_SIZE + col) {
                    Ok(Some(mark)) => mark.symbol(),
                    _ => '.',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

impl From<&Board> for [Option<Mark>; CELLS] {
    fn from(board: &Board) -> Self {
        board.cells()
    }
}

impl From<&[Option<Mark>; CELLS]> for Board {
    fn from(cells: &[Option<Mark>; CELLS]) -> Self {
        let mut board = Board::new();
        for (i, held) in cells.iter().enumerate() {
            if let Some(mark) = held {
                let _ = board.mark(i, *mark);
            }
        }
        board
    }
}
