//! Winning line definitions over the 3×3 grid.

use crate::bitgrid::BitGrid;
use crate::config::GRID_SIZE;
use core::fmt;

type Grid = BitGrid<u16, GRID_SIZE>;

/// A winning line: a named triple of cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    name: &'static str,
    cells: [usize; 3],
}

impl Line {
    /// Create a new line definition. Cell indices must lie in `0..9`.
    pub const fn new(name: &'static str, cells: [usize; 3]) -> Self {
        Self { name, cells }
    }

    /// Line's name, e.g. "top row".
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The three cell indices of the line.
    pub fn cells(&self) -> [usize; 3] {
        self.cells
    }

    /// Returns true if the line runs through `cell`.
    pub fn crosses(&self, cell: usize) -> bool {
        self.cells.contains(&cell)
    }

    /// Occupancy mask of the line on the grid.
    pub fn mask(&self) -> Grid {
        let mut mask = Grid::new();
        for &cell in &self.cells {
            let _ = mask.set(cell);
        }
        mask
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Lines serialize as their cell triple; the name is recovered from the
/// static table on deserialization.
#[cfg(feature = "std")]
impl serde::Serialize for Line {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.cells, serializer)
    }
}

#[cfg(feature = "std")]
impl<'de> serde::Deserialize<'de> for Line {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let cells = <[usize; 3] as serde::Deserialize>::deserialize(deserializer)?;
        crate::config::LINES
            .iter()
            .find(|line| line.cells == cells)
            .copied()
            .ok_or_else(|| serde::de::Error::custom("not a winning line"))
    }
}
