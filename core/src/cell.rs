use serde::{Deserialize, Serialize};

/// Value stored for a single grid cell once mines are placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Mine,
    /// Safe cell with the number of adjacent mines.
    Safe(u8),
}

impl Cell {
    pub const MINE_VALUE: i8 = -1;

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Safe cell with no adjacent mines; the only kind that cascades on reveal.
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Safe(0))
    }

    /// Integer form: `-1` for a mine, else the adjacent-mine count.
    pub const fn value(self) -> i8 {
        match self {
            Self::Mine => Self::MINE_VALUE,
            Self::Safe(count) => count as i8,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Safe(0)
    }
}

impl From<Cell> for i8 {
    fn from(cell: Cell) -> Self {
        cell.value()
    }
}
