use thiserror::Error;

use crate::CellCount;

/// Why a [`GameConfig`](crate::GameConfig) was refused.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("board must have at least one row and one column")]
    EmptyBoard,
    #[error("{requested} mines requested but at most {max} fit around a safe first move")]
    TooManyMines { requested: CellCount, max: CellCount },
    #[error("board dimensions exceed {} cells per axis", crate::Coord::MAX)]
    OversizedBoard,
    #[error("layout declares {declared} mines but its mask holds {actual}")]
    MineCountMismatch { declared: CellCount, actual: CellCount },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
