use thiserror::Error;

use crate::{CellCount, Coord2};

/// Reasons a board configuration is rejected before any generation happens.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board width must be at least 1")]
    ZeroWidth,
    #[error("Board height must be at least 1")]
    ZeroHeight,
    #[error("Too many mines, requested {requested} but the board only fits {capacity}")]
    TooManyMines {
        requested: CellCount,
        capacity: CellCount,
    },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Coordinates {coords:?} are outside of a {}x{} board", .size.0, .size.1)]
    OutOfBounds { coords: Coord2, size: Coord2 },
}

pub type Result<T> = core::result::Result<T, BoardError>;
