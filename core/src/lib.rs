#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod adjacency;
mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Validated board dimensions and mine count.
///
/// Only [`BoardConfig::new`] and the presets construct one, so holding a `BoardConfig` means the
/// board can always be generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedConfig")]
pub struct BoardConfig {
    size: Coord2,
    mines: CellCount,
}

#[derive(Deserialize)]
struct UncheckedConfig {
    size: Coord2,
    mines: CellCount,
}

impl TryFrom<UncheckedConfig> for BoardConfig {
    type Error = ConfigError;

    fn try_from(value: UncheckedConfig) -> core::result::Result<Self, Self::Error> {
        Self::check(value.size, value.mines)
    }
}

impl BoardConfig {
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        Ok(Self::check(size, mines)?)
    }

    fn check((size_x, size_y): Coord2, mines: CellCount) -> core::result::Result<Self, ConfigError> {
        if size_x == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if size_y == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        let capacity = mult(size_x, size_y);
        if mines > capacity {
            return Err(ConfigError::TooManyMines {
                requested: mines,
                capacity,
            });
        }
        Ok(Self::new_unchecked((size_x, size_y), mines))
    }

    const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked((9, 9), 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked((16, 16), 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked((30, 16), 99)
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    /// Fraction of cells holding a mine.
    pub fn density(&self) -> f32 {
        f32::from(self.mines) / f32::from(self.total_cells())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(BoardError::OutOfBounds {
                coords,
                size: self.size,
            })
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked((10, 10), 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            BoardConfig::new((0, 5), 0),
            Err(BoardError::InvalidConfiguration(ConfigError::ZeroWidth))
        );
        assert_eq!(
            BoardConfig::new((5, 0), 0),
            Err(BoardError::InvalidConfiguration(ConfigError::ZeroHeight))
        );
    }

    #[test]
    fn rejects_more_mines_than_cells() {
        assert_eq!(
            BoardConfig::new((2, 2), 5),
            Err(BoardError::InvalidConfiguration(
                ConfigError::TooManyMines {
                    requested: 5,
                    capacity: 4,
                }
            ))
        );
    }

    #[test]
    fn accepts_full_and_empty_boards() {
        let full = BoardConfig::new((2, 2), 4).unwrap();
        assert_eq!(full.safe_cells(), 0);
        assert_eq!(full.density(), 1.0);

        let empty = BoardConfig::new((3, 1), 0).unwrap();
        assert_eq!(empty.total_cells(), 3);
        assert_eq!(empty.safe_cells(), 3);
    }

    #[test]
    fn presets_are_valid() {
        for preset in [
            BoardConfig::default(),
            BoardConfig::beginner(),
            BoardConfig::intermediate(),
            BoardConfig::expert(),
        ] {
            assert_eq!(BoardConfig::new(preset.size(), preset.mines()), Ok(preset));
        }
        assert_eq!(BoardConfig::expert().width(), 30);
        assert_eq!(BoardConfig::expert().height(), 16);
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let config = BoardConfig::new((3, 2), 1).unwrap();
        assert_eq!(config.validate_coords((2, 1)), Ok((2, 1)));
        assert_eq!(
            config.validate_coords((3, 0)),
            Err(BoardError::OutOfBounds {
                coords: (3, 0),
                size: (3, 2),
            })
        );
        assert!(config.validate_coords((0, 2)).is_err());
    }
}
