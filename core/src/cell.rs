use serde::{Deserialize, Serialize};

use crate::{Coord, Coord2};

/// What a cell holds once generation is done.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    /// No mine here and none around.
    Empty,
    Mine,
    /// No mine here, but this many (always 1 to 8) around.
    Numbered(u8),
}

impl CellContent {
    /// Content for a safe cell with `count` adjacent mines.
    pub const fn from_adjacent(count: u8) -> Self {
        match count {
            0 => Self::Empty,
            count => Self::Numbered(count),
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Adjacent mine count of a safe cell, `None` for a mine.
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Empty => Some(0),
            Self::Mine => None,
            Self::Numbered(count) => Some(count),
        }
    }

    /// Character used by the plain-text rendering.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => 'N',
            Self::Mine => 'X',
            // count is at most 8, always a single digit
            Self::Numbered(count) => (b'0' + count) as char,
        }
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Empty
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    Revealed,
}

impl Visibility {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One position on a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    coords: Coord2,
    content: CellContent,
    visibility: Visibility,
}

impl Cell {
    pub(crate) const fn new(coords: Coord2, content: CellContent) -> Self {
        Self {
            coords,
            content,
            visibility: Visibility::Hidden,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn x(&self) -> Coord {
        self.coords.0
    }

    pub const fn y(&self) -> Coord {
        self.coords.1
    }

    pub const fn content(&self) -> CellContent {
        self.content
    }

    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub const fn is_mine(&self) -> bool {
        self.content.is_mine()
    }

    pub const fn adjacent_mines(&self) -> Option<u8> {
        self.content.adjacent_mines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_adjacent_mines_is_empty() {
        assert_eq!(CellContent::from_adjacent(0), CellContent::Empty);
        assert_eq!(CellContent::from_adjacent(3), CellContent::Numbered(3));
    }

    #[test]
    fn mines_carry_no_count() {
        assert_eq!(CellContent::Mine.adjacent_mines(), None);
        assert_eq!(CellContent::Empty.adjacent_mines(), Some(0));
        assert_eq!(CellContent::Numbered(8).adjacent_mines(), Some(8));
    }

    #[test]
    fn glyphs() {
        assert_eq!(CellContent::Mine.glyph(), 'X');
        assert_eq!(CellContent::Empty.glyph(), 'N');
        assert_eq!(CellContent::Numbered(1).glyph(), '1');
        assert_eq!(CellContent::Numbered(8).glyph(), '8');
    }

    #[test]
    fn new_cells_start_hidden() {
        let cell = Cell::new((2, 3), CellContent::Mine);
        assert_eq!(cell.coords(), (2, 3));
        assert_eq!((cell.x(), cell.y()), (2, 3));
        assert!(cell.visibility().is_hidden());
        assert!(cell.is_mine());
    }
}
