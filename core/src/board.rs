use core::fmt;
use core::ops::Index;

use ndarray::Array2;
use rand::Rng;
use serde::Serialize;

use crate::*;

/// A generated minefield: every cell is a mine, a number or empty.
///
/// Contents are settled at construction and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    config: BoardConfig,
    cells: Array2<Cell>,
}

impl Board {
    /// Validates the parameters, then generates with the default [`Sampling`].
    pub fn new<R: Rng>(mines: CellCount, width: Coord, height: Coord, rng: &mut R) -> Result<Self> {
        let config = BoardConfig::new((width, height), mines)?;
        Ok(Self::generate(config, Sampling::default(), rng))
    }

    /// Reproducible board for `seed`.
    pub fn from_seed(config: BoardConfig, seed: u64) -> Self {
        RandomBoardGenerator::from_seed(seed, Sampling::default()).generate(config)
    }

    pub fn generate<R: Rng>(config: BoardConfig, sampling: Sampling, rng: &mut R) -> Self {
        let mines = place_mines(config, sampling, rng);
        let board = Self::from_mine_mask(config, &mines);
        log::debug!(
            "Generated {}x{} board with {} mines using {:?} sampling",
            config.width(),
            config.height(),
            config.mines(),
            sampling
        );
        board
    }

    /// Board with mines at exactly `mine_coords`, repeated coordinates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let empty = BoardConfig::new(size, 0)?;
        let mut mines: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            mines[empty.validate_coords(coords)?.to_nd_index()] = true;
        }

        let count = mines.iter().filter(|&&mine| mine).count();
        // bounded by the cell count of a valid config
        let config = BoardConfig::new(size, count as CellCount)?;
        Ok(Self::from_mine_mask(config, &mines))
    }

    fn from_mine_mask(config: BoardConfig, mines: &Array2<bool>) -> Self {
        let mut contents = mines.mapv(|mine| {
            if mine {
                CellContent::Mine
            } else {
                CellContent::Empty
            }
        });

        for (x, y, offsets) in adjacency(config.size()) {
            let index = (x, y).to_nd_index();
            if contents[index].is_mine() {
                continue;
            }

            let count = offsets
                .coords()
                .filter(|&pos| contents[pos.to_nd_index()].is_mine())
                .count();
            // at most 8 neighbors
            contents[index] = CellContent::from_adjacent(count as u8);
        }

        let cells = Array2::from_shape_fn(config.size().to_nd_index(), |(x, y)| {
            Cell::new((x as Coord, y as Coord), contents[[x, y]])
        });

        Self { config, cells }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn width(&self) -> Coord {
        self.config.width()
    }

    pub fn height(&self) -> Coord {
        self.config.height()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    /// Cell at `(x, y)`, failing for coordinates outside the board.
    pub fn get(&self, x: Coord, y: Coord) -> Result<&Cell> {
        let coords = self.config.validate_coords((x, y))?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub fn contains_mine(&self, coords: Coord2) -> Result<bool> {
        self.get(coords.0, coords.1).map(Cell::is_mine)
    }

    /// Counts mines around `coords` straight from the grid.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> Result<u8> {
        let coords = self.config.validate_coords(coords)?;
        let count = neighbors(coords, self.size())
            .filter(|&pos| self[pos].is_mine())
            .count();
        Ok(count as u8)
    }

    /// All cells, column by column.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter().filter(|cell| cell.is_mine()).map(Cell::coords)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Cell;
    type IntoIter = ndarray::iter::Iter<'a, Cell, ndarray::Ix2>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Plain-text rendering, one line per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        let (x_end, y_end) = self.size();
        for y in 0..y_end {
            for x in 0..x_end {
                f.write_char(self[(x, y)].content().glyph())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
