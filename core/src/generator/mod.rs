use alloc::vec::Vec;
use ndarray::Array2;
use rand::Rng;

use crate::*;
pub use random::*;

mod random;

/// Produces a fully generated [`Board`] for a validated configuration.
pub trait BoardGenerator {
    fn generate(self, config: BoardConfig) -> Board;
}

/// How mine positions are drawn.
///
/// Both strategies pick `mines` distinct cells uniformly at random; they only differ in how many
/// random draws that takes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Sampling {
    /// Draw random coordinates and discard the ones already taken.
    ///
    /// Slows down as the board fills up, but never loops forever since the configuration is
    /// validated.
    #[default]
    Rejection,
    /// Partial Fisher-Yates shuffle over all cells, exactly one draw per mine.
    Shuffle,
}

/// Samples the mine mask for `config`, `true` marks a mine.
pub fn place_mines<R: Rng>(config: BoardConfig, sampling: Sampling, rng: &mut R) -> Array2<bool> {
    let mut mines: Array2<bool> = Array2::default(config.size().to_nd_index());

    match sampling {
        Sampling::Rejection => place_by_rejection(&mut mines, config, rng),
        Sampling::Shuffle => place_by_shuffle(&mut mines, config, rng),
    }

    mines
}

fn place_by_rejection<R: Rng>(mines: &mut Array2<bool>, config: BoardConfig, rng: &mut R) {
    let (size_x, size_y) = config.size();
    let mut placed: CellCount = 0;
    let mut rejected: u64 = 0;

    while placed < config.mines() {
        let coords: Coord2 = (rng.random_range(0..size_x), rng.random_range(0..size_y));
        let tile = &mut mines[coords.to_nd_index()];
        if *tile {
            rejected += 1;
            continue;
        }
        *tile = true;
        placed += 1;
    }

    log::trace!(
        "Rejection sampling placed {} mines, discarded {} duplicate draws",
        placed,
        rejected
    );
}

fn place_by_shuffle<R: Rng>(mines: &mut Array2<bool>, config: BoardConfig, rng: &mut R) {
    let total = config.total_cells();
    let mut order: Vec<CellCount> = (0..total).collect();

    // only the first `mines` slots need to be settled
    for i in 0..config.mines() {
        let j = rng.random_range(i..total);
        order.swap(usize::from(i), usize::from(j));
        let coords = from_linear_index(order[usize::from(i)], config.size());
        mines[coords.to_nd_index()] = true;
    }

    log::trace!("Shuffle sampling placed {} mines", config.mines());
}
