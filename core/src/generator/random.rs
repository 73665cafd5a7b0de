use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Purely random generation strategy over an injected random source.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator<R> {
    rng: R,
    sampling: Sampling,
}

impl<R: Rng> RandomBoardGenerator<R> {
    pub fn new(rng: R, sampling: Sampling) -> Self {
        Self { rng, sampling }
    }
}

impl RandomBoardGenerator<SmallRng> {
    /// Reproducible generator, the same seed always yields the same board.
    pub fn from_seed(seed: u64, sampling: Sampling) -> Self {
        log::debug!("seed: {}", seed);
        Self::new(SmallRng::seed_from_u64(seed), sampling)
    }
}

impl<R: Rng> BoardGenerator for RandomBoardGenerator<R> {
    fn generate(mut self, config: BoardConfig) -> Board {
        Board::generate(config, self.sampling, &mut self.rng)
    }
}
