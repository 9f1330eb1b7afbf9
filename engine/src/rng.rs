use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Cell, GridSize};

/// Seeded RNG for one game session. Keeping the seed alongside the stream
/// lets a session be replayed from the command line.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn random_cell(&mut self, grid: &GridSize) -> Cell {
        Cell::new(
            self.random_range(0..grid.cols),
            self.random_range(0..grid.rows),
        )
    }
}
