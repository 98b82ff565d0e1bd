use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Source of the random decisions made while resolving abilities.
pub trait Roller {
    /// A fair coin: `true` means the gate passed.
    fn coin(&mut self) -> bool;

    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

impl Roller for RngState {
    fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
