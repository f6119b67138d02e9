use rand::prelude::*;

use super::*;

/// Uniform generator: each position is an independent draw from `1..=unique_symbols`, so
/// repeated symbols are allowed.
#[derive(Clone, Debug)]
pub struct RandomSolutionGenerator {
    seed: u64,
    rng: SmallRng,
}

impl RandomSolutionGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SolutionGenerator for RandomSolutionGenerator {
    fn generate(&mut self, config: &GameConfig) -> Code {
        let symbols: SymbolVec = (0..config.code_length)
            .map(|_| self.rng.random_range(1..=config.unique_symbols))
            .collect();
        log::trace!(
            "Generated code of length {} from seed {}",
            symbols.len(),
            self.seed
        );
        Code::from_symbols(symbols)
    }
}
