use alloc::vec::Vec;

use super::*;

/// Hands out a predetermined list of codes in order, starting over after the last one.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedSolutionGenerator {
    codes: Vec<Code>,
    next: usize,
}

impl FixedSolutionGenerator {
    pub fn new(code: Code) -> Self {
        Self {
            codes: alloc::vec![code],
            next: 0,
        }
    }

    /// Cycles through `codes`, each of which must fit `config`.
    pub fn cycle(config: &GameConfig, codes: Vec<Code>) -> Result<Self> {
        if codes.is_empty() {
            return Err(GameError::NoCodes);
        }
        for code in &codes {
            config.validate_code(code)?;
        }
        Ok(Self { codes, next: 0 })
    }

    pub fn from_symbols(config: &GameConfig, symbols: &[Symbol]) -> Result<Self> {
        Ok(Self::new(Code::new(config, symbols)?))
    }
}

impl SolutionGenerator for FixedSolutionGenerator {
    fn generate(&mut self, config: &GameConfig) -> Code {
        let code = self.codes[self.next].clone();
        self.next = (self.next + 1) % self.codes.len();
        if let Err(err) = config.validate_code(&code) {
            log::warn!("Fixed code {} does not fit the board: {}", code, err);
        }
        code
    }
}
