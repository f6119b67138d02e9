#![cfg_attr(not(test), no_std)]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use observer::*;
pub use scoring::*;
pub use snapshot::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod observer;
mod scoring;
mod snapshot;
mod types;

pub const DEFAULT_MAX_GUESSES: Row = 10;
pub const DEFAULT_UNIQUE_SYMBOLS: Symbol = 6;
pub const DEFAULT_CODE_LENGTH: Column = 4;

/// Board dimensions. Missing fields deserialize to the classic 10 guesses, 6 symbols, 4 positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_guesses: Row,
    pub unique_symbols: Symbol,
    pub code_length: Column,
}

impl GameConfig {
    pub const fn new_unchecked(max_guesses: Row, unique_symbols: Symbol, code_length: Column) -> Self {
        Self {
            max_guesses,
            unique_symbols,
            code_length,
        }
    }

    pub fn new(max_guesses: Row, unique_symbols: Symbol, code_length: Column) -> Result<Self> {
        let config = Self::new_unchecked(max_guesses, unique_symbols, code_length);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_guesses == 0 {
            return Err(GameError::NoGuesses);
        }
        // the cyclic advance needs one value past the last symbol
        if self.unique_symbols == 0 || self.unique_symbols == Symbol::MAX {
            return Err(GameError::InvalidSymbolCount);
        }
        if self.code_length == 0 {
            return Err(GameError::EmptyCode);
        }
        Ok(())
    }

    /// Whether `symbol` is a real symbol, excluding `EMPTY_SYMBOL`.
    pub const fn is_symbol(&self, symbol: Symbol) -> bool {
        symbol >= 1 && symbol <= self.unique_symbols
    }

    pub fn validate_code(&self, symbols: &[Symbol]) -> Result<()> {
        let expected = usize::from(self.code_length);
        if symbols.len() != expected {
            return Err(GameError::CodeLengthMismatch {
                expected,
                actual: symbols.len(),
            });
        }
        match symbols.iter().find(|&&symbol| !self.is_symbol(symbol)) {
            Some(&symbol) => Err(GameError::InvalidSymbol(symbol)),
            None => Ok(()),
        }
    }

    pub const fn board_shape(&self) -> [usize; 2] {
        [self.max_guesses as usize, self.code_length as usize]
    }

    pub const fn total_cells(&self) -> usize {
        self.max_guesses as usize * self.code_length as usize
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            DEFAULT_MAX_GUESSES,
            DEFAULT_UNIQUE_SYMBOLS,
            DEFAULT_CODE_LENGTH,
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellOutcome {
    NoChange,
    Changed,
}

impl CellOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    NoChange,
    Scored(Score),
    Won,
    /// Last guess used up without cracking the code.
    Lost(Score),
}

impl GuessOutcome {
    pub const fn has_update(self) -> bool {
        use GuessOutcome::*;
        match self {
            NoChange => false,
            Scored(_) => true,
            Won => true,
            Lost(_) => true,
        }
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PeekOutcome {
    NoChange,
    Shown,
    Hidden,
}

impl PeekOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}
