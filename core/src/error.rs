use thiserror::Error;

use crate::Symbol;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("At least one guess must be allowed")]
    NoGuesses,
    #[error("Symbol count must be between 1 and 254")]
    InvalidSymbolCount,
    #[error("Code length must be at least 1")]
    EmptyCode,
    #[error("Code has {actual} symbols, expected {expected}")]
    CodeLengthMismatch { expected: usize, actual: usize },
    #[error("Symbol {0} is out of range")]
    InvalidSymbol(Symbol),
    #[error("No codes to choose from")]
    NoCodes,
}

pub type Result<T> = core::result::Result<T, GameError>;
