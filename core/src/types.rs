use core::fmt;
use core::ops::Deref;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// Symbol value of a code position. `EMPTY_SYMBOL` marks an unfilled guess cell.
pub type Symbol = u8;

/// Guess number or guess count.
pub type Row = u8;

/// Position within a code, also used for the code length.
pub type Column = u8;

pub const EMPTY_SYMBOL: Symbol = 0;

/// Codes up to this length never spill to the heap.
pub const CODE_INLINE: usize = 8;

pub type SymbolVec = SmallVec<[Symbol; CODE_INLINE]>;

/// Zero-based `(row, column)` position on a board.
pub type Cell = (usize, usize);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Cell {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0, self.1]
    }
}

/// Feedback for one position of a processed guess.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClueMark {
    #[default]
    Blank,
    /// Right symbol in the right position.
    Exact,
    /// Right symbol in the wrong position.
    Partial,
}

impl ClueMark {
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Key peg letter: `B`lack for exact, `W`hite for partial.
    pub const fn as_char(self) -> char {
        match self {
            Self::Blank => ' ',
            Self::Exact => 'B',
            Self::Partial => 'W',
        }
    }
}

impl fmt::Display for ClueMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An ordered sequence of symbols, either the hidden solution or a blank placeholder for it.
///
/// Deserialized codes are not checked against any board; run them through
/// [`GameConfig::validate_code`] before trusting them as a solution.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Code(SymbolVec);

impl Code {
    /// Builds a code after checking it against `config`.
    pub fn new(config: &crate::GameConfig, symbols: &[Symbol]) -> crate::Result<Self> {
        config.validate_code(symbols)?;
        Ok(Self(SmallVec::from_slice(symbols)))
    }

    pub(crate) fn from_symbols(symbols: SymbolVec) -> Self {
        Self(symbols)
    }

    pub(crate) fn blank(len: usize) -> Self {
        Self(smallvec![EMPTY_SYMBOL; len])
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Whether every position is unfilled, as returned for a hidden solution.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&symbol| symbol == EMPTY_SYMBOL)
    }
}

impl Deref for Code {
    type Target = [Symbol];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
