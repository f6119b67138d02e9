//! Guess evaluation.
//!
//! Scoring runs in two passes over "consumed" markers instead of removing matched entries, so
//! the solution and guess slices are never touched:
//!
//! 1. exact pass: every position where guess and solution agree is consumed on both sides;
//! 2. partial pass: each unconsumed guess entry, left to right, consumes the first unconsumed
//!    solution entry with the same symbol.
//!
//! Consuming on match is what keeps duplicates honest: a symbol can only be credited as often
//! as it occurs in *both* sequences.

use core::iter;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::*;

type Consumed = SmallVec<[bool; CODE_INLINE]>;

/// Exact and partial match counts for one guess.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub exact: u8,
    pub partial: u8,
}

impl Score {
    pub const fn matches(self) -> u8 {
        self.exact + self.partial
    }

    pub const fn is_win(self, code_length: Column) -> bool {
        self.exact == code_length
    }

    /// Clue row for this score: exact marks first, then partial marks, padded with blanks to
    /// `code_length`.
    pub fn marks(self, code_length: Column) -> impl Iterator<Item = ClueMark> + use<> {
        let exact = usize::from(self.exact);
        let partial = usize::from(self.partial);
        let blank = usize::from(code_length).saturating_sub(exact + partial);

        iter::repeat_n(ClueMark::Exact, exact)
            .chain(iter::repeat_n(ClueMark::Partial, partial))
            .chain(iter::repeat_n(ClueMark::Blank, blank))
    }
}

/// Scores `guess` against `solution`. Only the common prefix is compared if lengths differ.
pub fn evaluate(solution: &[Symbol], guess: &[Symbol]) -> Score {
    debug_assert_eq!(solution.len(), guess.len());
    let len = solution.len().min(guess.len());

    let mut solution_used: Consumed = smallvec![false; len];
    let mut guess_used: Consumed = smallvec![false; len];
    let mut score = Score::default();

    for i in 0..len {
        if solution[i] == guess[i] {
            solution_used[i] = true;
            guess_used[i] = true;
            score.exact += 1;
        }
    }

    // nothing left to pair up on a winning guess
    if usize::from(score.exact) == len {
        return score;
    }

    for (i, &symbol) in guess[..len].iter().enumerate() {
        if guess_used[i] {
            continue;
        }
        let found = (0..len).find(|&j| !solution_used[j] && solution[j] == symbol);
        if let Some(j) = found {
            solution_used[j] = true;
            score.partial += 1;
        }
    }

    score
}
