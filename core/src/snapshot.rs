use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a presentation layer may show at one point in time.
///
/// Built only from what the engine exposes, so a hidden solution stays blank here too.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub solution: Code,
    pub guesses: Array2<Symbol>,
    pub clues: Array2<ClueMark>,
    pub guesses_remaining: Row,
    pub state: EngineState,
    pub peeking: bool,
}

impl GameSnapshot {
    pub fn from_engine<G: SolutionGenerator>(engine: &GameEngine<G>) -> Self {
        Self {
            config: engine.config(),
            solution: engine.solution(),
            guesses: engine.guess_board().clone(),
            clues: engine.clue_board().clone(),
            guesses_remaining: engine.remaining_guesses(),
            state: engine.state(),
            peeking: engine.is_peeking(),
        }
    }

    pub fn solution_visible(&self) -> bool {
        self.state.is_finished() || self.peeking
    }

    /// Zero-based; panics past the last row.
    pub fn guess_row(&self, index: usize) -> ArrayView1<'_, Symbol> {
        self.guesses.row(index)
    }

    pub fn clue_row(&self, index: usize) -> ArrayView1<'_, ClueMark> {
        self.clues.row(index)
    }
}
