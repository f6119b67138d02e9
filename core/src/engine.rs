use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> InProgress (non-winning guess with guesses left)
/// - InProgress -> Won
/// - InProgress -> Lost (last guess used up)
/// - any -> InProgress (reset)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One play session of Mastermind.
///
/// Commands never fail: a request that is not valid in the current state is ignored and reported
/// as a `NoChange` outcome. Every command that changes observable state notifies subscribers
/// before returning.
#[derive(Debug)]
pub struct GameEngine<G = RandomSolutionGenerator> {
    config: GameConfig,
    generator: G,
    solution: Code,
    guesses: Array2<Symbol>,
    clues: Array2<ClueMark>,
    guesses_remaining: Row,
    state: EngineState,
    peeking: bool,
    observers: Observers,
}

impl GameEngine<RandomSolutionGenerator> {
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomSolutionGenerator::new(seed))
    }
}

impl<G: SolutionGenerator> GameEngine<G> {
    pub fn new(config: GameConfig, mut generator: G) -> Result<Self> {
        config.validate()?;
        let solution = generator.generate(&config);
        config.validate_code(&solution)?;

        let shape = config.board_shape();
        Ok(Self {
            config,
            generator,
            solution,
            guesses: Array2::from_elem(shape, EMPTY_SYMBOL),
            clues: Array2::default(shape),
            guesses_remaining: config.max_guesses,
            state: Default::default(),
            peeking: false,
            observers: Observers::new(),
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn remaining_guesses(&self) -> Row {
        self.guesses_remaining
    }

    pub fn victory_status(&self) -> bool {
        matches!(self.state, EngineState::Won)
    }

    pub fn is_peeking(&self) -> bool {
        self.peeking
    }

    pub fn is_solution_visible(&self) -> bool {
        self.state.is_finished() || self.peeking
    }

    /// The real solution while it is visible, otherwise a code of `EMPTY_SYMBOL`s.
    pub fn solution(&self) -> Code {
        if self.is_solution_visible() {
            self.solution.clone()
        } else {
            Code::blank(self.solution.len())
        }
    }

    /// Every guess cell, row by row, first guess first.
    pub fn guess_data(&self) -> Vec<Symbol> {
        self.guesses.iter().copied().collect()
    }

    /// Every clue mark, laid out like [`Self::guess_data`].
    pub fn clue_data(&self) -> Vec<ClueMark> {
        self.clues.iter().copied().collect()
    }

    /// Zero-based row access.
    pub fn guess_row(&self, index: usize) -> Option<Vec<Symbol>> {
        (index < self.guesses.nrows()).then(|| self.guesses.row(index).to_vec())
    }

    pub fn clue_row(&self, index: usize) -> Option<Vec<ClueMark>> {
        (index < self.clues.nrows()).then(|| self.clues.row(index).to_vec())
    }

    /// One-based number of the row that accepts input, `None` once the game is over.
    pub fn current_row(&self) -> Option<Row> {
        self.current_row_index().map(|index| index as Row + 1)
    }

    pub(crate) fn guess_board(&self) -> &Array2<Symbol> {
        &self.guesses
    }

    pub(crate) fn clue_board(&self) -> &Array2<ClueMark> {
        &self.clues
    }

    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Advances a cell of the current row to the next symbol, wrapping from the last symbol back
    /// to empty. `row` and `column` are one-based.
    pub fn choose(&mut self, row: Row, column: Column) -> CellOutcome {
        let Some(cell) = self.writable_cell(row, column) else {
            return CellOutcome::NoChange;
        };

        let value = &mut self.guesses[cell.to_nd_index()];
        *value = if *value >= self.config.unique_symbols {
            EMPTY_SYMBOL
        } else {
            *value + 1
        };
        self.observers.notify();
        CellOutcome::Changed
    }

    /// Writes `value` (a symbol or `EMPTY_SYMBOL`) into a cell of the current row. `row` and
    /// `column` are one-based.
    pub fn set_cell(&mut self, row: Row, column: Column, value: Symbol) -> CellOutcome {
        if value > self.config.unique_symbols {
            log::debug!("Ignoring out of range symbol {}", value);
            return CellOutcome::NoChange;
        }
        let Some(cell) = self.writable_cell(row, column) else {
            return CellOutcome::NoChange;
        };

        let current = &mut self.guesses[cell.to_nd_index()];
        if *current == value {
            return CellOutcome::NoChange;
        }
        *current = value;
        self.observers.notify();
        CellOutcome::Changed
    }

    /// Fills the whole current row and scores it right away.
    pub fn set_full_guess_row(&mut self, values: &[Symbol]) -> GuessOutcome {
        let Some(row) = self.current_row_index() else {
            log::debug!("Ignoring guess row, game is over");
            return GuessOutcome::NoChange;
        };
        if let Err(err) = self.config.validate_code(values) {
            log::debug!("Ignoring guess row: {}", err);
            return GuessOutcome::NoChange;
        }

        for (cell, &value) in self.guesses.row_mut(row).iter_mut().zip(values) {
            *cell = value;
        }
        self.submit_guess()
    }

    /// Scores the current row once every cell of it is filled.
    pub fn submit_guess(&mut self) -> GuessOutcome {
        let Some(row) = self.current_row_index() else {
            log::debug!("Ignoring guess, game is over");
            return GuessOutcome::NoChange;
        };

        let guess: SymbolVec = self.guesses.row(row).iter().copied().collect();
        if guess.contains(&EMPTY_SYMBOL) {
            log::debug!("Ignoring guess {}, row is incomplete", row + 1);
            return GuessOutcome::NoChange;
        }

        let score = evaluate(&self.solution, &guess);
        log::trace!("Guess {} scored {:?}", row + 1, score);

        let marks = score.marks(self.config.code_length);
        for (slot, mark) in self.clues.row_mut(row).iter_mut().zip(marks) {
            *slot = mark;
        }
        self.guesses_remaining -= 1;

        let outcome = if score.is_win(self.config.code_length) {
            self.state = EngineState::Won;
            log::info!("Code cracked on guess {}", row + 1);
            GuessOutcome::Won
        } else if self.guesses_remaining == 0 {
            self.state = EngineState::Lost;
            log::info!("Out of guesses");
            GuessOutcome::Lost(score)
        } else {
            GuessOutcome::Scored(score)
        };

        self.observers.notify();
        outcome
    }

    /// Toggles a temporary reveal of the solution. Ignored once the game is over.
    pub fn peek(&mut self) -> PeekOutcome {
        if self.state.is_finished() {
            log::debug!("Ignoring peek, game is over");
            return PeekOutcome::NoChange;
        }

        self.peeking = !self.peeking;
        self.observers.notify();
        if self.peeking {
            PeekOutcome::Shown
        } else {
            PeekOutcome::Hidden
        }
    }

    /// Starts a new game on the same board with a freshly generated solution. A generated code
    /// that does not fit the board is dropped and the previous solution is kept.
    pub fn reset(&mut self) {
        let solution = self.generator.generate(&self.config);
        match self.config.validate_code(&solution) {
            Ok(()) => self.solution = solution,
            Err(err) => log::warn!("Keeping previous solution, generated code is unusable: {}", err),
        }
        self.guesses.fill(EMPTY_SYMBOL);
        self.clues.fill(ClueMark::Blank);
        self.guesses_remaining = self.config.max_guesses;
        self.state = EngineState::InProgress;
        self.peeking = false;
        log::info!("New game started");
        self.observers.notify();
    }

    fn current_row_index(&self) -> Option<usize> {
        self.state
            .is_in_progress()
            .then(|| usize::from(self.config.max_guesses - self.guesses_remaining))
    }

    fn writable_cell(&self, row: Row, column: Column) -> Option<Cell> {
        let Some(current) = self.current_row() else {
            log::debug!("Ignoring cell ({}, {}), game is over", row, column);
            return None;
        };
        if row != current {
            log::debug!("Ignoring cell ({}, {}), current row is {}", row, column, current);
            return None;
        }
        if column == 0 || column > self.config.code_length {
            log::debug!("Ignoring cell ({}, {}), no such column", row, column);
            return None;
        }
        Some((usize::from(row - 1), usize::from(column - 1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell as Counter;
    use std::rc::Rc;

    fn engine(solution: &[Symbol]) -> GameEngine<FixedSolutionGenerator> {
        let config = GameConfig::default();
        let generator = FixedSolutionGenerator::from_symbols(&config, solution).unwrap();
        GameEngine::new(config, generator).unwrap()
    }

    fn counter(engine: &mut GameEngine<impl SolutionGenerator>) -> Rc<Counter<u32>> {
        let calls = Rc::new(Counter::new(0));
        let handle = Rc::clone(&calls);
        engine.subscribe(move || handle.set(handle.get() + 1));
        calls
    }

    fn assert_visibility_invariant(engine: &GameEngine<impl SolutionGenerator>) {
        assert_eq!(
            engine.is_solution_visible(),
            engine.victory_status() || engine.remaining_guesses() == 0 || engine.is_peeking()
        );
    }

    #[test]
    fn new_engine_starts_blank() {
        let engine = engine(&[1, 2, 3, 4]);

        assert_eq!(engine.state(), EngineState::InProgress);
        assert_eq!(engine.remaining_guesses(), 10);
        assert_eq!(engine.current_row(), Some(1));
        assert!(!engine.victory_status());
        assert!(!engine.is_peeking());
        assert!(!engine.is_solution_visible());
        assert!(engine.solution().is_blank());
        assert_eq!(engine.guess_data(), vec![EMPTY_SYMBOL; 40]);
        assert_eq!(engine.clue_data(), vec![ClueMark::Blank; 40]);
    }

    #[test]
    fn new_rejects_code_that_does_not_fit() {
        let config = GameConfig::new(10, 6, 5).unwrap();
        let generator = FixedSolutionGenerator::new(Code::new(&GameConfig::default(), &[1, 2, 3, 4]).unwrap());

        assert_eq!(
            GameEngine::new(config, generator).err(),
            Some(GameError::CodeLengthMismatch {
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn seeded_engine_has_valid_solution() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 9).unwrap();
        engine.peek();

        let solution = engine.solution();
        assert_eq!(engine.config().validate_code(&solution), Ok(()));
    }

    #[test]
    fn winning_guess_scores_all_exact_and_freezes_board() {
        let mut engine = engine(&[1, 2, 3, 4]);
        let calls = counter(&mut engine);

        assert_eq!(engine.set_full_guess_row(&[1, 2, 3, 4]), GuessOutcome::Won);

        assert_eq!(calls.get(), 1);
        assert!(engine.victory_status());
        assert_eq!(engine.state(), EngineState::Won);
        assert_eq!(engine.remaining_guesses(), 9);
        assert!(engine.is_solution_visible());
        assert_eq!(engine.solution().symbols(), [1, 2, 3, 4]);
        assert_eq!(engine.clue_row(0), Some(vec![ClueMark::Exact; 4]));
        assert_eq!(engine.current_row(), None);

        let frozen = engine.guess_data();
        assert_eq!(engine.set_full_guess_row(&[1, 2, 3, 4]), GuessOutcome::NoChange);
        assert_eq!(engine.choose(2, 1), CellOutcome::NoChange);
        assert_eq!(engine.set_cell(2, 1, 3), CellOutcome::NoChange);
        assert_eq!(engine.submit_guess(), GuessOutcome::NoChange);
        assert_eq!(engine.guess_data(), frozen);
        assert_eq!(engine.remaining_guesses(), 9);
        assert_eq!(calls.get(), 1);
        assert_visibility_invariant(&engine);
    }

    #[test]
    fn duplicate_guess_symbols_are_not_overcounted() {
        let mut engine = engine(&[1, 1, 2, 3]);

        let outcome = engine.set_full_guess_row(&[1, 1, 1, 1]);

        assert_eq!(
            outcome,
            GuessOutcome::Scored(Score {
                exact: 2,
                partial: 0
            })
        );
        assert_eq!(
            engine.clue_row(0),
            Some(vec![
                ClueMark::Exact,
                ClueMark::Exact,
                ClueMark::Blank,
                ClueMark::Blank
            ])
        );
    }

    #[test]
    fn clue_row_lists_exact_before_partial() {
        let mut engine = engine(&[1, 2, 2, 3]);

        engine.set_full_guess_row(&[2, 2, 4, 4]);

        assert_eq!(
            engine.clue_row(0),
            Some(vec![
                ClueMark::Exact,
                ClueMark::Partial,
                ClueMark::Blank,
                ClueMark::Blank
            ])
        );
        assert_eq!(engine.guess_row(0), Some(vec![2, 2, 4, 4]));
        assert_eq!(engine.clue_row(1), Some(vec![ClueMark::Blank; 4]));
        assert_eq!(engine.current_row(), Some(2));
    }

    #[test]
    fn running_out_of_guesses_loses_and_reveals() {
        let mut engine = engine(&[1, 2, 3, 4]);
        let calls = counter(&mut engine);

        for _ in 0..9 {
            assert!(matches!(
                engine.set_full_guess_row(&[5, 5, 5, 5]),
                GuessOutcome::Scored(_)
            ));
            assert!(!engine.is_solution_visible());
        }
        let last = engine.set_full_guess_row(&[4, 3, 2, 1]);

        assert_eq!(
            last,
            GuessOutcome::Lost(Score {
                exact: 0,
                partial: 4
            })
        );
        assert_eq!(calls.get(), 10);
        assert_eq!(engine.remaining_guesses(), 0);
        assert_eq!(engine.state(), EngineState::Lost);
        assert!(!engine.victory_status());
        assert!(engine.is_solution_visible());
        assert_eq!(engine.solution().symbols(), [1, 2, 3, 4]);

        assert_eq!(engine.set_full_guess_row(&[1, 2, 3, 4]), GuessOutcome::NoChange);
        assert_eq!(engine.remaining_guesses(), 0);
        assert_visibility_invariant(&engine);
    }

    #[test]
    fn incomplete_row_is_not_scored() {
        let mut engine = engine(&[1, 2, 3, 4]);
        let calls = counter(&mut engine);

        engine.set_cell(1, 1, 1);
        engine.set_cell(1, 2, 2);
        engine.set_cell(1, 3, 3);
        let guesses = engine.guess_data();
        let clues = engine.clue_data();

        assert_eq!(engine.submit_guess(), GuessOutcome::NoChange);
        assert_eq!(engine.remaining_guesses(), 10);
        assert_eq!(engine.guess_data(), guesses);
        assert_eq!(engine.clue_data(), clues);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn explicit_submit_scores_filled_row() {
        let mut engine = engine(&[1, 2, 3, 4]);

        for (column, value) in [(1, 1), (2, 2), (3, 4), (4, 3)] {
            assert_eq!(engine.set_cell(1, column, value), CellOutcome::Changed);
        }

        assert_eq!(
            engine.submit_guess(),
            GuessOutcome::Scored(Score {
                exact: 2,
                partial: 2
            })
        );
        assert_eq!(engine.remaining_guesses(), 9);
    }

    #[test]
    fn invalid_guess_rows_are_ignored() {
        let mut engine = engine(&[1, 2, 3, 4]);
        let calls = counter(&mut engine);

        assert_eq!(engine.set_full_guess_row(&[1, 2, 3]), GuessOutcome::NoChange);
        assert_eq!(engine.set_full_guess_row(&[1, 2, 3, 0]), GuessOutcome::NoChange);
        assert_eq!(engine.set_full_guess_row(&[1, 2, 3, 7]), GuessOutcome::NoChange);

        assert_eq!(engine.guess_data(), vec![EMPTY_SYMBOL; 40]);
        assert_eq!(engine.remaining_guesses(), 10);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn choose_cycles_through_symbols_and_back_to_empty() {
        let mut engine = engine(&[1, 2, 3, 4]);
        let calls = counter(&mut engine);

        for expected in 1..=6 {
            assert_eq!(engine.choose(1, 2), CellOutcome::Changed);
            assert_eq!(engine.guess_row(0).unwrap()[1], expected);
        }
        assert_eq!(engine.choose(1, 2), CellOutcome::Changed);
        assert_eq!(engine.guess_row(0).unwrap()[1], EMPTY_SYMBOL);
        assert_eq!(calls.get(), 7);
    }

    #[test]
    fn writes_outside_current_row_are_ignored() {
        let mut engine = engine(&[1, 2, 3, 4]);
        let calls = counter(&mut engine);

        assert_eq!(engine.choose(2, 1), CellOutcome::NoChange);
        assert_eq!(engine.choose(0, 1), CellOutcome::NoChange);
        assert_eq!(engine.choose(1, 0), CellOutcome::NoChange);
        assert_eq!(engine.choose(1, 5), CellOutcome::NoChange);
        assert_eq!(engine.set_cell(1, 1, 7), CellOutcome::NoChange);
        assert_eq!(engine.set_cell(11, 1, 1), CellOutcome::NoChange);
        assert_eq!(engine.guess_data(), vec![EMPTY_SYMBOL; 40]);
        assert_eq!(calls.get(), 0);

        engine.set_full_guess_row(&[6, 6, 6, 6]);
        assert_eq!(engine.choose(1, 1), CellOutcome::NoChange);
        assert_eq!(engine.choose(2, 1), CellOutcome::Changed);
    }

    #[test]
    fn set_cell_same_value_does_not_notify() {
        let mut engine = engine(&[1, 2, 3, 4]);
        let calls = counter(&mut engine);

        assert_eq!(engine.set_cell(1, 1, 0), CellOutcome::NoChange);
        assert_eq!(engine.set_cell(1, 1, 5), CellOutcome::Changed);
        assert_eq!(engine.set_cell(1, 1, 5), CellOutcome::NoChange);
        assert_eq!(engine.set_cell(1, 1, 0), CellOutcome::Changed);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn peek_toggles_and_restores() {
        let mut engine = engine(&[6, 5, 4, 3]);
        let calls = counter(&mut engine);

        assert_eq!(engine.peek(), PeekOutcome::Shown);
        assert!(engine.is_peeking());
        assert!(engine.is_solution_visible());
        assert_eq!(engine.solution().symbols(), [6, 5, 4, 3]);
        assert_visibility_invariant(&engine);

        assert_eq!(engine.peek(), PeekOutcome::Hidden);
        assert!(!engine.is_peeking());
        assert!(!engine.is_solution_visible());
        assert!(engine.solution().is_blank());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn peek_after_game_over_is_ignored() {
        let mut won = engine(&[1, 2, 3, 4]);
        won.set_full_guess_row(&[1, 2, 3, 4]);
        let calls = counter(&mut won);

        assert_eq!(won.peek(), PeekOutcome::NoChange);
        assert!(!won.is_peeking());
        assert!(won.is_solution_visible());
        assert_eq!(calls.get(), 0);

        let config = GameConfig::new(1, 6, 4).unwrap();
        let generator = FixedSolutionGenerator::from_symbols(&config, &[1, 2, 3, 4]).unwrap();
        let mut lost = GameEngine::new(config, generator).unwrap();
        lost.set_full_guess_row(&[2, 2, 2, 2]);

        assert_eq!(lost.state(), EngineState::Lost);
        assert_eq!(lost.peek(), PeekOutcome::NoChange);
        assert!(!lost.is_peeking());
    }

    #[test]
    fn reset_restores_initial_state_with_new_solution() {
        let config = GameConfig::default();
        let codes = vec![
            Code::new(&config, &[1, 2, 3, 4]).unwrap(),
            Code::new(&config, &[4, 4, 4, 4]).unwrap(),
        ];
        let generator = FixedSolutionGenerator::cycle(&config, codes).unwrap();
        let mut engine = GameEngine::new(config, generator).unwrap();
        let calls = counter(&mut engine);

        engine.set_full_guess_row(&[1, 1, 1, 1]);
        engine.peek();
        engine.set_full_guess_row(&[1, 2, 3, 4]);
        assert!(engine.victory_status());

        engine.reset();

        assert_eq!(calls.get(), 4);
        assert_eq!(engine.state(), EngineState::InProgress);
        assert_eq!(engine.remaining_guesses(), 10);
        assert!(!engine.victory_status());
        assert!(!engine.is_peeking());
        assert!(!engine.is_solution_visible());
        assert_eq!(engine.guess_data(), vec![EMPTY_SYMBOL; 40]);
        assert_eq!(engine.clue_data(), vec![ClueMark::Blank; 40]);

        assert_eq!(engine.set_full_guess_row(&[4, 4, 4, 4]), GuessOutcome::Won);
    }

    #[test]
    fn reset_after_loss_starts_over_hidden() {
        let config = GameConfig::new(2, 6, 4).unwrap();
        let generator = FixedSolutionGenerator::from_symbols(&config, &[1, 2, 3, 4]).unwrap();
        let mut engine = GameEngine::new(config, generator).unwrap();
        engine.set_full_guess_row(&[5, 5, 5, 5]);
        engine.set_full_guess_row(&[6, 6, 6, 6]);
        assert_eq!(engine.state(), EngineState::Lost);
        assert!(engine.is_solution_visible());

        engine.reset();

        assert_eq!(engine.state(), EngineState::InProgress);
        assert_eq!(engine.remaining_guesses(), 2);
        assert!(!engine.is_solution_visible());
        assert!(engine.solution().is_blank());
        assert_eq!(engine.clue_data(), vec![ClueMark::Blank; 8]);
        assert_visibility_invariant(&engine);

        let config = GameConfig::default();
        let generator = FixedSolutionGenerator::from_symbols(&config, &[1, 2, 3, 4]).unwrap();
        let mut engine = GameEngine::new(config, generator).unwrap();
        for _ in 0..10 {
            engine.set_full_guess_row(&[5, 5, 5, 5]);
        }
        assert_eq!(engine.state(), EngineState::Lost);

        engine.reset();

        assert_eq!(engine.remaining_guesses(), 10);
        assert_eq!(engine.state(), EngineState::InProgress);
        assert!(engine.solution().is_blank());
    }

    /// Hands out a valid code first, then one sized for a different board.
    struct MismatchedAfterFirst {
        calls: usize,
    }

    impl SolutionGenerator for MismatchedAfterFirst {
        fn generate(&mut self, _config: &GameConfig) -> Code {
            self.calls += 1;
            let longer = GameConfig::new(10, 6, 5).unwrap();
            if self.calls == 1 {
                Code::new(&GameConfig::default(), &[1, 2, 3, 4]).unwrap()
            } else {
                Code::new(&longer, &[1, 2, 3, 4, 5]).unwrap()
            }
        }
    }

    #[test]
    fn reset_keeps_solution_when_generated_code_does_not_fit() {
        let mut engine =
            GameEngine::new(GameConfig::default(), MismatchedAfterFirst { calls: 0 }).unwrap();
        let calls = counter(&mut engine);
        engine.set_full_guess_row(&[4, 3, 2, 1]);

        engine.reset();

        assert_eq!(calls.get(), 2);
        assert_eq!(engine.remaining_guesses(), 10);
        assert_eq!(engine.guess_data(), vec![EMPTY_SYMBOL; 40]);
        engine.peek();
        assert_eq!(engine.solution().symbols(), [1, 2, 3, 4]);
        assert_eq!(engine.set_full_guess_row(&[1, 2, 3, 4]), GuessOutcome::Won);
    }

    #[test]
    fn reset_is_allowed_mid_game() {
        let mut engine = engine(&[1, 2, 3, 4]);
        engine.set_full_guess_row(&[2, 3, 4, 5]);
        engine.choose(2, 1);

        engine.reset();

        assert_eq!(engine.current_row(), Some(1));
        assert_eq!(engine.guess_data(), vec![EMPTY_SYMBOL; 40]);
    }

    #[test]
    fn unsubscribed_observer_is_not_notified() {
        let mut engine = engine(&[1, 2, 3, 4]);
        let calls = Rc::new(Counter::new(0));
        let id = {
            let calls = Rc::clone(&calls);
            engine.subscribe(move || calls.set(calls.get() + 1))
        };
        assert_eq!(engine.subscriber_count(), 1);

        engine.peek();
        assert!(engine.unsubscribe(id));
        engine.peek();

        assert_eq!(calls.get(), 1);
        assert_eq!(engine.subscriber_count(), 0);
    }

    #[test]
    fn queries_return_independent_copies() {
        let engine = engine(&[1, 2, 3, 4]);

        let mut guesses = engine.guess_data();
        let mut clues = engine.clue_data();
        guesses[0] = 3;
        clues[0] = ClueMark::Exact;

        assert_eq!(engine.guess_data()[0], EMPTY_SYMBOL);
        assert_eq!(engine.clue_data()[0], ClueMark::Blank);
    }

    #[test]
    fn row_access_out_of_bounds_is_none() {
        let engine = engine(&[1, 2, 3, 4]);

        assert_eq!(engine.guess_row(10), None);
        assert_eq!(engine.clue_row(10), None);
        assert_eq!(engine.guess_row(9), Some(vec![EMPTY_SYMBOL; 4]));
    }
}
