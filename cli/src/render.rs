use std::fmt;
use mastermind_core::{EMPTY_SYMBOL, EngineState, GameConfig, GameSnapshot, Symbol};

/// Stand-in for unfilled guess cells and hidden solution symbols.
pub const PLACEHOLDER: char = 'X';

pub const PROMPT: &str = "Enter command: ";

/// Solution row, separator, then guesses from the last row down to the first so the board
/// fills bottom-up.
pub struct Board<'a>(pub &'a GameSnapshot);

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        let config = snapshot.config;
        let indent = usize::from(config.code_length) + 1;

        writeln!(f)?;
        write!(f, "{:indent$}", "")?;
        write_symbols(f, snapshot.solution.iter().copied())?;
        writeln!(f)?;
        writeln!(
            f,
            "{:indent$}{:-<width$}",
            "",
            "",
            width = 2 * usize::from(config.code_length) - 1
        )?;

        for index in (0..usize::from(config.max_guesses)).rev() {
            for mark in snapshot.clue_row(index) {
                write!(f, "{mark}")?;
            }
            f.write_str(" ")?;
            write_symbols(f, snapshot.guess_row(index).iter().copied())?;
            writeln!(f, "  Guess: {}", index + 1)?;
        }
        Ok(())
    }
}

fn write_symbols(f: &mut fmt::Formatter<'_>, symbols: impl Iterator<Item = Symbol>) -> fmt::Result {
    for symbol in symbols {
        if symbol == EMPTY_SYMBOL {
            write!(f, "{PLACEHOLDER} ")?;
        } else {
            write!(f, "{symbol} ")?;
        }
    }
    Ok(())
}

pub struct Status<'a>(pub &'a GameSnapshot);

impl fmt::Display for Status<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.state {
            EngineState::Won => write!(f, "You won the game!!"),
            EngineState::Lost => write!(f, "You lost the game!!"),
            EngineState::InProgress => {
                write!(f, "You have {} guesses remaining.", self.0.guesses_remaining)
            }
        }
    }
}

pub struct Help<'a>(pub &'a GameConfig);

impl fmt::Display for Help<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.0;
        let args: String = (b'a'..)
            .take(usize::from(config.code_length).min(4))
            .map(|c| format!("{} ", char::from(c)))
            .collect();

        writeln!(f)?;
        writeln!(
            f,
            "Choose numbers from 1-{} for each guess component.",
            config.unique_symbols
        )?;
        writeln!(f, "Each 'B' in your clue indicates a match.")?;
        writeln!(
            f,
            "Each 'W' in your clue indicates a correct symbol but incorrect location."
        )?;
        writeln!(f)?;
        writeln!(f, "Available commands:")?;
        writeln!(f, "{:<18}-- make next guess", format!("guess {args}..."))?;
        writeln!(f, "{:<18}-- quit the game", "quit")?;
        writeln!(f, "{:<18}-- start a new game", "reset")?;
        writeln!(f, "{:<18}-- toggle solution visibility", "peek")
    }
}
