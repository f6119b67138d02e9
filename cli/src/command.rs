use mastermind_core::{GameConfig, Symbol, SymbolVec};
use thiserror::Error;

/// One line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Guess(SymbolVec),
    Reset,
    Peek,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`")]
    Unknown(String),
    #[error("Expected {expected} symbols, got {actual}")]
    WrongArity { expected: usize, actual: usize },
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("Symbol {0} is out of range")]
    OutOfRange(u32),
}

impl Command {
    /// Parses `guess a b c ...`, `reset`, `peek` or `quit`. Guesses must name exactly
    /// `code_length` symbols from `1..=unique_symbols`.
    pub fn parse(line: &str, config: &GameConfig) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };

        match name {
            "quit" => Ok(Self::Quit),
            "reset" => Ok(Self::Reset),
            "peek" => Ok(Self::Peek),
            "guess" => {
                let args: Vec<&str> = words.collect();
                let expected = usize::from(config.code_length);
                if args.len() != expected {
                    return Err(CommandError::WrongArity {
                        expected,
                        actual: args.len(),
                    });
                }
                args.into_iter()
                    .map(|word| parse_symbol(word, config))
                    .collect::<Result<SymbolVec, _>>()
                    .map(Self::Guess)
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_symbol(word: &str, config: &GameConfig) -> Result<Symbol, CommandError> {
    let value: u32 = word
        .parse()
        .map_err(|_| CommandError::NotANumber(word.to_string()))?;
    Symbol::try_from(value)
        .ok()
        .filter(|&symbol| config.is_symbol(symbol))
        .ok_or(CommandError::OutOfRange(value))
}
