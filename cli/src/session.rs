use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use mastermind_core::{GameEngine, GameSnapshot, GuessOutcome, SolutionGenerator};

use crate::command::Command;
use crate::render::{Board, Help, PROMPT, Status};

/// Line-oriented front end. Redraws the board whenever the engine reports a change.
pub struct TextSession<G> {
    engine: GameEngine<G>,
    changed: Rc<Cell<bool>>,
}

impl<G: SolutionGenerator> TextSession<G> {
    pub fn new(mut engine: GameEngine<G>) -> Self {
        let changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&changed);
        engine.subscribe(move || flag.set(true));
        Self { engine, changed }
    }

    pub fn engine(&self) -> &GameEngine<G> {
        &self.engine
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        self.write_help(out)?;

        for line in input.lines() {
            let line = line?;
            let config = self.engine.config();
            match Command::parse(&line, &config) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command),
                Err(err) => {
                    log::debug!("Bad command {:?}: {}", line, err);
                    self.write_help(out)?;
                }
            }

            if self.changed.replace(false) {
                self.write_game(out)?;
            }
        }
        out.flush()
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Guess(values) => {
                if let GuessOutcome::NoChange = self.engine.set_full_guess_row(&values) {
                    log::debug!("Guess ignored, start a new game with `reset`");
                }
            }
            Command::Peek => {
                self.engine.peek();
            }
            Command::Reset => self.engine.reset(),
            Command::Quit => {}
        }
    }

    fn write_game(&self, out: &mut impl Write) -> io::Result<()> {
        let snapshot = GameSnapshot::from_engine(&self.engine);
        write!(out, "{}", Board(&snapshot))?;
        writeln!(out)?;
        writeln!(out, "{}", Status(&snapshot))?;
        write!(out, "{PROMPT}")?;
        out.flush()
    }

    fn write_help(&self, out: &mut impl Write) -> io::Result<()> {
        let snapshot = GameSnapshot::from_engine(&self.engine);
        write!(out, "{}", Help(&snapshot.config))?;
        write!(out, "{}", Board(&snapshot))?;
        write!(out, "{PROMPT}")?;
        out.flush()
    }
}
