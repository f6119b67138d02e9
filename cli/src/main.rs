use std::io;

use anyhow::Context;
use clap::Parser;
use mastermind_core::{
    Column, DEFAULT_CODE_LENGTH, DEFAULT_MAX_GUESSES, DEFAULT_UNIQUE_SYMBOLS, GameConfig,
    GameEngine, Row, Symbol,
};

use crate::session::TextSession;

mod command;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about = "Crack the hidden code", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of guesses before the game is lost
    #[arg(long, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: Row,

    /// Number of distinct symbols a position can hold
    #[arg(long, default_value_t = DEFAULT_UNIQUE_SYMBOLS)]
    symbols: Symbol,

    /// Number of positions in the code
    #[arg(long, default_value_t = DEFAULT_CODE_LENGTH)]
    code_length: Column,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = GameConfig::new(args.max_guesses, args.symbols, args.code_length)
        .context("Invalid board")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let engine = GameEngine::with_seed(config, seed)?;
    let mut session = TextSession::new(engine);
    session
        .run(io::stdin().lock(), &mut io::stdout().lock())
        .context("Terminal I/O failed")?;

    log::debug!("Session ended");
    Ok(())
}
