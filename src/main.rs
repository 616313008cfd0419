//! Square Off - console tic-tac-toe
//!
//! Interactive match against a heuristic computer opponent.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use square_off::{Console, MatchRunner};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!(wins = cli.wins, first = ?cli.first, "Starting match");

    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut runner = MatchRunner::setup(console, cli.settings())?;
    runner.run()?;

    Ok(())
}
