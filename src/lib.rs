//! Square Off - console tic-tac-toe against a heuristic opponent
//!
//! First side to win five rounds takes the match. The computer plays a
//! fixed-priority heuristic: take the center, complete its own line,
//! block the human's line, otherwise pick a random open square.
//!
//! # Architecture
//!
//! - **game**: board model - positions, squares, winning lines
//! - **strategy**: the computer-move heuristic chain
//! - **console**: interactive prompts and board rendering
//! - **scoreboard**: cumulative scores and the match threshold
//! - **orchestrator**: the round and match loops
//!
//! # Example
//!
//! ```no_run
//! use square_off::{Console, MatchRunner, MatchSettings};
//! use std::io;
//!
//! # fn example() -> anyhow::Result<()> {
//! let console = Console::new(io::stdin().lock(), io::stdout());
//! let mut runner = MatchRunner::setup(console, MatchSettings::default())?;
//! runner.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod game;
mod orchestrator;
mod scoreboard;
mod strategy;

// Crate-level exports - board model
pub use game::{Board, Owner, Position, RoundOutcome, Square, SquareOccupied, WINNING_LINES};

// Crate-level exports - heuristics
pub use strategy::{
    BlockLine, CompleteLine, RandomOpen, Strategy, TakeCenter, choose_move, standard_chain,
};

// Crate-level exports - console I/O
pub use console::Console;

// Crate-level exports - scoring
pub use scoreboard::Scoreboard;

// Crate-level exports - match control
pub use orchestrator::{COMPUTER_MARKER, DEFAULT_TARGET, FirstMover, MatchRunner, MatchSettings};
