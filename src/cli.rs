//! Command-line interface for square_off.

use clap::{Parser, ValueEnum};
use square_off::{DEFAULT_TARGET, FirstMover, MatchSettings};

/// Square Off - console tic-tac-toe against a heuristic opponent
#[derive(Parser, Debug)]
#[command(name = "square_off")]
#[command(about = "Play tic-tac-toe rounds until one side reaches the target score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Rounds a side must win to take the match
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    pub wins: u32,

    /// Who moves first each round
    #[arg(long, value_enum, default_value = "computer")]
    pub first: FirstArg,
}

/// First-mover choice as it appears on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum FirstArg {
    /// The human opens every round
    Human,
    /// The computer opens every round
    Computer,
    /// Ask at startup
    Choose,
}

impl Cli {
    /// Resolves the parsed arguments into match settings.
    pub fn settings(&self) -> MatchSettings {
        let first_mover = match self.first {
            FirstArg::Human => FirstMover::Human,
            FirstArg::Computer => FirstMover::Computer,
            FirstArg::Choose => FirstMover::Choose,
        };
        MatchSettings {
            first_mover,
            target: self.wins,
        }
    }
}
