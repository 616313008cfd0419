//! Match orchestration: setup prompts, the round loop, and scoring.

use crate::console::Console;
use crate::game::{Board, Owner, RoundOutcome, Square};
use crate::scoreboard::Scoreboard;
use crate::strategy::{self, Strategy};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// The computer's fixed marker symbol.
pub const COMPUTER_MARKER: char = 'O';

/// Rounds a side must win to take the match.
pub const DEFAULT_TARGET: u32 = 5;

/// Who moves first each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FirstMover {
    /// The human opens every round.
    Human,
    /// The computer opens every round.
    #[default]
    Computer,
    /// Ask the human at startup.
    Choose,
}

/// Match configuration resolved from the command line.
#[derive(Debug, Clone, Copy)]
pub struct MatchSettings {
    /// Who opens each round.
    pub first_mover: FirstMover,
    /// Score needed to win the match.
    pub target: u32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            first_mover: FirstMover::default(),
            target: DEFAULT_TARGET,
        }
    }
}

/// One side of the match: a name and a marker symbol.
#[derive(Debug, Clone)]
struct Contestant {
    name: String,
    symbol: char,
}

/// Drives a match between the human and the computer.
///
/// Generic over the console streams so whole matches can run against
/// scripted input in tests.
pub struct MatchRunner<R, W> {
    console: Console<R, W>,
    board: Board,
    human: Contestant,
    computer: Contestant,
    chain: Vec<Box<dyn Strategy>>,
    scoreboard: Scoreboard,
    first_mover: Owner,
    current: Owner,
}

impl<R: BufRead, W: Write> MatchRunner<R, W> {
    /// Runs the startup prompts and builds a runner.
    ///
    /// Prompt order: marker symbol, human name, computer name, then the
    /// go-first question when the configuration says [`FirstMover::Choose`].
    #[instrument(skip(console))]
    pub fn setup(mut console: Console<R, W>, settings: MatchSettings) -> Result<Self> {
        console.say("Welcome to Tic Tac Toe!")?;
        console.say("")?;

        let symbol = console.ask_marker("What's your marker?")?;
        let human_name = console.ask_name("What is the human's name?")?;
        let computer_name = console.ask_name("What is the computer's name?")?;

        let first_mover = match settings.first_mover {
            FirstMover::Human => Owner::Human,
            FirstMover::Computer => Owner::Computer,
            FirstMover::Choose => {
                if console.ask_yes_no("Would you like to go first? (y/n)")? {
                    Owner::Human
                } else {
                    Owner::Computer
                }
            }
        };
        info!(?first_mover, target = settings.target, "Match configured");

        Ok(Self {
            console,
            board: Board::new(),
            human: Contestant {
                name: human_name,
                symbol,
            },
            computer: Contestant {
                name: computer_name,
                symbol: COMPUTER_MARKER,
            },
            chain: strategy::standard_chain(),
            scoreboard: Scoreboard::new(settings.target),
            first_mover,
            current: first_mover,
        })
    }

    /// Plays rounds until a side reaches the target score or the human
    /// declines to continue. Returns the match winner, if one was declared.
    #[instrument(skip_all)]
    pub fn run(&mut self) -> Result<Option<Owner>> {
        let winner = loop {
            self.clear_and_display_board()?;

            loop {
                self.current_player_moves()?;
                if self.board.has_winner() || self.board.is_full() {
                    break;
                }
                self.clear_and_display_board()?;
            }

            let outcome = self.round_outcome();
            self.scoreboard.record(outcome);
            info!(
                ?outcome,
                human = self.scoreboard.score(Owner::Human),
                computer = self.scoreboard.score(Owner::Computer),
                "Round over"
            );
            self.display_result(outcome)?;
            self.display_scores()?;

            if let Some(winner) = self.scoreboard.match_winner() {
                self.display_match_winner(winner)?;
                break Some(winner);
            }
            if !self
                .console
                .ask_yes_no("Would you like to play again? (y/n)")?
            {
                break None;
            }
            self.reset_round();
            self.console.say("Let's play again!")?;
            self.console.say("")?;
        };

        self.console.say("Thanks for playing Tic Tac Toe! Goodbye!")?;
        Ok(winner)
    }

    /// The current scores.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Consumes the runner, returning the console output stream.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    fn current_player_moves(&mut self) -> Result<()> {
        match self.current {
            Owner::Human => self.human_moves()?,
            Owner::Computer => self.computer_moves()?,
        }
        self.current = self.current.opponent();
        Ok(())
    }

    fn human_moves(&mut self) -> Result<()> {
        let open = self.board.unmarked_positions();
        let pos = self.console.ask_square(&open)?;
        debug!(player = %self.human.name, position = %pos, "Human move");
        self.board.place(pos, Owner::Human)?;
        Ok(())
    }

    fn computer_moves(&mut self) -> Result<()> {
        let pos = strategy::choose_move(&self.chain, &self.board, Owner::Computer)
            .context("No open square for the computer")?;
        debug!(player = %self.computer.name, position = %pos, "Computer move");
        self.board.place(pos, Owner::Computer)?;
        Ok(())
    }

    fn round_outcome(&self) -> RoundOutcome {
        match self.board.winner() {
            Some(owner) => RoundOutcome::Won(owner),
            None => RoundOutcome::Draw,
        }
    }

    fn reset_round(&mut self) {
        self.board.reset();
        self.current = self.first_mover;
    }

    fn clear_and_display_board(&mut self) -> Result<()> {
        self.console.clear()?;
        self.display_board()
    }

    fn display_board(&mut self) -> Result<()> {
        self.console.say(&format!(
            "You're a {}. {} is a {}.",
            self.human.symbol, self.computer.name, self.computer.symbol
        ))?;
        self.console.say("")?;
        let (human, computer) = (self.human.symbol, self.computer.symbol);
        self.console.draw_board(&self.board, move |square| match square {
            Square::Empty => ' ',
            Square::Taken(Owner::Human) => human,
            Square::Taken(Owner::Computer) => computer,
        })?;
        self.console.say("")?;
        Ok(())
    }

    fn display_result(&mut self, outcome: RoundOutcome) -> Result<()> {
        self.clear_and_display_board()?;
        let line = match outcome {
            RoundOutcome::Won(Owner::Human) => format!("{} won!", self.human.name),
            RoundOutcome::Won(Owner::Computer) => format!("{} won.", self.computer.name),
            RoundOutcome::Draw => "It's a tie!".to_string(),
        };
        self.console.say(&line)
    }

    fn display_scores(&mut self) -> Result<()> {
        self.console.say(&format!(
            "{} has: {} points",
            self.human.name,
            self.scoreboard.score(Owner::Human)
        ))?;
        self.console.say(&format!(
            "{} has: {} points",
            self.computer.name,
            self.scoreboard.score(Owner::Computer)
        ))
    }

    fn display_match_winner(&mut self, winner: Owner) -> Result<()> {
        info!(?winner, "Match over");
        match winner {
            Owner::Human => self.console.say("You won the game!"),
            Owner::Computer => self
                .console
                .say(&format!("{} won the game.", self.computer.name)),
        }
    }
}
