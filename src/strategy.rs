//! Computer-move heuristics as an ordered strategy chain.
//!
//! Each strategy inspects the board and proposes a position or passes.
//! The chain is evaluated front to back; the first proposal wins. The
//! standard chain is center, then completing an own line, then blocking
//! the opponent, then a random open square.

use crate::game::{Board, Owner, Position, WINNING_LINES};
use rand::seq::IndexedRandom;
use tracing::debug;

/// A single move heuristic.
pub trait Strategy {
    /// Proposes a position for `me`, or `None` if the heuristic does not apply.
    fn propose(&self, board: &Board, me: Owner) -> Option<Position>;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// Takes the center square whenever it is open.
#[derive(Debug, Clone, Copy)]
pub struct TakeCenter;

impl Strategy for TakeCenter {
    fn propose(&self, board: &Board, _me: Owner) -> Option<Position> {
        board
            .get(Position::Center)
            .is_empty()
            .then_some(Position::Center)
    }

    fn name(&self) -> &'static str {
        "center"
    }
}

/// Scans the winning lines for one holding exactly two of `owner`'s marks
/// and one open square; returns that open square.
///
/// Declaration order breaks ties between qualifying lines.
fn open_square_in_pair(board: &Board, owner: Owner) -> Option<Position> {
    for line in WINNING_LINES {
        let mine = line
            .iter()
            .filter(|pos| board.get(**pos).owner() == Some(owner))
            .count();
        if mine == 2
            && let Some(open) = line.iter().find(|pos| board.get(**pos).is_empty())
        {
            return Some(*open);
        }
    }
    None
}

/// Completes a line already holding two own marks (offense).
#[derive(Debug, Clone, Copy)]
pub struct CompleteLine;

impl Strategy for CompleteLine {
    fn propose(&self, board: &Board, me: Owner) -> Option<Position> {
        open_square_in_pair(board, me)
    }

    fn name(&self) -> &'static str {
        "offense"
    }
}

/// Blocks a line where the opponent holds two marks (defense).
#[derive(Debug, Clone, Copy)]
pub struct BlockLine;

impl Strategy for BlockLine {
    fn propose(&self, board: &Board, me: Owner) -> Option<Position> {
        open_square_in_pair(board, me.opponent())
    }

    fn name(&self) -> &'static str {
        "defense"
    }
}

/// Picks uniformly at random among the open squares.
#[derive(Debug, Clone, Copy)]
pub struct RandomOpen;

impl Strategy for RandomOpen {
    fn propose(&self, board: &Board, _me: Owner) -> Option<Position> {
        board.unmarked_positions().choose(&mut rand::rng()).copied()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// The standard heuristic chain, in priority order.
pub fn standard_chain() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(TakeCenter),
        Box::new(CompleteLine),
        Box::new(BlockLine),
        Box::new(RandomOpen),
    ]
}

/// Runs the chain and returns the first proposal.
///
/// Returns `None` only on a full board, which callers never offer.
pub fn choose_move(chain: &[Box<dyn Strategy>], board: &Board, me: Owner) -> Option<Position> {
    for strategy in chain {
        if let Some(pos) = strategy.propose(board, me) {
            debug!(strategy = strategy.name(), position = %pos, "Strategy proposed move");
            return Some(pos);
        }
    }
    None
}
