//! Board model: positions, squares, winning lines.

mod board;
mod position;
mod types;

pub use board::{Board, SquareOccupied, WINNING_LINES};
pub use position::Position;
pub use types::{Owner, RoundOutcome, Square};
