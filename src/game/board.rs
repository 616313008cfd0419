//! The 3x3 board and its winning-line queries.

use super::position::Position;
use super::types::{Owner, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

/// The 8 winning lines, in the order they are scanned.
///
/// Declaration order is the tie-break for every line scan in this crate
/// (winner detection and the offense/defense strategies): columns, then
/// rows, then diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Error returned when placing a mark on an occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("square is already occupied")]
pub struct SquareOccupied;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order, indexed by `Position`.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Places a mark for `owner` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`SquareOccupied`] if the square is already marked.
    pub fn place(&mut self, pos: Position, owner: Owner) -> Result<(), SquareOccupied> {
        if !self.get(pos).is_empty() {
            return Err(SquareOccupied);
        }
        debug!(position = %pos, ?owner, "Placing mark");
        self.squares[pos.index()] = Square::Taken(owner);
        Ok(())
    }

    /// Positions still unmarked, in ascending number order.
    pub fn unmarked_positions(&self) -> Vec<Position> {
        Position::iter()
            .filter(|pos| self.get(*pos).is_empty())
            .collect()
    }

    /// Checks whether every square is marked.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Returns the owner of the first uniformly-marked winning line, if any.
    ///
    /// Lines are scanned in [`WINNING_LINES`] declaration order.
    pub fn winner(&self) -> Option<Owner> {
        for [a, b, c] in WINNING_LINES {
            let mark = self.get(a);

            if !mark.is_empty() && mark == self.get(b) && mark == self.get(c) {
                return mark.owner();
            }
        }

        None
    }

    /// Convenience boolean form of [`Board::winner`].
    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// Clears all nine squares.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
