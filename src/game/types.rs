//! Core domain types for the tic-tac-toe match.

use serde::{Deserialize, Serialize};

/// Which side a mark belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// The human contestant.
    Human,
    /// The computer contestant.
    Computer,
}

impl Owner {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Owner::Human => Owner::Computer,
            Owner::Computer => Owner::Human,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Unmarked square.
    Empty,
    /// Square marked by one side.
    Taken(Owner),
}

impl Square {
    /// Checks whether the square is unmarked.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    /// Returns the owner of the mark, if any.
    pub fn owner(self) -> Option<Owner> {
        match self {
            Square::Empty => None,
            Square::Taken(owner) => Some(owner),
        }
    }
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// One side completed a line.
    Won(Owner),
    /// The board filled with no line completed.
    Draw,
}
