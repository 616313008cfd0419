//! Board positions, numbered 1-9 reading left to right, top to bottom.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A position on the board.
///
/// Variants are declared in ascending number order, so `Position::iter()`
/// visits the grid left to right, top to bottom.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (1)
    TopLeft,
    /// Top-center (2)
    TopCenter,
    /// Top-right (3)
    TopRight,
    /// Middle-left (4)
    MiddleLeft,
    /// Center (5)
    Center,
    /// Middle-right (6)
    MiddleRight,
    /// Bottom-left (7)
    BottomLeft,
    /// Bottom-center (8)
    BottomCenter,
    /// Bottom-right (9)
    BottomRight,
}

impl Position {
    /// The user-facing square number (1-9).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Array index into the board's squares (0-8).
    pub(crate) fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Parses a user-facing square number (1-9).
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            0 => None,
            n => Position::iter().nth(n as usize - 1),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}
