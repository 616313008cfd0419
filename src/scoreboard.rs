//! Cumulative match scoring.

use crate::game::{Owner, RoundOutcome};
use serde::{Deserialize, Serialize};

/// Scores for both sides plus the match-winning threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    human: u32,
    computer: u32,
    target: u32,
}

impl Scoreboard {
    /// Creates a scoreboard with both scores at zero.
    pub fn new(target: u32) -> Self {
        Self {
            human: 0,
            computer: 0,
            target,
        }
    }

    /// Records a round outcome. A draw changes nothing.
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Won(Owner::Human) => self.human += 1,
            RoundOutcome::Won(Owner::Computer) => self.computer += 1,
            RoundOutcome::Draw => {}
        }
    }

    /// The given side's cumulative score.
    pub fn score(&self, owner: Owner) -> u32 {
        match owner {
            Owner::Human => self.human,
            Owner::Computer => self.computer,
        }
    }

    /// The side that has reached the threshold, if any.
    pub fn match_winner(&self) -> Option<Owner> {
        if self.human >= self.target {
            Some(Owner::Human)
        } else if self.computer >= self.target {
            Some(Owner::Computer)
        } else {
            None
        }
    }
}
