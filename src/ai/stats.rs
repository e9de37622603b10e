//! Decision statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Counts of the decisions a computer player has made.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionStats {
    /// Moves that zeroed the nim-sum.
    pub winning_moves: u32,

    /// Uniformly random moves (nim-sum already zero, or fallback).
    pub random_moves: u32,

    /// Requests answered with "no move" because nothing could be split.
    pub no_moves: u32,
}

impl DecisionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total number of decisions, including "no move".
    #[must_use]
    pub fn total(&self) -> u32 {
        self.winning_moves + self.random_moves + self.no_moves
    }

    /// Fraction of actual moves that were winning moves.
    #[must_use]
    pub fn winning_ratio(&self) -> f64 {
        let moves = self.winning_moves + self.random_moves;
        if moves == 0 {
            0.0
        } else {
            f64::from(self.winning_moves) / f64::from(moves)
        }
    }
}
