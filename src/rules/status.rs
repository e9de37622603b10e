//! Game status state machine.
//!
//! `InProgress` is entered on reset and re-entered after every move that
//! leaves a splittable pile. `Over` is absorbing until the next reset.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Status of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one pile can still be split.
    InProgress,
    /// No pile can be split; `winner` made the last move.
    Over { winner: PlayerId },
}

impl GameStatus {
    /// Has the game ended?
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over { .. })
    }

    /// The winner, once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameStatus::Over { winner } => Some(*winner),
            GameStatus::InProgress => None,
        }
    }
}
