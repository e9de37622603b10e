//! Error types.
//!
//! Both kinds are recoverable: a rejected move or configuration leaves the
//! game exactly as it was.

use thiserror::Error;

use crate::core::PileId;

/// Why a split request was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No active pile has this ID.
    #[error("Unknown pile: {0}")]
    UnknownPile(PileId),

    /// Split position outside `1..size`.
    #[error("Split position {position} out of range for {pile} of size {size}")]
    PositionOutOfRange { pile: PileId, size: u32, position: u32 },

    /// Split into two equal halves.
    #[error("Cannot split {pile} of size {size} into two equal piles")]
    SymmetricSplit { pile: PileId, size: u32 },

    /// A human move was requested on the computer's turn.
    #[error("Not your turn")]
    NotYourTurn,
}

/// Invalid engine configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An explicit layout contained a pile of size 0.
    #[error("Initial pile at index {index} has size 0")]
    EmptyPile { index: usize },

    /// Random layout bounds cannot produce a layout.
    #[error("Invalid layout bounds: {reason}")]
    InvalidLayout { reason: String },
}
