//! # grundy-game
//!
//! Engine and computer opponent for Grundy's Game, a two-player impartial
//! game played on piles of tokens.
//!
//! ## Rules
//!
//! A move splits one pile into two non-empty piles of different sizes.
//! Piles of size 1 or 2 cannot be split. The player who cannot move loses.
//!
//! ## Design Principles
//!
//! 1. **Single Authority**: `GameState` is the only mutable game state and
//!    it changes only through validated splits. Rejected moves change
//!    nothing.
//!
//! 2. **Stable Identity**: Piles are addressed by `PileId`, never reused
//!    within a game, so a presentation layer can track them across splits.
//!
//! 3. **Narrow Observer Seam**: The engine depends on `EventSink`, not on
//!    any UI. Notifications are delivered before a command returns.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state snapshots via `im-rs`.
//!
//! - **Sprague-Grundy AI**: Pile values are memoized in a bottom-up table
//!   and combined by XOR.
//!
//! - **Deterministic RNG**: Layouts, starting player and random moves all
//!   derive from one seed.
//!
//! ## Modules
//!
//! - `core`: Piles, players, moves, state, RNG, configuration
//! - `rules`: Split legality and game status
//! - `events`: Notifications and sinks
//! - `ai`: Grundy table and the computer player
//! - `game`: The `Game` engine tying everything together
//! - `error`: Move and configuration errors

pub mod core;
pub mod rules;
pub mod events;
pub mod ai;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Pile, PileId, PileTag, PlayerId,
    GameRng, Stream, GameConfig, LayoutBounds, StartingPlayer,
    MoveRecord, Split,
    GameState, Piles,
};

pub use crate::rules::GameStatus;

pub use crate::events::{EventBus, EventKind, EventSink, GameEvent, SubscriptionId};

pub use crate::ai::{Computer, Decision, DecisionKind, DecisionStats, GrundyTable};

pub use crate::game::Game;

pub use crate::error::{ConfigError, MoveError};
