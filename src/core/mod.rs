//! Core engine types: piles, players, moves, state, RNG, configuration.

pub mod pile;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use pile::{Pile, PileId, PileTag};
pub use player::PlayerId;
pub use rng::{GameRng, Stream};
pub use config::{GameConfig, LayoutBounds, StartingPlayer};
pub use action::{MoveRecord, Split};
pub use state::{GameState, Piles};
