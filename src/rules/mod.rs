//! Rules of Grundy's Game.
//!
//! A move replaces one pile of size `n` with two piles of sizes `a` and
//! `b` where `a + b = n`, `a != b` and both are at least 1. The player who
//! cannot move loses, so the game is over once every pile has size 2 or
//! less.
//!
//! This module holds the pure legality arithmetic shared by the state and
//! the computer player, plus the game status state machine.

mod split;
mod status;

pub use split::{can_split, canonical_positions, check_split, max_canonical_position, split_sizes};
pub use status::GameStatus;
