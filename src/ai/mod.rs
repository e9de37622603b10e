//! Computer player for Grundy's Game.
//!
//! The position is the disjunctive sum of its piles, so by the
//! Sprague-Grundy theorem its value is the XOR (nim-sum) of the piles'
//! Grundy values, and the player to move loses iff that nim-sum is 0.
//!
//! ## Strategy
//!
//! - Nim-sum non-zero: play the first split found that brings it to 0
//! - Nim-sum zero: no move can keep it there, so play a uniformly random
//!   legal split
//!
//! ## Usage
//!
//! ```
//! use grundy_game::ai::Computer;
//! use grundy_game::core::{GameRng, GameState, PlayerId, Split};
//!
//! let state = GameState::with_sizes(&[3], PlayerId::COMPUTER);
//! let mut computer = Computer::new(GameRng::new(42));
//!
//! assert!(computer.can_win(state.piles().values()));
//!
//! let pile = *state.piles().keys().next().unwrap();
//! assert_eq!(computer.think(state.piles().values()), Some(Split::new(pile, 1)));
//! ```

mod computer;
mod grundy;
mod stats;

pub use computer::{Computer, Decision, DecisionKind};
pub use grundy::{mex, GrundyTable};
pub use stats::DecisionStats;
