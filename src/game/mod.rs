//! The playable game: state, computer opponent and notifications wired
//! together behind one command/query surface.

mod engine;

pub use engine::Game;
