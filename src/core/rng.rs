//! Seeded randomness.
//!
//! One `u64` seed drives a whole game. ChaCha8 supports 2^64 independent
//! streams per key, so the engine (layouts, coin flips) and the computer
//! (random moves) each read their own [`Stream`] of the same seed. Neither
//! can shift the other's sequence, and replaying a seed replays the game.
//!
//! ```
//! use grundy_game::core::{GameRng, LayoutBounds, Stream};
//!
//! let mut engine = GameRng::new(42);
//! let mut computer = engine.stream(Stream::Computer);
//!
//! let layout = engine.layout(&LayoutBounds::default());
//! assert!((1..=4).contains(&layout.len()));
//! assert!((1..=3).contains(&computer.split_position(3)));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::LayoutBounds;

/// Independent random sequences derived from one seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stream {
    /// Layout generation and starting-player coin flips.
    Engine = 0,
    /// Random moves of the computer player.
    Computer = 1,
}

/// ChaCha8 generator positioned on one [`Stream`] of a seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// The engine stream of `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::on_stream(seed, Stream::Engine)
    }

    fn on_stream(seed: u64, stream: Stream) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(seed);
        inner.set_stream(stream as u64);
        Self { inner, seed }
    }

    /// A fresh generator on `stream` of the same seed.
    ///
    /// Starts at the beginning of that stream, whatever has been drawn here.
    #[must_use]
    pub fn stream(&self, stream: Stream) -> Self {
        Self::on_stream(self.seed, stream)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pile sizes for a random layout: a pile count, then each size, all
    /// uniform within `bounds`.
    ///
    /// # Panics
    ///
    /// Panics if a range in `bounds` is empty; see [`LayoutBounds::validate`].
    pub fn layout(&mut self, bounds: &LayoutBounds) -> Vec<u32> {
        let count = self.inner.gen_range(bounds.min_piles..=bounds.max_piles);
        (0..count)
            .map(|_| self.inner.gen_range(bounds.min_size..=bounds.max_size))
            .collect()
    }

    /// Fair coin.
    pub fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    /// Uniform split position in `1..=max(1, max_position)`.
    pub fn split_position(&mut self, max_position: u32) -> u32 {
        self.inner.gen_range(1..=max_position.max(1))
    }

    /// Uniformly chosen element, `None` if `items` is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
