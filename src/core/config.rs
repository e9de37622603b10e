//! Game configuration types.
//!
//! Callers configure the engine once at startup by providing:
//! - `LayoutBounds`: Limits for randomly generated layouts
//! - `StartingPlayer`: Who opens when cheat mode is off
//! - `GameConfig`: Combines all configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Inclusive bounds for a randomly generated pile layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutBounds {
    /// Fewest piles to generate.
    pub min_piles: u32,

    /// Most piles to generate.
    pub max_piles: u32,

    /// Smallest pile size to generate.
    pub min_size: u32,

    /// Largest pile size to generate.
    pub max_size: u32,
}

impl Default for LayoutBounds {
    fn default() -> Self {
        Self {
            min_piles: 1,
            max_piles: 4,
            min_size: 3,
            max_size: 10,
        }
    }
}

impl LayoutBounds {
    /// Create layout bounds.
    #[must_use]
    pub fn new(piles: (u32, u32), sizes: (u32, u32)) -> Self {
        Self {
            min_piles: piles.0,
            max_piles: piles.1,
            min_size: sizes.0,
            max_size: sizes.1,
        }
    }

    /// Check the bounds describe a non-empty layout of positive piles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_piles == 0 || self.min_piles > self.max_piles {
            return Err(ConfigError::InvalidLayout {
                reason: format!(
                    "pile count range {}..={} must be non-empty and start at 1 or more",
                    self.min_piles, self.max_piles
                ),
            });
        }
        if self.min_size == 0 || self.min_size > self.max_size {
            return Err(ConfigError::InvalidLayout {
                reason: format!(
                    "pile size range {}..={} must be non-empty and start at 1 or more",
                    self.min_size, self.max_size
                ),
            });
        }
        Ok(())
    }
}

/// Who moves first after a reset when cheat mode is off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartingPlayer {
    /// Coin flip.
    #[default]
    Random,
    /// The human always opens.
    Human,
    /// The computer always opens.
    Computer,
}

/// Complete game configuration.
///
/// ```
/// use grundy_game::core::{GameConfig, StartingPlayer};
///
/// let config = GameConfig::default()
///     .with_initial_sizes(vec![7, 5])
///     .with_starting_player(StartingPlayer::Human)
///     .with_seed(3);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pile sizes used on reset. Empty means a random layout.
    pub initial_sizes: Vec<u32>,

    /// Whether the computer picks the starting player to its advantage.
    pub cheat_mode: bool,

    /// Bounds for random layouts.
    pub layout: LayoutBounds,

    /// Starting player rule when cheat mode is off.
    pub starting_player: StartingPlayer,

    /// RNG seed. Same seed, same game.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_sizes: Vec::new(),
            cheat_mode: false,
            layout: LayoutBounds::default(),
            starting_player: StartingPlayer::Random,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial pile sizes.
    #[must_use]
    pub fn with_initial_sizes(mut self, sizes: Vec<u32>) -> Self {
        self.initial_sizes = sizes;
        self
    }

    /// Enable or disable cheat mode.
    #[must_use]
    pub fn with_cheat_mode(mut self, enabled: bool) -> Self {
        self.cheat_mode = enabled;
        self
    }

    /// Set the random layout bounds.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutBounds) -> Self {
        self.layout = layout;
        self
    }

    /// Set the starting player rule.
    #[must_use]
    pub fn with_starting_player(mut self, starting_player: StartingPlayer) -> Self {
        self.starting_player = starting_player;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check all configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_sizes(&self.initial_sizes)?;
        self.layout.validate()
    }
}

/// Reject any zero-sized pile in an explicit layout.
pub(crate) fn validate_sizes(sizes: &[u32]) -> Result<(), ConfigError> {
    match sizes.iter().position(|&size| size == 0) {
        Some(index) => Err(ConfigError::EmptyPile { index }),
        None => Ok(()),
    }
}
