//! Pile identification and the pile entity itself.
//!
//! Every pile on the table has a unique `PileId`.
//!
//! ## ID Allocation
//!
//! IDs are handed out by `GameState` from a monotonically increasing
//! counter. An ID is never reused, not even across resets, so a stale ID
//! held by an observer can never alias a newer pile.
//!
//! ## Usage
//!
//! ```
//! use grundy_game::core::{Pile, PileId, PileTag};
//!
//! let pile = Pile::new(PileId(7), 5, PileTag::new(0));
//! assert!(pile.can_split());
//!
//! let (a, b) = pile.split_sizes(2).unwrap();
//! assert_eq!((a, b), (2, 3));
//! ```

use serde::{Deserialize, Serialize};

use crate::rules;

/// Unique identifier for a pile.
///
/// Opaque to callers: the only meaningful operations are equality,
/// hashing and ordering (allocation order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PileId(pub u32);

impl PileId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for PileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}

/// Non-size attribute of a pile, carried for presentation layers.
///
/// Children of a split inherit the parent's tag. The engine never
/// interprets it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileTag(pub u16);

impl PileTag {
    /// Create a new tag.
    #[must_use]
    pub const fn new(tag: u16) -> Self {
        Self(tag)
    }
}

/// A single heap of tokens.
///
/// `size` is always at least 1. A pile of size 2 or less is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    /// Stable identity for the pile's lifetime.
    pub id: PileId,

    /// Number of tokens.
    pub size: u32,

    /// Presentation category, inherited on split.
    pub tag: PileTag,
}

impl Pile {
    /// Create a new pile.
    #[must_use]
    pub fn new(id: PileId, size: u32, tag: PileTag) -> Self {
        debug_assert!(size >= 1, "pile size must be positive");
        Self { id, size, tag }
    }

    /// Can this pile be split into two unequal non-empty piles?
    #[must_use]
    pub fn can_split(&self) -> bool {
        rules::can_split(self.size)
    }

    /// Sizes produced by splitting at `position`, if that split is legal.
    #[must_use]
    pub fn split_sizes(&self, position: u32) -> Option<(u32, u32)> {
        rules::split_sizes(self.size, position)
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.id, self.size)
    }
}
