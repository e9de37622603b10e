//! Move representation: a split request and its recorded outcome.
//!
//! A `Split` names a pile and a split position; it is what both the human
//! input layer and the computer produce. Once applied, the engine records a
//! `MoveRecord` describing the parent pile and the two children.

use serde::{Deserialize, Serialize};

use super::pile::{Pile, PileId};
use super::player::PlayerId;

/// A requested split: cut `pile` so that the first child has `position`
/// tokens and the second the remainder.
///
/// ```
/// use grundy_game::core::{PileId, Split};
///
/// let split = Split::new(PileId(3), 2);
/// assert_eq!(split.pile, PileId(3));
/// assert_eq!(split.position, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Split {
    /// The pile to split.
    pub pile: PileId,

    /// Size of the first child.
    pub position: u32,
}

impl Split {
    /// Create a split request.
    #[must_use]
    pub const fn new(pile: PileId, position: u32) -> Self {
        Self { pile, position }
    }
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "split {} at {}", self.pile, self.position)
    }
}

/// An applied split, kept in the move history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who made the move.
    pub mover: PlayerId,

    /// Move number since the last reset (starts at 1).
    pub turn: u32,

    /// The pile that was split (no longer active).
    pub parent: Pile,

    /// Child holding `position` tokens.
    pub first: Pile,

    /// Child holding the remainder.
    pub second: Pile,
}

impl MoveRecord {
    /// The split request that produced this record.
    #[must_use]
    pub fn split(&self) -> Split {
        Split::new(self.parent.id, self.first.size)
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} split a pile of {} into {} and {}",
            self.mover, self.parent.size, self.first.size, self.second.size
        )
    }
}
