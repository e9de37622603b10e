//! Authoritative game state.
//!
//! ## GameState
//!
//! - Active piles keyed by `PileId`
//! - Player to move and the winner of the last finished game
//! - Move history since the last reset
//! - Pile ID allocator (never rewound, so IDs are not reused)
//!
//! The state is only mutated through `reset` and `apply_split`. A split
//! either removes one pile and inserts two, or changes nothing.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::action::{MoveRecord, Split};
use super::pile::{Pile, PileId, PileTag};
use super::player::PlayerId;
use crate::error::MoveError;
use crate::rules::{self, GameStatus};

/// Read-only view of the active piles, ordered by allocation.
pub type Piles = OrdMap<PileId, Pile>;

/// Complete game state.
///
/// Uses `im` persistent data structures so snapshots are O(1) to clone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Active piles.
    piles: Piles,

    /// Player to move.
    current_player: PlayerId,

    /// Set when a move ends the game.
    last_winner: Option<PlayerId>,

    /// Applied moves since the last reset.
    history: Vector<MoveRecord>,

    /// Next pile ID to allocate.
    next_pile_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create an empty state with the human to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            piles: OrdMap::new(),
            current_player: PlayerId::HUMAN,
            last_winner: None,
            history: Vector::new(),
            next_pile_id: 0,
        }
    }

    /// Create a state holding one pile per size, with `starting` to move.
    ///
    /// Sizes must be positive.
    #[must_use]
    pub fn with_sizes(sizes: &[u32], starting: PlayerId) -> Self {
        let mut state = Self::new();
        state.reset(sizes, starting);
        state
    }

    /// Replace all piles with one fresh pile per size.
    ///
    /// Pile `i` gets tag `i`. Clears history and the last winner. Sizes
    /// must be positive.
    pub fn reset(&mut self, sizes: &[u32], starting: PlayerId) {
        self.piles.clear();
        self.history.clear();
        self.last_winner = None;
        self.current_player = starting;

        for (index, &size) in sizes.iter().enumerate() {
            let tag = PileTag::new(u16::try_from(index).unwrap_or(u16::MAX));
            self.insert_pile(size, tag);
        }
    }

    /// Hand the first move to `player`.
    ///
    /// Only meaningful straight after `reset`, before any move is made.
    pub(crate) fn set_starting_player(&mut self, player: PlayerId) {
        debug_assert!(self.history.is_empty(), "starting player set mid-game");
        self.current_player = player;
    }

    // === Queries ===

    /// The active piles.
    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    /// Look up one active pile.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        self.piles.get(&id)
    }

    /// Sizes of the active piles, in allocation order.
    #[must_use]
    pub fn sizes(&self) -> Vec<u32> {
        self.piles.values().map(|p| p.size).collect()
    }

    /// Total number of tokens on the table.
    #[must_use]
    pub fn total_tokens(&self) -> u64 {
        self.piles.values().map(|p| u64::from(p.size)).sum()
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Winner of the finished game, if the last move ended it.
    #[must_use]
    pub fn last_winner(&self) -> Option<PlayerId> {
        self.last_winner
    }

    /// Moves applied since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Is it the human's turn?
    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.current_player.is_human()
    }

    /// True iff no active pile can be split.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !self.piles.values().any(Pile::can_split)
    }

    /// Current status of the game state machine.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match (self.is_game_over(), self.last_winner) {
            (true, Some(winner)) => GameStatus::Over { winner },
            // A layout with nothing to split: the player to move has already lost.
            (true, None) => GameStatus::Over { winner: self.current_player.other() },
            (false, _) => GameStatus::InProgress,
        }
    }

    /// Every canonical legal split of every splittable pile.
    #[must_use]
    pub fn legal_splits(&self) -> Vec<Split> {
        self.piles
            .values()
            .flat_map(|pile| {
                rules::canonical_positions(pile.size).map(move |position| Split::new(pile.id, position))
            })
            .collect()
    }

    // === Moves ===

    /// Validate a split without applying it.
    pub fn check_move(&self, id: PileId, position: u32) -> Result<(u32, u32), MoveError> {
        let pile = self.pile(id).ok_or(MoveError::UnknownPile(id))?;
        rules::check_split(pile, position)
    }

    /// Is splitting pile `id` at `position` legal?
    #[must_use]
    pub fn is_valid_move(&self, id: PileId, position: u32) -> bool {
        self.check_move(id, position).is_ok()
    }

    /// Apply a split for the player to move.
    ///
    /// On success the parent pile is replaced by two children inheriting its
    /// tag, the turn passes to the other player, and, if nothing is left to
    /// split, the mover is recorded as the winner. On failure nothing changes.
    pub fn apply_split(&mut self, split: Split) -> Result<MoveRecord, MoveError> {
        let (first_size, second_size) = self.check_move(split.pile, split.position)?;
        let parent = self
            .piles
            .remove(&split.pile)
            .ok_or(MoveError::UnknownPile(split.pile))?;

        let first = self.insert_pile(first_size, parent.tag);
        let second = self.insert_pile(second_size, parent.tag);

        let mover = self.current_player;
        self.current_player = mover.other();

        if self.is_game_over() {
            self.last_winner = Some(mover);
        }

        let record = MoveRecord {
            mover,
            turn: self.history.len() as u32 + 1,
            parent,
            first,
            second,
        };
        self.history.push_back(record);
        Ok(record)
    }

    fn insert_pile(&mut self, size: u32, tag: PileTag) -> Pile {
        debug_assert!(size >= 1, "pile size must be positive");
        let pile = Pile::new(PileId(self.next_pile_id), size, tag);
        self.next_pile_id += 1;
        self.piles.insert(pile.id, pile);
        pile
    }
}
