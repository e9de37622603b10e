//! The decision engine.
//!
//! `Computer` only reads piles and proposes a `Split`; the game applies it
//! through the same validated path as a human move.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{GameRng, Pile, Split};
use crate::rules;

use super::grundy::GrundyTable;
use super::stats::DecisionStats;

/// Why a move was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionKind {
    /// The move leaves a nim-sum of 0.
    Winning,
    /// Uniformly random legal move.
    Random,
}

/// A chosen move with its justification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The move to play.
    pub split: Split,

    /// How it was chosen.
    pub kind: DecisionKind,

    /// Nim-sum of the position before the move.
    pub nim_sum: u32,
}

/// Computer player: Grundy table, RNG stream and cheat-mode flag.
#[derive(Clone, Debug)]
pub struct Computer {
    table: GrundyTable,
    rng: GameRng,
    cheat_mode: bool,
    stats: DecisionStats,
}

impl Computer {
    /// Create a computer with a fresh Grundy table.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self::with_table(GrundyTable::new(), rng)
    }

    /// Create a computer around an existing (possibly warm) table.
    #[must_use]
    pub fn with_table(table: GrundyTable, rng: GameRng) -> Self {
        Self {
            table,
            rng,
            cheat_mode: false,
            stats: DecisionStats::new(),
        }
    }

    /// The Grundy table computed so far.
    #[must_use]
    pub fn table(&self) -> &GrundyTable {
        &self.table
    }

    /// Decision counts since creation.
    #[must_use]
    pub fn stats(&self) -> &DecisionStats {
        &self.stats
    }

    /// Enable or disable cheat mode.
    ///
    /// Only affects who starts after a reset, never move choice.
    pub fn set_cheat_mode(&mut self, enabled: bool) {
        self.cheat_mode = enabled;
    }

    /// Is cheat mode on?
    #[must_use]
    pub fn is_cheating(&self) -> bool {
        self.cheat_mode
    }

    // === Position evaluation ===

    /// Grundy value of a single pile of `size` tokens.
    pub fn grundy_value(&mut self, size: u32) -> u32 {
        self.table.value(size)
    }

    /// XOR of the Grundy values of all piles.
    pub fn total_nim_sum<'a, I>(&mut self, piles: I) -> u32
    where
        I: IntoIterator<Item = &'a Pile>,
    {
        piles
            .into_iter()
            .fold(0, |acc, pile| acc ^ self.table.value(pile.size))
    }

    /// Can the player to move force a win?
    pub fn can_win<'a, I>(&mut self, piles: I) -> bool
    where
        I: IntoIterator<Item = &'a Pile>,
    {
        self.total_nim_sum(piles) != 0
    }

    // === Move selection ===

    /// Best move for the player to move, or `None` if nothing can be split.
    pub fn think<'a, I>(&mut self, piles: I) -> Option<Split>
    where
        I: IntoIterator<Item = &'a Pile>,
    {
        self.decide(piles).map(|d| d.split)
    }

    /// Like [`think`](Self::think), reporting why the move was chosen.
    pub fn decide<'a, I>(&mut self, piles: I) -> Option<Decision>
    where
        I: IntoIterator<Item = &'a Pile>,
    {
        let piles: SmallVec<[&Pile; 8]> = piles.into_iter().collect();
        let nim_sum = self.total_nim_sum(piles.iter().copied());

        if nim_sum == 0 {
            debug!("No winning move (nim-sum 0), playing randomly");
            return self.random_decision(&piles, nim_sum);
        }

        if let Some(split) = self.find_winning_split(&piles, nim_sum) {
            debug!(pile = %split.pile, position = split.position, nim_sum, "Winning move found");
            self.stats.winning_moves += 1;
            return Some(Decision {
                split,
                kind: DecisionKind::Winning,
                nim_sum,
            });
        }

        warn!(nim_sum, "No zeroing split despite non-zero nim-sum, playing randomly");
        self.random_decision(&piles, nim_sum)
    }

    /// A uniformly random legal move, or `None` if nothing can be split.
    ///
    /// Picks a splittable pile uniformly, then a canonical position in
    /// `1..=max(1, (size - 1) / 2)` uniformly.
    pub fn think_random<'a, I>(&mut self, piles: I) -> Option<Split>
    where
        I: IntoIterator<Item = &'a Pile>,
    {
        let piles: SmallVec<[&Pile; 8]> = piles.into_iter().collect();
        let nim_sum = self.total_nim_sum(piles.iter().copied());
        self.random_decision(&piles, nim_sum).map(|d| d.split)
    }

    /// First split, in pile order then position order, that zeroes the
    /// nim-sum.
    fn find_winning_split(&mut self, piles: &[&Pile], nim_sum: u32) -> Option<Split> {
        for pile in piles.iter().filter(|p| p.can_split()) {
            let base = nim_sum ^ self.table.value(pile.size);
            for position in rules::canonical_positions(pile.size) {
                if base ^ self.table.split_value(pile.size, position) == 0 {
                    return Some(Split::new(pile.id, position));
                }
            }
        }
        None
    }

    fn random_decision(&mut self, piles: &[&Pile], nim_sum: u32) -> Option<Decision> {
        let splittable: SmallVec<[&Pile; 8]> =
            piles.iter().copied().filter(|p| p.can_split()).collect();

        let Some(pile) = self.rng.pick(&splittable).copied() else {
            debug!("No splittable piles remain");
            self.stats.no_moves += 1;
            return None;
        };

        let position = self.rng.split_position(rules::max_canonical_position(pile.size));
        debug!(
            pile = %pile.id,
            first = position,
            second = pile.size - position,
            "Random move"
        );

        self.stats.random_moves += 1;
        Some(Decision {
            split: Split::new(pile.id, position),
            kind: DecisionKind::Random,
            nim_sum,
        })
    }
}
