//! Memoized Grundy values for single piles.
//!
//! A pile of size `n` is an impartial subgame whose moves are the legal
//! splits `{i, n - i}`. Its Grundy value is the mex of the XOR of the
//! children's values over every canonical split:
//!
//! ```text
//! g(0) = g(1) = 0
//! g(n) = mex { g(i) ^ g(n - i) : 1 <= i <= (n - 1) / 2 }
//! ```
//!
//! Values depend on `n` alone, so the table only ever grows. It is filled
//! bottom-up, which computes the same values as the memoized recursion
//! without the recursion depth.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::rules::canonical_positions;

/// Minimum excludant: the smallest non-negative integer not in `values`.
///
/// ```
/// use grundy_game::ai::mex;
///
/// assert_eq!(mex([]), 0);
/// assert_eq!(mex([0, 1, 3]), 2);
/// assert_eq!(mex([1, 2]), 0);
/// ```
pub fn mex<I>(values: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let values: SmallVec<[u32; 32]> = values.into_iter().collect();

    // The mex of k values is at most k.
    let mut seen: SmallVec<[bool; 32]> = smallvec![false; values.len() + 1];
    for &value in &values {
        if let Some(slot) = seen.get_mut(value as usize) {
            *slot = true;
        }
    }

    let mut m = 0;
    while seen[m] {
        m += 1;
    }
    m as u32
}

/// Grundy value cache indexed by pile size.
///
/// Owned by whoever computes with it; clone it to share a warm table
/// between games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrundyTable {
    values: Vec<u32>,
}

impl Default for GrundyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl GrundyTable {
    /// Create a table seeded with `g(0) = g(1) = 0`.
    #[must_use]
    pub fn new() -> Self {
        Self { values: vec![0, 0] }
    }

    /// Grundy value of a pile of `size` tokens, computing it if needed.
    pub fn value(&mut self, size: u32) -> u32 {
        self.extend_to(size);
        self.values[size as usize]
    }

    /// Grundy value of the pair left by splitting `size` at `position`.
    pub fn split_value(&mut self, size: u32, position: u32) -> u32 {
        debug_assert!(position < size);
        self.value(position) ^ self.value(size - position)
    }

    /// Grundy value if already computed.
    #[must_use]
    pub fn get(&self, size: u32) -> Option<u32> {
        self.values.get(size as usize).copied()
    }

    /// Number of sizes with a known value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: the base cases are present from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn extend_to(&mut self, size: u32) {
        let target = size as usize;
        if target < self.values.len() {
            return;
        }
        self.values.reserve(target + 1 - self.values.len());

        while self.values.len() <= target {
            let n = self.values.len() as u32;
            let values = &self.values;
            let g = mex(canonical_positions(n).map(|i| values[i as usize] ^ values[(n - i) as usize]));
            self.values.push(g);
        }
    }
}
