//! Split legality.
//!
//! Split positions are expressed as the size of the first child. Every
//! unordered split `{i, n - i}` has exactly one canonical position with
//! `1 <= i <= (n - 1) / 2`; the upper bound also excludes the symmetric
//! split of an even pile.

use std::ops::RangeInclusive;

use crate::core::Pile;
use crate::error::MoveError;

/// Can a pile of `size` tokens be split at all?
#[must_use]
pub const fn can_split(size: u32) -> bool {
    size > 2
}

/// Largest canonical split position for a pile of `size` tokens.
///
/// Zero for terminal piles.
#[must_use]
pub const fn max_canonical_position(size: u32) -> u32 {
    size.saturating_sub(1) / 2
}

/// Canonical split positions for a pile of `size` tokens.
///
/// ```
/// use grundy_game::rules::canonical_positions;
///
/// assert_eq!(canonical_positions(7).collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(canonical_positions(6).collect::<Vec<_>>(), vec![1, 2]);
/// assert!(canonical_positions(2).next().is_none());
/// ```
pub fn canonical_positions(size: u32) -> RangeInclusive<u32> {
    1..=max_canonical_position(size)
}

/// Sizes of the two children of splitting `size` at `position`.
///
/// Returns `None` if the split is illegal.
#[must_use]
pub const fn split_sizes(size: u32, position: u32) -> Option<(u32, u32)> {
    if position == 0 || position >= size {
        return None;
    }
    let rest = size - position;
    if rest == position {
        return None;
    }
    Some((position, rest))
}

/// Validate splitting `pile` at `position`, explaining any rejection.
pub fn check_split(pile: &Pile, position: u32) -> Result<(u32, u32), MoveError> {
    if position == 0 || position >= pile.size {
        return Err(MoveError::PositionOutOfRange {
            pile: pile.id,
            size: pile.size,
            position,
        });
    }
    split_sizes(pile.size, position).ok_or(MoveError::SymmetricSplit {
        pile: pile.id,
        size: pile.size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PileId, PileTag};

    #[test]
    fn test_can_split() {
        assert!(!can_split(0));
        assert!(!can_split(1));
        assert!(!can_split(2));
        assert!(can_split(3));
    }

    #[test]
    fn test_max_canonical_position() {
        assert_eq!(max_canonical_position(0), 0);
        assert_eq!(max_canonical_position(1), 0);
        assert_eq!(max_canonical_position(2), 0);
        assert_eq!(max_canonical_position(3), 1);
        assert_eq!(max_canonical_position(4), 1);
        assert_eq!(max_canonical_position(5), 2);
        assert_eq!(max_canonical_position(10), 4);
    }

    #[test]
    fn test_split_sizes_conserve_tokens() {
        for size in 1..30 {
            for position in 0..=size {
                if let Some((a, b)) = split_sizes(size, position) {
                    assert_eq!(a + b, size);
                    assert_ne!(a, b);
                    assert!(a >= 1 && b >= 1);
                }
            }
        }
    }

    #[test]
    fn test_canonical_positions_cover_every_unordered_split() {
        for size in 0..30u32 {
            let canonical: Vec<_> = canonical_positions(size).collect();
            let legal = (0..=size).filter(|&p| split_sizes(size, p).is_some()).count();
            assert_eq!(canonical.len() * 2, legal);
            assert!(canonical.iter().all(|&p| split_sizes(size, p).is_some()));
        }
    }

    #[test]
    fn test_check_split_reasons() {
        let pile = Pile::new(PileId(1), 4, PileTag::default());

        assert_eq!(check_split(&pile, 1), Ok((1, 3)));
        assert_eq!(check_split(&pile, 3), Ok((3, 1)));
        assert_eq!(
            check_split(&pile, 2),
            Err(MoveError::SymmetricSplit { pile: PileId(1), size: 4 })
        );
        assert_eq!(
            check_split(&pile, 0),
            Err(MoveError::PositionOutOfRange { pile: PileId(1), size: 4, position: 0 })
        );
        assert_eq!(
            check_split(&pile, 4),
            Err(MoveError::PositionOutOfRange { pile: PileId(1), size: 4, position: 4 })
        );
    }
}
