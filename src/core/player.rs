//! Player identification.
//!
//! Grundy's Game is strictly two-player. Player 1 is the human, player 2
//! the computer. Turns alternate after every successful split.

use serde::{Deserialize, Serialize};

/// Player identifier: `1` (human) or `2` (computer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The human player.
    pub const HUMAN: PlayerId = PlayerId(1);

    /// The computer player.
    pub const COMPUTER: PlayerId = PlayerId(2);

    /// Create a player ID from its number.
    ///
    /// Returns `None` for anything other than 1 or 2.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        match number {
            1 | 2 => Some(Self(number)),
            _ => None,
        }
    }

    /// Get the player number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The opponent of this player.
    ///
    /// ```
    /// use grundy_game::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::HUMAN.other(), PlayerId::COMPUTER);
    /// assert_eq!(PlayerId::COMPUTER.other(), PlayerId::HUMAN);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        Self(3 - self.0)
    }

    /// Is this the human player?
    #[must_use]
    pub const fn is_human(self) -> bool {
        self.0 == Self::HUMAN.0
    }

    /// Both players, human first.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::HUMAN, Self::COMPUTER].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number).ok_or_else(|| format!("invalid player number {number}"))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::HUMAN.number(), 1);
        assert_eq!(PlayerId::COMPUTER.number(), 2);
        assert!(PlayerId::HUMAN.is_human());
        assert!(!PlayerId::COMPUTER.is_human());
        assert_eq!(format!("{}", PlayerId::HUMAN), "Player 1");
    }

    #[test]
    fn test_player_id_new() {
        assert_eq!(PlayerId::new(1), Some(PlayerId::HUMAN));
        assert_eq!(PlayerId::new(2), Some(PlayerId::COMPUTER));
        assert_eq!(PlayerId::new(0), None);
        assert_eq!(PlayerId::new(3), None);
    }

    #[test]
    fn test_other_is_involution() {
        for player in PlayerId::all() {
            assert_ne!(player.other(), player);
            assert_eq!(player.other().other(), player);
        }
    }

    #[test]
    fn test_all() {
        let players: Vec<_> = PlayerId::all().collect();
        assert_eq!(players, vec![PlayerId::HUMAN, PlayerId::COMPUTER]);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PlayerId::COMPUTER).unwrap();
        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, PlayerId::COMPUTER);

        assert_eq!(json, "2");
        assert!(serde_json::from_str::<PlayerId>("3").is_err());
    }
}
