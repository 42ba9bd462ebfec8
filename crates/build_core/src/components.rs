//! Identifier types shared by every game-state module.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of player slots in a game.
pub const MAX_PLAYERS: usize = 11;

/// A player slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a player id.
    #[must_use]
    pub const fn new(slot: u8) -> Self {
        Self(slot)
    }

    /// Slot as an index into per-player tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether the slot fits in per-player tables.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.index() < MAX_PLAYERS
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// Unique droid identifier. Ids grow with creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DroidId(pub u32);

impl fmt::Display for DroidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "droid#{}", self.0)
    }
}

/// Unique structure instance identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StructureId(pub u32);

impl fmt::Display for StructureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "structure#{}", self.0)
    }
}

/// Index of an entry in the structure stats catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StructureStatsId(pub usize);

impl fmt::Display for StructureStatsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stats#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_validity() {
        assert!(PlayerId(0).is_valid());
        assert!(PlayerId(10).is_valid());
        assert!(!PlayerId(11).is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(DroidId(7).to_string(), "droid#7");
        assert_eq!(PlayerId(2).to_string(), "player 2");
    }
}
