//! Players taking part in a round.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player within one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Generate a new random player ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A seat at the table for the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Round-scoped identifier.
    pub id: PlayerId,
    /// Name as entered on the roster.
    pub name: String,
    /// Whether this player is the imposter.
    pub is_imposter: bool,
    /// Whether this player has looked at their secret.
    pub has_viewed: bool,
    /// Whether this player opens the questioning.
    pub is_first_player: bool,
}

impl Player {
    /// Create a player with no role and nothing viewed.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            is_imposter: false,
            has_viewed: false,
            is_first_player: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_has_no_role() {
        let p = Player::new("Ann");
        assert_eq!(p.name, "Ann");
        assert!(!p.is_imposter);
        assert!(!p.has_viewed);
        assert!(!p.is_first_player);
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(Player::new("Ann").id, Player::new("Ann").id);
    }

    #[test]
    fn id_display_is_short() {
        assert_eq!(PlayerId::new().to_string().len(), 8);
    }
}
