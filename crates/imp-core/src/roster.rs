//! The list of names sitting at the table.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};

/// Ordered list of player names, maintained between rounds.
///
/// Serializes as a plain JSON array so callers can persist it however they
/// like. Limits come from [`GameConfig`] and are not serialized; a
/// deserialized roster is checked against the default limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Roster {
    names: Vec<String>,
    limits: Limits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Limits {
    min: usize,
    max: usize,
}

impl Default for Limits {
    fn default() -> Self {
        let cfg = GameConfig::default();
        Self {
            min: cfg.min_players,
            max: cfg.max_players,
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl Roster {
    /// Create an empty roster with the config's player limits.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            names: Vec::new(),
            limits: Limits {
                min: config.min_players,
                max: config.max_players,
            },
        }
    }

    /// Build a roster from saved names, applying the same rules as [`add`].
    ///
    /// [`add`]: Roster::add
    pub fn from_names<I, S>(names: I, config: &GameConfig) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new(config);
        for name in names {
            roster.add(name.as_ref())?;
        }
        Ok(roster)
    }

    /// Add a name at the end. The name is trimmed first.
    pub fn add(&mut self, name: &str) -> GameResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::BlankName);
        }
        if self.names.len() >= self.limits.max {
            return Err(GameError::RosterFull {
                max: self.limits.max,
            });
        }
        self.names.push(name.to_string());
        Ok(())
    }

    /// Remove the name at `index`. Returns the removed name.
    pub fn remove(&mut self, index: usize) -> GameResult<String> {
        if index >= self.names.len() {
            return Err(GameError::RosterIndexOutOfRange {
                index,
                len: self.names.len(),
            });
        }
        Ok(self.names.remove(index))
    }

    /// Remove every name.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Names in seating order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Players still needed before a round can start.
    pub fn missing_players(&self) -> usize {
        self.limits.min.saturating_sub(self.names.len())
    }

    /// Whether the setup screen should offer a start.
    pub fn can_start(&self, catalog: &Catalog) -> bool {
        self.missing_players() == 0 && catalog.enabled_count() > 0
    }
}

impl TryFrom<Vec<String>> for Roster {
    type Error = GameError;

    fn try_from(names: Vec<String>) -> GameResult<Self> {
        Self::from_names(names, &GameConfig::default())
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn roster(names: &[&str]) -> Roster {
        let mut r = Roster::default();
        for n in names {
            r.add(n).unwrap();
        }
        r
    }

    #[test]
    fn add_trims_names() {
        let r = roster(&["  Ann ", "Bo"]);
        assert_eq!(r.names(), ["Ann", "Bo"]);
    }

    #[test]
    fn blank_name_rejected() {
        let mut r = Roster::default();
        assert!(matches!(r.add("   "), Err(GameError::BlankName)));
        assert!(r.is_empty());
    }

    #[test]
    fn roster_caps_at_max() {
        let cfg = GameConfig::default().with_max_players(3);
        let mut r = Roster::new(&cfg);
        for n in ["A", "B", "C"] {
            r.add(n).unwrap();
        }
        assert!(matches!(r.add("D"), Err(GameError::RosterFull { max: 3 })));
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn remove_by_index() {
        let mut r = roster(&["Ann", "Bo", "Cy"]);
        assert_eq!(r.remove(1).unwrap(), "Bo");
        assert_eq!(r.names(), ["Ann", "Cy"]);
        assert!(matches!(
            r.remove(2),
            Err(GameError::RosterIndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn clear_empties() {
        let mut r = roster(&["Ann"]);
        r.clear();
        assert!(r.is_empty());
    }

    #[test]
    fn can_start_needs_players_and_categories() {
        let catalog = Catalog::new(vec![Category::new("c1", "Animals", ["Dog"])]);
        let r = roster(&["Ann", "Bo"]);
        assert_eq!(r.missing_players(), 1);
        assert!(!r.can_start(&catalog));

        let r = roster(&["Ann", "Bo", "Cy"]);
        assert!(r.can_start(&catalog));

        let disabled = Catalog::new(vec![
            Category::new("c1", "Animals", ["Dog"]).with_enabled(false),
        ]);
        assert!(!r.can_start(&disabled));
    }

    #[test]
    fn serializes_as_array() {
        let r = roster(&["Ann", "Bo"]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"["Ann","Bo"]"#);

        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(back.names(), r.names());
    }

    #[test]
    fn saved_names_follow_add_rules() {
        let cfg = GameConfig::default().with_max_players(3);
        let r = Roster::from_names([" Ann ", "Bo"], &cfg).unwrap();
        assert_eq!(r.names(), ["Ann", "Bo"]);

        assert!(matches!(
            Roster::from_names(["", "   ", "A", "B", "C"], &cfg),
            Err(GameError::BlankName)
        ));
        assert!(matches!(
            Roster::from_names(["A", "B", "C", "D"], &cfg),
            Err(GameError::RosterFull { max: 3 })
        ));
    }

    #[test]
    fn deserializing_rejects_invalid_names() {
        assert!(serde_json::from_str::<Roster>(r#"["Ann", "  "]"#).is_err());

        let thirteen: Vec<String> = (0..13).map(|i| format!("P{i}")).collect();
        let json = serde_json::to_string(&thirteen).unwrap();
        let err = serde_json::from_str::<Roster>(&json).unwrap_err();
        assert!(err.to_string().contains("roster is full"));

        let r: Roster = serde_json::from_str(r#"[" Ann "]"#).unwrap();
        assert_eq!(r.names(), ["Ann"]);
    }
}
