pub mod categories;
pub mod play;
pub mod players;

use std::path::Path;

use imp_core::{Catalog, GameConfig, Roster};

/// Load the saved roster. A missing file is an empty roster.
fn load_roster(path: &Path, config: &GameConfig) -> Result<Roster, String> {
    if !path.exists() {
        return Ok(Roster::new(config));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let names: Vec<String> = serde_json::from_str(&content)
        .map_err(|e| format!("cannot parse player list {}: {e}", path.display()))?;
    Roster::from_names(names, config)
        .map_err(|e| format!("invalid player list {}: {e}", path.display()))
}

/// Write the roster back as a JSON array of names.
fn save_roster(path: &Path, roster: &Roster) -> Result<(), String> {
    let json = serde_json::to_string(roster).map_err(|e| format!("cannot encode players: {e}"))?;
    std::fs::write(path, json).map_err(|e| format!("cannot write to {}: {e}", path.display()))
}

/// Load a catalog from a JSON export, or the built-in one.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    Catalog::from_json(&content).map_err(|e| format!("{}: {e}", path.display()))
}
