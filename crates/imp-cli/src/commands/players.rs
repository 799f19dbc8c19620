use std::path::Path;

use colored::Colorize;
use imp_core::GameConfig;

use super::{load_roster, save_roster};

pub fn list(path: &Path, config: &GameConfig) -> Result<(), String> {
    let roster = load_roster(path, config)?;

    if roster.is_empty() {
        println!("  No players saved.");
        return Ok(());
    }

    for (i, name) in roster.names().iter().enumerate() {
        println!("  {}. {name}", i + 1);
    }
    println!();
    println!("  {} players", roster.len());

    let missing = roster.missing_players();
    if missing > 0 {
        println!(
            "  {}",
            format!(
                "Need {missing} more player{} to start.",
                if missing == 1 { "" } else { "s" }
            )
            .yellow()
        );
    }

    Ok(())
}

pub fn add(path: &Path, config: &GameConfig, name: &str) -> Result<(), String> {
    let mut roster = load_roster(path, config)?;
    roster.add(name).map_err(|e| e.to_string())?;
    save_roster(path, &roster)?;
    println!("  {} {}", "Added".green().bold(), name.trim());
    Ok(())
}

pub fn remove(path: &Path, config: &GameConfig, number: usize) -> Result<(), String> {
    if number == 0 {
        return Err("player numbers start at 1".into());
    }
    let mut roster = load_roster(path, config)?;
    let removed = roster.remove(number - 1).map_err(|e| e.to_string())?;
    save_roster(path, &roster)?;
    println!("  {} {removed}", "Removed".green().bold());
    Ok(())
}

pub fn clear(path: &Path, config: &GameConfig) -> Result<(), String> {
    let mut roster = load_roster(path, config)?;
    roster.clear();
    save_roster(path, &roster)?;
    println!("  Player list cleared.");
    Ok(())
}
