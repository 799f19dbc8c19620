use std::fs;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use imp_core::{Catalog, CategoryId, GameError};

use super::load_catalog;

pub fn list(source: Option<&Path>) -> Result<(), String> {
    let catalog = load_catalog(source)?;

    if catalog.is_empty() {
        println!("  No categories.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Words", "Enabled"]);

    for cat in catalog.categories() {
        table.add_row(vec![
            cat.id.to_string(),
            cat.name.clone(),
            cat.word_count().to_string(),
            if cat.enabled { "yes" } else { "no" }.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} categories, {} enabled",
        catalog.len(),
        catalog.enabled_count()
    );

    Ok(())
}

pub fn export(source: Option<&Path>, output: Option<&Path>) -> Result<(), String> {
    let catalog = load_catalog(source)?;
    let json = catalog.to_json().map_err(|e| e.to_string())?;

    if let Some(path) = output {
        fs::write(path, &json)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{json}");
    }

    Ok(())
}

pub fn show(source: Option<&Path>, id: &str) -> Result<(), String> {
    let catalog = load_catalog(source)?;
    let id = CategoryId::from(id);
    let cat = catalog
        .get(&id)
        .ok_or_else(|| GameError::CategoryNotFound(id.clone()).to_string())?;

    println!(
        "  {} ({id}, {})",
        cat.name.bold(),
        if cat.enabled { "enabled" } else { "disabled" }
    );
    if cat.words.is_empty() {
        println!("  No words.");
    }
    for (i, word) in cat.words.iter().enumerate() {
        println!("  {}. {word}", i + 1);
    }

    Ok(())
}

/// Apply one edit to the catalog file and write it back.
///
/// Edits need a `--categories` file. When it does not exist yet it is
/// created from the built-in catalog.
fn edit<F>(source: Option<&Path>, apply: F) -> Result<(), String>
where
    F: FnOnce(&mut Catalog) -> Result<String, GameError>,
{
    let path = source.ok_or("editing categories needs --categories <file>")?;
    let mut catalog = if path.exists() {
        load_catalog(Some(path))?
    } else {
        Catalog::builtin()
    };

    let message = apply(&mut catalog).map_err(|e| e.to_string())?;

    let json = catalog.to_json().map_err(|e| e.to_string())?;
    fs::write(path, json).map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
    println!("  {message}");
    Ok(())
}

fn word_index(number: usize) -> Result<usize, String> {
    number
        .checked_sub(1)
        .ok_or_else(|| "word numbers start at 1".to_string())
}

pub fn add(source: Option<&Path>, name: Option<&str>) -> Result<(), String> {
    edit(source, |catalog| {
        let id = catalog.add_category();
        if let Some(name) = name {
            catalog.rename(&id, name)?;
        }
        Ok(format!("{} category {id}", "Added".green().bold()))
    })
}

pub fn remove(source: Option<&Path>, id: &str) -> Result<(), String> {
    edit(source, |catalog| {
        let removed = catalog.remove_category(&CategoryId::from(id))?;
        Ok(format!("{} {}", "Removed".green().bold(), removed.name))
    })
}

pub fn rename(source: Option<&Path>, id: &str, name: &str) -> Result<(), String> {
    edit(source, |catalog| {
        catalog.rename(&CategoryId::from(id), name)?;
        Ok(format!("Renamed {id} to {name}"))
    })
}

pub fn toggle(source: Option<&Path>, id: &str) -> Result<(), String> {
    edit(source, |catalog| {
        let enabled = catalog.toggle(&CategoryId::from(id))?;
        Ok(format!(
            "Category {id} {}",
            if enabled { "enabled" } else { "disabled" }
        ))
    })
}

pub fn add_word(source: Option<&Path>, id: &str, word: &str) -> Result<(), String> {
    edit(source, |catalog| {
        catalog.add_word(&CategoryId::from(id), word)?;
        Ok(format!("{} {}", "Added".green().bold(), word.trim()))
    })
}

pub fn bulk_add(source: Option<&Path>, id: &str, text: &str) -> Result<(), String> {
    edit(source, |catalog| {
        let added = catalog.bulk_add(&CategoryId::from(id), text)?;
        Ok(format!(
            "{} {added} word{}",
            "Added".green().bold(),
            if added == 1 { "" } else { "s" }
        ))
    })
}

pub fn update_word(
    source: Option<&Path>,
    id: &str,
    number: usize,
    word: &str,
) -> Result<(), String> {
    let index = word_index(number)?;
    edit(source, |catalog| {
        catalog.update_word(&CategoryId::from(id), index, word)?;
        Ok(format!("Word {number} is now {word}"))
    })
}

pub fn remove_word(source: Option<&Path>, id: &str, number: usize) -> Result<(), String> {
    let index = word_index(number)?;
    edit(source, |catalog| {
        let removed = catalog.remove_word(&CategoryId::from(id), index)?;
        Ok(format!("{} {removed}", "Removed".green().bold()))
    })
}
