//! The category catalog.
//!
//! A [`Catalog`] is an ordered list of categories. Sessions read it once at
//! start and copy the chosen category, so editing a catalog never changes a
//! round already in progress.

use serde::{Deserialize, Serialize};

use crate::builtin::BUILTIN_CATEGORIES;
use crate::category::{Category, CategoryId};
use crate::error::{GameError, GameResult};

/// Name given to freshly added categories.
pub const NEW_CATEGORY_NAME: &str = "NEW CATEGORY";

/// Ordered collection of word categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog from categories in display order.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The categories shipped with the game, all enabled.
    pub fn builtin() -> Self {
        let categories = BUILTIN_CATEGORIES
            .iter()
            .map(|(id, name, words)| Category::new(*id, *name, words.iter().copied()))
            .collect();
        Self { categories }
    }

    /// Parse a catalog from its JSON export.
    pub fn from_json(json: &str) -> GameResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON, suitable for sharing and re-importing.
    pub fn to_json(&self) -> GameResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All categories in order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id.
    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Categories currently taking part in selection.
    pub fn enabled(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.enabled)
    }

    /// Number of enabled categories.
    pub fn enabled_count(&self) -> usize {
        self.enabled().count()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Flip a category's enabled flag. Returns the new state.
    pub fn toggle(&mut self, id: &CategoryId) -> GameResult<bool> {
        let cat = self.get_mut(id)?;
        cat.enabled = !cat.enabled;
        Ok(cat.enabled)
    }

    /// Set a category's enabled flag.
    pub fn set_enabled(&mut self, id: &CategoryId, enabled: bool) -> GameResult<()> {
        self.get_mut(id)?.enabled = enabled;
        Ok(())
    }

    /// Append an empty, enabled category and return its id.
    pub fn add_category(&mut self) -> CategoryId {
        let id = CategoryId::generate();
        self.categories
            .push(Category::new(id.clone(), NEW_CATEGORY_NAME, Vec::<String>::new()));
        id
    }

    /// Remove a category. Returns the removed category.
    pub fn remove_category(&mut self, id: &CategoryId) -> GameResult<Category> {
        let index = self
            .categories
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| GameError::CategoryNotFound(id.clone()))?;
        Ok(self.categories.remove(index))
    }

    /// Rename a category.
    pub fn rename(&mut self, id: &CategoryId, name: impl Into<String>) -> GameResult<()> {
        self.get_mut(id)?.name = name.into();
        Ok(())
    }

    /// Append one word. Blank words are rejected.
    pub fn add_word(&mut self, id: &CategoryId, word: &str) -> GameResult<()> {
        let word = word.trim();
        if word.is_empty() {
            return Err(GameError::BlankName);
        }
        self.get_mut(id)?.words.push(word.to_string());
        Ok(())
    }

    /// Append every non-blank entry of a comma separated list.
    ///
    /// Returns the number of words added.
    pub fn bulk_add(&mut self, id: &CategoryId, text: &str) -> GameResult<usize> {
        let cat = self.get_mut(id)?;
        let before = cat.words.len();
        cat.words.extend(
            text.split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(String::from),
        );
        Ok(cat.words.len() - before)
    }

    /// Replace the word at `index`.
    pub fn update_word(&mut self, id: &CategoryId, index: usize, word: &str) -> GameResult<()> {
        let cat = self.get_mut(id)?;
        let len = cat.words.len();
        let slot = cat
            .words
            .get_mut(index)
            .ok_or(GameError::WordIndexOutOfRange { index, len })?;
        *slot = word.to_string();
        Ok(())
    }

    /// Remove the word at `index`. Returns the removed word.
    pub fn remove_word(&mut self, id: &CategoryId, index: usize) -> GameResult<String> {
        let cat = self.get_mut(id)?;
        let len = cat.words.len();
        if index >= len {
            return Err(GameError::WordIndexOutOfRange { index, len });
        }
        Ok(cat.words.remove(index))
    }

    fn get_mut(&mut self, id: &CategoryId) -> GameResult<&mut Category> {
        self.categories
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| GameError::CategoryNotFound(id.clone()))
    }
}

impl AsRef<[Category]> for Catalog {
    fn as_ref(&self) -> &[Category] {
        &self.categories
    }
}
