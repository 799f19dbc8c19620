//! Word categories.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a category within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named pool of secret words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Catalog-unique identifier.
    pub id: CategoryId,
    /// Display name, shown to every player including the imposter.
    pub name: String,
    /// Candidate secret words. May be empty while being edited.
    pub words: Vec<String>,
    /// Whether the category takes part in selection.
    pub enabled: bool,
}

impl Category {
    /// Create an enabled category.
    pub fn new<I, S>(id: impl Into<CategoryId>, name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            words: words.into_iter().map(Into::into).collect(),
            enabled: true,
        }
    }

    /// Same category with the enabled flag set to `enabled`.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether `word` is one of this category's words.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}
