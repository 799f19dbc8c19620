//! Error types for the game core.

use thiserror::Error;

use crate::category::CategoryId;
use crate::player::PlayerId;
use crate::session::Phase;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised when a transition or edit is refused.
///
/// None of these are transient: the caller recovers by fixing its input or
/// by resetting the session.
#[derive(Debug, Error)]
pub enum GameError {
    /// A session needs at least one player to assign roles.
    #[error("not enough players to start a round")]
    InsufficientPlayers,

    /// Every category in the catalog is disabled.
    #[error("no enabled categories")]
    NoEnabledCategories,

    /// The selected category has nothing to draw a word from.
    #[error("category \"{category}\" has no words")]
    EmptyCategoryWordList {
        /// Name of the selected category.
        category: String,
    },

    /// No player in the session has this id.
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// Someone has not looked at their secret yet.
    #[error("waiting for players ({viewed}/{total} have viewed)")]
    RevealIncomplete {
        /// Players who have viewed.
        viewed: usize,
        /// Players in the session.
        total: usize,
    },

    /// The operation is not permitted in the current phase.
    #[error("expected {expected} phase, session is in {actual}")]
    WrongPhase {
        /// Phase the operation requires.
        expected: Phase,
        /// Phase the session is actually in.
        actual: Phase,
    },

    /// No category in the catalog has this id.
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// A name or word was empty after trimming.
    #[error("name must not be blank")]
    BlankName,

    /// The roster already holds the maximum number of players.
    #[error("roster is full ({max} players max)")]
    RosterFull {
        /// Configured maximum.
        max: usize,
    },

    /// Roster position does not exist.
    #[error("no player at position {index} (roster has {len})")]
    RosterIndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Roster length.
        len: usize,
    },

    /// Word position does not exist in the category.
    #[error("no word at position {index} (category has {len})")]
    WordIndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Word count.
        len: usize,
    },

    /// A catalog document could not be parsed.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}
