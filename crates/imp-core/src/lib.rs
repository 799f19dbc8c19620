//! Session state machine for the Imposter party game.
//!
//! One device is passed around a table. The core picks a category and a
//! secret word, makes one player the imposter and one player the opener,
//! and tracks who has privately viewed their secret before the questioning
//! may begin. Rendering, input, and storage belong to the caller.
//!
//! ```
//! use imp_core::{Catalog, Category, Phase, ScriptedPicker, SessionController};
//!
//! let catalog = Catalog::new(vec![Category::new("c1", "Animals", ["Dog", "Cat"])]);
//! let mut table = SessionController::new(ScriptedPicker::new([0, 1, 2, 0]));
//!
//! let round = table.start(&["Ann", "Bo", "Cy"], &catalog).unwrap();
//! assert_eq!(round.word(), Some("Cat"));
//! assert_eq!(round.imposter().unwrap().name, "Cy");
//!
//! let ids: Vec<_> = round.players().iter().map(|p| p.id).collect();
//! for id in ids {
//!     table.mark_viewed(id).unwrap();
//! }
//! assert_eq!(table.begin().unwrap().phase(), Phase::Action);
//! ```

mod builtin;
pub mod catalog;
pub mod category;
pub mod config;
pub mod controller;
pub mod error;
pub mod picker;
pub mod player;
pub mod roster;
pub mod session;

pub use catalog::Catalog;
pub use category::{Category, CategoryId};
pub use config::GameConfig;
pub use controller::SessionController;
pub use error::{GameError, GameResult};
pub use picker::{IndexPicker, RandomPicker, ScriptedPicker};
pub use player::{Player, PlayerId};
pub use roster::Roster;
pub use session::{Phase, Secret, Session};
