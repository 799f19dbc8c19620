//! Round snapshots and the transitions between them.
//!
//! A [`Session`] is an immutable record of one round. Every transition takes
//! the current snapshot by reference and returns a fresh one, leaving the
//! input untouched:
//!
//! ```text
//! SETUP --start--> REVEAL --begin--> ACTION
//!   ^                 |                 |
//!   +------reset------+------reset------+
//! ```
//!
//! Whenever the phase is not SETUP, exactly one player is the imposter,
//! exactly one player goes first (possibly the same player), and the word
//! belongs to the chosen category.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{GameError, GameResult};
use crate::picker::IndexPicker;
use crate::player::{Player, PlayerId};

/// Stage of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Roster and categories are being prepared. No round exists.
    #[default]
    Setup,
    /// Players take turns privately viewing their secret.
    Reveal,
    /// Everyone has viewed; the questioning is under way.
    Action,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup => write!(f, "SETUP"),
            Self::Reveal => write!(f, "REVEAL"),
            Self::Action => write!(f, "ACTION"),
        }
    }
}

/// What a single player is shown during the reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Secret {
    /// The imposter only learns the category.
    Imposter {
        /// Category name.
        category: String,
    },
    /// Everyone else learns the category and the word.
    Word {
        /// Category name.
        category: String,
        /// The secret word.
        word: String,
    },
}

impl Secret {
    /// Whether this is the imposter's view.
    pub fn is_imposter(&self) -> bool {
        matches!(self, Self::Imposter { .. })
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imposter { category } => {
                write!(f, "You are the IMPOSTER. Category: {category}")
            }
            Self::Word { category, word } => {
                write!(f, "Category: {category}. Secret word: {word}")
            }
        }
    }
}

/// Snapshot of a round.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    players: Vec<Player>,
    category: Option<Category>,
    word: Option<String>,
    phase: Phase,
}

impl Session {
    /// The empty SETUP snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal a new round.
    ///
    /// Draws, in order: a category among the enabled ones, a word from that
    /// category, the imposter, and the first player. Players keep the order
    /// of `names`. The chosen category is copied into the session, so later
    /// catalog edits do not reach it.
    pub fn start<S, P>(names: &[S], categories: &[Category], picker: &mut P) -> GameResult<Self>
    where
        S: AsRef<str>,
        P: IndexPicker + ?Sized,
    {
        if names.is_empty() {
            return Err(GameError::InsufficientPlayers);
        }

        let enabled: Vec<&Category> = categories.iter().filter(|c| c.enabled).collect();
        if enabled.is_empty() {
            return Err(GameError::NoEnabledCategories);
        }

        let category = enabled[pick(picker, enabled.len())];
        if category.words.is_empty() {
            return Err(GameError::EmptyCategoryWordList {
                category: category.name.clone(),
            });
        }
        let word = category.words[pick(picker, category.words.len())].clone();

        let mut players: Vec<Player> = names.iter().map(|n| Player::new(n.as_ref())).collect();
        let imposter = pick(picker, players.len());
        players[imposter].is_imposter = true;
        let first = pick(picker, players.len());
        players[first].is_first_player = true;

        Ok(Self {
            players,
            category: Some(category.clone()),
            word: Some(word),
            phase: Phase::Reveal,
        })
    }

    /// Record that `player_id` has looked at their secret.
    ///
    /// Marking a player twice yields an equal snapshot.
    pub fn mark_viewed(&self, player_id: PlayerId) -> GameResult<Self> {
        self.expect_phase(Phase::Reveal)?;
        let index = self.index_of(player_id)?;

        let mut next = self.clone();
        next.players[index].has_viewed = true;
        Ok(next)
    }

    /// Move from REVEAL to ACTION once every player has viewed.
    pub fn begin(&self) -> GameResult<Self> {
        self.expect_phase(Phase::Reveal)?;
        if !self.all_viewed() {
            return Err(GameError::RevealIncomplete {
                viewed: self.viewed_count(),
                total: self.players.len(),
            });
        }

        let mut next = self.clone();
        next.phase = Phase::Action;
        Ok(next)
    }

    /// Discard the round. Allowed from any phase.
    pub fn reset(&self) -> Self {
        Self::new()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Players in roster order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The chosen category, absent in SETUP.
    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    /// The secret word, absent in SETUP.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Look up a player by id.
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// The imposter, if a round is in progress.
    pub fn imposter(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_imposter)
    }

    /// The player who opens the questioning, if a round is in progress.
    pub fn first_player(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_first_player)
    }

    /// Number of players who have viewed their secret.
    pub fn viewed_count(&self) -> usize {
        self.players.iter().filter(|p| p.has_viewed).count()
    }

    /// Whether every player has viewed. False when there are no players.
    pub fn all_viewed(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(|p| p.has_viewed)
    }

    /// The secret shown to `player_id` during the reveal.
    pub fn secret_for(&self, player_id: PlayerId) -> GameResult<Secret> {
        self.expect_phase(Phase::Reveal)?;
        let player = self
            .player(player_id)
            .ok_or(GameError::PlayerNotFound(player_id))?;

        let (Some(category), Some(word)) = (&self.category, &self.word) else {
            return Err(GameError::WrongPhase {
                expected: Phase::Reveal,
                actual: Phase::Setup,
            });
        };

        if player.is_imposter {
            Ok(Secret::Imposter {
                category: category.name.clone(),
            })
        } else {
            Ok(Secret::Word {
                category: category.name.clone(),
                word: word.clone(),
            })
        }
    }

    fn expect_phase(&self, expected: Phase) -> GameResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn index_of(&self, player_id: PlayerId) -> GameResult<usize> {
        self.players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(GameError::PlayerNotFound(player_id))
    }
}

/// Draw an index, clamping misbehaving pickers into range.
fn pick<P: IndexPicker + ?Sized>(picker: &mut P, count: usize) -> usize {
    picker.pick_index(count).min(count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::{RandomPicker, ScriptedPicker};

    fn animals() -> Vec<Category> {
        vec![Category::new("c1", "Animals", ["Dog", "Cat"])]
    }

    fn names() -> Vec<String> {
        vec!["Ann".into(), "Bo".into(), "Cy".into()]
    }

    /// Ann, Bo, Cy with word "Cat", Cy as imposter, Ann first.
    fn dealt() -> Session {
        let mut picker = ScriptedPicker::new([0, 1, 2, 0]);
        Session::start(&names(), &animals(), &mut picker).unwrap()
    }

    fn id_of(session: &Session, name: &str) -> PlayerId {
        session
            .players()
            .iter()
            .find(|p| p.name == name)
            .unwrap()
            .id
    }

    #[test]
    fn new_session_is_setup() {
        let s = Session::new();
        assert_eq!(s.phase(), Phase::Setup);
        assert!(s.players().is_empty());
        assert!(s.category().is_none());
        assert!(s.word().is_none());
    }

    #[test]
    fn start_with_scripted_draws() {
        let s = dealt();
        assert_eq!(s.phase(), Phase::Reveal);
        assert_eq!(s.category().unwrap().id.0, "c1");
        assert_eq!(s.word(), Some("Cat"));
        assert_eq!(s.imposter().unwrap().name, "Cy");
        assert_eq!(s.first_player().unwrap().name, "Ann");
        let order: Vec<_> = s.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(order, ["Ann", "Bo", "Cy"]);
        assert_eq!(s.viewed_count(), 0);
    }

    #[test]
    fn start_consumes_four_draws() {
        let mut picker = ScriptedPicker::new([0, 0, 0, 0]);
        Session::start(&names(), &animals(), &mut picker).unwrap();
        assert_eq!(picker.draws_taken(), 4);
    }

    #[test]
    fn imposter_and_first_player_may_coincide() {
        let mut picker = ScriptedPicker::new([0, 0, 1, 1]);
        let s = Session::start(&names(), &animals(), &mut picker).unwrap();
        let bo = s.player(id_of(&s, "Bo")).unwrap();
        assert!(bo.is_imposter);
        assert!(bo.is_first_player);
    }

    #[test]
    fn start_without_players_fails() {
        let mut picker = ScriptedPicker::default();
        let empty: Vec<String> = Vec::new();
        let err = Session::start(&empty, &animals(), &mut picker).unwrap_err();
        assert!(matches!(err, GameError::InsufficientPlayers));
        assert_eq!(picker.draws_taken(), 0);
    }

    #[test]
    fn start_with_all_disabled_fails() {
        let cats = vec![
            Category::new("c1", "Animals", ["Dog"]).with_enabled(false),
            Category::new("c2", "Places", ["Rome"]).with_enabled(false),
        ];
        let err = Session::start(&names(), &cats, &mut ScriptedPicker::default()).unwrap_err();
        assert!(matches!(err, GameError::NoEnabledCategories));
    }

    #[test]
    fn start_with_empty_catalog_fails() {
        let err = Session::start(&names(), &[], &mut ScriptedPicker::default()).unwrap_err();
        assert!(matches!(err, GameError::NoEnabledCategories));
    }

    #[test]
    fn start_on_empty_word_list_fails() {
        let cats = vec![
            Category::new("c1", "Animals", ["Dog"]),
            Category::new("c2", "Empty", Vec::<String>::new()),
        ];
        let mut picker = ScriptedPicker::new([1]);
        let err = Session::start(&names(), &cats, &mut picker).unwrap_err();
        match err {
            GameError::EmptyCategoryWordList { category } => assert_eq!(category, "Empty"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn start_skips_disabled_categories() {
        let cats = vec![
            Category::new("c1", "Animals", ["Dog"]).with_enabled(false),
            Category::new("c2", "Places", ["Rome"]),
        ];
        let s = Session::start(&names(), &cats, &mut ScriptedPicker::new([0])).unwrap();
        assert_eq!(s.category().unwrap().name, "Places");
        assert_eq!(s.word(), Some("Rome"));
    }

    #[test]
    fn single_player_round() {
        let s = Session::start(&["Solo"], &animals(), &mut RandomPicker::from_seed(1)).unwrap();
        let only = &s.players()[0];
        assert!(only.is_imposter);
        assert!(only.is_first_player);
    }

    #[test]
    fn session_keeps_category_snapshot() {
        let mut cats = animals();
        let s = Session::start(&names(), &cats, &mut ScriptedPicker::new([0, 1])).unwrap();
        cats[0].words.clear();
        cats[0].name = "Renamed".into();
        assert_eq!(s.category().unwrap().name, "Animals");
        assert!(s.category().unwrap().contains(s.word().unwrap()));
    }

    #[test]
    fn mark_viewed_sets_flag_on_new_snapshot() {
        let s = dealt();
        let ann = id_of(&s, "Ann");
        let next = s.mark_viewed(ann).unwrap();
        assert!(next.player(ann).unwrap().has_viewed);
        assert!(!s.player(ann).unwrap().has_viewed);
        assert_eq!(next.viewed_count(), 1);
    }

    #[test]
    fn mark_viewed_is_idempotent() {
        let s = dealt();
        let bo = id_of(&s, "Bo");
        let once = s.mark_viewed(bo).unwrap();
        let twice = once.mark_viewed(bo).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn mark_viewed_unknown_player() {
        let s = dealt();
        let stranger = PlayerId::new();
        let err = s.mark_viewed(stranger).unwrap_err();
        assert!(matches!(err, GameError::PlayerNotFound(id) if id == stranger));
    }

    #[test]
    fn mark_viewed_outside_reveal() {
        let err = Session::new().mark_viewed(PlayerId::new()).unwrap_err();
        assert!(matches!(
            err,
            GameError::WrongPhase {
                expected: Phase::Reveal,
                actual: Phase::Setup
            }
        ));
    }

    #[test]
    fn begin_refused_until_everyone_viewed() {
        let s = dealt();
        let s = s.mark_viewed(id_of(&s, "Ann")).unwrap();
        let s = s.mark_viewed(id_of(&s, "Bo")).unwrap();

        let err = s.begin().unwrap_err();
        assert!(matches!(
            err,
            GameError::RevealIncomplete {
                viewed: 2,
                total: 3
            }
        ));
        assert_eq!(s.phase(), Phase::Reveal);
    }

    #[test]
    fn begin_after_full_reveal() {
        let s = dealt();
        let s = s.mark_viewed(id_of(&s, "Ann")).unwrap();
        let s = s.mark_viewed(id_of(&s, "Bo")).unwrap();
        let s = s.mark_viewed(id_of(&s, "Cy")).unwrap();

        let action = s.begin().unwrap();
        assert_eq!(action.phase(), Phase::Action);
        assert_eq!(action.first_player().unwrap().name, "Ann");
        assert_eq!(action.players(), s.players());
        assert_eq!(action.word(), s.word());
    }

    #[test]
    fn begin_outside_reveal() {
        assert!(matches!(
            Session::new().begin().unwrap_err(),
            GameError::WrongPhase { .. }
        ));
    }

    #[test]
    fn reset_from_every_phase() {
        let reveal = dealt();
        let mut action = reveal.clone();
        for p in reveal.players() {
            action = action.mark_viewed(p.id).unwrap();
        }
        let action = action.begin().unwrap();

        for s in [Session::new(), reveal, action] {
            let r = s.reset();
            assert_eq!(r.phase(), Phase::Setup);
            assert!(r.players().is_empty());
            assert!(r.category().is_none());
            assert!(r.word().is_none());
        }
    }

    #[test]
    fn secret_for_crew_and_imposter() {
        let s = dealt();
        let crew = s.secret_for(id_of(&s, "Ann")).unwrap();
        assert_eq!(
            crew,
            Secret::Word {
                category: "Animals".into(),
                word: "Cat".into()
            }
        );

        let imp = s.secret_for(id_of(&s, "Cy")).unwrap();
        assert_eq!(
            imp,
            Secret::Imposter {
                category: "Animals".into()
            }
        );
        assert!(imp.is_imposter());
        let shown = imp.to_string();
        assert!(shown.contains("Animals"));
        assert!(!shown.contains("Secret word"));
        assert!(!shown.ends_with("Cat"));
    }

    #[test]
    fn secret_for_requires_reveal() {
        assert!(matches!(
            Session::new().secret_for(PlayerId::new()).unwrap_err(),
            GameError::WrongPhase { .. }
        ));
    }

    #[test]
    fn phase_display() {
        assert_eq!(Phase::Setup.to_string(), "SETUP");
        assert_eq!(Phase::Reveal.to_string(), "REVEAL");
        assert_eq!(Phase::Action.to_string(), "ACTION");
    }

    #[test]
    fn serde_roundtrip() {
        let s = dealt();
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"REVEAL\""));
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
