//! Owner of the current round.
//!
//! `SessionController` holds the one live [`Session`] and the picker used to
//! deal rounds. Each operation computes a new snapshot through the
//! transition functions on `Session` and stores it only when the
//! transition succeeds; a refused transition leaves the stored snapshot as
//! it was.

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::{GameError, GameResult};
use crate::picker::IndexPicker;
use crate::player::PlayerId;
use crate::session::{Phase, Session};

/// Holds the current session snapshot and applies transitions to it.
#[derive(Debug)]
pub struct SessionController<P> {
    session: Session,
    picker: P,
}

impl<P: IndexPicker> SessionController<P> {
    /// Create a controller in SETUP.
    pub fn new(picker: P) -> Self {
        Self {
            session: Session::new(),
            picker,
        }
    }

    /// The current snapshot.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Deal a round from SETUP.
    pub fn start<S: AsRef<str>>(
        &mut self,
        names: &[S],
        catalog: &Catalog,
    ) -> GameResult<&Session> {
        if self.session.phase() != Phase::Setup {
            return Err(self.refuse(
                "start",
                GameError::WrongPhase {
                    expected: Phase::Setup,
                    actual: self.session.phase(),
                },
            ));
        }

        match Session::start(names, catalog.categories(), &mut self.picker) {
            Ok(next) => {
                debug!(
                    players = next.players().len(),
                    category = %next.category().map(|c| c.id.to_string()).unwrap_or_default(),
                    "round dealt"
                );
                Ok(self.replace(next))
            }
            Err(e) => Err(self.refuse("start", e)),
        }
    }

    /// Mark a player as having viewed their secret.
    pub fn mark_viewed(&mut self, player_id: PlayerId) -> GameResult<&Session> {
        match self.session.mark_viewed(player_id) {
            Ok(next) => {
                debug!(
                    player = %player_id,
                    viewed = next.viewed_count(),
                    total = next.players().len(),
                    "secret viewed"
                );
                Ok(self.replace(next))
            }
            Err(e) => Err(self.refuse("mark_viewed", e)),
        }
    }

    /// Start the questioning once everyone has viewed.
    pub fn begin(&mut self) -> GameResult<&Session> {
        match self.session.begin() {
            Ok(next) => {
                debug!(players = next.players().len(), "round begun");
                Ok(self.replace(next))
            }
            Err(e) => Err(self.refuse("begin", e)),
        }
    }

    /// Discard the round and return to SETUP.
    pub fn reset(&mut self) -> &Session {
        debug!(from = %self.session.phase(), "session reset");
        let next = self.session.reset();
        self.replace(next)
    }

    fn replace(&mut self, next: Session) -> &Session {
        self.session = next;
        &self.session
    }

    fn refuse(&self, op: &str, err: GameError) -> GameError {
        warn!(op, phase = %self.session.phase(), error = %err, "transition refused");
        err
    }
}
