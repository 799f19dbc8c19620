//! Configuration for a game table.

/// Configuration for a game table.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible draws. `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Players required before the setup screen allows a start.
    pub min_players: usize,
    /// Players the roster accepts at most.
    pub max_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_players: 3,
            max_players: 12,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the minimum player count (at least 1).
    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min.max(1);
        self.max_players = self.max_players.max(self.min_players);
        self
    }

    /// Set the maximum player count (never below the minimum).
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max.max(self.min_players);
        self
    }
}
