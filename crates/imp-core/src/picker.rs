//! Uniform index selection.
//!
//! Every random decision in a round goes through [`IndexPicker`], so a
//! session can be replayed exactly by supplying the same draws. A round
//! draws four indices, always in this order: category, word, imposter,
//! first player.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;

/// Source of uniformly distributed indices.
pub trait IndexPicker {
    /// Pick an index in `0..count`. Callers never pass a `count` of zero.
    fn pick_index(&mut self, count: usize) -> usize;
}

impl<P: IndexPicker + ?Sized> IndexPicker for &mut P {
    fn pick_index(&mut self, count: usize) -> usize {
        (**self).pick_index(count)
    }
}

/// Picker backed by a standard RNG.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Deterministic picker seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picker seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded picker when the config carries a seed, entropy otherwise.
    pub fn from_config(config: &GameConfig) -> Self {
        match config.seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl IndexPicker for RandomPicker {
    fn pick_index(&mut self, count: usize) -> usize {
        if count <= 1 {
            return 0;
        }
        self.rng.random_range(0..count)
    }
}

/// Picker that replays a fixed list of draws.
///
/// Each draw is reduced modulo `count`. The script wraps around once
/// exhausted; an empty script always yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    draws: Vec<usize>,
    cursor: usize,
}

impl ScriptedPicker {
    /// Create a picker replaying `draws` in order.
    pub fn new(draws: impl Into<Vec<usize>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws_taken(&self) -> usize {
        self.cursor
    }
}

impl IndexPicker for ScriptedPicker {
    fn pick_index(&mut self, count: usize) -> usize {
        if self.draws.is_empty() || count == 0 {
            self.cursor += 1;
            return 0;
        }
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw % count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_picker_is_reproducible() {
        let mut a = RandomPicker::from_seed(7);
        let mut b = RandomPicker::from_seed(7);
        let xs: Vec<_> = (0..20).map(|_| a.pick_index(10)).collect();
        let ys: Vec<_> = (0..20).map(|_| b.pick_index(10)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn random_picker_stays_in_range() {
        let mut p = RandomPicker::from_seed(42);
        for count in 1..50 {
            assert!(p.pick_index(count) < count);
        }
    }

    #[test]
    fn single_option_is_always_zero() {
        let mut p = RandomPicker::from_entropy();
        assert_eq!(p.pick_index(1), 0);
    }

    #[test]
    fn from_config_uses_seed() {
        let cfg = GameConfig::default().with_seed(99);
        let mut a = RandomPicker::from_config(&cfg);
        let mut b = RandomPicker::from_seed(99);
        assert_eq!(a.pick_index(1000), b.pick_index(1000));
    }

    #[test]
    fn scripted_replays_in_order() {
        let mut p = ScriptedPicker::new([0, 1, 2, 0]);
        assert_eq!(p.pick_index(5), 0);
        assert_eq!(p.pick_index(5), 1);
        assert_eq!(p.pick_index(5), 2);
        assert_eq!(p.pick_index(5), 0);
        assert_eq!(p.draws_taken(), 4);
    }

    #[test]
    fn scripted_reduces_modulo_count() {
        let mut p = ScriptedPicker::new([7]);
        assert_eq!(p.pick_index(3), 1);
    }

    #[test]
    fn scripted_wraps_around() {
        let mut p = ScriptedPicker::new([1, 2]);
        p.pick_index(10);
        p.pick_index(10);
        assert_eq!(p.pick_index(10), 1);
    }

    #[test]
    fn empty_script_yields_zero() {
        let mut p = ScriptedPicker::default();
        assert_eq!(p.pick_index(4), 0);
        assert_eq!(p.draws_taken(), 1);
    }

    #[test]
    fn mutable_reference_delegates() {
        fn draw<P: IndexPicker>(mut picker: P) -> usize {
            picker.pick_index(10)
        }

        let mut p = ScriptedPicker::new([3]);
        assert_eq!(draw(&mut p), 3);
        assert_eq!(p.draws_taken(), 1);
    }
}
