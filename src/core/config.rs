//! Match configuration parameters.

use serde::{Deserialize, Serialize};

use super::player::Seat;
use super::rng::GameRng;

/// One hour, the window after the last move before a match counts as abandoned.
pub const DEFAULT_GAME_ALIVE_MS: u64 = 60 * 60 * 1000;

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Seed for the die RNG. `None` seeds from the operating system.
    /// Same seed produces the same rolls.
    pub seed: Option<u64>,

    /// Seat that places the first die.
    pub first_mover: Seat,

    /// Milliseconds without a move after which a match is stale.
    /// Sweeping stale matches is left to the storage layer.
    pub game_alive_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            first_mover: Seat::One,
            game_alive_ms: DEFAULT_GAME_ALIVE_MS,
        }
    }
}

impl MatchConfig {
    /// Use a fixed seed for deterministic rolls.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the seat that moves first.
    pub fn with_first_mover(mut self, seat: Seat) -> Self {
        self.first_mover = seat;
        self
    }

    /// Set the abandonment window.
    pub fn with_game_alive_ms(mut self, ms: u64) -> Self {
        self.game_alive_ms = ms;
        self
    }

    /// Build the die RNG described by this config.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DiceSource;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.first_mover, Seat::One);
        assert_eq!(config.game_alive_ms, 3_600_000);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::default()
            .with_seed(123)
            .with_first_mover(Seat::Two)
            .with_game_alive_ms(5_000);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.first_mover, Seat::Two);
        assert_eq!(config.game_alive_ms, 5_000);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let config = MatchConfig::default().with_seed(9);
        let mut a = config.rng();
        let mut b = config.rng();

        for _ in 0..20 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{"first_mover":"Two"}"#).unwrap();
        assert_eq!(config.first_mover, Seat::Two);
        assert_eq!(config.game_alive_ms, DEFAULT_GAME_ALIVE_MS);
    }
}
