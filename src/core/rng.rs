//! Die rolls: the deterministic `GameRng` and the `DiceSource` seam.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Serializable**: O(1) state capture and restore, so a controller can be
//!   checkpointed next to the games it serves
//! - **Injectable**: the turn controller only sees `DiceSource`, tests replay a
//!   fixed sequence with `FixedDice`
//!
//! ```
//! use knucklebones::core::{DiceSource, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll();
//! assert!((1..=6).contains(&roll));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::error::PlacementError;
use crate::board::{DIE_MAX, DIE_MIN};

/// Source of pre-rolled die values.
///
/// Implementations must return values in `1..=6`. The turn controller rejects
/// anything else as an invalid value instead of placing it.
pub trait DiceSource {
    /// Roll one die.
    fn roll(&mut self) -> u8;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Roll once and reject a face outside `1..=6`.
pub(crate) fn roll_checked(dice: &mut impl DiceSource) -> Result<u8, PlacementError> {
    let value = dice.roll();
    if (DIE_MIN..=DIE_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(PlacementError::InvalidValue(value))
    }
}

/// Deterministic RNG for die rolls.
///
/// Uses ChaCha8 for speed while keeping a uniform distribution.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::RangeInclusive<u8>) -> u8 {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> u8 {
        self.gen_range(DIE_MIN..=DIE_MAX)
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of rolls, wrapping around at the end.
///
/// ```
/// use knucklebones::core::{DiceSource, FixedDice};
///
/// let mut dice = FixedDice::new([3, 5]);
/// assert_eq!(dice.roll(), 3);
/// assert_eq!(dice.roll(), 5);
/// assert_eq!(dice.roll(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct FixedDice {
    rolls: Vec<u8>,
    next: usize,
}

impl FixedDice {
    /// Create from a non-empty sequence of values in `1..=6`.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        let rolls: Vec<u8> = rolls.into_iter().collect();
        assert!(!rolls.is_empty(), "Need at least one roll");
        assert!(
            rolls.iter().all(|r| (DIE_MIN..=DIE_MAX).contains(r)),
            "Rolls must be in 1..=6"
        );
        Self { rolls, next: 0 }
    }

    /// Number of rolls handed out so far.
    #[must_use]
    pub fn rolled(&self) -> usize {
        self.next
    }
}

impl DiceSource for FixedDice {
    fn roll(&mut self) -> u8 {
        let value = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        value
    }
}
