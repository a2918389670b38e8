//! Store-backed turn controller.
//!
//! Wraps `apply_move` with everything around it: loading and committing the
//! record through a `GameStore`, rolling dice, stamping the time and
//! broadcasting the committed result.
//!
//! ```
//! use knucklebones::core::{FixedDice, GameId, PlayerId, SeatMap};
//! use knucklebones::rules::TurnController;
//! use knucklebones::store::MemoryStore;
//!
//! let controller = TurnController::new(MemoryStore::new(), FixedDice::new([2, 4]))
//!     .with_clock(|| 1_000);
//!
//! let players = SeatMap::from_pair(PlayerId::new(1), PlayerId::new(2));
//! controller.start_match(GameId::new(1), players).unwrap();
//!
//! let game = controller.submit_move(GameId::new(1), PlayerId::new(1), 0).unwrap();
//! assert_eq!(game.current_player, PlayerId::new(2));
//! assert_eq!(game.current_point, 4);
//! ```

use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use super::turn::apply_move;
use crate::core::{
    DiceSource, GameId, GameRng, GameState, MatchConfig, PlayerId, SeatMap, Timestamp, TurnError,
};
use crate::events::{EventListener, GameEvent};
use crate::store::GameStore;

/// Source of move timestamps.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now(&self) -> Timestamp;
}

impl<F: Fn() -> Timestamp> Clock for F {
    fn now(&self) -> Timestamp {
        self()
    }
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as Timestamp)
            .unwrap_or(0)
    }
}

/// Runs moves against stored matches.
///
/// The dice sit behind a mutex so the controller can be shared between
/// request handlers. The dice lock is only taken inside the store's
/// per-match critical section, and listeners are notified there too.
pub struct TurnController<S, D, L = (), C = SystemClock> {
    store: S,
    dice: Mutex<D>,
    listener: L,
    clock: C,
    config: MatchConfig,
}

impl<S: GameStore, D: DiceSource> TurnController<S, D> {
    /// Controller with no listener, the system clock and default config.
    pub fn new(store: S, dice: D) -> Self {
        Self {
            store,
            dice: Mutex::new(dice),
            listener: (),
            clock: SystemClock,
            config: MatchConfig::default(),
        }
    }
}

impl<S: GameStore> TurnController<S, GameRng> {
    /// Controller rolling with the RNG described by `config`.
    pub fn from_config(store: S, config: MatchConfig) -> Self {
        let dice = config.rng();
        Self::new(store, dice).with_config(config)
    }
}

impl<S, D, L, C> TurnController<S, D, L, C>
where
    S: GameStore,
    D: DiceSource,
    L: EventListener,
    C: Clock,
{
    /// Replace the event listener.
    pub fn with_listener<L2: EventListener>(self, listener: L2) -> TurnController<S, D, L2, C> {
        TurnController {
            store: self.store,
            dice: self.dice,
            listener,
            clock: self.clock,
            config: self.config,
        }
    }

    /// Replace the clock.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> TurnController<S, D, L, C2> {
        TurnController {
            store: self.store,
            dice: self.dice,
            listener: self.listener,
            clock,
            config: self.config,
        }
    }

    /// Replace the match configuration. The dice are left as they are.
    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current match configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Snapshot of a stored match.
    pub fn get(&self, id: GameId) -> Option<GameState> {
        self.store.get(id)
    }

    /// Create and store a new match. The configured first mover starts.
    ///
    /// `MatchStarted` is delivered before any move on the match can commit.
    pub fn start_match(
        &self,
        id: GameId,
        players: SeatMap<PlayerId>,
    ) -> Result<GameState, TurnError> {
        let now = self.clock.now();
        let game = {
            let mut dice = self.dice.lock().unwrap_or_else(PoisonError::into_inner);
            GameState::start(id, players, self.config.first_mover, &mut *dice, now)?
        };

        self.store.insert_then(game.clone(), |game| {
            self.listener.notify(&GameEvent::started(game));
        })?;
        Ok(game)
    }

    /// Apply `player`'s move in `column` to match `id` and commit it.
    ///
    /// Events are delivered while the match is still held, so a listener
    /// sees one match's moves in step order. On failure the stored record is
    /// unchanged and no event is sent.
    pub fn submit_move(
        &self,
        id: GameId,
        player: PlayerId,
        column: usize,
    ) -> Result<GameState, TurnError> {
        let now = self.clock.now();
        let result = self.store.update_then(
            id,
            |game| {
                let mut dice = self.dice.lock().unwrap_or_else(PoisonError::into_inner);
                apply_move(game, player, column, &mut *dice, now)
            },
            |game| {
                for event in GameEvent::for_move(game) {
                    self.listener.notify(&event);
                }
            },
        );

        if let Err(e) = &result {
            log::warn!("{id}: rejected move by {player} in column {column}: {e}");
        }
        result
    }

    /// Whether match `id` has gone quiet for longer than the configured
    /// window. Unknown matches are not stale.
    pub fn is_stale(&self, id: GameId) -> bool {
        self.store
            .get(id)
            .is_some_and(|game| game.is_stale(self.clock.now(), &self.config))
    }
}
