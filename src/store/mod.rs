//! Storage seam for match records.
//!
//! The engine never keeps game state itself. A `GameStore` owns the records
//! and guarantees that `update` runs read, validate, apply and write as one
//! step per match: two concurrent updates of the same match must never both
//! see the same pre-move record. Different matches may update in parallel.
//!
//! The `*_then` variants take an `on_commit` hook that runs after the write
//! while the match is still held, so whatever it publishes for one match goes
//! out in commit order.

pub mod memory;

pub use memory::MemoryStore;

use std::sync::Arc;

use crate::core::{GameId, GameState, TurnError};

/// Owner of persisted match records.
pub trait GameStore {
    /// Add a new record and run `on_commit` before anyone else can touch it.
    /// Fails with `DuplicateGame` if the id is taken; `on_commit` is not run.
    fn insert_then<N>(&self, game: GameState, on_commit: N) -> Result<(), TurnError>
    where
        N: FnOnce(&GameState);

    /// Add a new record. Fails with `DuplicateGame` if the id is taken.
    fn insert(&self, game: GameState) -> Result<(), TurnError> {
        self.insert_then(game, |_| {})
    }

    /// Snapshot of a record.
    fn get(&self, id: GameId) -> Option<GameState>;

    /// Replace a record with `apply`'s result while holding the match
    /// exclusively, then run `on_commit` on the new record before releasing it.
    ///
    /// `apply` sees the current record. When it fails nothing is written,
    /// `on_commit` is skipped and the error is returned unchanged.
    /// `UnknownGame` if the id is absent or removed before the write.
    fn update_then<F, N>(&self, id: GameId, apply: F, on_commit: N) -> Result<GameState, TurnError>
    where
        F: FnOnce(&GameState) -> Result<GameState, TurnError>,
        N: FnOnce(&GameState);

    /// Replace a record with `apply`'s result while holding the match
    /// exclusively.
    fn update<F>(&self, id: GameId, apply: F) -> Result<GameState, TurnError>
    where
        F: FnOnce(&GameState) -> Result<GameState, TurnError>,
    {
        self.update_then(id, apply, |_| {})
    }

    /// Drop a record, returning it if it existed.
    fn remove(&self, id: GameId) -> Option<GameState>;
}

impl<S: GameStore + ?Sized> GameStore for Arc<S> {
    fn insert_then<N>(&self, game: GameState, on_commit: N) -> Result<(), TurnError>
    where
        N: FnOnce(&GameState),
    {
        (**self).insert_then(game, on_commit)
    }

    fn get(&self, id: GameId) -> Option<GameState> {
        (**self).get(id)
    }

    fn update_then<F, N>(&self, id: GameId, apply: F, on_commit: N) -> Result<GameState, TurnError>
    where
        F: FnOnce(&GameState) -> Result<GameState, TurnError>,
        N: FnOnce(&GameState),
    {
        (**self).update_then(id, apply, on_commit)
    }

    fn remove(&self, id: GameId) -> Option<GameState> {
        (**self).remove(id)
    }
}
