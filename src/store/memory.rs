//! In-process store with one lock per match.
//!
//! The index is an `RwLock` over an `FxHashMap` of per-match mutexes. An
//! update takes the index read lock just long enough to clone the match's
//! `Arc`, then holds only that match's mutex for the whole apply-and-write.
//! Lock order is match before index; `remove` never holds both.

use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use super::GameStore;
use crate::core::{GameId, GameState, TurnError};

/// Match records kept in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: RwLock<FxHashMap<GameId, Arc<Mutex<GameState>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether the store holds no match.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, id: GameId) -> Option<Arc<Mutex<GameState>>> {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    fn is_indexed(&self, id: GameId, slot: &Arc<Mutex<GameState>>) -> bool {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .is_some_and(|indexed| Arc::ptr_eq(indexed, slot))
    }
}

impl GameStore for MemoryStore {
    fn insert_then<N>(&self, game: GameState, on_commit: N) -> Result<(), TurnError>
    where
        N: FnOnce(&GameState),
    {
        let id = game.id;
        let slot = Arc::new(Mutex::new(game));
        let stored = slot.lock().unwrap_or_else(PoisonError::into_inner);
        {
            let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);
            if games.contains_key(&id) {
                return Err(TurnError::DuplicateGame(id));
            }
            games.insert(id, Arc::clone(&slot));
        }

        on_commit(&stored);
        Ok(())
    }

    fn get(&self, id: GameId) -> Option<GameState> {
        let slot = self.slot(id)?;
        let game = slot.lock().unwrap_or_else(PoisonError::into_inner).clone();
        Some(game)
    }

    fn update_then<F, N>(&self, id: GameId, apply: F, on_commit: N) -> Result<GameState, TurnError>
    where
        F: FnOnce(&GameState) -> Result<GameState, TurnError>,
        N: FnOnce(&GameState),
    {
        let slot = self.slot(id).ok_or(TurnError::UnknownGame(id))?;
        let mut current = slot.lock().unwrap_or_else(PoisonError::into_inner);

        let next = apply(&current)?;

        // A concurrent remove may have unlinked this slot after we cloned it.
        if !self.is_indexed(id, &slot) {
            return Err(TurnError::UnknownGame(id));
        }
        *current = next.clone();
        on_commit(&current);
        Ok(next)
    }

    fn remove(&self, id: GameId) -> Option<GameState> {
        let slot = self
            .games
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)?;
        let game = slot.lock().unwrap_or_else(PoisonError::into_inner).clone();
        Some(game)
    }
}
