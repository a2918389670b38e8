//! # knucklebones
//!
//! Match engine for Knucklebones, the two-player dice placement game.
//!
//! Players alternately drop a pre-rolled die into one of three columns on
//! their own 3×3 side. A die knocks out every matching die in the opponent's
//! mirrored column, and the match ends once both sides are full. Columns
//! score with a duplicate multiplier.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: placement, scoring and win detection are functions from
//!    a board to a new board or a number. Nothing is mutated in place.
//!
//! 2. **Injected Collaborators**: storage (`GameStore`), dice (`DiceSource`),
//!    time (`Clock`) and broadcast (`EventListener`) are handed in, so tests
//!    replay fixed sequences and services plug in their own backends.
//!
//! 3. **Validate Before Mutate**: every rejection leaves the stored record
//!    exactly as it was.
//!
//! ## Architecture
//!
//! - **Persistent History**: the move log is an `im::Vector`, so copying a
//!   record for the next turn is O(1).
//!
//! - **Per-Match Locking**: `MemoryStore` serializes updates of one match and
//!   lets different matches proceed in parallel.
//!
//! ## Modules
//!
//! - `core`: players, seats, match record, moves, RNG, configuration, errors
//! - `board`: the grid and the placement, scoring and winner rules
//! - `rules`: `apply_move` and the store-backed `TurnController`
//! - `events`: broadcast events and listeners
//! - `store`: the `GameStore` seam and the in-memory store

pub mod board;
pub mod core;
pub mod events;
pub mod rules;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    DiceSource, FixedDice, GameId, GameRng, GameRngState, GameState, MatchConfig, MatchStatus,
    Move, MoveRecord, PlacementError, PlayerId, Seat, SeatMap, StructuralError, Timestamp,
    TurnError,
};

pub use crate::board::{detect_winner, place, score_column, score_side, Board, Column};

pub use crate::rules::{apply_move, legal_columns, Clock, SystemClock, TurnController};

pub use crate::events::{EventListener, EventLog, GameEvent};

pub use crate::store::{GameStore, MemoryStore};
