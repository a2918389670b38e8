//! Core engine types: players, seats, moves, match state, RNG, configuration
//! and errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord};
pub use config::MatchConfig;
pub use error::{PlacementError, StructuralError, TurnError};
pub use player::{PlayerId, Seat, SeatMap};
pub use rng::{DiceSource, FixedDice, GameRng, GameRngState};
pub use state::{GameId, GameState, MatchStatus, Timestamp};
