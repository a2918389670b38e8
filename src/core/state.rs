//! Persisted match record.
//!
//! `GameState` is what the storage layer keeps per match: the board, both
//! registered players, whose turn it is, the die waiting to be placed, the
//! winner once there is one, the step counter and the time of the last move.
//!
//! The record is only ever advanced by `rules::apply_move`, which returns a
//! new record and leaves the old one untouched. The move history is an
//! `im::Vector` so that copy is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::config::MatchConfig;
use super::error::{StructuralError, TurnError};
use super::player::{PlayerId, Seat, SeatMap};
use super::rng::{roll_checked, DiceSource};
use crate::board::Board;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Identifier of a match, assigned by the storage layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl GameId {
    /// Create a new game ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game {}", self.0)
    }
}

/// Where a match is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Started, no die placed yet.
    Waiting,
    /// Turns alternating.
    InProgress,
    /// Winner recorded. Terminal.
    Finished,
}

/// The persisted record of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Match identifier.
    pub id: GameId,

    /// Registered players by seat.
    pub players: SeatMap<PlayerId>,

    /// Both sides of the board.
    pub board: Board,

    /// Player whose turn it is.
    pub current_player: PlayerId,

    /// Pre-rolled die the current player will place.
    pub current_point: u8,

    /// Winner, once both sides are full.
    pub winner: Option<PlayerId>,

    /// Number of moves applied.
    pub steps: u32,

    /// Time of the last applied move (or of the start).
    pub last_move_at: Timestamp,

    /// Every applied move, oldest first.
    pub history: Vector<MoveRecord>,
}

impl GameState {
    /// Start a match: empty board, `first_mover` to play, first die rolled.
    ///
    /// Fails with `SamePlayer` if both seats hold the same player; no die is
    /// rolled then.
    pub fn start(
        id: GameId,
        players: SeatMap<PlayerId>,
        first_mover: Seat,
        dice: &mut impl DiceSource,
        now: Timestamp,
    ) -> Result<Self, TurnError> {
        if players[Seat::One] == players[Seat::Two] {
            return Err(TurnError::SamePlayer(players[Seat::One]));
        }

        let current_point = roll_checked(dice)?;
        let state = Self {
            id,
            current_player: players[first_mover],
            players,
            board: Board::empty(),
            current_point,
            winner: None,
            steps: 0,
            last_move_at: now,
            history: Vector::new(),
        };

        log::info!(
            "{id} started: {} vs {}, {} moves first with {current_point}",
            state.players[Seat::One],
            state.players[Seat::Two],
            state.current_player
        );

        Ok(state)
    }

    /// Lifecycle state derived from the winner and step counter.
    #[must_use]
    pub fn status(&self) -> MatchStatus {
        if self.winner.is_some() {
            MatchStatus::Finished
        } else if self.steps == 0 {
            MatchStatus::Waiting
        } else {
            MatchStatus::InProgress
        }
    }

    /// Whether a winner is recorded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Seat of a registered player.
    #[must_use]
    pub fn seat_of(&self, player: PlayerId) -> Option<Seat> {
        self.players.seat_of(&player)
    }

    /// Seat of the player whose turn it is.
    #[must_use]
    pub fn current_seat(&self) -> Option<Seat> {
        self.seat_of(self.current_player)
    }

    /// Both side scores.
    pub fn scores(&self) -> Result<SeatMap<u32>, StructuralError> {
        self.board.scores()
    }

    /// Whether the match has gone without a move for longer than the
    /// configured window.
    #[must_use]
    pub fn is_stale(&self, now: Timestamp, config: &MatchConfig) -> bool {
        now.saturating_sub(self.last_move_at) > config.game_alive_ms
    }

    /// Encode as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a binary snapshot. The board is re-validated on the way in.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
