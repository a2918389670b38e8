//! Move representation.
//!
//! A `Move` is one die drop: who placed, which column, which value. The
//! turn controller builds it from the request and the game's pre-rolled die;
//! a `MoveRecord` is the same move stamped with the seat and step number and
//! kept in the game's history.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, Seat};

/// One die drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who placed the die.
    pub player: PlayerId,

    /// Target column on the player's own side, `0..=2`.
    pub column: usize,

    /// Die value placed, the game's pre-rolled die at the time.
    pub value: u8,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub fn new(player: PlayerId, column: usize, value: u8) -> Self {
        Self {
            player,
            column,
            value,
        }
    }
}

/// A recorded move with its position in the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Seat the move was played from.
    pub seat: Seat,

    /// The move itself.
    pub placed: Move,

    /// Step number, 1 for the first move of the match.
    pub step: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(seat: Seat, placed: Move, step: u32) -> Self {
        Self { seat, placed, step }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_record() {
        let placed = Move::new(PlayerId::new(4), 2, 6);
        let record = MoveRecord::new(Seat::Two, placed, 3);

        assert_eq!(record.placed.player, PlayerId::new(4));
        assert_eq!(record.placed.column, 2);
        assert_eq!(record.placed.value, 6);
        assert_eq!(record.seat, Seat::Two);
        assert_eq!(record.step, 3);
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(Seat::One, Move::new(PlayerId::new(1), 0, 3), 1);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"seat":"One","placed":{"player":1,"column":0,"value":3},"step":1}"#
        );

        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
