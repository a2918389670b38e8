//! Error types for board decoding, placement and turn application.
//!
//! Errors nest the way calls nest: a `StructuralError` found while placing is
//! carried inside `PlacementError::Structural`, and a placement failure seen by
//! the turn controller is carried inside `TurnError::Placement`. Nothing is
//! recovered on the way up.

use std::fmt;

use super::player::PlayerId;
use super::state::GameId;

/// A board or column with the wrong shape or an out-of-range slot value.
///
/// Always a programming or data-corruption signal, never user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StructuralError {
    /// The board does not hold exactly two sides.
    PlayerCount(usize),
    /// A side does not hold exactly three columns.
    ColumnCount(usize),
    /// A column does not hold exactly three slots.
    SlotCount(usize),
    /// A slot value outside `0..=6`.
    ValueOutOfRange(i64),
    /// A column had room for a die but no empty slot was found while placing.
    NoEmptySlot,
    /// The table view is not a nested array of integers at all.
    Unparseable,
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::PlayerCount(n) => write!(f, "invalid table view: {n} players, expected 2"),
            StructuralError::ColumnCount(n) => write!(f, "invalid table view: {n} columns, expected 3"),
            StructuralError::SlotCount(n) => write!(f, "invalid column: {n} slots, expected 3"),
            StructuralError::ValueOutOfRange(v) => write!(f, "invalid table view: slot value {v} outside 0..=6"),
            StructuralError::NoEmptySlot => write!(f, "invalid table view: no empty slot to place into"),
            StructuralError::Unparseable => write!(f, "invalid table view: not a nested integer array"),
        }
    }
}

impl std::error::Error for StructuralError {}

/// Failure to drop a die onto a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// The board itself is malformed.
    Structural(StructuralError),
    /// The die value is outside `1..=6`.
    InvalidValue(u8),
    /// The column index is outside `0..=2`.
    InvalidColumn(usize),
    /// The chosen column has no empty slot.
    ColumnFull(usize),
}

impl PlacementError {
    /// Whether a client caused this, as opposed to a bug or corrupt data.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, PlacementError::InvalidColumn(_) | PlacementError::ColumnFull(_))
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Structural(e) => write!(f, "{e}"),
            PlacementError::InvalidValue(v) => write!(f, "invalid number: {v}"),
            PlacementError::InvalidColumn(c) => write!(f, "column must be between 0 and 2, got {c}"),
            PlacementError::ColumnFull(c) => write!(f, "column {c} is full"),
        }
    }
}

impl std::error::Error for PlacementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlacementError::Structural(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StructuralError> for PlacementError {
    fn from(e: StructuralError) -> Self {
        PlacementError::Structural(e)
    }
}

/// Failure to apply a move to a match.
///
/// The game record is unchanged whenever one of these is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnError {
    /// The caller is not the current mover.
    NotYourTurn,
    /// The column index is outside `0..=2`.
    InvalidColumn(usize),
    /// The match already has a winner.
    Finished,
    /// The caller is registered in neither seat.
    NotInMatch(PlayerId),
    /// The placement engine rejected the move.
    Placement(PlacementError),
    /// The store holds no match with this id.
    UnknownGame(GameId),
    /// The store already holds a match with this id.
    DuplicateGame(GameId),
    /// A match was started with the same player in both seats.
    SamePlayer(PlayerId),
}

impl TurnError {
    /// Whether a client caused this, as opposed to a bug or corrupt data.
    ///
    /// Callers map user-facing errors to a 400-class rejection and everything
    /// else to an internal error.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        match self {
            TurnError::NotYourTurn | TurnError::InvalidColumn(_) | TurnError::Finished => true,
            TurnError::NotInMatch(_) | TurnError::UnknownGame(_) => true,
            TurnError::Placement(e) => e.is_user_facing(),
            TurnError::DuplicateGame(_) | TurnError::SamePlayer(_) => false,
        }
    }
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::NotYourTurn => write!(f, "not your turn"),
            TurnError::InvalidColumn(c) => write!(f, "column must be between 0 and 2, got {c}"),
            TurnError::Finished => write!(f, "game already completed"),
            TurnError::NotInMatch(p) => write!(f, "{p} is not seated in this match"),
            TurnError::Placement(e) => write!(f, "invalid placement: {e}"),
            TurnError::UnknownGame(id) => write!(f, "{id} not found"),
            TurnError::DuplicateGame(id) => write!(f, "{id} already exists"),
            TurnError::SamePlayer(p) => write!(f, "{p} cannot take both seats"),
        }
    }
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::Placement(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PlacementError> for TurnError {
    fn from(e: PlacementError) -> Self {
        TurnError::Placement(e)
    }
}

impl From<StructuralError> for TurnError {
    fn from(e: StructuralError) -> Self {
        TurnError::Placement(PlacementError::Structural(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_user_facing_classification() {
        assert!(TurnError::NotYourTurn.is_user_facing());
        assert!(TurnError::InvalidColumn(3).is_user_facing());
        assert!(TurnError::Placement(PlacementError::ColumnFull(0)).is_user_facing());
        assert!(!TurnError::Placement(PlacementError::InvalidValue(7)).is_user_facing());
        assert!(!TurnError::from(StructuralError::SlotCount(2)).is_user_facing());
    }

    #[test]
    fn test_conversion_nests() {
        let err: TurnError = StructuralError::PlayerCount(1).into();
        assert_eq!(
            err,
            TurnError::Placement(PlacementError::Structural(StructuralError::PlayerCount(1)))
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        assert_eq!(PlacementError::ColumnFull(2).to_string(), "column 2 is full");
        assert_eq!(PlacementError::InvalidValue(7).to_string(), "invalid number: 7");
        assert_eq!(
            TurnError::Placement(PlacementError::ColumnFull(1)).to_string(),
            "invalid placement: column 1 is full"
        );
        assert_eq!(TurnError::NotYourTurn.to_string(), "not your turn");
        assert_eq!(
            TurnError::SamePlayer(PlayerId::new(5)).to_string(),
            "Player 5 cannot take both seats"
        );
        assert!(!TurnError::SamePlayer(PlayerId::new(5)).is_user_facing());
    }
}
