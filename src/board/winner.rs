//! Completion check and winner selection.

use super::{score_side, Board};
use crate::core::{Seat, StructuralError};

/// The winning seat once both sides are full, `None` while the match runs.
///
/// The higher side score wins. On an exact tie seat one wins: the first seat
/// holding the maximum score is chosen, and there is no draw result.
///
/// ```
/// use knucklebones::board::{detect_winner, Board};
/// use knucklebones::core::Seat;
///
/// assert_eq!(detect_winner(&Board::empty()), Ok(None));
///
/// let full = [[1, 2, 3], [4, 5, 6], [1, 2, 3]];
/// assert_eq!(detect_winner(&Board::from_pair(full, full)), Ok(Some(Seat::One)));
/// ```
pub fn detect_winner(board: &Board) -> Result<Option<Seat>, StructuralError> {
    board.validate()?;
    if !board.is_full() {
        return Ok(None);
    }

    let mut best: Option<(Seat, u32)> = None;
    for seat in Seat::ALL {
        let score = score_side(board.side(seat))?;
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((seat, score));
        }
    }

    Ok(best.map(|(seat, _)| seat))
}
