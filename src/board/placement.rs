//! Dropping a die onto a board.
//!
//! The die lands in the acting seat's column: the first empty slot from the
//! bottom is dropped and the die is appended at the top, so dice stack in the
//! order they were placed. Every die of the same value in the opponent's
//! mirrored column is then knocked out and that column is re-compacted with
//! empty slots first.

use smallvec::SmallVec;

use super::{Board, Column, COLUMNS, DIE_MAX, DIE_MIN, EMPTY, SLOTS};
use crate::core::{PlacementError, Seat, StructuralError};

/// Place `value` in `seat`'s column `column` and return the new board.
///
/// The input board is never modified.
///
/// ```
/// use knucklebones::board::{place, Board};
/// use knucklebones::core::Seat;
///
/// let board = place(&Board::empty(), Seat::One, 2, 3).unwrap();
/// assert_eq!(board[Seat::One][2], [0, 0, 3]);
/// ```
pub fn place(board: &Board, seat: Seat, column: usize, value: u8) -> Result<Board, PlacementError> {
    board.validate()?;
    if !(DIE_MIN..=DIE_MAX).contains(&value) {
        return Err(PlacementError::InvalidValue(value));
    }
    if column >= COLUMNS {
        return Err(PlacementError::InvalidColumn(column));
    }
    if !board.side(seat)[column].contains(&EMPTY) {
        return Err(PlacementError::ColumnFull(column));
    }

    let mut next = *board;
    next.side_mut(seat)[column] = stack(&board.side(seat)[column], value)?;

    let opponent = seat.opponent();
    let (target, knocked_out) = knock_out(&board.side(opponent)[column], value);
    next.side_mut(opponent)[column] = target;

    log::debug!(
        "{seat} placed {value} in column {column}, knocked out {knocked_out} from {opponent}"
    );

    Ok(next)
}

/// Drop the bottom-most empty slot and append `value` at the top.
fn stack(column: &Column, value: u8) -> Result<Column, StructuralError> {
    let hole = column
        .iter()
        .position(|&v| v == EMPTY)
        .ok_or(StructuralError::NoEmptySlot)?;

    let mut stacked = [EMPTY; SLOTS];
    let survivors = column
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != hole)
        .map(|(_, &v)| v)
        .chain(std::iter::once(value));
    for (slot, v) in stacked.iter_mut().zip(survivors) {
        *slot = v;
    }
    Ok(stacked)
}

/// Remove every `value` from the column, left-padding with empty slots.
///
/// Returns the new column and how many dice were removed.
fn knock_out(column: &Column, value: u8) -> (Column, usize) {
    let survivors: SmallVec<[u8; SLOTS]> = column.iter().copied().filter(|&v| v != value).collect();
    let removed = SLOTS - survivors.len();

    let mut compacted = [EMPTY; SLOTS];
    compacted[removed..].copy_from_slice(&survivors);
    (compacted, removed)
}
