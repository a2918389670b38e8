//! Column and side scoring.
//!
//! A column scores the sum of its dice, except that a repeated value counts
//! `value × count²` instead of `value × count`. Three slots leave room for at
//! most one repeated value, so a column never has two duplicate groups; a
//! longer column would need a different rule.

use smallvec::SmallVec;

use super::{Board, COLUMNS, DIE_MAX, EMPTY, SLOTS};
use crate::core::{Seat, SeatMap, StructuralError};

/// Score one column of exactly three slots.
///
/// ```
/// use knucklebones::board::score_column;
///
/// assert_eq!(score_column(&[2, 2, 5]), Ok(13));
/// assert_eq!(score_column(&[1, 2, 3]), Ok(6));
/// assert_eq!(score_column(&[5, 5, 5]), Ok(45));
/// ```
pub fn score_column(column: &[u8]) -> Result<u32, StructuralError> {
    if column.len() != SLOTS {
        return Err(StructuralError::SlotCount(column.len()));
    }
    if let Some(&bad) = column.iter().find(|&&v| v > DIE_MAX) {
        return Err(StructuralError::ValueOutOfRange(i64::from(bad)));
    }

    let repeated = column.iter().find_map(|&v| {
        let count = column.iter().filter(|&&n| n == v).count() as u32;
        (v != EMPTY && count > 1).then_some((v, count))
    });

    let score = match repeated {
        None => column.iter().map(|&v| u32::from(v)).sum(),
        Some((value, count)) => {
            let rest: u32 = column
                .iter()
                .filter(|&&v| v != value)
                .map(|&v| u32::from(v))
                .sum();
            u32::from(value) * count * count + rest
        }
    };

    Ok(score)
}

/// Score one side: the sum of its three column scores.
///
/// ```
/// use knucklebones::board::score_side;
///
/// let side: [[u8; 3]; 3] = [[1, 2, 3], [4, 5, 6], [1, 2, 3]];
/// assert_eq!(score_side(&side), Ok(27));
/// ```
pub fn score_side<C: AsRef<[u8]>>(columns: &[C]) -> Result<u32, StructuralError> {
    if columns.len() != COLUMNS {
        return Err(StructuralError::ColumnCount(columns.len()));
    }

    let scores: SmallVec<[u32; COLUMNS]> = columns
        .iter()
        .map(|column| score_column(column.as_ref()))
        .collect::<Result<_, _>>()?;

    Ok(scores.iter().sum())
}

impl Board {
    /// Score of one seat's side.
    pub fn score(&self, seat: Seat) -> Result<u32, StructuralError> {
        self.validate()?;
        score_side(self.side(seat))
    }

    /// Scores of both seats.
    pub fn scores(&self) -> Result<SeatMap<u32>, StructuralError> {
        Ok(SeatMap::from_pair(self.score(Seat::One)?, self.score(Seat::Two)?))
    }
}
