//! The board grid and its wire format.
//!
//! A board is two sides of three columns of three slots. Columns are kept
//! compacted: empty slots come first and a new die lands in the last slot.
//!
//! ## Wire format
//!
//! Serializes to the nested array stored as the game's table view:
//!
//! ```
//! use knucklebones::board::Board;
//!
//! let board = Board::empty();
//! assert_eq!(
//!     board.to_table_view().unwrap(),
//!     "[[[0,0,0],[0,0,0],[0,0,0]],[[0,0,0],[0,0,0],[0,0,0]]]"
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::{COLUMNS, DIE_MAX, EMPTY, SEATS, SLOTS};
use crate::core::{Seat, StructuralError};

/// One column of three slot values, empty slots first.
pub type Column = [u8; SLOTS];

/// Shape the table view decodes through before validation.
pub type RawTable = Vec<Vec<Vec<i64>>>;

/// The full two-player board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "RawTable", try_from = "RawTable")]
pub struct Board([[Column; COLUMNS]; SEATS]);

impl Board {
    /// Two empty sides.
    #[must_use]
    pub const fn empty() -> Self {
        Self([[[EMPTY; SLOTS]; COLUMNS]; SEATS])
    }

    /// Build a board from raw sides, seat one first.
    ///
    /// Values are not checked here; every engine operation validates the
    /// board before use.
    #[must_use]
    pub const fn from_sides(sides: [[Column; COLUMNS]; SEATS]) -> Self {
        Self(sides)
    }

    /// Build a board from the sides of seat one and seat two.
    #[must_use]
    pub const fn from_pair(one: [Column; COLUMNS], two: [Column; COLUMNS]) -> Self {
        Self([one, two])
    }

    /// Decode a nested table, checking shape and value range.
    pub fn from_table(table: RawTable) -> Result<Self, StructuralError> {
        if table.len() != SEATS {
            return Err(StructuralError::PlayerCount(table.len()));
        }

        let mut board = Self::empty();
        for (side, raw_side) in board.0.iter_mut().zip(&table) {
            if raw_side.len() != COLUMNS {
                return Err(StructuralError::ColumnCount(raw_side.len()));
            }
            for (column, raw_column) in side.iter_mut().zip(raw_side) {
                if raw_column.len() != SLOTS {
                    return Err(StructuralError::SlotCount(raw_column.len()));
                }
                for (slot, &raw) in column.iter_mut().zip(raw_column) {
                    *slot = slot_value(raw)?;
                }
            }
        }

        Ok(board)
    }

    /// Decode the JSON table view, e.g. `[[[0,0,3],[0,0,0],[0,0,0]],[...]]`.
    pub fn from_table_view(text: &str) -> Result<Self, StructuralError> {
        let table: RawTable = serde_json::from_str(text).map_err(|_| StructuralError::Unparseable)?;
        Self::from_table(table)
    }

    /// Encode as the compact JSON table view.
    pub fn to_table_view(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Check every slot value is in `0..=6`.
    ///
    /// The shape is fixed by the type, so only values can be wrong.
    pub fn validate(&self) -> Result<(), StructuralError> {
        self.0
            .iter()
            .flatten()
            .flatten()
            .try_for_each(|&v| slot_value(i64::from(v)).map(|_| ()))
    }

    /// A seat's three columns.
    #[must_use]
    pub fn side(&self, seat: Seat) -> &[Column; COLUMNS] {
        &self.0[seat.index()]
    }

    pub(crate) fn side_mut(&mut self, seat: Seat) -> &mut [Column; COLUMNS] {
        &mut self.0[seat.index()]
    }

    /// A seat's column, or `None` past the third column.
    #[must_use]
    pub fn column(&self, seat: Seat, index: usize) -> Option<&Column> {
        self.side(seat).get(index)
    }

    /// Both sides, seat one first.
    #[must_use]
    pub fn sides(&self) -> &[[Column; COLUMNS]; SEATS] {
        &self.0
    }

    /// Whether a seat has no empty slot left.
    #[must_use]
    pub fn is_side_full(&self, seat: Seat) -> bool {
        self.side(seat).iter().flatten().all(|&v| v != EMPTY)
    }

    /// Whether both sides are full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        Seat::ALL.iter().all(|&seat| self.is_side_full(seat))
    }

    /// Number of dice a seat has on the board.
    #[must_use]
    pub fn dice_count(&self, seat: Seat) -> usize {
        self.side(seat).iter().flatten().filter(|&&v| v != EMPTY).count()
    }
}

impl TryFrom<RawTable> for Board {
    type Error = StructuralError;

    fn try_from(table: RawTable) -> Result<Self, Self::Error> {
        Self::from_table(table)
    }
}

impl From<Board> for RawTable {
    fn from(board: Board) -> Self {
        board
            .0
            .iter()
            .map(|side| {
                side.iter()
                    .map(|column| column.iter().map(|&v| i64::from(v)).collect())
                    .collect()
            })
            .collect()
    }
}

impl Index<Seat> for Board {
    type Output = [Column; COLUMNS];

    fn index(&self, seat: Seat) -> &Self::Output {
        self.side(seat)
    }
}

fn slot_value(raw: i64) -> Result<u8, StructuralError> {
    if (i64::from(EMPTY)..=i64::from(DIE_MAX)).contains(&raw) {
        Ok(raw as u8)
    } else {
        Err(StructuralError::ValueOutOfRange(raw))
    }
}
