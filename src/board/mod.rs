//! The board and the pure rules that act on it.
//!
//! - `table`: the 2 × 3 × 3 grid, its validity check and wire format
//! - `scoring`: column and side scores with the duplicate multiplier
//! - `placement`: dropping a die and knocking out the opponent's matches
//! - `winner`: completion check and winner selection
//!
//! Every operation validates the board it is handed before reading it.

pub mod placement;
pub mod scoring;
pub mod table;
pub mod winner;

pub use placement::place;
pub use scoring::{score_column, score_side};
pub use table::{Board, Column};
pub use winner::detect_winner;

/// Number of sides on a board.
pub const SEATS: usize = 2;

/// Columns per side.
pub const COLUMNS: usize = 3;

/// Slots per column.
pub const SLOTS: usize = 3;

/// Slot value of an empty slot.
pub const EMPTY: u8 = 0;

/// Lowest die face.
pub const DIE_MIN: u8 = 1;

/// Highest die face.
pub const DIE_MAX: u8 = 6;
