//! Turn protocol.
//!
//! - `turn`: the pure `apply_move` step from one game record to the next
//! - `controller`: `TurnController`, which runs `apply_move` inside a store
//!   transaction, stamps the time and notifies listeners
//!
//! Neither authenticates callers; the player id handed in is trusted.

pub mod controller;
pub mod turn;

pub use controller::{Clock, SystemClock, TurnController};
pub use turn::{apply_move, legal_columns};
