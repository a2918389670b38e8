//! Match events and their listeners.
//!
//! The engine does not own connections. After a move is committed the
//! controller turns the new record into `GameEvent`s and hands them to an
//! `EventListener`, which is where the room broadcast plugs in.

pub mod event;
pub mod listener;

pub use event::GameEvent;
pub use listener::{EventListener, EventLog};
