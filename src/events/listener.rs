//! Event listeners: where committed match events go.
//!
//! The controller hands each event to its listener right after the store
//! commit, while the match is still locked. Listeners should return quickly
//! (a room broadcast typically forwards into a channel) and must not call
//! back into the controller for the same match.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, PoisonError};

use super::event::GameEvent;

/// Receiver of committed match events.
pub trait EventListener {
    /// Called once per event, in commit order for a given match.
    /// Events of different matches may interleave.
    fn notify(&self, event: &GameEvent);
}

/// Ignores every event.
impl EventListener for () {
    fn notify(&self, _event: &GameEvent) {}
}

impl<L: EventListener + ?Sized> EventListener for Arc<L> {
    fn notify(&self, event: &GameEvent) {
        (**self).notify(event);
    }
}

impl<L: EventListener + ?Sized> EventListener for &L {
    fn notify(&self, event: &GameEvent) {
        (**self).notify(event);
    }
}

/// Forwards events into a channel. A dropped receiver is not an error: the
/// room simply has nobody listening anymore.
impl EventListener for Sender<GameEvent> {
    fn notify(&self, event: &GameEvent) {
        if self.send(event.clone()).is_err() {
            log::debug!("no receiver for {} events", event.game());
        }
    }
}

/// Keeps every event in memory, in arrival order.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<GameEvent>>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything received so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of events received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing was received yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventListener for EventLog {
    fn notify(&self, event: &GameEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
