//! Player identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Opaque identifier of an authenticated player, assigned by the account
//! service. The engine only compares ids, it never interprets them.
//!
//! ## Seat
//!
//! Position at the table: seat one owns the first half of the board, seat two
//! the second. The wire format numbers them 1 and 2.
//!
//! ## SeatMap
//!
//! Per-seat storage backed by a fixed `[T; 2]`, indexed by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Opaque identifier of a registered player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// First seat, index 0 on the board, number 1 on the wire.
    One,
    /// Second seat, index 1 on the board, number 2 on the wire.
    Two,
}

impl Seat {
    /// Both seats in iteration order.
    pub const ALL: [Seat; 2] = [Seat::One, Seat::Two];

    /// Board index of this seat (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }

    /// Wire number of this seat (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Seat::One => 1,
            Seat::Two => 2,
        }
    }

    /// Parse a wire number. Anything but 1 or 2 is `None`.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Seat> {
        match number {
            1 => Some(Seat::One),
            2 => Some(Seat::Two),
            _ => None,
        }
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.number())
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use knucklebones::core::{PlayerId, Seat, SeatMap};
///
/// let players = SeatMap::new(|seat| PlayerId::new(10 + seat.number() as u64));
///
/// assert_eq!(players[Seat::One], PlayerId::new(11));
/// assert_eq!(players.seat_of(&PlayerId::new(12)), Some(Seat::Two));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::One), factory(Seat::Two)],
        }
    }

    /// Create a SeatMap from the seat one and seat two values.
    pub fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a SeatMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs, seat one first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// First seat whose value equals `value`.
    #[must_use]
    pub fn seat_of(&self, value: &T) -> Option<Seat>
    where
        T: PartialEq,
    {
        self.iter().find(|(_, v)| *v == value).map(|(seat, _)| seat)
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
