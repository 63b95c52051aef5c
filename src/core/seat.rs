//! Seat identification and per-seat data storage.
//!
//! A match has 2-6 fixed seats in clockwise order. `SeatId` is the type-safe
//! index; `SeatMap` stores one value per seat with O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The next seat in clockwise turn order.
    ///
    /// ```
    /// use seven_bridge::core::SeatId;
    ///
    /// assert_eq!(SeatId::new(2).next(4), SeatId::new(3));
    /// assert_eq!(SeatId::new(3).next(4), SeatId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, seat_count: usize) -> SeatId {
        SeatId(((self.index() + 1) % seat_count) as u8)
    }

    /// Iterate over all seat IDs for a match with `seat_count` seats.
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatId> {
        (0..seat_count as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use seven_bridge::core::{SeatId, SeatMap};
///
/// let mut tricks: SeatMap<u32> = SeatMap::new(4, |_| 0);
/// tricks[SeatId::new(1)] += 1;
/// assert_eq!(tricks[SeatId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(seat_count: usize, factory: impl Fn(SeatId) -> T) -> Self {
        assert!(seat_count > 0, "Must have at least 1 seat");
        assert!(seat_count <= 255, "At most 255 seats supported");

        let data = (0..seat_count as u8).map(|i| factory(SeatId(i))).collect();

        Self { data }
    }

    /// Number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: SeatId) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: SeatId) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (SeatId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over (SeatId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SeatId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over all seat IDs.
    pub fn seat_ids(&self) -> impl Iterator<Item = SeatId> {
        (0..self.data.len() as u8).map(SeatId)
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<SeatId> for SeatMap<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
