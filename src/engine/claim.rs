//! The pending claim window.
//!
//! Opened after a discard when at least one manual seat may claim. The
//! window owns an explicit deadline instead of an ambient timer handle:
//! resolution clears the whole window, so a later `poll_claim_window` finds
//! nothing to expire and double-resolution is impossible.

use std::time::{Duration, Instant};

use crate::core::{Card, SeatId};

/// Claim state held between a discard and the next turn.
#[derive(Clone, Debug)]
pub struct ClaimWindow {
    /// The discarded card under claim.
    pub card: Card,
    /// Seat that discarded it.
    pub discarder: SeatId,
    /// Manual seats eligible to pon, in seat order.
    pub manual_pon: Vec<SeatId>,
    /// Manual seat eligible to chi (only ever the discarder's next seat).
    pub manual_chi: Option<SeatId>,
    /// First automated seat that accepted a pon at window open.
    pub ai_pon: Option<SeatId>,
    /// Automated next seat that accepted a chi at window open.
    pub ai_chi: Option<SeatId>,
    deadline: Instant,
}

impl ClaimWindow {
    /// Open a window with a deadline `time_limit` from `now`.
    #[must_use]
    pub fn open(
        card: Card,
        discarder: SeatId,
        manual_pon: Vec<SeatId>,
        manual_chi: Option<SeatId>,
        ai_pon: Option<SeatId>,
        ai_chi: Option<SeatId>,
        now: Instant,
        time_limit: Duration,
    ) -> Self {
        Self {
            card,
            discarder,
            manual_pon,
            manual_chi,
            ai_pon,
            ai_chi,
            deadline: now + time_limit,
        }
    }

    /// When the window times out.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Whether the deadline has passed.
    #[must_use]
    pub fn expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Whether `seat` may submit an external pon for this window.
    #[must_use]
    pub fn may_pon(&self, seat: SeatId) -> bool {
        self.manual_pon.contains(&seat)
    }

    /// Whether `seat` may submit an external chi for this window.
    #[must_use]
    pub fn may_chi(&self, seat: SeatId) -> bool {
        self.manual_chi == Some(seat)
    }
}
