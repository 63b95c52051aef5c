//! State snapshots and the notification surface.
//!
//! After every mutating command the engine emits a `StateChanged` snapshot;
//! the discrete event variants exist for UI affordances and carry nothing a
//! snapshot doesn't already imply.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::{Card, DrawSource, GameStatus, SeatId, TurnPhase};
use crate::rules::Meld;

/// Public per-seat summary: everything any seat may see about another.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeatSummary {
    /// Display name.
    pub name: String,
    /// Number of cards held (contents hidden).
    pub hand_size: usize,
    /// Face-up melds.
    pub melds: Vector<Meld>,
    /// Whether an AI policy controls the seat.
    pub automated: bool,
}

/// Full state snapshot for the presentation layer.
///
/// Hand contents are revealed only for the designated local seat.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub phase: Option<TurnPhase>,
    pub current_seat: SeatId,
    pub stock_count: usize,
    pub discard_pile: Vector<Card>,
    pub seats: Vec<SeatSummary>,
    pub local_seat: SeatId,
    pub local_hand: Vec<Card>,
}

/// Per-seat final score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatScore {
    pub seat: SeatId,
    pub name: String,
    /// Remaining-hand penalty points; 0 for the winner.
    pub points: u32,
    pub winner: bool,
}

/// Terminal result of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: SeatId,
    pub scores: Vec<SeatScore>,
}

/// How an open claim window resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimOutcome {
    /// The discard completed a set for `seat`.
    Pon { seat: SeatId, card: Card },
    /// The discard completed a run for `seat`.
    Chi { seat: SeatId, card: Card },
    /// Nobody claimed; turn order proceeds.
    Pass,
}

/// Engine notifications, drained by the presentation layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Notification {
    /// Emitted after every mutating command.
    StateChanged(GameSnapshot),
    /// A seat drew a card. The card itself is not revealed: the snapshot
    /// does not expose other seats' hands either.
    CardDrawn { seat: SeatId, source: DrawSource },
    /// A new meld was placed.
    MeldPlayed { seat: SeatId, meld: Meld },
    /// An existing meld was extended (possibly on another seat's meld).
    MeldExtended {
        seat: SeatId,
        owner: SeatId,
        meld_index: usize,
        card: Card,
    },
    /// A card hit the discard pile.
    CardDiscarded { seat: SeatId, card: Card },
    /// A discard opened claim opportunities.
    ClaimWindowOpened {
        card: Card,
        /// Seats eligible to pon.
        pon_seats: Vec<SeatId>,
        /// The one seat eligible to chi, if any.
        chi_seat: Option<SeatId>,
        /// How long a manual seat has to decide.
        time_limit: Duration,
    },
    /// The claim window closed.
    ClaimResolved(ClaimOutcome),
    /// Terminal: final scores.
    GameOver(MatchResult),
}
