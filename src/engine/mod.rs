//! Match orchestration: the engine state machine, claim windows, and the
//! snapshot/notification surface consumed by presentation layers.

mod claim;
mod game;
mod snapshot;

pub use claim::ClaimWindow;
pub use game::{EngineBuilder, GameEngine, LastDiscard, HAND_SIZE, MAX_SEATS, MIN_SEATS};
pub use snapshot::{
    ClaimOutcome, GameSnapshot, MatchResult, Notification, SeatScore, SeatSummary,
};
