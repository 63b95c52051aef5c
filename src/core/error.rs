//! Engine failure taxonomy.
//!
//! Hard failures abort a command atomically and surface as `Err(GameError)`.
//! Recoverable rule rejections (invalid meld shape, card not in hand) are
//! ordinary control flow and surface as `Ok(false)` from the command that
//! rejected them.

use thiserror::Error;

use super::status::{GameStatus, TurnPhase};

/// Hard failures raised by engine commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The command is not valid for the current status/phase. No mutation
    /// was performed.
    #[error("command not allowed in status {status:?}, phase {phase:?}")]
    PhaseViolation {
        status: GameStatus,
        phase: Option<TurnPhase>,
    },

    /// Unrecognized draw-source string from the presentation layer.
    #[error("unrecognized draw source {0:?}")]
    InvalidSource(String),

    /// A discard draw was requested with an empty discard pile.
    #[error("cannot draw from an empty discard pile")]
    EmptyDiscard,

    /// Stock and discard pile simultaneously exhausted. Unreachable under
    /// the card-conservation invariant; kept as a defensive guard.
    #[error("stock exhausted and discard pile has no cards to recycle")]
    Exhaustion,
}
