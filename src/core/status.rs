//! Engine status, turn phase, and draw source value types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;

/// Top-level engine status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Match created, not yet started.
    Waiting,
    /// Cards being dealt.
    Dealing,
    /// A manual seat is acting.
    PlayerTurn,
    /// An automated seat is acting.
    AiTurn,
    /// Discard made, claim decisions pending.
    ClaimWindow,
    /// Terminal state.
    GameOver,
}

/// Phase within a single turn. `None` on the engine when not mid-turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Exactly one draw, from stock or discard.
    Draw,
    /// Melds and extensions allowed; ends with a discard.
    Meld,
    /// Post-claim phase: the claimed card stood in for the draw.
    Discard,
}

/// Where a draw takes its card from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawSource {
    /// Top of the face-down stock.
    Stock,
    /// Top of the discard pile.
    Discard,
}

impl FromStr for DrawSource {
    type Err = GameError;

    /// Parse the wire form used by the presentation layer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stock" => Ok(DrawSource::Stock),
            "discard" => Ok(DrawSource::Discard),
            other => Err(GameError::InvalidSource(other.to_string())),
        }
    }
}

impl std::fmt::Display for DrawSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawSource::Stock => write!(f, "stock"),
            DrawSource::Discard => write!(f, "discard"),
        }
    }
}
