//! Heuristic decision policies for automated seats.

pub mod agent;

pub use agent::{AiAgent, Difficulty};

use serde::{Deserialize, Serialize};

/// Who controls a seat: an external command stream or an AI policy.
///
/// The `Player` record stays plain data; the policy is attached per seat.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum SeatController {
    /// Commands arrive from the presentation layer.
    Manual,
    /// The engine consults the agent.
    Automated(AiAgent),
}

impl SeatController {
    /// The agent, if this seat is automated.
    #[must_use]
    pub fn agent(&self) -> Option<&AiAgent> {
        match self {
            SeatController::Manual => None,
            SeatController::Automated(agent) => Some(agent),
        }
    }

    /// Whether this seat is automated.
    #[must_use]
    pub fn is_automated(&self) -> bool {
        matches!(self, SeatController::Automated(_))
    }
}
