//! Leaf value types: cards, seats, status enums, errors, and RNG.

pub mod card;
pub mod error;
pub mod rng;
pub mod seat;
pub mod status;

pub use card::{Card, Suit, MAX_RANK, MIN_RANK, SPECIAL_RANK};
pub use error::GameError;
pub use rng::GameRng;
pub use seat::{SeatId, SeatMap};
pub use status::{DrawSource, GameStatus, TurnPhase};
