//! # seven-bridge
//!
//! A headless engine for Seven Bridge, a rummy-family card game for 2-6
//! seats played with a standard 52-card pack. Melds are sets, runs, and the
//! special rank-7 shapes; discards can be claimed out of turn (pon from any
//! seat, chi only from the next seat); the first emptied hand wins and the
//! rest score their remaining cards as penalty points.
//!
//! ## Design Principles
//!
//! 1. **Headless**: no UI, no timers, no I/O. The caller drives every
//!    transition through commands and reads the notification stream;
//!    the one real-time concern (the claim deadline) is an explicit value
//!    the caller polls.
//!
//! 2. **Deterministic**: a single seed fixes the shuffle and every AI
//!    decision, so whole matches replay bit-for-bit.
//!
//! 3. **Validate fully, then apply**: commands either reject without
//!    mutating (`Err` for protocol misuse, `Ok(false)` for recoverable
//!    rejections) or run to completion.
//!
//! ## Modules
//!
//! - `core`: cards, seats, RNG, statuses, errors
//! - `deck`: the face-down stock
//! - `rules`: meld shapes and claim eligibility
//! - `player`: per-seat hand and meld state
//! - `ai`: heuristic seat policies in three difficulty tiers
//! - `engine`: the turn/claim state machine, snapshots, notifications

pub mod ai;
pub mod core;
pub mod deck;
pub mod engine;
pub mod player;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Card, DrawSource, GameError, GameRng, GameStatus, SeatId, SeatMap, Suit, TurnPhase,
    MAX_RANK, MIN_RANK, SPECIAL_RANK,
};

pub use crate::deck::{Deck, DECK_SIZE};

pub use crate::rules::{validator, Meld, MeldKind};

pub use crate::player::Player;

pub use crate::ai::{AiAgent, Difficulty, SeatController};

pub use crate::engine::{
    ClaimOutcome, ClaimWindow, EngineBuilder, GameEngine, GameSnapshot, LastDiscard,
    MatchResult, Notification, SeatScore, SeatSummary, HAND_SIZE, MAX_SEATS, MIN_SEATS,
};
