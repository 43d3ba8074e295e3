//! Core types: cards, board state, RNG, configuration.
//!
//! This module contains the rule-free building blocks. The flip/match/timer
//! orchestration lives in `crate::engine`.

pub mod card;
pub mod config;
pub mod rng;
pub mod state;

pub use card::{Card, CardIndex, CardValue, FaceState};
pub use config::{
    ConfigError, GridConfig, Theme, DEFAULT_MISMATCH_DELAY_MS, DEFAULT_WIN_DELAY_MS,
};
pub use rng::{GameRng, GameRngState};
pub use state::{BoardState, FlipRecord, PendingPair};
