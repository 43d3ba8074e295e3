//! # match-grid
//!
//! A deterministic memory-matching (card-flip) game engine.
//!
//! ## Design Principles
//!
//! 1. **Rules only**: The engine owns card state, pair resolution, scoring,
//!    and the countdown. Rendering, theming, and input wiring live in the
//!    embedder; the `theme` configuration is carried opaquely.
//!
//! 2. **Logical time**: Every delay (the one-second countdown tick, the
//!    pair-resolution delays) is scheduled against a logical millisecond
//!    clock driven by `GameEngine::advance`. Tests never wait on a wall
//!    clock.
//!
//! 3. **Deterministic**: Deals come from a seeded ChaCha8 stream derived
//!    per round, so a seed fixes every shuffle of a session and snapshots
//!    restore byte-for-byte identical behavior.
//!
//! ## Architecture
//!
//! A user action requests a flip; the engine records it as the first or
//! second card of a pair, compares values on the second, and either locks
//! the pair face-up (match) or schedules a flip-back (mismatch). While a
//! pair resolves, further flips are rejected. Matching every pair wins the
//! round; the countdown reaching zero loses it; both deal a fresh round.
//! Observable changes stream out as `GameEvent`s.
//!
//! ## Modules
//!
//! - `core`: Cards, board state, configuration, RNG
//! - `clock`: Logical clock and job scheduling
//! - `events`: Event types and the drain queue
//! - `engine`: The game engine itself
//! - `session`: Snapshot capture/restore

pub mod clock;
pub mod core;
pub mod engine;
pub mod events;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardState, Card, CardIndex, CardValue, ConfigError, FaceState, FlipRecord, GameRng,
    GameRngState, GridConfig, PendingPair, Theme, DEFAULT_MISMATCH_DELAY_MS,
    DEFAULT_WIN_DELAY_MS,
};

pub use crate::clock::{JobId, Scheduler};

pub use crate::engine::GameEngine;

pub use crate::events::{EventQueue, GameEvent};

pub use crate::session::Snapshot;
