//! Engine events.
//!
//! The engine never calls into the presentation layer. Everything the UI
//! needs to react to — reveals, score changes, timer updates, round
//! outcomes — is pushed onto an `EventQueue` that the embedder drains after
//! each call into the engine. This keeps the game rules decoupled from any
//! rendering technology.

use serde::{Deserialize, Serialize};

use crate::core::CardIndex;

/// Something observable that happened inside the engine.
///
/// Events are emitted in the order they happened; draining returns them
/// oldest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card flipped face-up.
    CardRevealed { card: CardIndex },

    /// A revealed pair settled.
    ///
    /// On a match both cards stay face-up; on a mismatch both have been
    /// returned face-down by the time this is emitted.
    PairResolved {
        first: CardIndex,
        second: CardIndex,
        matched: bool,
    },

    /// The matched-pair count changed (score display update).
    ScoreChanged { matched_pairs: u32 },

    /// Countdown display update.
    TimerTick { remaining_secs: u32 },

    /// The countdown reached zero. A round reset follows.
    TimeUp,

    /// Every pair was matched. A round reset follows.
    GameWon,

    /// A fresh round was dealt.
    RoundStarted { round: u64 },
}

/// FIFO queue of pending events.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, oldest first, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Peek at pending events without draining.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }
}
