//! Session snapshots.
//!
//! A `Snapshot` captures everything needed to put an engine back exactly
//! where it was: configuration, RNG state, the board (cards, pending pair,
//! history), the logical clock with its queued jobs, and the countdown.
//! Restoring mid-round resumes in-flight resolution delays at the point
//! they were interrupted.
//!
//! Pending events are deliberately not captured — they are transient
//! notifications for the embedder's display; drain them before snapshotting.
//!
//! Byte encoding goes through bincode, so a snapshot can be dropped into a
//! file or a settings store as-is.

use serde::{Deserialize, Serialize};

use crate::clock::{JobId, Scheduler};
use crate::core::{BoardState, ConfigError, GameRng, GameRngState, GridConfig};
use crate::engine::{GameEngine, Job};
use crate::events::EventQueue;

/// A serializable capture of a full engine state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    config: GridConfig,
    rng: GameRngState,
    board: BoardState,
    clock: Scheduler<Job>,
    remaining_secs: u32,
    timer_running: bool,
    tick_job: Option<JobId>,
    resolve_job: Option<JobId>,
}

impl Snapshot {
    /// Capture the current state of an engine.
    #[must_use]
    pub fn capture(engine: &GameEngine) -> Self {
        Self {
            config: engine.config.clone(),
            rng: engine.rng.state(),
            board: engine.board.clone(),
            clock: engine.clock.clone(),
            remaining_secs: engine.remaining_secs,
            timer_running: engine.timer_running,
            tick_job: engine.tick_job,
            resolve_job: engine.resolve_job,
        }
    }

    /// Rebuild an engine from this snapshot.
    ///
    /// The configuration is re-validated; a snapshot decoded from tampered
    /// bytes cannot smuggle in an unpairable grid.
    pub fn restore(self) -> Result<GameEngine, ConfigError> {
        self.config.validate()?;

        Ok(GameEngine {
            config: self.config,
            rng: GameRng::from_state(&self.rng),
            board: self.board,
            clock: self.clock,
            events: EventQueue::new(),
            remaining_secs: self.remaining_secs,
            timer_running: self.timer_running,
            tick_job: self.tick_job,
            resolve_job: self.resolve_job,
        })
    }

    /// Encode to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl GameEngine {
    /// Capture a snapshot of the current state. See [`Snapshot`].
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
