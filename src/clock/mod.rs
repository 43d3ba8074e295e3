//! Logical clock and job scheduling.
//!
//! All delays in the engine (the countdown tick, the pair-resolution delays)
//! are entries on a `Scheduler` measured in logical milliseconds. Nothing
//! here touches the wall clock: the embedder advances time explicitly, so a
//! real UI can feed it frame deltas while tests feed it exact durations.
//!
//! ## Usage
//!
//! ```
//! use match_grid::clock::Scheduler;
//!
//! let mut clock: Scheduler<&str> = Scheduler::new();
//! clock.schedule_in(500, "win");
//! clock.schedule_in(1000, "flip-back");
//!
//! // Drain everything due within the next 750 ms, earliest first
//! let mut fired = Vec::new();
//! let target = clock.now_ms() + 750;
//! while let Some(job) = clock.pop_due(target) {
//!     fired.push(job);
//! }
//! clock.finish_advance(target);
//!
//! assert_eq!(fired, vec!["win"]);
//! assert_eq!(clock.now_ms(), 750);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Handle for cancelling a scheduled job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub u64);

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Job({})", self.0)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Entry<J> {
    id: JobId,
    due_at_ms: u64,
    job: J,
}

/// Deterministic delay scheduler over logical milliseconds.
///
/// Jobs fire in `(due time, schedule order)` order. The pending set is tiny
/// (a countdown tick plus at most one resolution delay), so entries live
/// inline and lookups are linear scans.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scheduler<J> {
    now_ms: u64,
    next_id: u64,
    pending: SmallVec<[Entry<J>; 4]>,
}

impl<J> Default for Scheduler<J> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            pending: SmallVec::new(),
        }
    }
}

impl<J> Scheduler<J> {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule a job `delay_ms` after the current logical time.
    pub fn schedule_in(&mut self, delay_ms: u64, job: J) -> JobId {
        let id = JobId(self.next_id);
        self.next_id += 1;
        self.pending.push(Entry {
            id,
            due_at_ms: self.now_ms.saturating_add(delay_ms),
            job,
        });
        id
    }

    /// Cancel a pending job. Returns whether it was still pending.
    pub fn cancel(&mut self, id: JobId) -> bool {
        if let Some(pos) = self.pending.iter().position(|e| e.id == id) {
            self.pending.remove(pos);
            true
        } else {
            false
        }
    }

    /// Number of pending jobs.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is scheduled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the next job, if any.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        self.pending.iter().map(|e| e.due_at_ms).min()
    }

    /// Pop the earliest job due at or before `target_ms`, advancing the
    /// clock to its due time.
    ///
    /// Callers loop until `None`, handling each job as it fires; a handler
    /// that schedules follow-up work relative to "now" lands at the fired
    /// job's due time, which keeps recurring schedules drift-free. Call
    /// `finish_advance(target_ms)` once the loop ends.
    pub fn pop_due(&mut self, target_ms: u64) -> Option<J> {
        let pos = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_at_ms <= target_ms)
            .min_by_key(|(_, e)| (e.due_at_ms, e.id.0))
            .map(|(pos, _)| pos)?;

        let entry = self.pending.remove(pos);
        self.now_ms = self.now_ms.max(entry.due_at_ms);
        Some(entry.job)
    }

    /// Move the clock to `target_ms` after a `pop_due` loop has drained it.
    pub fn finish_advance(&mut self, target_ms: u64) {
        self.now_ms = self.now_ms.max(target_ms);
    }
}
