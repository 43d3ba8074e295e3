//! The game engine: flip resolution, scoring, countdown, round lifecycle.
//!
//! `GameEngine` owns the board, the logical clock, and the event queue. The
//! embedder calls in with three kinds of stimulus:
//!
//! - `flip(index)` — a user requested a card flip
//! - `advance(elapsed_ms)` — logical time passed (frame delta or test step)
//! - lifecycle controls — `start_timer`, `pause_timer`, `resume_timer`,
//!   `reset_game`
//!
//! Everything observable comes back out through read-only accessors and
//! `drain_events()`.
//!
//! ## Turn state machine
//!
//! ```text
//! Idle --flip--> One(first) --flip--> Resolving --match----> Idle (cards stay up)
//!                                         |
//!                                         +------mismatch--> Idle after the
//!                                                            flip-back delay
//! ```
//!
//! While `Resolving`, every flip request is rejected outright; exactly one
//! pair can be in resolution at a time. A match on the final pair schedules
//! the win completion instead of unlocking, and the win completion resets
//! the round.

use serde::{Deserialize, Serialize};

use crate::clock::{JobId, Scheduler};
use crate::core::{
    BoardState, Card, CardIndex, ConfigError, GameRng, GridConfig, PendingPair,
};
use crate::events::{EventQueue, GameEvent};

/// Countdown tick interval.
const TICK_INTERVAL_MS: u64 = 1000;

/// Work the engine has scheduled against its logical clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Job {
    /// Return a mismatched pair face-down and release the flip lock.
    FlipBack { first: CardIndex, second: CardIndex },
    /// Emit the win and reset the round.
    WinReset,
    /// One countdown second elapsed.
    Tick,
}

/// The memory-matching game engine.
///
/// Created once per session; `reset_game` re-deals in place. One instance is
/// single-threaded and event-driven — all mutation happens inside `flip`,
/// `advance`, and the lifecycle controls.
///
/// ## Example
///
/// ```
/// use match_grid::{CardIndex, GameEngine, GridConfig};
///
/// let mut engine = GameEngine::new(GridConfig::new(2, 2), 42).unwrap();
/// engine.start_timer();
///
/// engine.flip(CardIndex::new(0));
/// engine.advance(1000); // one countdown tick
///
/// assert_eq!(engine.remaining_secs(), 59);
/// assert!(!engine.drain_events().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    pub(crate) config: GridConfig,
    pub(crate) rng: GameRng,
    pub(crate) board: BoardState,
    pub(crate) clock: Scheduler<Job>,
    pub(crate) events: EventQueue,
    pub(crate) remaining_secs: u32,
    pub(crate) timer_running: bool,
    pub(crate) tick_job: Option<JobId>,
    pub(crate) resolve_job: Option<JobId>,
}

impl GameEngine {
    /// Create an engine for the given configuration and seed.
    ///
    /// The first round is dealt immediately. Returns `ConfigError` for a
    /// grid that cannot be paired or a zero time limit; an invalid
    /// configuration never produces a playable engine.
    pub fn new(config: GridConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = GameRng::new(seed);
        let round = 1;
        let mut deal_rng = rng.for_round(round);
        let board = BoardState::deal(config.total_pairs(), round, &mut deal_rng);
        log::info!(
            "engine created: {}x{} grid, {} pairs, {} s limit",
            config.rows,
            config.cols,
            config.total_pairs(),
            config.time_limit_secs
        );

        Ok(Self {
            remaining_secs: config.time_limit_secs,
            config,
            rng,
            board,
            clock: Scheduler::new(),
            events: EventQueue::new(),
            timer_running: false,
            tick_job: None,
            resolve_job: None,
        })
    }

    // === Flip handling ===

    /// Request a flip.
    ///
    /// Returns `true` when the card actually flipped face-up. Requests are
    /// rejected while a pair is resolving, for out-of-range indices, and for
    /// cards that are already face-up — a rejected card stays exactly as it
    /// was.
    pub fn flip(&mut self, index: CardIndex) -> bool {
        if self.board.is_resolving() {
            log::debug!("{} rejected: pair resolution in flight", index);
            return false;
        }

        let flipped = match self.board.card_mut(index) {
            Some(card) => card.request_flip(),
            None => false,
        };
        if !flipped {
            return false;
        }

        self.events.push(GameEvent::CardRevealed { card: index });
        self.on_card_revealed(index);
        true
    }

    /// React to a successful reveal: first card waits, second card resolves.
    fn on_card_revealed(&mut self, index: CardIndex) {
        match self.board.pending() {
            PendingPair::Idle => {
                self.board.set_pending(PendingPair::One(index));
            }
            PendingPair::One(first) => {
                self.board.set_pending(PendingPair::Resolving {
                    first,
                    second: index,
                });
                self.resolve_pair(first, index);
            }
            // flip() rejects requests while resolving
            PendingPair::Resolving { .. } => {}
        }
    }

    fn resolve_pair(&mut self, first: CardIndex, second: CardIndex) {
        let matched = match (self.board.card(first), self.board.card(second)) {
            (Some(a), Some(b)) => a.value() == b.value(),
            _ => false,
        };

        if matched {
            self.board.record_match(first, second);
            if let Some(card) = self.board.card_mut(first) {
                card.mark_matched();
            }
            if let Some(card) = self.board.card_mut(second) {
                card.mark_matched();
            }
            self.events.push(GameEvent::PairResolved {
                first,
                second,
                matched: true,
            });
            self.events.push(GameEvent::ScoreChanged {
                matched_pairs: self.board.matched_pairs(),
            });
            log::debug!(
                "{} and {} matched ({}/{})",
                first,
                second,
                self.board.matched_pairs(),
                self.board.total_pairs()
            );

            if self.board.is_complete() {
                // Keep the lock held until the win completes
                self.resolve_job =
                    Some(self.clock.schedule_in(self.config.win_delay_ms, Job::WinReset));
            } else {
                self.board.clear_pending();
            }
        } else {
            self.board.record_mismatch(first, second);
            log::debug!("{} and {} mismatched", first, second);
            self.resolve_job = Some(self.clock.schedule_in(
                self.config.mismatch_delay_ms,
                Job::FlipBack { first, second },
            ));
        }
    }

    // === Time ===

    /// Advance the logical clock, firing every scheduled job that falls due
    /// within `elapsed_ms`, in due-time order.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let target = self.clock.now_ms().saturating_add(elapsed_ms);
        while let Some(job) = self.clock.pop_due(target) {
            self.handle_job(job);
        }
        self.clock.finish_advance(target);
    }

    fn handle_job(&mut self, job: Job) {
        match job {
            Job::FlipBack { first, second } => {
                self.resolve_job = None;
                if let Some(card) = self.board.card_mut(first) {
                    card.reset();
                }
                if let Some(card) = self.board.card_mut(second) {
                    card.reset();
                }
                self.board.clear_pending();
                self.events.push(GameEvent::PairResolved {
                    first,
                    second,
                    matched: false,
                });
            }
            Job::WinReset => {
                self.resolve_job = None;
                log::info!("round {} won", self.board.round());
                self.events.push(GameEvent::GameWon);
                self.reset_game();
            }
            Job::Tick => {
                self.tick_job = None;
                if !self.timer_running {
                    return;
                }
                self.remaining_secs = self.remaining_secs.saturating_sub(1);
                self.events.push(GameEvent::TimerTick {
                    remaining_secs: self.remaining_secs,
                });
                if self.remaining_secs == 0 {
                    self.timer_running = false;
                    log::info!("time up on round {}", self.board.round());
                    self.events.push(GameEvent::TimeUp);
                    self.reset_game();
                } else {
                    self.tick_job = Some(self.clock.schedule_in(TICK_INTERVAL_MS, Job::Tick));
                }
            }
        }
    }

    // === Timer controls ===

    /// Start the countdown from the full time limit.
    ///
    /// Emits an immediate `TimerTick` with the full remaining time, then
    /// ticks once per second of logical time.
    pub fn start_timer(&mut self) {
        self.remaining_secs = self.config.time_limit_secs;
        self.events.push(GameEvent::TimerTick {
            remaining_secs: self.remaining_secs,
        });
        self.arm_timer();
    }

    /// Halt the countdown, keeping the remaining time. No-op when stopped.
    pub fn pause_timer(&mut self) {
        if !self.timer_running {
            return;
        }
        self.timer_running = false;
        if let Some(id) = self.tick_job.take() {
            self.clock.cancel(id);
        }
    }

    /// Re-arm the countdown from the current remaining time (not the full
    /// limit). No-op when already running.
    pub fn resume_timer(&mut self) {
        if self.timer_running {
            return;
        }
        self.arm_timer();
    }

    fn arm_timer(&mut self) {
        if let Some(id) = self.tick_job.take() {
            self.clock.cancel(id);
        }
        self.timer_running = true;
        self.tick_job = Some(self.clock.schedule_in(TICK_INTERVAL_MS, Job::Tick));
    }

    // === Lifecycle ===

    /// Abandon the current round and deal a fresh one.
    ///
    /// Any pending pair (and its in-flight resolution delay) is dropped,
    /// the matched count is zeroed, and the remaining time is restored to
    /// the full limit. Whether the timer is running is left unchanged.
    pub fn reset_game(&mut self) {
        if let Some(id) = self.resolve_job.take() {
            self.clock.cancel(id);
        }

        let next_round = self.board.round().wrapping_add(1);
        let mut deal_rng = self.rng.for_round(next_round);
        self.board.redeal(&mut deal_rng);
        self.remaining_secs = self.config.time_limit_secs;

        log::info!(
            "round {} dealt ({} pairs)",
            self.board.round(),
            self.board.total_pairs()
        );
        self.events.push(GameEvent::RoundStarted {
            round: self.board.round(),
        });
        self.events.push(GameEvent::ScoreChanged { matched_pairs: 0 });
    }

    // === Observables ===

    /// The configuration the engine was built with (theme included,
    /// untouched).
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// All cards in grid order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.board.cards()
    }

    /// Look up a single card.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.board.card(index)
    }

    /// Pairs matched so far this round.
    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.board.matched_pairs()
    }

    /// The visible score. The score of a round is its matched-pair count.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.board.matched_pairs()
    }

    /// Number of pairs on the grid.
    #[must_use]
    pub fn total_pairs(&self) -> u32 {
        self.board.total_pairs()
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Whether the countdown is ticking.
    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer_running
    }

    /// Whether a pair is mid-resolution (flips are rejected while true).
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.board.is_resolving()
    }

    /// The pending-pair state.
    #[must_use]
    pub fn pending(&self) -> PendingPair {
        self.board.pending()
    }

    /// Round counter, starting at 1 and bumped on every reset.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.board.round()
    }

    /// Every resolved pair across all rounds.
    #[must_use]
    pub fn history(&self) -> &im::Vector<crate::core::FlipRecord> {
        self.board.history()
    }

    /// Matches this round.
    #[must_use]
    pub fn run_matches(&self) -> u32 {
        self.board.run_matches()
    }

    /// Mismatches this round.
    #[must_use]
    pub fn run_mismatches(&self) -> u32 {
        self.board.run_mismatches()
    }

    /// Current logical time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Take all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }
}
