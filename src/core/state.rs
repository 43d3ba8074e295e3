//! Board state: the dealt cards and the pending-pair state machine.
//!
//! ## BoardState
//!
//! One round's worth of mutable state:
//! - The shuffled card set (every value appearing exactly twice)
//! - Matched-pair count
//! - The pending pair (`Idle -> One -> Resolving -> Idle`)
//! - Flip history and per-round match/mismatch counters
//!
//! The board knows nothing about time; delays live in the engine. It also
//! performs no validation: the engine constructs it from an already-validated
//! `GridConfig`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardIndex, CardValue};
use super::rng::GameRng;

/// The pair currently mid-resolution, if any.
///
/// `Resolving` doubles as the lock that rejects further flips until the pair
/// settles. The two indices can never alias: the second flip of an already
/// face-up card is refused before it reaches this state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingPair {
    /// No card pending.
    #[default]
    Idle,
    /// One card revealed, waiting for its partner.
    One(CardIndex),
    /// Two cards revealed, comparison in flight.
    Resolving { first: CardIndex, second: CardIndex },
}

impl PendingPair {
    /// Whether no card is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, PendingPair::Idle)
    }

    /// Whether a pair is mid-resolution (the flip lock).
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        matches!(self, PendingPair::Resolving { .. })
    }

    /// The first revealed card, if any.
    #[must_use]
    pub fn first(&self) -> Option<CardIndex> {
        match self {
            PendingPair::Idle => None,
            PendingPair::One(first) | PendingPair::Resolving { first, .. } => Some(*first),
        }
    }

    /// The second revealed card, if resolving.
    #[must_use]
    pub fn second(&self) -> Option<CardIndex> {
        match self {
            PendingPair::Resolving { second, .. } => Some(*second),
            _ => None,
        }
    }
}

/// One resolved pair, kept in the flip history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipRecord {
    /// Round the pair was resolved in.
    pub round: u64,
    /// First revealed card.
    pub first: CardIndex,
    /// Second revealed card.
    pub second: CardIndex,
    /// Whether the values matched.
    pub matched: bool,
}

/// Mutable board state for one round, plus the cross-round flip history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardState {
    cards: Vec<Card>,
    total_pairs: u32,
    matched_pairs: u32,
    pending: PendingPair,
    round: u64,
    matches: u32,
    mismatches: u32,
    history: Vector<FlipRecord>,
}

impl BoardState {
    /// Deal a fresh board: `total_pairs` values, two cards each, uniformly
    /// shuffled.
    #[must_use]
    pub fn deal(total_pairs: u32, round: u64, rng: &mut GameRng) -> Self {
        let mut state = Self {
            cards: Vec::new(),
            total_pairs,
            matched_pairs: 0,
            pending: PendingPair::Idle,
            round,
            matches: 0,
            mismatches: 0,
            history: Vector::new(),
        };
        state.cards = Self::dealt_cards(total_pairs, rng);
        state
    }

    /// Replace the card set for a new round.
    ///
    /// Advances the round counter, clears the pending pair and per-round
    /// counters, and zeroes the matched count. The flip history is kept;
    /// records carry the round they belong to.
    pub fn redeal(&mut self, rng: &mut GameRng) {
        self.round = self.round.wrapping_add(1);
        self.cards = Self::dealt_cards(self.total_pairs, rng);
        self.matched_pairs = 0;
        self.pending = PendingPair::Idle;
        self.matches = 0;
        self.mismatches = 0;
    }

    fn dealt_cards(total_pairs: u32, rng: &mut GameRng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(total_pairs as usize * 2);
        for value in 1..=total_pairs {
            cards.push(Card::new(CardValue::new(value)));
            cards.push(Card::new(CardValue::new(value)));
        }
        rng.shuffle(&mut cards);
        cards
    }

    // === Cards ===

    /// All cards in grid order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by index.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.as_usize())
    }

    /// Mutable card lookup.
    pub(crate) fn card_mut(&mut self, index: CardIndex) -> Option<&mut Card> {
        self.cards.get_mut(index.as_usize())
    }

    // === Progress ===

    /// Number of pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> u32 {
        self.total_pairs
    }

    /// Pairs matched so far this round.
    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    /// Whether every pair on the board has been matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.total_pairs
    }

    /// Round counter, incremented on every redeal.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    // === Pending pair ===

    /// The pending pair state.
    #[must_use]
    pub fn pending(&self) -> PendingPair {
        self.pending
    }

    /// Whether a pair is mid-resolution (flips are rejected while true).
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.pending.is_resolving()
    }

    pub(crate) fn set_pending(&mut self, pending: PendingPair) {
        self.pending = pending;
    }

    pub(crate) fn clear_pending(&mut self) {
        self.pending = PendingPair::Idle;
    }

    // === Resolution bookkeeping ===

    /// Record a matched pair: bump the counters and append to history.
    pub(crate) fn record_match(&mut self, first: CardIndex, second: CardIndex) {
        self.matched_pairs += 1;
        self.matches += 1;
        self.history.push_back(FlipRecord {
            round: self.round,
            first,
            second,
            matched: true,
        });
    }

    /// Record a mismatched pair in the history.
    pub(crate) fn record_mismatch(&mut self, first: CardIndex, second: CardIndex) {
        self.mismatches += 1;
        self.history.push_back(FlipRecord {
            round: self.round,
            first,
            second,
            matched: false,
        });
    }

    // === History & stats ===

    /// Every resolved pair across all rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<FlipRecord> {
        &self.history
    }

    /// Matched pairs this round (equals `matched_pairs`).
    #[must_use]
    pub fn run_matches(&self) -> u32 {
        self.matches
    }

    /// Mismatched pairs this round.
    #[must_use]
    pub fn run_mismatches(&self) -> u32 {
        self.mismatches
    }
}
