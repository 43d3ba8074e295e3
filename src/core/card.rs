//! Card identity and face state.
//!
//! Every tile on the grid is a `Card`: a pair-group value plus a face state.
//! Cards are addressed by `CardIndex` (their position in the dealt grid) and
//! grouped by `CardValue` (exactly two cards share each value).
//!
//! ## Face lifecycle
//!
//! ```text
//! Down --request_flip--> Up --mark_matched--> Matched
//!   ^                     |
//!   +--------reset--------+
//! ```
//!
//! A card flips face-up at most once per round: `request_flip` only succeeds
//! from `Down`, and the engine reacts to that transition exactly once. A
//! matched card stays face-up until the round is re-dealt.

use serde::{Deserialize, Serialize};

/// Position of a card in the dealt grid, row-major.
///
/// Indices are stable for the duration of a round and are re-assigned when
/// the grid is re-dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardIndex(pub u16);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Convert to a `usize` for slice indexing.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Pair-group identifier. Not unique per card: each value appears on exactly
/// two cards in a dealt grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardValue(pub u32);

impl CardValue {
    /// Create a new card value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Value({})", self.0)
    }
}

/// Face state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceState {
    /// Face-down, flippable.
    #[default]
    Down,
    /// Face-up, awaiting pair resolution.
    Up,
    /// Face-up permanently for the rest of the round.
    Matched,
}

/// A single tile: pair-group value plus face state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    value: CardValue,
    face: FaceState,
}

impl Card {
    /// Create a new face-down card.
    #[must_use]
    pub fn new(value: CardValue) -> Self {
        Self {
            value,
            face: FaceState::Down,
        }
    }

    /// The card's pair-group value.
    #[must_use]
    pub fn value(&self) -> CardValue {
        self.value
    }

    /// The card's face state.
    #[must_use]
    pub fn face(&self) -> FaceState {
        self.face
    }

    /// Whether the card is currently face-up (`Up` or `Matched`).
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.face != FaceState::Down
    }

    /// Return the card to face-down. Idempotent.
    pub fn reset(&mut self) {
        self.face = FaceState::Down;
    }

    /// Request a flip.
    ///
    /// Returns `true` exactly when the card transitions `Down -> Up`. A card
    /// that is already face-up (including matched) is left untouched and the
    /// request reports `false`, so a double flip never produces a second
    /// reveal.
    pub(crate) fn request_flip(&mut self) -> bool {
        if self.face != FaceState::Down {
            return false;
        }
        self.face = FaceState::Up;
        true
    }

    /// Lock the card face-up for the rest of the round.
    pub(crate) fn mark_matched(&mut self) {
        self.face = FaceState::Matched;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_index() {
        let idx = CardIndex::new(7);
        assert_eq!(idx.raw(), 7);
        assert_eq!(idx.as_usize(), 7);
        assert_eq!(format!("{}", idx), "Card(7)");
    }

    #[test]
    fn test_card_value() {
        let value = CardValue::new(3);
        assert_eq!(value.raw(), 3);
        assert_eq!(format!("{}", value), "Value(3)");
    }

    #[test]
    fn test_new_card_is_face_down() {
        let card = Card::new(CardValue::new(1));
        assert_eq!(card.face(), FaceState::Down);
        assert!(!card.is_flipped());
    }

    #[test]
    fn test_request_flip_once() {
        let mut card = Card::new(CardValue::new(1));

        assert!(card.request_flip());
        assert_eq!(card.face(), FaceState::Up);
        assert!(card.is_flipped());

        // Second request is a no-op
        assert!(!card.request_flip());
        assert_eq!(card.face(), FaceState::Up);
    }

    #[test]
    fn test_reset_makes_card_flippable_again() {
        let mut card = Card::new(CardValue::new(1));

        assert!(card.request_flip());
        card.reset();
        assert_eq!(card.face(), FaceState::Down);
        assert!(card.request_flip());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut card = Card::new(CardValue::new(1));
        card.reset();
        card.reset();
        assert_eq!(card.face(), FaceState::Down);
    }

    #[test]
    fn test_matched_card_cannot_flip() {
        let mut card = Card::new(CardValue::new(1));

        assert!(card.request_flip());
        card.mark_matched();
        assert_eq!(card.face(), FaceState::Matched);
        assert!(card.is_flipped());
        assert!(!card.request_flip());
        assert_eq!(card.face(), FaceState::Matched);
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(CardValue::new(5));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
