//! Cards and card identity.
//!
//! A [`Card`] is an immutable signed-integer value with a session-unique
//! identity. Two cards may carry the same value; gameplay tells them apart
//! by [`CardId`], so "which copy of +2 was played" stays well-defined even
//! across a serialization boundary.
//!
//! Ids come from a [`CardIdAllocator`] owned by the session and are never
//! reused: a re-dealt level gets entirely fresh cards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a card within one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// An immutable integer card.
///
/// Created only when a level is dealt; never mutated afterwards. Displays
/// with an explicit sign (`+3`, `-2`) so positive and negative charges read
/// distinctly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    value: i32,
}

impl Card {
    pub(crate) fn new(id: CardId, value: i32) -> Self {
        Self { id, value }
    }

    /// The card's identity.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// The card's signed value.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}", self.value)
    }
}

/// A dealt hand.
///
/// Standard-table hands top out at 9 cards, so they live inline without
/// heap allocation.
pub type Hand = SmallVec<[Card; 12]>;

/// Monotonic card ID allocator.
///
/// One per session. Ids are never reused, which keeps conservation checks
/// (`hand` and `history` partition the dealt set) meaningful across
/// re-deals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIdAllocator {
    next: u32,
}

impl CardIdAllocator {
    /// Create an allocator starting at ID 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next card ID.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId::new(self.next);
        self.next += 1;
        id
    }
}
