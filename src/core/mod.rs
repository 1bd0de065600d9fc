//! Core types: cards, identity, RNG.
//!
//! These are the leaf building blocks with no knowledge of levels or
//! session rules.

pub mod card;
pub mod rng;

pub use card::{Card, CardId, CardIdAllocator, Hand};
pub use rng::{GameRng, GameRngState};
