//! # polarity
//!
//! Level generator and session state machine for a single-player integer
//! card puzzle: play a subset of a dealt hand whose values sum to a hidden
//! target before the hand runs out.
//!
//! ## Design Principles
//!
//! 1. **Constructed solvability**: every deal embeds a correct path drawn
//!    before distractors are added, so a solution always exists.
//!
//! 2. **Explicit ownership**: a [`Session`] is a plain owned value with
//!    no ambient globals, so independent play-throughs coexist.
//!
//! 3. **Injectable randomness**: all sampling goes through [`GameRng`];
//!    seeded runs reproduce exactly, normal play seeds from entropy.
//!
//! 4. **Configuration over branching**: the level run is a data table
//!    ([`LevelTable`]) validated at load, not a ladder of special cases.
//!
//! ## Modules
//!
//! - `core`: cards, card identity, RNG
//! - `levels`: archetypes and the validated level table
//! - `deal`: the level generator
//! - `session`: the state machine mediating every player action
//! - `view`: pure read-only helpers (totals, balance, equation text)
//!
//! ## Quick start
//!
//! ```
//! use polarity::{GameRng, LevelTable, Session, Status};
//!
//! let mut session = Session::new(LevelTable::standard(), GameRng::new(42));
//! assert_eq!(session.status(), Status::Playing);
//!
//! // Play the first card in the hand; the session re-evaluates status.
//! assert!(session.play_card(0));
//! assert_eq!(session.total(), session.history()[0].value());
//!
//! // Take it back; the card rejoins the hand at the tail.
//! assert!(session.undo());
//! assert!(session.history().is_empty());
//! ```

pub mod core;
pub mod deal;
pub mod levels;
pub mod session;
pub mod view;

pub use crate::core::{Card, CardId, CardIdAllocator, GameRng, GameRngState, Hand};
pub use crate::deal::Deal;
pub use crate::levels::{Archetype, ConfigError, LevelSpec, LevelTable};
pub use crate::session::{Message, Session, Severity, Status};
pub use crate::view::{balance, current_total, equation, Balance};
