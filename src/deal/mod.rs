//! The level generator.
//!
//! A deal is constructed, not hoped for: the generator first draws a
//! correct path whose cards sum to the target, then pads the hand with
//! distractors and shuffles. Whatever the player does, some subset of the
//! hand always reaches the target.
//!
//! ## Algorithm
//!
//! 1. Draw `path_length` cards from the archetype-restricted pool,
//!    accumulating the running sum.
//! 2. The target is that sum, except for zero archetypes, which force the
//!    target to 0 by appending one corrective card (the additive inverse
//!    of the path sum) when the path does not already cancel out.
//! 3. Draw `distractors` cards from the full, unrestricted pool. A
//!    distractor may repeat a path value or even help reach the target;
//!    that is accepted.
//! 4. Shuffle path and distractors together so position carries no hint
//!    of origin.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Card, CardIdAllocator, GameRng, Hand};
use crate::levels::LevelSpec;

/// One dealt level: a hidden target and a shuffled hand.
///
/// Invariant: a non-empty subset of `hand` sums exactly to `target`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    /// The sum the player must reach.
    pub target: i32,

    /// The dealt cards, in visible (shuffled) order.
    pub hand: Hand,

    /// Display title taken from the level spec.
    pub title: String,
}

impl Deal {
    /// Deal a level from its spec.
    ///
    /// Deterministic given a seeded [`GameRng`]. Card ids come from the
    /// caller's allocator so identities stay unique across re-deals.
    ///
    /// # Panics
    ///
    /// Panics on a spec with a zero path length or an empty (restricted)
    /// pool. [`LevelTable::from_specs`](crate::levels::LevelTable::from_specs)
    /// rejects such specs at load, so this only fires on a hand-built,
    /// unvalidated spec.
    #[must_use]
    pub fn generate(spec: &LevelSpec, rng: &mut GameRng, ids: &mut CardIdAllocator) -> Self {
        assert!(
            spec.path_length >= 1,
            "level {}: path length must be at least 1",
            spec.level
        );
        let path_pool = spec.path_pool();
        assert!(
            !path_pool.is_empty(),
            "level {}: {:?} admits no value from the pool",
            spec.level,
            spec.archetype
        );

        let mut hand = Hand::new();
        let mut path_sum = 0i32;

        for _ in 0..spec.path_length {
            let value = *rng.choose(&path_pool).expect("path pool is non-empty");
            hand.push(Card::new(ids.alloc(), value));
            path_sum += value;
        }

        let target = if spec.archetype.forces_zero_target() {
            if path_sum != 0 {
                hand.push(Card::new(ids.alloc(), -path_sum));
            }
            0
        } else {
            path_sum
        };

        for _ in 0..spec.distractors {
            let value = *rng.choose(&spec.pool).expect("pool is non-empty");
            hand.push(Card::new(ids.alloc(), value));
        }

        rng.shuffle(&mut hand);

        trace!(
            level = spec.level,
            target,
            cards = hand.len(),
            "dealt level"
        );

        Self {
            target,
            hand,
            title: spec.title.clone(),
        }
    }
}
