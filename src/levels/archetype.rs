//! Level archetypes.
//!
//! An archetype shapes how a level's correct path is drawn and whether the
//! target collapses to zero. The generator asks two questions of it:
//! which pool values may appear on the path, and whether the level is a
//! zero-sum level.

use serde::{Deserialize, Serialize};

/// The flavor of a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Path draws positives only.
    PosOnly,
    /// Path draws negatives only.
    NegOnly,
    /// Zero-sum level over a small pool.
    Zero,
    /// Mixed pool leaning positive.
    MixedPos,
    /// Mixed pool leaning negative.
    MixedNeg,
    /// Larger positives, longer path.
    PosMid,
    /// Zero-sum level over a mid-size pool.
    ZeroMid,
    /// Mixed pool with a three-step path.
    MixedStep3,
    /// Wide-range values.
    Chaos,
    /// Final level.
    Boss,
}

impl Archetype {
    /// Whether `value` may be drawn for the correct path.
    ///
    /// `PosOnly` admits positives, `NegOnly` negatives; every other
    /// archetype draws from the full pool. Distractors always draw from
    /// the full pool regardless of archetype.
    #[must_use]
    pub const fn admits(self, value: i32) -> bool {
        match self {
            Archetype::PosOnly => value > 0,
            Archetype::NegOnly => value < 0,
            _ => true,
        }
    }

    /// Whether the level's target is forced to zero.
    #[must_use]
    pub const fn forces_zero_target(self) -> bool {
        matches!(self, Archetype::Zero | Archetype::ZeroMid)
    }
}
