//! Level configuration table.
//!
//! Levels are data, not branches: each [`LevelSpec`] carries its candidate
//! pool, archetype, path length, distractor count, and display title. A
//! [`LevelTable`] holds the specs for a whole run, keyed by level number
//! and validated at load so the generator never sees a defective spec.
//!
//! Lookups past the final level resolve to the last entry, matching a run
//! that keeps replaying its hardest level.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::archetype::Archetype;

/// Configuration defect detected while loading a level table.
///
/// These are setup errors, not gameplay outcomes: a table that fails to
/// load never reaches a session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The table has no levels at all.
    #[error("level table is empty")]
    EmptyTable,

    /// Level numbers must run 1, 2, 3, ... without gaps.
    #[error("level {found} out of sequence, expected level {expected}")]
    NonContiguous {
        /// Level number found in the table.
        found: u32,
        /// Level number required at this position.
        expected: u32,
    },

    /// A correct path needs at least one step.
    #[error("level {level}: path length must be at least 1")]
    ZeroPathLength {
        /// Offending level.
        level: u32,
    },

    /// The candidate pool has no values.
    #[error("level {level}: candidate pool is empty")]
    EmptyPool {
        /// Offending level.
        level: u32,
    },

    /// Pool values must be distinct.
    #[error("level {level}: duplicate pool value {value}")]
    DuplicatePoolValue {
        /// Offending level.
        level: u32,
        /// The repeated value.
        value: i32,
    },

    /// The archetype's path restriction leaves nothing to draw.
    #[error("level {level}: {archetype:?} admits no value from the pool")]
    EmptyRestrictedPool {
        /// Offending level.
        level: u32,
        /// The restricting archetype.
        archetype: Archetype,
    },
}

/// Static configuration for one level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    /// Level number, 1-based.
    pub level: u32,

    /// Candidate pool of distinct values, in display order.
    pub pool: Vec<i32>,

    /// Archetype governing path restriction and zero targets.
    pub archetype: Archetype,

    /// Number of draws on the correct path.
    pub path_length: usize,

    /// Number of distractor cards dealt alongside the path.
    pub distractors: usize,

    /// Display title for the level.
    pub title: String,
}

impl LevelSpec {
    /// Create a level spec.
    pub fn new(
        level: u32,
        pool: Vec<i32>,
        archetype: Archetype,
        path_length: usize,
        distractors: usize,
        title: impl Into<String>,
    ) -> Self {
        Self {
            level,
            pool,
            archetype,
            path_length,
            distractors,
            title: title.into(),
        }
    }

    /// Pool values the archetype admits for the correct path.
    #[must_use]
    pub fn path_pool(&self) -> Vec<i32> {
        self.pool
            .iter()
            .copied()
            .filter(|&v| self.archetype.admits(v))
            .collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.path_length == 0 {
            return Err(ConfigError::ZeroPathLength { level: self.level });
        }
        if self.pool.is_empty() {
            return Err(ConfigError::EmptyPool { level: self.level });
        }
        for (i, &value) in self.pool.iter().enumerate() {
            if self.pool[..i].contains(&value) {
                return Err(ConfigError::DuplicatePoolValue {
                    level: self.level,
                    value,
                });
            }
        }
        if self.path_pool().is_empty() {
            return Err(ConfigError::EmptyRestrictedPool {
                level: self.level,
                archetype: self.archetype,
            });
        }
        Ok(())
    }
}

/// The level table for a run: specs keyed by level number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTable {
    specs: Vec<LevelSpec>,
}

impl LevelTable {
    /// Build a table from specs, validating every entry.
    ///
    /// Levels must be contiguous from 1. Fails with the first defect
    /// found.
    pub fn from_specs(specs: Vec<LevelSpec>) -> Result<Self, ConfigError> {
        if specs.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        for (i, spec) in specs.iter().enumerate() {
            let expected = i as u32 + 1;
            if spec.level != expected {
                return Err(ConfigError::NonContiguous {
                    found: spec.level,
                    expected,
                });
            }
            spec.validate()?;
        }
        Ok(Self { specs })
    }

    /// The built-in ten-level run.
    ///
    /// Distractor counts follow the tier policy: 2 for the opening levels,
    /// 3 from level 6, 4 from level 9.
    #[must_use]
    pub fn standard() -> Self {
        let specs = vec![
            LevelSpec::new(
                1,
                vec![1, 2, 3],
                Archetype::PosOnly,
                2,
                2,
                "L1: Energy Charge (positives)",
            ),
            LevelSpec::new(
                2,
                vec![-1, -2, -3],
                Archetype::NegOnly,
                2,
                2,
                "L2: Abyssal Dive (negatives)",
            ),
            LevelSpec::new(
                3,
                vec![-1, 1],
                Archetype::Zero,
                2,
                2,
                "L3: Annihilation (zero out)",
            ),
            LevelSpec::new(
                4,
                vec![-2, -1, 1, 2, 3],
                Archetype::MixedPos,
                3,
                2,
                "L4: Chaotic Balance I (leans plus)",
            ),
            LevelSpec::new(
                5,
                vec![-3, -2, -1, 1, 2],
                Archetype::MixedNeg,
                3,
                2,
                "L5: Chaotic Balance II (leans minus)",
            ),
            LevelSpec::new(
                6,
                vec![2, 3, 4, 5],
                Archetype::PosMid,
                3,
                3,
                "L6: Energy Overload (advanced)",
            ),
            LevelSpec::new(
                7,
                vec![-5, -3, 3, 5],
                Archetype::ZeroMid,
                4,
                3,
                "L7: Void Circuit (zero out)",
            ),
            LevelSpec::new(
                8,
                vec![-4, -2, 3, 6],
                Archetype::MixedStep3,
                3,
                3,
                "L8: Triple Play (tactics)",
            ),
            LevelSpec::new(
                9,
                vec![-8, -5, 4, 7, 9],
                Archetype::Chaos,
                4,
                4,
                "L9: Turbulence (big numbers)",
            ),
            LevelSpec::new(
                10,
                vec![-10, -7, -3, 5, 8, 12],
                Archetype::Boss,
                5,
                4,
                "L10: Void Sovereign",
            ),
        ];

        Self::from_specs(specs).expect("built-in level table is valid")
    }

    /// The final level number.
    #[must_use]
    pub fn max_level(&self) -> u32 {
        self.specs.len() as u32
    }

    /// Resolve the spec for a level number.
    ///
    /// Any level outside `1..=max_level()` resolves to the last entry.
    #[must_use]
    pub fn spec_for(&self, level: u32) -> &LevelSpec {
        let last = self.specs.len() - 1;
        let index = if level >= 1 && level <= self.max_level() {
            level as usize - 1
        } else {
            last
        };
        &self.specs[index]
    }

    /// Iterate over all specs in level order.
    pub fn iter(&self) -> impl Iterator<Item = &LevelSpec> {
        self.specs.iter()
    }
}
