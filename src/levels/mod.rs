//! Static level configuration: archetypes and the validated level table.

pub mod archetype;
pub mod table;

pub use archetype::Archetype;
pub use table::{ConfigError, LevelSpec, LevelTable};
