//! Data-driven battle content and loaders.
//!
//! This crate houses the static content a battle is built from and provides
//! loaders for RON/TOML data files:
//! - Skill catalog (keyed skill definitions, data-driven via RON)
//! - Rosters (combatant lineups, data-driven via RON)
//! - Battle configuration (data-driven via TOML)
//!
//! Content is consumed once at battle construction and never appears in
//! battle state; combatants only carry skill IDs.

pub mod catalog;
pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::SkillCatalog;
pub use roster::standard_roster;

#[cfg(feature = "loaders")]
pub use loaders::{CombatantSpec, ConfigLoader, ContentFactory, RosterLoader, SkillLoader, SkillSpec};
