//! Content loaders for reading battle data from files.
//!
//! Each loader offers `load(path)` for files and `parse(str)` for in-memory
//! content; both return [`LoadResult`] with the offending path or entry in
//! the error context.

pub mod config;
pub mod factory;
pub mod roster;
pub mod skills;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use roster::{CombatantSpec, RosterLoader};
pub use skills::{SkillLoader, SkillSpec};

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}
