//! Content factory for building battles from data files.

use std::path::{Path, PathBuf};

use combat_core::{Battle, BattleConfig, SetupError};

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader, SkillLoader};
use crate::{SkillCatalog, standard_roster};

/// Content factory that loads battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── skills.ron   (optional, built-in skills otherwise)
/// └── roster.ron   (optional, standard lineup otherwise)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The player against Alleria and Ben, using the built-in skills.
    pub fn standard_battle(config: &BattleConfig) -> Result<Battle, SetupError> {
        Battle::new(standard_roster(config), SkillCatalog::standard().into_book())
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the skill catalog from `skills.ron`, or the built-in catalog when
    /// the file does not exist.
    pub fn load_skills(&self) -> LoadResult<SkillCatalog> {
        let path = self.data_dir.join("skills.ron");
        if path.exists() {
            SkillLoader::load(&path)
        } else {
            Ok(SkillCatalog::standard())
        }
    }

    /// Build a battle from `skills.ron` and `roster.ron`, falling back to the
    /// standard lineup when no roster file exists.
    pub fn load_battle(&self, config: &BattleConfig) -> LoadResult<Battle> {
        let catalog = self.load_skills()?;
        let path = self.data_dir.join("roster.ron");
        let roster = if path.exists() {
            RosterLoader::load(&path, &catalog, config)?
        } else {
            standard_roster(config)
        };

        Battle::new(roster, catalog.into_book())
            .map_err(|e| anyhow::anyhow!("Invalid roster in {}: {}", self.data_dir.display(), e))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
