//! Battle configuration loader.

use std::path::Path;

use combat_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
///
/// Every key is optional; missing keys keep [`BattleConfig::default`] values.
///
/// ```toml
/// player_hp = 100
/// player_atk = 15
/// default_hp = 50
/// default_atk = 8
/// seed = 42
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }
}
