//! Skill catalog loader.

use std::path::Path;

use combat_core::{Skill, SkillId, SkillKind};

use crate::SkillCatalog;
use crate::loaders::{LoadResult, read_file};

/// One catalog entry. IDs are assigned in file order starting at 0.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct SkillSpec {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: SkillKind,
}

/// Loader for skill catalogs from RON files.
///
/// ```ron
/// [
///     (key: "attack", name: "Attack", kind: basic_attack),
///     (key: "chaos_triple", name: "Chaos Triple Strike", kind: chaos_triple_strike),
/// ]
/// ```
pub struct SkillLoader;

impl SkillLoader {
    pub fn load(path: &Path) -> LoadResult<SkillCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load skills {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<SkillCatalog> {
        let specs: Vec<SkillSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog RON: {}", e))?;

        let mut catalog = SkillCatalog::new();
        for (index, spec) in specs.into_iter().enumerate() {
            if catalog.resolve(&spec.key).is_some() {
                anyhow::bail!("Duplicate skill key '{}'", spec.key);
            }
            let id = u16::try_from(index)
                .map(SkillId)
                .map_err(|_| anyhow::anyhow!("Too many skills in catalog"))?;
            catalog.register(
                spec.key,
                Skill::new(id, spec.name, spec.description, spec.kind),
            );
        }

        Ok(catalog)
    }
}
