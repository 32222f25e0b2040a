//! Roster loader.
//!
//! Loads combatant lineups from RON. Stats left out of an entry fall back to
//! the [`BattleConfig`] values for its faction.

use std::path::Path;

use combat_core::{BattleConfig, Combatant, CombatantId, Faction, Roster};

use crate::SkillCatalog;
use crate::loaders::{LoadResult, read_file};

/// One combatant entry. Roster order is turn order; IDs follow it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct CombatantSpec {
    pub name: String,
    #[serde(default)]
    pub player: bool,
    #[serde(default)]
    pub hp: Option<u32>,
    #[serde(default)]
    pub atk: Option<u32>,
    /// Skill keys resolved through the [`SkillCatalog`].
    pub skills: Vec<String>,
}

impl CombatantSpec {
    pub fn build(
        &self,
        id: CombatantId,
        catalog: &SkillCatalog,
        config: &BattleConfig,
    ) -> LoadResult<Combatant> {
        let (default_hp, default_atk, faction) = if self.player {
            (config.player_hp, config.player_atk, Faction::Player)
        } else {
            (config.default_hp, config.default_atk, Faction::Opponent)
        };

        let skills = self
            .skills
            .iter()
            .map(|key| {
                catalog.resolve(key).ok_or_else(|| {
                    anyhow::anyhow!("Unknown skill '{}' for combatant '{}'", key, self.name)
                })
            })
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(Combatant::new(
            id,
            self.name.clone(),
            self.hp.unwrap_or(default_hp),
            self.atk.unwrap_or(default_atk),
            faction,
        )
        .with_skills(skills))
    }
}

/// Loader for rosters from RON files.
///
/// ```ron
/// [
///     (name: "Player", player: true, skills: ["attack", "chaos_triple"]),
///     (name: "Alleria", hp: Some(40), skills: ["attack"]),
/// ]
/// ```
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path, catalog: &SkillCatalog, config: &BattleConfig) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content, catalog, config)
            .map_err(|e| anyhow::anyhow!("Failed to load roster {}: {}", path.display(), e))
    }

    /// Parses and resolves a roster. Structural checks (factions, stats)
    /// are left to battle construction.
    pub fn parse(content: &str, catalog: &SkillCatalog, config: &BattleConfig) -> LoadResult<Roster> {
        let specs: Vec<CombatantSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let combatants = specs
            .iter()
            .zip(0u32..)
            .map(|(spec, id)| spec.build(CombatantId(id), catalog, config))
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(Roster::new(combatants))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::SkillBook;

    const ROSTER: &str = r#"[
        (name: "Hero", player: true, skills: ["attack", "chaos_triple"]),
        (name: "Alleria", hp: Some(40), atk: Some(6), skills: ["attack"]),
        (name: "Ben", skills: ["basic_attack"]),
    ]"#;

    #[test]
    fn fills_missing_stats_from_config() {
        let config = BattleConfig::default();
        let roster = RosterLoader::parse(ROSTER, &SkillCatalog::standard(), &config).unwrap();

        assert_eq!(roster.len(), 3);
        let hero = roster.get(CombatantId(0)).unwrap();
        assert!(hero.is_player());
        assert_eq!(hero.max_hp(), config.player_hp);
        assert_eq!(
            hero.skills(),
            &[SkillBook::BASIC_ATTACK, SkillBook::CHAOS_TRIPLE_STRIKE]
        );

        let alleria = roster.get(CombatantId(1)).unwrap();
        assert_eq!((alleria.max_hp(), alleria.atk()), (40, 6));

        let ben = roster.get(CombatantId(2)).unwrap();
        assert_eq!((ben.max_hp(), ben.atk()), (config.default_hp, config.default_atk));
        assert_eq!(ben.skills(), &[SkillBook::BASIC_ATTACK]);
    }

    #[test]
    fn unknown_skill_key_names_the_combatant() {
        let err = RosterLoader::parse(
            r#"[(name: "Mage", player: true, skills: ["fireball"])]"#,
            &SkillCatalog::standard(),
            &BattleConfig::default(),
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("fireball"));
        assert!(message.contains("Mage"));
    }
}
