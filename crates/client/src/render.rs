//! Plain-text views of the battle.
use combat_core::{Battle, CombatantId, RosterSnapshot, SkillId};

pub fn roster_lines(snapshot: &RosterSnapshot) -> Vec<String> {
    snapshot
        .combatants
        .iter()
        .map(|c| {
            let marker = if snapshot.active == Some(c.id) { ">" } else { " " };
            let side = if c.is_player { "ally " } else { "enemy" };
            let status = if c.is_dead { "  (defeated)" } else { "" };
            format!(
                "{marker} {side} {:<12} HP {:>4}/{:<4} ATK {}{status}",
                c.name, c.hp, c.max_hp, c.atk
            )
        })
        .collect()
}

/// Numbered skill list for `actor`, in the order the combatant knows them.
pub fn skill_menu(battle: &Battle, actor: CombatantId) -> Vec<String> {
    skills_of(battle, actor)
        .iter()
        .enumerate()
        .filter_map(|(i, &id)| {
            let skill = battle.skills().get(id)?;
            let hint = if skill.targeted() { "" } else { " (no target)" };
            Some(format!("  {}) {}{hint} - {}", i + 1, skill.name, skill.description))
        })
        .collect()
}

/// Numbered list of legal targets for `skill`.
pub fn target_menu(battle: &Battle, actor: CombatantId, skill: SkillId) -> Vec<String> {
    battle
        .valid_targets(actor, skill)
        .iter()
        .enumerate()
        .filter_map(|(i, &id)| {
            let target = battle.roster().get(id)?;
            Some(format!(
                "  {}) {} ({}/{} HP)",
                i + 1,
                target.name,
                target.hp(),
                target.max_hp()
            ))
        })
        .collect()
}

pub fn skills_of(battle: &Battle, actor: CombatantId) -> Vec<SkillId> {
    battle
        .roster()
        .get(actor)
        .map(|c| c.skills().to_vec())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{BattleConfig, Combatant, Roster, SkillBook};

    fn battle() -> Battle {
        Battle::new(
            Roster::new(vec![
                Combatant::player(CombatantId(0), "Player", BattleConfig::DEFAULT_PLAYER_HP, 15)
                    .with_skills([SkillBook::BASIC_ATTACK, SkillBook::CHAOS_TRIPLE_STRIKE]),
                Combatant::opponent(CombatantId(1), "Alleria", 50, 8)
                    .with_skills([SkillBook::BASIC_ATTACK]),
            ]),
            SkillBook::standard(),
        )
        .unwrap()
    }

    #[test]
    fn roster_marks_the_active_combatant() {
        let lines = roster_lines(&battle().snapshot());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("> ally"));
        assert!(lines[1].starts_with("  enemy"));
        assert!(lines[1].contains("50/50"));
    }

    #[test]
    fn menus_are_numbered_from_one() {
        let battle = battle();
        let skills = skill_menu(&battle, CombatantId(0));
        assert_eq!(skills.len(), 2);
        assert!(skills[0].starts_with("  1) "));
        assert!(skills[1].contains("(no target)"));

        let targets = target_menu(&battle, CombatantId(0), SkillBook::BASIC_ATTACK);
        assert_eq!(targets, vec!["  1) Alleria (50/50 HP)".to_string()]);
    }
}
