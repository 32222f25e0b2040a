use combat_core::{BattleConfig, Combatant, CombatantId, Roster, SkillBook};

pub const PLAYER_NAME: &str = "Player";
pub const OPPONENT_NAMES: [&str; 2] = ["Alleria", "Ben"];

/// Default lineup: the player with both built-in skills against two
/// basic-attack opponents, stats taken from `config`.
pub fn standard_roster(config: &BattleConfig) -> Roster {
    let player = Combatant::player(
        CombatantId(0),
        PLAYER_NAME,
        config.player_hp,
        config.player_atk,
    )
    .with_skills([SkillBook::BASIC_ATTACK, SkillBook::CHAOS_TRIPLE_STRIKE]);

    let opponents = OPPONENT_NAMES.iter().zip(1..).map(|(name, id)| {
        Combatant::opponent(CombatantId(id), *name, config.default_hp, config.default_atk)
            .with_skills([SkillBook::BASIC_ATTACK])
    });

    std::iter::once(player).chain(opponents).collect::<Vec<_>>().into()
}
