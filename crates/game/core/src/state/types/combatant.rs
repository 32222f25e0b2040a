use super::{CombatantId, Faction};
use crate::skill::SkillId;

/// One participant in a battle.
///
/// # Invariants
///
/// - `0 <= hp <= max_hp`, `hp` is clamped at zero and never resurrected
/// - `max_hp`, `atk` and the skill list are fixed after construction
/// - death is derived (`hp == 0`), never stored
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub faction: Faction,
    hp: u32,
    max_hp: u32,
    atk: u32,
    skills: Vec<SkillId>,
}

/// Health change produced by a single hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageApplied {
    pub dealt: u32,
    pub hp_before: u32,
    pub hp_after: u32,
}

impl DamageApplied {
    /// True only when this hit took the target from alive to exactly zero.
    pub const fn defeated(&self) -> bool {
        self.hp_before > 0 && self.hp_after == 0
    }
}

impl Combatant {
    /// Creates a combatant at full health with no skills.
    pub fn new(
        id: CombatantId,
        name: impl Into<String>,
        max_hp: u32,
        atk: u32,
        faction: Faction,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            faction,
            hp: max_hp,
            max_hp,
            atk,
            skills: Vec::new(),
        }
    }

    /// Creates a player-faction combatant.
    pub fn player(id: CombatantId, name: impl Into<String>, max_hp: u32, atk: u32) -> Self {
        Self::new(id, name, max_hp, atk, Faction::Player)
    }

    /// Creates an opposing-faction combatant.
    pub fn opponent(id: CombatantId, name: impl Into<String>, max_hp: u32, atk: u32) -> Self {
        Self::new(id, name, max_hp, atk, Faction::Opponent)
    }

    /// Appends skills in selection order. Duplicates are kept.
    #[must_use]
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = SkillId>) -> Self {
        self.skills.extend(skills);
        self
    }

    /// Starts the combatant below full health (clamped to `max_hp`).
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    #[inline]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    #[inline]
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    #[inline]
    pub fn atk(&self) -> u32 {
        self.atk
    }

    pub fn skills(&self) -> &[SkillId] {
        &self.skills
    }

    pub fn knows(&self, skill: SkillId) -> bool {
        self.skills.contains(&skill)
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.is_dead()
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.faction.is_player()
    }

    pub fn is_hostile_to(&self, other: &Combatant) -> bool {
        self.faction != other.faction
    }

    /// Applies damage, clamping health at zero.
    pub(crate) fn take_damage(&mut self, amount: u32) -> DamageApplied {
        let hp_before = self.hp;
        self.hp = hp_before.saturating_sub(amount);
        DamageApplied {
            dealt: amount,
            hp_before,
            hp_after: self.hp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_at_zero() {
        let mut goblin = Combatant::opponent(CombatantId(1), "Goblin", 8, 3);
        let applied = goblin.take_damage(10);

        assert_eq!(goblin.hp(), 0);
        assert!(goblin.is_dead());
        assert_eq!(applied.hp_before, 8);
        assert_eq!(applied.dealt, 10);
        assert!(applied.defeated());
    }

    #[test]
    fn hitting_the_dead_is_not_a_second_defeat() {
        let mut goblin = Combatant::opponent(CombatantId(1), "Goblin", 8, 3).with_hp(0);
        let applied = goblin.take_damage(5);

        assert_eq!(goblin.hp(), 0);
        assert!(!applied.defeated());
    }

    #[test]
    fn with_hp_never_exceeds_maximum() {
        let hero = Combatant::player(CombatantId(0), "Hero", 30, 10).with_hp(99);
        assert_eq!(hero.hp(), 30);
    }

    #[test]
    fn skills_keep_insertion_order_and_duplicates() {
        let hero = Combatant::player(CombatantId(0), "Hero", 30, 10).with_skills([
            SkillId(1),
            SkillId(0),
            SkillId(1),
        ]);
        assert_eq!(hero.skills(), &[SkillId(1), SkillId(0), SkillId(1)]);
        assert!(hero.knows(SkillId(0)));
        assert!(!hero.knows(SkillId(7)));
    }
}
