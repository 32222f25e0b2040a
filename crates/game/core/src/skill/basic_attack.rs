use super::{ResolveContext, SkillEffect, SkillError};
use crate::event::{CombatEvent, DamageEvent};

/// Single hit on the nominated target for the attacker's attack power.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicAttack;

impl SkillEffect for BasicAttack {
    fn targeted(&self) -> bool {
        true
    }

    fn resolve(&self, ctx: ResolveContext<'_>) -> Result<Vec<CombatEvent>, SkillError> {
        let ResolveContext {
            skill,
            actor,
            target,
            roster,
            ..
        } = ctx;

        let target = target.ok_or(SkillError::MissingTarget { skill: skill.id })?;
        let (damage, attacker_name) = roster
            .get(actor)
            .map(|a| (a.atk(), a.name.clone()))
            .ok_or(SkillError::ActorNotFound { actor })?;
        let defender = roster
            .get_mut(target)
            .ok_or(SkillError::TargetNotFound { target })?;

        let applied = defender.take_damage(damage);
        let mut events = vec![CombatEvent::Damage(DamageEvent {
            skill: skill.id,
            skill_name: skill.name.clone(),
            attacker: actor,
            attacker_name,
            target,
            target_name: defender.name.clone(),
            damage: applied.dealt,
            remaining_hp: applied.hp_after,
            hit: None,
            defeated: applied.defeated(),
        })];

        if applied.defeated() {
            events.push(CombatEvent::Defeated {
                target,
                name: defender.name.clone(),
            });
        }

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::skill::SkillBook;
    use crate::state::{Combatant, CombatantId, Roster};
    use crate::{CombatEvent, SkillError};

    fn duel(enemy_hp: u32) -> Roster {
        Roster::new(vec![
            Combatant::player(CombatantId(0), "Hero", 30, 10),
            Combatant::opponent(CombatantId(1), "Ben", 30, 10).with_hp(enemy_hp),
        ])
    }

    #[test]
    fn hit_without_defeat() {
        let book = SkillBook::standard();
        let skill = book.get(SkillBook::BASIC_ATTACK).unwrap();
        let mut roster = duel(30);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let events = skill
            .resolve(CombatantId(0), Some(CombatantId(1)), &mut roster, &mut rng)
            .unwrap();

        assert_eq!(roster.get(CombatantId(1)).unwrap().hp(), 20);
        assert_eq!(events.len(), 1);
        let damage = events[0].as_damage().unwrap();
        assert_eq!(damage.damage, 10);
        assert!(!damage.defeated);
    }

    #[test]
    fn lethal_hit_clamps_and_reports_defeat() {
        let book = SkillBook::standard();
        let skill = book.get(SkillBook::BASIC_ATTACK).unwrap();
        let mut roster = duel(8);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let events = skill
            .resolve(CombatantId(0), Some(CombatantId(1)), &mut roster, &mut rng)
            .unwrap();

        assert_eq!(roster.get(CombatantId(1)).unwrap().hp(), 0);
        assert_eq!(events.len(), 2);
        assert!(events[0].as_damage().is_some_and(|d| d.defeated));
        assert!(matches!(
            events[1],
            CombatEvent::Defeated {
                target: CombatantId(1),
                ..
            }
        ));
    }

    #[test]
    fn missing_target_is_a_contract_violation() {
        let book = SkillBook::standard();
        let skill = book.get(SkillBook::BASIC_ATTACK).unwrap();
        let mut roster = duel(30);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let err = skill
            .resolve(CombatantId(0), None, &mut roster, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            SkillError::MissingTarget {
                skill: SkillBook::BASIC_ATTACK
            }
        );
    }
}
