use rand::seq::SliceRandom;

use super::{ResolveContext, SkillEffect, SkillError};
use crate::event::{CombatEvent, DamageEvent};

/// Three sequential hits, each on a random living combatant of either side.
///
/// The living pool is recomputed before every hit, so earlier hits change who
/// later hits can land on. The attacker is part of the pool and can hurt
/// itself; if that kills it the remaining hits are cancelled.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChaosTripleStrike;

impl ChaosTripleStrike {
    pub const HITS: u8 = 3;
}

impl SkillEffect for ChaosTripleStrike {
    fn targeted(&self) -> bool {
        false
    }

    fn resolve(&self, ctx: ResolveContext<'_>) -> Result<Vec<CombatEvent>, SkillError> {
        let ResolveContext {
            skill,
            actor,
            roster,
            rng,
            ..
        } = ctx;

        let (damage, attacker_name) = roster
            .get(actor)
            .map(|a| (a.atk(), a.name.clone()))
            .ok_or(SkillError::ActorNotFound { actor })?;

        let mut events = Vec::new();
        for hit in 1..=Self::HITS {
            let living = roster.living_ids();
            let Some(&target) = living.choose(&mut *rng) else {
                events.push(CombatEvent::NoTarget {
                    actor,
                    name: attacker_name.clone(),
                });
                break;
            };

            let defender = roster
                .get_mut(target)
                .ok_or(SkillError::TargetNotFound { target })?;
            let applied = defender.take_damage(damage);
            let target_name = defender.name.clone();

            events.push(CombatEvent::Damage(DamageEvent {
                skill: skill.id,
                skill_name: skill.name.clone(),
                attacker: actor,
                attacker_name: attacker_name.clone(),
                target,
                target_name: target_name.clone(),
                damage: applied.dealt,
                remaining_hp: applied.hp_after,
                hit: Some(hit),
                defeated: applied.defeated(),
            }));
            if applied.defeated() {
                events.push(CombatEvent::Defeated {
                    target,
                    name: target_name,
                });
            }

            let attacker_dead = roster.get(actor).is_none_or(|a| a.is_dead());
            if attacker_dead {
                events.push(CombatEvent::AttackerFell {
                    actor,
                    name: attacker_name.clone(),
                });
                break;
            }
        }

        Ok(events)
    }
}
