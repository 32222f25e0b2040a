//! Boundary checks for submitted decisions.
//!
//! Runs before resolution so that skills can trust their inputs:
//! - Actor exists, is alive, and knows the skill
//! - Targeted skills get a living, opposing-faction target
//! - Untargeted skills get no target at all
//! - Passing is only allowed when no opponent is left alive

use super::{Decision, DecisionError, DecisionKind};
use crate::state::Battle;

pub fn validate_decision(battle: &Battle, decision: &Decision) -> Result<(), DecisionError> {
    let roster = battle.roster();
    let actor = roster
        .get(decision.actor)
        .ok_or(DecisionError::ActorNotFound {
            actor: decision.actor,
        })?;
    if actor.is_dead() {
        return Err(DecisionError::ActorDead { actor: actor.id });
    }

    let DecisionKind::UseSkill { skill, target } = decision.kind else {
        if roster.any_alive(actor.faction.opposing()) {
            return Err(DecisionError::IdleWithTargets { actor: actor.id });
        }
        return Ok(());
    };

    let definition = battle
        .skills()
        .get(skill)
        .ok_or(DecisionError::UnknownSkill { skill })?;
    if !actor.knows(skill) {
        return Err(DecisionError::SkillNotKnown {
            actor: actor.id,
            skill,
        });
    }

    match (definition.targeted(), target) {
        (true, None) => Err(DecisionError::MissingTarget { skill }),
        (false, Some(target)) => Err(DecisionError::UnexpectedTarget { skill, target }),
        (false, None) => Ok(()),
        (true, Some(target)) => {
            let defender = roster
                .get(target)
                .ok_or(DecisionError::UnknownTarget { target })?;
            if defender.is_dead() {
                return Err(DecisionError::TargetDead { target });
            }
            if !actor.is_hostile_to(defender) {
                return Err(DecisionError::SameFaction { target });
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::{SkillBook, SkillId};
    use crate::state::{Combatant, CombatantId, Roster};

    fn battle() -> Battle {
        let roster = Roster::new(vec![
            Combatant::player(CombatantId(0), "Hero", 30, 10).with_skills([
                SkillBook::BASIC_ATTACK,
                SkillBook::CHAOS_TRIPLE_STRIKE,
            ]),
            Combatant::player(CombatantId(1), "Squire", 30, 10)
                .with_skills([SkillBook::BASIC_ATTACK]),
            Combatant::opponent(CombatantId(2), "Alleria", 30, 10)
                .with_skills([SkillBook::BASIC_ATTACK])
                .with_hp(0),
            Combatant::opponent(CombatantId(3), "Ben", 30, 10)
                .with_skills([SkillBook::BASIC_ATTACK]),
        ]);
        Battle::new(roster, SkillBook::standard()).unwrap()
    }

    const HERO: CombatantId = CombatantId(0);

    #[test]
    fn accepts_legal_decisions() {
        let battle = battle();
        assert!(
            validate_decision(
                &battle,
                &Decision::targeted(HERO, SkillBook::BASIC_ATTACK, CombatantId(3))
            )
            .is_ok()
        );
        assert!(
            validate_decision(
                &battle,
                &Decision::untargeted(HERO, SkillBook::CHAOS_TRIPLE_STRIKE)
            )
            .is_ok()
        );
    }

    #[test]
    fn idle_is_rejected_while_opponents_live() {
        let battle = battle();
        assert_eq!(
            validate_decision(&battle, &Decision::idle(HERO)),
            Err(DecisionError::IdleWithTargets { actor: HERO })
        );
    }

    #[test]
    fn rejects_bad_targets() {
        let battle = battle();
        let cases = [
            (
                Decision::untargeted(HERO, SkillBook::BASIC_ATTACK),
                DecisionError::MissingTarget {
                    skill: SkillBook::BASIC_ATTACK,
                },
            ),
            (
                Decision::targeted(HERO, SkillBook::BASIC_ATTACK, CombatantId(2)),
                DecisionError::TargetDead {
                    target: CombatantId(2),
                },
            ),
            (
                Decision::targeted(HERO, SkillBook::BASIC_ATTACK, CombatantId(1)),
                DecisionError::SameFaction {
                    target: CombatantId(1),
                },
            ),
            (
                Decision::targeted(HERO, SkillBook::BASIC_ATTACK, HERO),
                DecisionError::SameFaction { target: HERO },
            ),
            (
                Decision::targeted(HERO, SkillBook::BASIC_ATTACK, CombatantId(9)),
                DecisionError::UnknownTarget {
                    target: CombatantId(9),
                },
            ),
            (
                Decision::targeted(HERO, SkillBook::CHAOS_TRIPLE_STRIKE, CombatantId(3)),
                DecisionError::UnexpectedTarget {
                    skill: SkillBook::CHAOS_TRIPLE_STRIKE,
                    target: CombatantId(3),
                },
            ),
        ];

        for (decision, expected) in cases {
            assert_eq!(validate_decision(&battle, &decision), Err(expected));
        }
    }

    #[test]
    fn rejects_unknown_or_unlearned_skills() {
        let battle = battle();
        assert_eq!(
            validate_decision(&battle, &Decision::untargeted(HERO, SkillId(77))),
            Err(DecisionError::UnknownSkill { skill: SkillId(77) })
        );
        assert_eq!(
            validate_decision(
                &battle,
                &Decision::untargeted(CombatantId(1), SkillBook::CHAOS_TRIPLE_STRIKE)
            ),
            Err(DecisionError::SkillNotKnown {
                actor: CombatantId(1),
                skill: SkillBook::CHAOS_TRIPLE_STRIKE,
            })
        );
    }

    #[test]
    fn rejects_dead_actor() {
        let battle = battle();
        assert_eq!(
            validate_decision(&battle, &Decision::idle(CombatantId(2))),
            Err(DecisionError::ActorDead {
                actor: CombatantId(2)
            })
        );
    }
}
