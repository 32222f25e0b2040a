use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use combat_core::{Battle, CombatantId, Decision, SkillId};

use crate::api::{ActionProvider, Result};

/// Automatic policy: uniform-random skill, then uniform-random legal target.
pub struct RandomActionProvider {
    rng: Mutex<ChaCha8Rng>,
}

impl RandomActionProvider {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::from_entropy()),
        }
    }
}

#[async_trait]
impl ActionProvider for RandomActionProvider {
    async fn provide_decision(&self, actor: CombatantId, battle: &Battle) -> Result<Decision> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let decision = random_decision(actor, battle, &mut *rng);
        tracing::debug!(
            actor = %actor,
            skill = ?decision.skill(),
            target = ?decision.target(),
            "Random policy decided"
        );
        Ok(decision)
    }
}

/// Picks a decision for `actor` the way the automatic policy does.
///
/// Passes (idle) when no opposing combatant is alive. Untargeted skills stay
/// eligible, so an opponent may roll a chaos strike and hit its own side.
pub fn random_decision(actor: CombatantId, battle: &Battle, rng: &mut dyn RngCore) -> Decision {
    let Some(combatant) = battle.roster().get(actor) else {
        return Decision::idle(actor);
    };
    if !battle.roster().any_alive(combatant.faction.opposing()) {
        return Decision::idle(actor);
    }

    let known: Vec<SkillId> = combatant
        .skills()
        .iter()
        .copied()
        .filter(|&skill| battle.skills().contains(skill))
        .collect();
    let Some(&skill) = known.choose(rng) else {
        return Decision::idle(actor);
    };

    let targeted = battle
        .skills()
        .get(skill)
        .is_some_and(|definition| definition.targeted());
    if !targeted {
        return Decision::untargeted(actor, skill);
    }

    match battle.valid_targets(actor, skill).choose(rng) {
        Some(&target) => Decision::targeted(actor, skill, target),
        None => Decision::idle(actor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::action::validate_decision;
    use combat_core::{BattleEngine, Combatant, Roster, SkillBook};

    const ATTACK: SkillId = SkillBook::BASIC_ATTACK;
    const CHAOS: SkillId = SkillBook::CHAOS_TRIPLE_STRIKE;

    fn battle() -> Battle {
        Battle::new(
            Roster::new(vec![
                Combatant::player(CombatantId(0), "Player", 100, 10).with_skills([ATTACK, CHAOS]),
                Combatant::opponent(CombatantId(1), "Alleria", 20, 5).with_skills([ATTACK]),
                Combatant::opponent(CombatantId(2), "Ben", 20, 5).with_skills([ATTACK]),
            ]),
            SkillBook::standard(),
        )
        .unwrap()
    }

    #[test]
    fn decisions_are_always_legal() {
        let battle = battle();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            for id in [0, 1, 2] {
                let decision = random_decision(CombatantId(id), &battle, &mut rng);
                assert!(validate_decision(&battle, &decision).is_ok(), "{decision:?}");
            }
        }
    }

    #[test]
    fn opponents_only_target_the_player() {
        let battle = battle();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..50 {
            let decision = random_decision(CombatantId(1), &battle, &mut rng);
            assert_eq!(decision, Decision::targeted(CombatantId(1), ATTACK, CombatantId(0)));
        }
    }

    #[test]
    fn both_player_skills_get_picked() {
        let battle = battle();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let picks: Vec<_> = (0..100)
            .filter_map(|_| random_decision(CombatantId(0), &battle, &mut rng).skill())
            .collect();
        assert!(picks.contains(&ATTACK));
        assert!(picks.contains(&CHAOS));
    }

    #[test]
    fn idles_when_no_opponent_is_alive() {
        let mut battle = Battle::new(
            Roster::new(vec![
                Combatant::player(CombatantId(0), "Player", 100, 50).with_skills([ATTACK]),
                Combatant::opponent(CombatantId(1), "Ben", 20, 5).with_skills([ATTACK]),
            ]),
            SkillBook::standard(),
        )
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        BattleEngine::new(&mut battle)
            .execute(
                &Decision::targeted(CombatantId(0), ATTACK, CombatantId(1)),
                &mut rng,
            )
            .unwrap();

        assert_eq!(
            random_decision(CombatantId(0), &battle, &mut rng),
            Decision::idle(CombatantId(0))
        );
    }
}
