//! Turn scheduling and decision execution.
//!
//! The [`BattleEngine`] is the only writer of a [`Battle`]. It drives the
//! turn state machine, hands decisions to the skill layer, checks
//! termination after every resolution and moves the cursor on.
//!
//! A call to [`BattleEngine::execute`] either fails before touching the
//! battle (wrong phase, wrong actor, invalid decision) or runs the whole
//! resolution. Skill contract violations surface mid-resolution; callers that
//! need atomicity execute against a clone and commit on success.

mod errors;
mod termination;
mod turns;

pub use errors::{ExecuteError, TurnError};
pub use termination::evaluate as evaluate_termination;
pub use turns::TurnStart;

use rand::RngCore;

use crate::action::{Decision, DecisionError, DecisionKind, validate_decision};
use crate::event::CombatEvent;
use crate::state::{Battle, CombatantId, Outcome, TurnPhase};

/// Complete result of one resolved decision.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    pub actor: CombatantId,
    /// Resolution events in causal order, ending with `BattleEnded` when the
    /// battle is over.
    pub events: Vec<CombatEvent>,
    pub outcome: Option<Outcome>,
    /// True when this turn closed a pass over the roster.
    pub round_completed: bool,
}

pub struct BattleEngine<'a> {
    battle: &'a mut Battle,
}

impl<'a> BattleEngine<'a> {
    pub fn new(battle: &'a mut Battle) -> Self {
        Self { battle }
    }

    pub fn battle(&self) -> &Battle {
        self.battle
    }

    /// Resolves `decision` for the combatant whose turn it is.
    ///
    /// Sequence: actor check, decision validation, skill resolution,
    /// termination check, cursor advance. The next turn is not announced
    /// until [`BattleEngine::prepare_next_turn`] is called.
    pub fn execute(
        &mut self,
        decision: &Decision,
        rng: &mut dyn RngCore,
    ) -> Result<Resolution, ExecuteError> {
        self.validate_actor(decision)?;
        validate_decision(self.battle, decision)?;

        self.battle.turn_mut().phase = TurnPhase::Resolving;
        let mut events = match decision.kind {
            DecisionKind::UseSkill { skill, target } => {
                let skills = self.battle.skills_handle();
                let skill = skills
                    .get(skill)
                    .ok_or(DecisionError::UnknownSkill { skill })?;
                skill.resolve(decision.actor, target, self.battle.roster_mut(), rng)?
            }
            DecisionKind::Idle => {
                let name = self
                    .battle
                    .roster()
                    .get(decision.actor)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                vec![CombatEvent::Idle {
                    actor: decision.actor,
                    name,
                }]
            }
        };
        self.battle.turn_mut().nonce += 1;

        let outcome = termination::evaluate(self.battle.roster());
        let round_completed = match outcome {
            Some(outcome) => {
                self.battle.turn_mut().phase = TurnPhase::BattleOver(outcome);
                events.push(CombatEvent::BattleEnded { outcome });
                false
            }
            None => self.advance()?,
        };

        Ok(Resolution {
            actor: decision.actor,
            events,
            outcome,
            round_completed,
        })
    }

    fn validate_actor(&self, decision: &Decision) -> Result<(), ExecuteError> {
        match self.battle.turn().phase {
            TurnPhase::BattleOver(outcome) => Err(ExecuteError::BattleOver(outcome)),
            TurnPhase::AwaitingDecision(current) if current != decision.actor => {
                Err(ExecuteError::ActorNotCurrent {
                    actor: decision.actor,
                    current,
                })
            }
            TurnPhase::AwaitingDecision(_) => Ok(()),
            phase => Err(ExecuteError::NotAwaitingDecision { phase }),
        }
    }
}
