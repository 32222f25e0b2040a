use crate::event::CombatEvent;
use crate::state::{CombatantId, TurnPhase};

use super::{BattleEngine, TurnError};

/// The turn that is now waiting for a decision.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnStart {
    pub actor: CombatantId,
    pub round: u32,
    /// The turn-start event, or empty when this turn was already announced.
    pub events: Vec<CombatEvent>,
}

/// Turn scheduling methods for BattleEngine.
impl BattleEngine<'_> {
    /// Combatant whose decision the engine is waiting for.
    pub fn current_actor(&self) -> Option<CombatantId> {
        self.battle.turn().awaiting()
    }

    /// Starts the turn under the cursor and emits its turn-start event.
    ///
    /// Calling this again before the turn is resolved returns the same actor
    /// with no events, so a caller that lost track can always re-synchronise.
    pub fn prepare_next_turn(&mut self) -> Result<TurnStart, TurnError> {
        let actor = match self.battle.turn().phase {
            TurnPhase::BattleOver(outcome) => return Err(TurnError::BattleOver(outcome)),
            TurnPhase::Resolving => return Err(TurnError::ResolutionInProgress),
            TurnPhase::AwaitingDecision(actor) => actor,
            TurnPhase::RoundComplete => {
                let cursor = self.battle.turn().cursor;
                let actor = self
                    .battle
                    .roster()
                    .at(cursor)
                    .filter(|c| c.is_alive())
                    .map(|c| c.id)
                    .ok_or(TurnError::NoLivingCombatants)?;
                self.battle.turn_mut().phase = TurnPhase::AwaitingDecision(actor);
                actor
            }
        };

        let round = self.battle.turn().round;
        let mut events = Vec::new();
        if !self.battle.turn().announced {
            let combatant = self
                .battle
                .roster()
                .get(actor)
                .ok_or(TurnError::NoLivingCombatants)?;
            events.push(CombatEvent::TurnStarted {
                actor,
                name: combatant.name.clone(),
                faction: combatant.faction,
                round,
            });
            self.battle.turn_mut().announced = true;
        }

        Ok(TurnStart {
            actor,
            round,
            events,
        })
    }

    /// Moves the cursor to the next living combatant, skipping the dead.
    ///
    /// Scans at most one full pass of the roster. Returns whether the cursor
    /// wrapped past the end, which completes a round.
    pub(super) fn advance(&mut self) -> Result<bool, TurnError> {
        let len = self.battle.roster().len();
        let start = self.battle.turn().cursor;

        for step in 1..=len {
            let index = (start + step) % len;
            let Some(next) = self.battle.roster().at(index).filter(|c| c.is_alive()) else {
                continue;
            };
            let next = next.id;
            let wrapped = start + step >= len;

            let turn = self.battle.turn_mut();
            turn.cursor = index;
            turn.announced = false;
            if wrapped {
                turn.round += 1;
                turn.phase = TurnPhase::RoundComplete;
            } else {
                turn.phase = TurnPhase::AwaitingDecision(next);
            }
            return Ok(wrapped);
        }

        Err(TurnError::NoLivingCombatants)
    }
}
