//! Error types for turn preparation and decision execution.

use crate::action::DecisionError;
use crate::error::{ErrorSeverity, GameError};
use crate::skill::SkillError;
use crate::state::{CombatantId, Outcome, TurnPhase};

/// Errors raised while starting the next turn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("battle is over ({0})")]
    BattleOver(Outcome),

    #[error("a decision is still being resolved")]
    ResolutionInProgress,

    #[error("no living combatant can take a turn")]
    NoLivingCombatants,
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TurnError::BattleOver(_) => ErrorSeverity::Validation,
            TurnError::ResolutionInProgress | TurnError::NoLivingCombatants => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TurnError::BattleOver(_) => "TURN_BATTLE_OVER",
            TurnError::ResolutionInProgress => "TURN_RESOLUTION_IN_PROGRESS",
            TurnError::NoLivingCombatants => "TURN_NO_LIVING_COMBATANTS",
        }
    }
}

/// Errors surfaced while executing a decision through the battle engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("battle is over ({0})")]
    BattleOver(Outcome),

    #[error("engine is not awaiting a decision (phase: {})", phase.as_str())]
    NotAwaitingDecision { phase: TurnPhase },

    #[error("decision actor {actor} does not match current turn actor {current}")]
    ActorNotCurrent {
        actor: CombatantId,
        current: CombatantId,
    },

    #[error("invalid decision: {0}")]
    InvalidDecision(#[from] DecisionError),

    #[error("skill resolution failed: {0}")]
    Skill(#[from] SkillError),

    #[error(transparent)]
    Turn(#[from] TurnError),
}

impl ExecuteError {
    /// True when the same actor may submit another decision for this turn.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ExecuteError::InvalidDecision(_))
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::InvalidDecision(err) => err.severity(),
            ExecuteError::Skill(err) => err.severity(),
            ExecuteError::Turn(err) => err.severity(),
            ExecuteError::BattleOver(_)
            | ExecuteError::NotAwaitingDecision { .. }
            | ExecuteError::ActorNotCurrent { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::InvalidDecision(err) => err.error_code(),
            ExecuteError::Skill(err) => err.error_code(),
            ExecuteError::Turn(err) => err.error_code(),
            ExecuteError::BattleOver(_) => "EXECUTE_BATTLE_OVER",
            ExecuteError::NotAwaitingDecision { .. } => "EXECUTE_NOT_AWAITING_DECISION",
            ExecuteError::ActorNotCurrent { .. } => "EXECUTE_ACTOR_NOT_CURRENT",
        }
    }
}
