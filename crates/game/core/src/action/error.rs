//! Decision validation errors.

use crate::error::{ErrorSeverity, GameError};
use crate::skill::SkillId;
use crate::state::CombatantId;

/// A submitted decision violates the chosen skill's targeting contract.
///
/// Raised before resolution; battle state is unchanged and the action source
/// is expected to re-prompt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecisionError {
    #[error("actor {actor} is not in the roster")]
    ActorNotFound { actor: CombatantId },

    #[error("actor {actor} is dead")]
    ActorDead { actor: CombatantId },

    #[error("{skill} does not exist")]
    UnknownSkill { skill: SkillId },

    #[error("actor {actor} does not know {skill}")]
    SkillNotKnown { actor: CombatantId, skill: SkillId },

    #[error("{skill} requires a target")]
    MissingTarget { skill: SkillId },

    #[error("{skill} selects its own targets, got {target}")]
    UnexpectedTarget {
        skill: SkillId,
        target: CombatantId,
    },

    #[error("target {target} is not in the roster")]
    UnknownTarget { target: CombatantId },

    #[error("target {target} is already dead")]
    TargetDead { target: CombatantId },

    #[error("target {target} is on the actor's own side")]
    SameFaction { target: CombatantId },

    #[error("actor {actor} cannot pass while an opponent is alive")]
    IdleWithTargets { actor: CombatantId },
}

impl GameError for DecisionError {
    fn severity(&self) -> ErrorSeverity {
        use DecisionError::*;
        match self {
            // The same skill works with another target
            MissingTarget { .. }
            | TargetDead { .. }
            | SameFaction { .. }
            | IdleWithTargets { .. } => {
                ErrorSeverity::Recoverable
            }

            ActorNotFound { .. }
            | ActorDead { .. }
            | UnknownSkill { .. }
            | SkillNotKnown { .. }
            | UnexpectedTarget { .. }
            | UnknownTarget { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use DecisionError::*;
        match self {
            ActorNotFound { .. } => "DECISION_ACTOR_NOT_FOUND",
            ActorDead { .. } => "DECISION_ACTOR_DEAD",
            UnknownSkill { .. } => "DECISION_UNKNOWN_SKILL",
            SkillNotKnown { .. } => "DECISION_SKILL_NOT_KNOWN",
            MissingTarget { .. } => "DECISION_MISSING_TARGET",
            UnexpectedTarget { .. } => "DECISION_UNEXPECTED_TARGET",
            UnknownTarget { .. } => "DECISION_UNKNOWN_TARGET",
            TargetDead { .. } => "DECISION_TARGET_DEAD",
            SameFaction { .. } => "DECISION_SAME_FACTION",
            IdleWithTargets { .. } => "DECISION_IDLE_WITH_TARGETS",
        }
    }
}
