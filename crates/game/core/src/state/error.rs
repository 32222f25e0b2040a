//! Battle construction errors.
//!
//! A battle that fails these checks would later hit an unreachable state
//! (cursor over an empty roster, termination over a single faction), so the
//! checks run once, up front, and are all fatal.

use crate::error::{ErrorSeverity, GameError};
use crate::skill::SkillId;
use crate::state::{CombatantId, Faction};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetupError {
    #[error("roster is empty")]
    EmptyRoster,

    #[error("roster too large (max: {max}, got: {got})")]
    RosterTooLarge { max: usize, got: usize },

    #[error("{faction} faction has no living combatant")]
    FactionMissing { faction: Faction },

    #[error("combatant id {id} appears more than once")]
    DuplicateCombatant { id: CombatantId },

    #[error("combatant {id} has no skills")]
    NoSkills { id: CombatantId },

    #[error("combatant {combatant} references unknown skill {skill}")]
    UnknownSkill {
        combatant: CombatantId,
        skill: SkillId,
    },

    #[error("combatant {id} has zero maximum health")]
    ZeroMaxHp { id: CombatantId },

    #[error("combatant {id} has zero attack power")]
    ZeroAttack { id: CombatantId },
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use SetupError::*;
        match self {
            EmptyRoster => "SETUP_EMPTY_ROSTER",
            RosterTooLarge { .. } => "SETUP_ROSTER_TOO_LARGE",
            FactionMissing { .. } => "SETUP_FACTION_MISSING",
            DuplicateCombatant { .. } => "SETUP_DUPLICATE_COMBATANT",
            NoSkills { .. } => "SETUP_NO_SKILLS",
            UnknownSkill { .. } => "SETUP_UNKNOWN_SKILL",
            ZeroMaxHp { .. } => "SETUP_ZERO_MAX_HP",
            ZeroAttack { .. } => "SETUP_ZERO_ATTACK",
        }
    }
}
