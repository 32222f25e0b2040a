//! Turn decisions submitted by action sources.
//!
//! A [`Decision`] is what a human channel or automatic policy hands to the
//! engine for the active combatant: a skill (plus a target when the skill is
//! targeted) or an explicit pass. Decisions are validated against the battle
//! before any state is touched.
//!
//! # Module Structure
//!
//! - `error`: [`DecisionError`], the InvalidDecision taxonomy
//! - `validation`: boundary checks run before resolution

mod error;
mod validation;

pub use error::DecisionError;
pub use validation::validate_decision;

use crate::skill::SkillId;
use crate::state::CombatantId;

/// A decision for one live turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub actor: CombatantId,
    pub kind: DecisionKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecisionKind {
    /// Resolve a skill. `target` must be `Some` exactly when the skill is targeted.
    UseSkill {
        skill: SkillId,
        target: Option<CombatantId>,
    },
    /// Pass the turn without resolving anything (no legal target exists).
    Idle,
}

impl Decision {
    pub fn new(actor: CombatantId, kind: DecisionKind) -> Self {
        Self { actor, kind }
    }

    /// Targeted skill aimed at `target`.
    pub fn targeted(actor: CombatantId, skill: SkillId, target: CombatantId) -> Self {
        Self::new(
            actor,
            DecisionKind::UseSkill {
                skill,
                target: Some(target),
            },
        )
    }

    /// Skill that selects its own targets.
    pub fn untargeted(actor: CombatantId, skill: SkillId) -> Self {
        Self::new(
            actor,
            DecisionKind::UseSkill {
                skill,
                target: None,
            },
        )
    }

    pub fn idle(actor: CombatantId) -> Self {
        Self::new(actor, DecisionKind::Idle)
    }

    pub fn skill(&self) -> Option<SkillId> {
        match self.kind {
            DecisionKind::UseSkill { skill, .. } => Some(skill),
            DecisionKind::Idle => None,
        }
    }

    pub fn target(&self) -> Option<CombatantId> {
        match self.kind {
            DecisionKind::UseSkill { target, .. } => target,
            DecisionKind::Idle => None,
        }
    }
}
