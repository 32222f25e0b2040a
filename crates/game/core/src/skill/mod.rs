//! Skill definitions and resolution.
//!
//! A [`Skill`] is immutable presentation data plus a [`SkillKind`] that selects
//! its effect. Skills live in a shared [`SkillBook`]; combatants only hold
//! [`SkillId`] references, so one definition serves every combatant that
//! knows it.
//!
//! Each kind implements [`SkillEffect`]. The engine calls
//! [`Skill::resolve`] and never inspects which kind it is running.

mod basic_attack;
mod chaos_strike;

use std::fmt;

use rand::RngCore;

pub use basic_attack::BasicAttack;
pub use chaos_strike::ChaosTripleStrike;

use crate::error::{ErrorSeverity, GameError};
use crate::event::CombatEvent;
use crate::state::{CombatantId, Roster};

/// Identifier of a skill definition inside a [`SkillBook`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillId(pub u16);

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skill#{}", self.0)
    }
}

/// Closed set of effect implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkillKind {
    BasicAttack,
    ChaosTripleStrike,
}

impl SkillKind {
    /// Effect implementation for this kind.
    pub fn effect(self) -> &'static dyn SkillEffect {
        match self {
            SkillKind::BasicAttack => &BasicAttack,
            SkillKind::ChaosTripleStrike => &ChaosTripleStrike,
        }
    }

    pub fn targeted(self) -> bool {
        self.effect().targeted()
    }
}

/// Everything an effect may read or mutate while resolving.
pub struct ResolveContext<'a> {
    pub skill: &'a Skill,
    pub actor: CombatantId,
    /// Nominated target. Always `Some` for targeted skills that passed
    /// decision validation; always `None` otherwise.
    pub target: Option<CombatantId>,
    pub roster: &'a mut Roster,
    pub rng: &'a mut dyn RngCore,
}

/// Resolution capability shared by every skill kind.
///
/// Health changes are applied to the roster during resolution; the returned
/// events describe them in the order they happened.
pub trait SkillEffect: Send + Sync {
    /// Whether a target must be nominated before resolution.
    fn targeted(&self) -> bool;

    fn resolve(&self, ctx: ResolveContext<'_>) -> Result<Vec<CombatEvent>, SkillError>;
}

/// Immutable skill definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub description: String,
    pub kind: SkillKind,
}

impl Skill {
    pub fn new(
        id: SkillId,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: SkillKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            kind,
        }
    }

    pub fn targeted(&self) -> bool {
        self.kind.targeted()
    }

    /// Applies this skill to the roster and returns the resulting events.
    pub fn resolve(
        &self,
        actor: CombatantId,
        target: Option<CombatantId>,
        roster: &mut Roster,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<CombatEvent>, SkillError> {
        self.kind.effect().resolve(ResolveContext {
            skill: self,
            actor,
            target,
            roster,
            rng,
        })
    }
}

/// Shared registry of skill definitions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillBook {
    skills: Vec<Skill>,
}

impl SkillBook {
    /// Built-in single-target attack.
    pub const BASIC_ATTACK: SkillId = SkillId(0);
    /// Built-in three-hit random strike.
    pub const CHAOS_TRIPLE_STRIKE: SkillId = SkillId(1);

    pub fn new() -> Self {
        Self::default()
    }

    /// Book containing the built-in skills under their reserved IDs.
    pub fn standard() -> Self {
        let mut book = Self::new();
        book.insert(Skill::new(
            Self::BASIC_ATTACK,
            "Attack",
            "Deals damage equal to attack power",
            SkillKind::BasicAttack,
        ));
        book.insert(Skill::new(
            Self::CHAOS_TRIPLE_STRIKE,
            "Chaos Triple Strike",
            "Strikes 3 times at random targets, self included",
            SkillKind::ChaosTripleStrike,
        ));
        book
    }

    /// Adds a definition, replacing and returning any previous one with the same ID.
    pub fn insert(&mut self, skill: Skill) -> Option<Skill> {
        match self.skills.iter_mut().find(|s| s.id == skill.id) {
            Some(existing) => Some(std::mem::replace(existing, skill)),
            None => {
                self.skills.push(skill);
                None
            }
        }
    }

    pub fn get(&self, id: SkillId) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: SkillId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Contract violations detected while resolving a skill.
///
/// Decision validation runs first, so these only surface when a caller
/// bypasses it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillError {
    #[error("actor {actor} is not in the roster")]
    ActorNotFound { actor: CombatantId },

    #[error("{skill} requires a target")]
    MissingTarget { skill: SkillId },

    #[error("target {target} is not in the roster")]
    TargetNotFound { target: CombatantId },
}

impl GameError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            SkillError::ActorNotFound { .. } => "SKILL_ACTOR_NOT_FOUND",
            SkillError::MissingTarget { .. } => "SKILL_MISSING_TARGET",
            SkillError::TargetNotFound { .. } => "SKILL_TARGET_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn standard_book_has_builtin_skills() {
        let book = SkillBook::standard();
        assert_eq!(book.len(), 2);
        assert!(book.get(SkillBook::BASIC_ATTACK).is_some_and(Skill::targeted));
        assert!(
            book.get(SkillBook::CHAOS_TRIPLE_STRIKE)
                .is_some_and(|s| !s.targeted())
        );
    }

    #[test]
    fn insert_replaces_same_id() {
        let mut book = SkillBook::standard();
        let previous = book.insert(Skill::new(
            SkillBook::BASIC_ATTACK,
            "Slash",
            "A renamed attack",
            SkillKind::BasicAttack,
        ));
        assert_eq!(previous.map(|s| s.name), Some("Attack".to_string()));
        assert_eq!(book.len(), 2);
        assert_eq!(
            book.get(SkillBook::BASIC_ATTACK).map(|s| s.name.as_str()),
            Some("Slash")
        );
    }

    #[test]
    fn kind_parses_from_snake_case() {
        assert_eq!(
            SkillKind::from_str("chaos_triple_strike").ok(),
            Some(SkillKind::ChaosTripleStrike)
        );
        assert_eq!(SkillKind::BasicAttack.to_string(), "basic_attack");
        assert!(SkillKind::from_str("fireball").is_err());
    }
}
