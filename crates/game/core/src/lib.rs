//! Deterministic combat rules shared across clients.
//!
//! `combat-core` defines the canonical rules of a turn-based skirmish
//! (combatants, skills, decisions, turn order) and exposes pure APIs that can
//! be reused by both the runtime and offline tools. All state mutation flows
//! through [`engine::BattleEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod skill;
pub mod state;

pub use action::{Decision, DecisionError, DecisionKind};
pub use config::BattleConfig;
pub use engine::{BattleEngine, ExecuteError, Resolution, TurnError, TurnStart};
pub use error::{ErrorSeverity, GameError};
pub use event::{CombatEvent, DamageEvent};
pub use skill::{
    BasicAttack, ChaosTripleStrike, ResolveContext, Skill, SkillBook, SkillEffect, SkillError,
    SkillId, SkillKind,
};
pub use state::{
    Battle, Combatant, CombatantId, CombatantView, Faction, Outcome, Roster, RosterSnapshot,
    SetupError, TurnPhase, TurnState,
};
