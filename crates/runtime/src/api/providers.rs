//! Asynchronous abstraction for sourcing combatant decisions.
//!
//! Runtime users plug in [`ActionProvider`] implementations so a battle can
//! run with human input, scripted fixtures, or the random policy.
use async_trait::async_trait;
use combat_core::{Battle, CombatantId, Decision};

use super::errors::Result;

/// Trait for providing decisions based on the current battle.
///
/// Different implementations can handle:
/// - Human input (from a UI/CLI)
/// - Automatic policies for opponents
/// - Scripted/replayed decisions
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Provide a decision for `actor`, whose turn has just started.
    ///
    /// `battle` is a read-only copy taken at turn start. The runtime keeps
    /// asking the same provider until the engine accepts a decision.
    async fn provide_decision(&self, actor: CombatantId, battle: &Battle) -> Result<Decision>;
}
