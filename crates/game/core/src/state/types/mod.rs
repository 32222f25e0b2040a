mod combatant;
mod common;
mod roster;
mod turn;

pub use combatant::{Combatant, DamageApplied};
pub use common::{CombatantId, Faction, Outcome};
pub use roster::Roster;
pub use turn::{TurnPhase, TurnState};
