//! Read-only views handed to presentation layers.

use crate::skill::SkillId;
use crate::state::{Battle, Combatant, CombatantId, Outcome};

/// Render-ready view of a single combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantView {
    pub id: CombatantId,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub atk: u32,
    pub is_player: bool,
    pub is_dead: bool,
    pub skills: Vec<SkillId>,
}

impl From<&Combatant> for CombatantView {
    fn from(combatant: &Combatant) -> Self {
        Self {
            id: combatant.id,
            name: combatant.name.clone(),
            hp: combatant.hp(),
            max_hp: combatant.max_hp(),
            atk: combatant.atk(),
            is_player: combatant.is_player(),
            is_dead: combatant.is_dead(),
            skills: combatant.skills().to_vec(),
        }
    }
}

/// Snapshot of the whole roster plus turn markers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterSnapshot {
    pub combatants: Vec<CombatantView>,
    /// Combatant under the turn cursor. `None` once the battle is over.
    pub active: Option<CombatantId>,
    pub round: u32,
    pub outcome: Option<Outcome>,
}

impl RosterSnapshot {
    pub fn capture(battle: &Battle) -> Self {
        Self {
            combatants: battle.roster().iter().map(CombatantView::from).collect(),
            active: battle.active(),
            round: battle.turn().round,
            outcome: battle.outcome(),
        }
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&CombatantView> {
        self.combatants.iter().find(|c| c.id == id)
    }
}
