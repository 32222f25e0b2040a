//! Event records produced by turn preparation and skill resolution.
//!
//! Resolution returns these in causal order (hit 1 before hit 2, a damage
//! record before the defeat it caused). The `Display` impl renders the
//! narrative line a log sink shows; the payload stays machine-readable.

use std::fmt;

use crate::skill::SkillId;
use crate::state::{CombatantId, Faction, Outcome};

/// A single hit landing on a combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageEvent {
    pub skill: SkillId,
    pub skill_name: String,
    pub attacker: CombatantId,
    pub attacker_name: String,
    pub target: CombatantId,
    pub target_name: String,
    pub damage: u32,
    pub remaining_hp: u32,
    /// 1-based hit number for multi-hit skills, `None` for single hits.
    pub hit: Option<u8>,
    /// True when this hit brought the target to exactly zero.
    pub defeated: bool,
}

impl DamageEvent {
    pub fn self_inflicted(&self) -> bool {
        self.attacker == self.target
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    /// A living combatant's turn begins.
    TurnStarted {
        actor: CombatantId,
        name: String,
        faction: Faction,
        round: u32,
    },

    Damage(DamageEvent),

    /// Follows the damage record of the hit that caused it.
    Defeated { target: CombatantId, name: String },

    /// A self-targeting skill found nobody alive and stopped.
    NoTarget { actor: CombatantId, name: String },

    /// A multi-hit skill stopped because its user died mid-sequence.
    AttackerFell { actor: CombatantId, name: String },

    /// The actor had no legal target and passed the turn.
    Idle { actor: CombatantId, name: String },

    BattleEnded { outcome: Outcome },
}

impl CombatEvent {
    /// Stable identifier for filtering and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CombatEvent::TurnStarted { .. } => "turn_started",
            CombatEvent::Damage(_) => "damage",
            CombatEvent::Defeated { .. } => "defeated",
            CombatEvent::NoTarget { .. } => "no_target",
            CombatEvent::AttackerFell { .. } => "attacker_fell",
            CombatEvent::Idle { .. } => "idle",
            CombatEvent::BattleEnded { .. } => "battle_ended",
        }
    }

    pub fn as_damage(&self) -> Option<&DamageEvent> {
        match self {
            CombatEvent::Damage(damage) => Some(damage),
            _ => None,
        }
    }
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::TurnStarted { name, faction, .. } => {
                if faction.is_player() {
                    write!(f, "It is {name}'s turn to act.")
                } else {
                    write!(f, "Waiting for {name} to act...")
                }
            }
            CombatEvent::Damage(damage) => fmt::Display::fmt(damage, f),
            CombatEvent::Defeated { name, .. } => write!(f, "{name} has been defeated!"),
            CombatEvent::NoTarget { name, .. } => {
                write!(f, "{name} can find no target, the attack stops!")
            }
            CombatEvent::AttackerFell { name, .. } => {
                write!(f, "{name} has fallen, the attack stops!")
            }
            CombatEvent::Idle { name, .. } => {
                write!(f, "{name} looks around but cannot find a target.")
            }
            CombatEvent::BattleEnded { outcome } => match outcome {
                Outcome::Victory => write!(f, "Game over, you won!"),
                Outcome::Defeat => write!(f, "Game over, you lost!"),
            },
        }
    }
}

impl fmt::Display for DamageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hit {
            None => write!(
                f,
                "{} uses {} on {}, dealing {} damage!",
                self.attacker_name, self.skill_name, self.target_name, self.damage
            ),
            Some(hit) if self.self_inflicted() => write!(
                f,
                "[Hit {hit}] {} hurts themself in the chaos, taking {} damage!",
                self.attacker_name, self.damage
            ),
            Some(hit) => write!(
                f,
                "[Hit {hit}] {} strikes {} in the chaos, dealing {} damage!",
                self.attacker_name, self.target_name, self.damage
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn damage(attacker: u32, target: u32, hit: Option<u8>) -> DamageEvent {
        DamageEvent {
            skill: SkillId(0),
            skill_name: "Attack".into(),
            attacker: CombatantId(attacker),
            attacker_name: "Hero".into(),
            target: CombatantId(target),
            target_name: if attacker == target { "Hero" } else { "Ben" }.into(),
            damage: 10,
            remaining_hp: 20,
            hit,
            defeated: false,
        }
    }

    #[test]
    fn narrates_single_and_chaos_hits() {
        assert_eq!(
            CombatEvent::Damage(damage(0, 2, None)).to_string(),
            "Hero uses Attack on Ben, dealing 10 damage!"
        );
        assert_eq!(
            CombatEvent::Damage(damage(0, 2, Some(2))).to_string(),
            "[Hit 2] Hero strikes Ben in the chaos, dealing 10 damage!"
        );
        assert_eq!(
            CombatEvent::Damage(damage(0, 0, Some(1))).to_string(),
            "[Hit 1] Hero hurts themself in the chaos, taking 10 damage!"
        );
    }

    #[test]
    fn turn_start_differs_by_faction() {
        let player = CombatEvent::TurnStarted {
            actor: CombatantId(0),
            name: "Hero".into(),
            faction: Faction::Player,
            round: 1,
        };
        let opponent = CombatEvent::TurnStarted {
            actor: CombatantId(1),
            name: "Ben".into(),
            faction: Faction::Opponent,
            round: 1,
        };
        assert_eq!(player.to_string(), "It is Hero's turn to act.");
        assert_eq!(opponent.to_string(), "Waiting for Ben to act...");
    }

    #[test]
    fn battle_end_lines() {
        let won = CombatEvent::BattleEnded {
            outcome: Outcome::Victory,
        };
        let lost = CombatEvent::BattleEnded {
            outcome: Outcome::Defeat,
        };
        assert_eq!(won.to_string(), "Game over, you won!");
        assert_eq!(lost.to_string(), "Game over, you lost!");
        assert_eq!(won.kind(), "battle_ended");
    }
}
