//! Authoritative battle state representation.
//!
//! This module owns the data structures that describe combatants, the roster
//! and turn bookkeeping. Runtime layers clone or query this state but mutate
//! it exclusively through the engine.
mod error;
mod snapshot;
mod types;

use std::collections::HashSet;
use std::sync::Arc;

pub use error::SetupError;
pub use snapshot::{CombatantView, RosterSnapshot};
pub use types::{
    Combatant, CombatantId, DamageApplied, Faction, Outcome, Roster, TurnPhase, TurnState,
};

use crate::config::BattleConfig;
use crate::skill::{SkillBook, SkillId};

/// One in-memory battle instance: roster, shared skills and turn cursor.
///
/// Constructed once with an initial roster and discarded when the battle is
/// over. There is no process-wide state; two battles never share a roster.
#[derive(Clone, Debug)]
pub struct Battle {
    roster: Roster,
    skills: Arc<SkillBook>,
    turn: TurnState,
}

impl Battle {
    /// Validates the roster and places the cursor on the first living combatant.
    ///
    /// # Errors
    ///
    /// Rejects rosters that could later reach an unreachable state: empty,
    /// oversized, single-faction (counting only living members), duplicate IDs,
    /// combatants without skills or with skills missing from `skills`, and
    /// zero health/attack stats.
    pub fn new(roster: Roster, skills: impl Into<Arc<SkillBook>>) -> Result<Self, SetupError> {
        let skills = skills.into();
        validate_roster(&roster, &skills)?;

        let (cursor, first) = roster
            .iter()
            .enumerate()
            .find(|(_, c)| c.is_alive())
            .map(|(index, c)| (index, c.id))
            .ok_or(SetupError::EmptyRoster)?;

        Ok(Self {
            roster,
            skills,
            turn: TurnState::new(cursor, first),
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub(crate) fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn skills(&self) -> &SkillBook {
        &self.skills
    }

    /// Shared handle to the skill book, for callers that outlive this battle view.
    pub fn skills_handle(&self) -> Arc<SkillBook> {
        Arc::clone(&self.skills)
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub(crate) fn turn_mut(&mut self) -> &mut TurnState {
        &mut self.turn
    }

    pub fn is_over(&self) -> bool {
        self.turn.is_over()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.turn.outcome()
    }

    /// Combatant under the turn cursor, `None` once the battle is over.
    pub fn active(&self) -> Option<CombatantId> {
        if self.is_over() {
            return None;
        }
        self.roster.at(self.turn.cursor).map(|c| c.id)
    }

    /// Legal targets for `actor` using `skill`: living members of the opposing
    /// faction, in roster order. Empty for untargeted skills.
    pub fn valid_targets(&self, actor: CombatantId, skill: SkillId) -> Vec<CombatantId> {
        let Some(actor) = self.roster.get(actor) else {
            return Vec::new();
        };
        match self.skills.get(skill) {
            Some(skill) if skill.targeted() => self
                .roster
                .living_in(actor.faction.opposing())
                .map(|c| c.id)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Read-only view for rendering. Calling it twice without an intervening
    /// resolution yields identical data.
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot::capture(self)
    }
}

fn validate_roster(roster: &Roster, skills: &SkillBook) -> Result<(), SetupError> {
    if roster.is_empty() {
        return Err(SetupError::EmptyRoster);
    }
    if roster.len() > BattleConfig::MAX_COMBATANTS {
        return Err(SetupError::RosterTooLarge {
            max: BattleConfig::MAX_COMBATANTS,
            got: roster.len(),
        });
    }

    let mut seen = HashSet::with_capacity(roster.len());
    for combatant in roster {
        if !seen.insert(combatant.id) {
            return Err(SetupError::DuplicateCombatant { id: combatant.id });
        }
        if combatant.max_hp() == 0 {
            return Err(SetupError::ZeroMaxHp { id: combatant.id });
        }
        if combatant.atk() == 0 {
            return Err(SetupError::ZeroAttack { id: combatant.id });
        }
        if combatant.skills().is_empty() {
            return Err(SetupError::NoSkills { id: combatant.id });
        }
        if let Some(&skill) = combatant.skills().iter().find(|&&s| !skills.contains(s)) {
            return Err(SetupError::UnknownSkill {
                combatant: combatant.id,
                skill,
            });
        }
    }

    // Player side is checked first, so an all-dead roster reports the player.
    for faction in [Faction::Player, Faction::Opponent] {
        if !roster.any_alive(faction) {
            return Err(SetupError::FactionMissing { faction });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::SkillBook;

    fn book() -> SkillBook {
        SkillBook::standard()
    }

    fn hero() -> Combatant {
        Combatant::player(CombatantId(0), "Hero", 30, 10).with_skills([SkillBook::BASIC_ATTACK])
    }

    fn goblin(id: u32) -> Combatant {
        Combatant::opponent(CombatantId(id), "Goblin", 20, 5).with_skills([SkillBook::BASIC_ATTACK])
    }

    #[test]
    fn rejects_empty_roster() {
        let err = Battle::new(Roster::default(), book()).unwrap_err();
        assert_eq!(err, SetupError::EmptyRoster);
    }

    #[test]
    fn rejects_single_faction() {
        let err = Battle::new(Roster::new(vec![goblin(1), goblin(2)]), book()).unwrap_err();
        assert_eq!(
            err,
            SetupError::FactionMissing {
                faction: Faction::Player
            }
        );

        let err = Battle::new(Roster::new(vec![hero()]), book()).unwrap_err();
        assert_eq!(
            err,
            SetupError::FactionMissing {
                faction: Faction::Opponent
            }
        );
    }

    #[test]
    fn rejects_faction_with_only_dead_members() {
        let roster = Roster::new(vec![hero(), goblin(1).with_hp(0)]);
        let err = Battle::new(roster, book()).unwrap_err();
        assert_eq!(
            err,
            SetupError::FactionMissing {
                faction: Faction::Opponent
            }
        );
    }

    #[test]
    fn rejects_duplicate_ids_and_unknown_skills() {
        let err = Battle::new(Roster::new(vec![hero(), goblin(0)]), book()).unwrap_err();
        assert_eq!(
            err,
            SetupError::DuplicateCombatant { id: CombatantId(0) }
        );

        let stranger = Combatant::opponent(CombatantId(5), "Stranger", 10, 1)
            .with_skills([SkillId(42)]);
        let err = Battle::new(Roster::new(vec![hero(), stranger]), book()).unwrap_err();
        assert!(matches!(err, SetupError::UnknownSkill { .. }));
    }

    #[test]
    fn rejects_degenerate_stats() {
        let idle = Combatant::opponent(CombatantId(1), "Idle", 10, 0)
            .with_skills([SkillBook::BASIC_ATTACK]);
        let err = Battle::new(Roster::new(vec![hero(), idle]), book()).unwrap_err();
        assert_eq!(err, SetupError::ZeroAttack { id: CombatantId(1) });

        let mute = Combatant::opponent(CombatantId(1), "Mute", 10, 1);
        let err = Battle::new(Roster::new(vec![hero(), mute]), book()).unwrap_err();
        assert_eq!(err, SetupError::NoSkills { id: CombatantId(1) });
    }

    #[test]
    fn cursor_starts_on_first_living_combatant() {
        let roster = Roster::new(vec![goblin(1).with_hp(0), hero(), goblin(2)]);
        let battle = Battle::new(roster, book()).unwrap();

        assert_eq!(battle.turn().cursor, 1);
        assert_eq!(battle.turn().phase, TurnPhase::AwaitingDecision(CombatantId(0)));
        assert_eq!(battle.active(), Some(CombatantId(0)));
    }

    #[test]
    fn valid_targets_are_living_opponents() {
        let roster = Roster::new(vec![hero(), goblin(1).with_hp(0), goblin(2)]);
        let battle = Battle::new(roster, book()).unwrap();

        assert_eq!(
            battle.valid_targets(CombatantId(0), SkillBook::BASIC_ATTACK),
            vec![CombatantId(2)]
        );
        assert!(
            battle
                .valid_targets(CombatantId(0), SkillBook::CHAOS_TRIPLE_STRIKE)
                .is_empty()
        );
    }

    #[test]
    fn snapshot_is_idempotent() {
        let battle = Battle::new(Roster::new(vec![hero(), goblin(1)]), book()).unwrap();
        let first = battle.snapshot();
        let second = battle.snapshot();

        assert_eq!(first, second);
        assert_eq!(first.active, Some(CombatantId(0)));
        assert_eq!(first.combatants.len(), 2);
        assert!(first.combatant(CombatantId(1)).is_some_and(|c| !c.is_player));
    }
}
