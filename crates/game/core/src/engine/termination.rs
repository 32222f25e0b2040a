use crate::state::{Faction, Outcome, Roster};

/// Evaluates whether the battle has ended.
///
/// Runs after every resolution. The player-loss check comes first, so a
/// resolution that wipes both factions reports [`Outcome::Defeat`].
pub fn evaluate(roster: &Roster) -> Option<Outcome> {
    if !roster.any_alive(Faction::Player) {
        Some(Outcome::Defeat)
    } else if !roster.any_alive(Faction::Opponent) {
        Some(Outcome::Victory)
    } else {
        None
    }
}
