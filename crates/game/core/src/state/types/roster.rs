use super::{Combatant, CombatantId, Faction};

/// Ordered combatant list; index is the turn-cycle position.
///
/// Size and order are fixed once a battle starts. Dead combatants stay in
/// place so turn positions and display order never shift.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    combatants: Vec<Combatant>,
}

impl Roster {
    pub fn new(combatants: Vec<Combatant>) -> Self {
        Self { combatants }
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// Returns the combatant at a turn-cycle position.
    pub fn at(&self, index: usize) -> Option<&Combatant> {
        self.combatants.get(index)
    }

    /// Returns a combatant by ID.
    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.combatants.iter_mut().find(|c| c.id == id)
    }

    /// Returns the turn-cycle position of a combatant.
    pub fn position(&self, id: CombatantId) -> Option<usize> {
        self.combatants.iter().position(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter()
    }

    /// Living combatants of every faction, in roster order.
    pub fn living(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter().filter(|c| c.is_alive())
    }

    /// Living combatants of one faction, in roster order.
    pub fn living_in(&self, faction: Faction) -> impl Iterator<Item = &Combatant> {
        self.living().filter(move |c| c.faction == faction)
    }

    pub fn living_ids(&self) -> Vec<CombatantId> {
        self.living().map(|c| c.id).collect()
    }

    pub fn any_alive(&self, faction: Faction) -> bool {
        self.living_in(faction).next().is_some()
    }

    pub fn contains_faction(&self, faction: Faction) -> bool {
        self.combatants.iter().any(|c| c.faction == faction)
    }
}

impl From<Vec<Combatant>> for Roster {
    fn from(combatants: Vec<Combatant>) -> Self {
        Self::new(combatants)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Combatant;
    type IntoIter = std::slice::Iter<'a, Combatant>;

    fn into_iter(self) -> Self::IntoIter {
        self.combatants.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Roster {
        Roster::new(vec![
            Combatant::player(CombatantId(0), "Hero", 30, 10),
            Combatant::opponent(CombatantId(1), "Alleria", 20, 5).with_hp(0),
            Combatant::opponent(CombatantId(2), "Ben", 20, 5),
        ])
    }

    #[test]
    fn living_filters_dead_and_keeps_order() {
        let roster = sample();
        assert_eq!(roster.living_ids(), vec![CombatantId(0), CombatantId(2)]);
        assert_eq!(
            roster
                .living_in(Faction::Opponent)
                .map(|c| c.id)
                .collect::<Vec<_>>(),
            vec![CombatantId(2)]
        );
    }

    #[test]
    fn lookup_by_id_and_position() {
        let roster = sample();
        assert_eq!(roster.position(CombatantId(2)), Some(2));
        assert_eq!(roster.get(CombatantId(1)).map(|c| c.name.as_str()), Some("Alleria"));
        assert!(roster.get(CombatantId(9)).is_none());
        assert!(roster.at(3).is_none());
    }

    #[test]
    fn faction_presence() {
        let roster = sample();
        assert!(roster.any_alive(Faction::Player));
        assert!(roster.any_alive(Faction::Opponent));

        let lonely = Roster::new(vec![Combatant::player(CombatantId(0), "Hero", 30, 10)]);
        assert!(!lonely.contains_faction(Faction::Opponent));
    }
}
