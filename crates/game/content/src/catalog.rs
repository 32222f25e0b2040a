//! Keyed skill definitions.
//!
//! Roster files name skills by short keys (`"attack"`, `"chaos_triple"`).
//! The catalog owns the [`SkillBook`] handed to a battle and resolves those
//! keys to [`SkillId`]s.

use std::collections::BTreeMap;
use std::str::FromStr;

use combat_core::{Skill, SkillBook, SkillId, SkillKind};

#[derive(Clone, Debug, Default)]
pub struct SkillCatalog {
    book: SkillBook,
    keys: BTreeMap<String, SkillId>,
}

impl SkillCatalog {
    pub const ATTACK: &'static str = "attack";
    pub const CHAOS_TRIPLE: &'static str = "chaos_triple";

    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog over [`SkillBook::standard`] with the built-in keys.
    pub fn standard() -> Self {
        let book = SkillBook::standard();
        let keys = BTreeMap::from([
            (Self::ATTACK.to_owned(), SkillBook::BASIC_ATTACK),
            (Self::CHAOS_TRIPLE.to_owned(), SkillBook::CHAOS_TRIPLE_STRIKE),
        ]);
        Self { book, keys }
    }

    /// Registers `skill` under `key`. Re-registering a key or an ID replaces
    /// the earlier entry.
    pub fn register(&mut self, key: impl Into<String>, skill: Skill) {
        self.keys.insert(key.into(), skill.id);
        self.book.insert(skill);
    }

    /// Looks a skill up by key, falling back to the effect name
    /// (`"basic_attack"`, `"chaos_triple_strike"`) for the first skill of
    /// that kind.
    pub fn resolve(&self, key: &str) -> Option<SkillId> {
        if let Some(id) = self.keys.get(key) {
            return Some(*id);
        }
        let kind = SkillKind::from_str(key).ok()?;
        self.book.iter().find(|s| s.kind == kind).map(|s| s.id)
    }

    pub fn keys(&self) -> impl Iterator<Item = (&str, SkillId)> {
        self.keys.iter().map(|(key, id)| (key.as_str(), *id))
    }

    pub fn book(&self) -> &SkillBook {
        &self.book
    }

    pub fn into_book(self) -> SkillBook {
        self.book
    }

    pub fn len(&self) -> usize {
        self.book.len()
    }

    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_keys_resolve_to_builtin_ids() {
        let catalog = SkillCatalog::standard();
        assert_eq!(
            catalog.resolve(SkillCatalog::ATTACK),
            Some(SkillBook::BASIC_ATTACK)
        );
        assert_eq!(
            catalog.resolve(SkillCatalog::CHAOS_TRIPLE),
            Some(SkillBook::CHAOS_TRIPLE_STRIKE)
        );
        assert_eq!(catalog.resolve("fireball"), None);
    }

    #[test]
    fn effect_names_are_accepted_as_keys() {
        let catalog = SkillCatalog::standard();
        assert_eq!(
            catalog.resolve("chaos_triple_strike"),
            Some(SkillBook::CHAOS_TRIPLE_STRIKE)
        );
        assert_eq!(catalog.resolve("basic_attack"), Some(SkillBook::BASIC_ATTACK));
    }

    #[test]
    fn register_replaces_existing_key() {
        let mut catalog = SkillCatalog::standard();
        catalog.register(
            SkillCatalog::ATTACK,
            Skill::new(SkillId(9), "Jab", "A quick hit", SkillKind::BasicAttack),
        );

        assert_eq!(catalog.resolve(SkillCatalog::ATTACK), Some(SkillId(9)));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.book().get(SkillId(9)).unwrap().name, "Jab");
    }
}
