//! Provider registry for managing action providers.
//!
//! The [`ProviderRegistry`] maps combatants to action providers:
//!
//! - **Provider instances**: stored by [`ProviderKind`], shared across combatants
//! - **Faction defaults**: each faction resolves to a kind (human for the
//!   player side, random for opponents unless changed)
//! - **Combatant bindings**: sparse per-combatant overrides, e.g. autoplay
//! - **Fallback chain**: combatant binding → faction default

use std::collections::HashMap;
use std::sync::Arc;

use combat_core::{CombatantId, Faction};

use super::{ActionProvider, ProviderKind, Result, RuntimeError};

/// Registry for managing action providers with combatant-specific bindings.
///
/// ```text
/// ProviderRegistry
/// ├── providers: HashMap<ProviderKind, Provider>      (provider instances)
/// ├── bindings: HashMap<CombatantId, ProviderKind>    (combatant overrides)
/// └── faction_defaults: HashMap<Faction, ProviderKind> (fallback)
/// ```
pub struct ProviderRegistry {
    /// Arc so providers can be used outside the registry borrow.
    providers: HashMap<ProviderKind, Arc<dyn ActionProvider>>,
    bindings: HashMap<CombatantId, ProviderKind>,
    faction_defaults: HashMap<Faction, ProviderKind>,
}

impl ProviderRegistry {
    /// Registry with the player side on [`ProviderKind::Human`] and opponents on
    /// [`ProviderKind::Random`]. No provider instances are registered yet.
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
            bindings: HashMap::new(),
            faction_defaults: HashMap::from([
                (Faction::Player, ProviderKind::Human),
                (Faction::Opponent, ProviderKind::Random),
            ]),
        }
    }

    /// Register a provider for a specific kind, replacing any previous one.
    pub fn register(&mut self, kind: ProviderKind, provider: impl ActionProvider + 'static) {
        self.providers.insert(kind, Arc::new(provider));
    }

    pub fn register_arc(&mut self, kind: ProviderKind, provider: Arc<dyn ActionProvider>) {
        self.providers.insert(kind, provider);
    }

    /// Bind a combatant to a specific provider kind, overriding its faction default.
    pub fn bind(&mut self, combatant: CombatantId, kind: ProviderKind) {
        self.bindings.insert(combatant, kind);
    }

    /// Revert a combatant to its faction default. Returns the previous binding.
    pub fn unbind(&mut self, combatant: CombatantId) -> Option<ProviderKind> {
        self.bindings.remove(&combatant)
    }

    pub fn set_faction_default(&mut self, faction: Faction, kind: ProviderKind) {
        self.faction_defaults.insert(faction, kind);
    }

    pub fn faction_default(&self, faction: Faction) -> ProviderKind {
        self.faction_defaults
            .get(&faction)
            .copied()
            .unwrap_or(match faction {
                Faction::Player => ProviderKind::Human,
                Faction::Opponent => ProviderKind::Random,
            })
    }

    /// Provider kind a combatant resolves to.
    pub fn kind_for(&self, combatant: CombatantId, faction: Faction) -> ProviderKind {
        self.bindings
            .get(&combatant)
            .copied()
            .unwrap_or_else(|| self.faction_default(faction))
    }

    /// Provider for a combatant: its binding, else its faction default.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::ProviderNotSet` if the resolved kind has no
    /// registered instance.
    pub fn get_for(&self, combatant: CombatantId, faction: Faction) -> Result<Arc<dyn ActionProvider>> {
        self.get(self.kind_for(combatant, faction))
    }

    pub fn get(&self, kind: ProviderKind) -> Result<Arc<dyn ActionProvider>> {
        self.providers
            .get(&kind)
            .cloned()
            .ok_or(RuntimeError::ProviderNotSet { kind })
    }

    pub fn has(&self, kind: ProviderKind) -> bool {
        self.providers.contains_key(&kind)
    }

    pub fn is_bound(&self, combatant: CombatantId) -> bool {
        self.bindings.contains_key(&combatant)
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ScriptedActionProvider;

    #[test]
    fn resolves_binding_before_faction_default() {
        let mut registry = ProviderRegistry::new();
        registry.bind(CombatantId(0), ProviderKind::Random);

        assert_eq!(
            registry.kind_for(CombatantId(0), Faction::Player),
            ProviderKind::Random
        );
        assert_eq!(
            registry.kind_for(CombatantId(3), Faction::Player),
            ProviderKind::Human
        );
        assert_eq!(
            registry.kind_for(CombatantId(1), Faction::Opponent),
            ProviderKind::Random
        );

        assert_eq!(registry.unbind(CombatantId(0)), Some(ProviderKind::Random));
        assert!(!registry.is_bound(CombatantId(0)));
    }

    #[test]
    fn missing_provider_is_reported_by_kind() {
        let mut registry = ProviderRegistry::new();
        registry.register(ProviderKind::Random, ScriptedActionProvider::default());

        assert!(registry.get_for(CombatantId(1), Faction::Opponent).is_ok());
        let err = registry
            .get_for(CombatantId(0), Faction::Player)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            RuntimeError::ProviderNotSet {
                kind: ProviderKind::Human
            }
        ));
    }

    #[test]
    fn faction_default_can_be_changed() {
        let mut registry = ProviderRegistry::new();
        registry.set_faction_default(Faction::Player, ProviderKind::Scripted);
        assert_eq!(
            registry.kind_for(CombatantId(0), Faction::Player),
            ProviderKind::Scripted
        );
        assert_eq!(registry.binding_count(), 0);
        assert_eq!(registry.provider_count(), 0);
    }
}
