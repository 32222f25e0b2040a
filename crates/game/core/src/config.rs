/// Battle setup parameters and tunable defaults.
///
/// Mirrors the handful of numbers a designer tweaks between play sessions:
/// the player's stats, the stats opponents get when a roster entry does not
/// override them, and an optional RNG seed for reproducible battles.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Maximum (and starting) health of the player combatant.
    pub player_hp: u32,
    /// Attack power of the player combatant.
    pub player_atk: u32,
    /// Maximum health used for opponents without explicit stats.
    pub default_hp: u32,
    /// Attack power used for opponents without explicit stats.
    pub default_atk: u32,
    /// Seed for skill and policy randomness. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl BattleConfig {
    // ===== compile-time limits =====
    /// Upper bound on roster size accepted at battle construction.
    pub const MAX_COMBATANTS: usize = 64;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_HP: u32 = 100;
    pub const DEFAULT_PLAYER_ATK: u32 = 15;
    pub const DEFAULT_OPPONENT_HP: u32 = 50;
    pub const DEFAULT_OPPONENT_ATK: u32 = 8;

    pub fn new() -> Self {
        Self {
            player_hp: Self::DEFAULT_PLAYER_HP,
            player_atk: Self::DEFAULT_PLAYER_ATK,
            default_hp: Self::DEFAULT_OPPONENT_HP,
            default_atk: Self::DEFAULT_OPPONENT_ATK,
            seed: None,
        }
    }

    /// Returns a copy of this config with a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
