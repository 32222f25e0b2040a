use std::fmt;

/// Unique identifier for a combatant within one battle instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Side a combatant fights for.
///
/// The only faction axis in a battle: the player's side against everyone else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Faction {
    Player,
    Opponent,
}

impl Faction {
    pub const fn from_is_player(is_player: bool) -> Self {
        if is_player {
            Self::Player
        } else {
            Self::Opponent
        }
    }

    #[inline]
    pub const fn is_player(self) -> bool {
        matches!(self, Self::Player)
    }

    /// Returns the faction on the other side of the battle.
    pub const fn opposing(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// Terminal result of a battle, always from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    Victory,
    Defeat,
}

impl Outcome {
    pub const fn is_victory(self) -> bool {
        matches!(self, Self::Victory)
    }
}
