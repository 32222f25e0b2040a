use super::{CombatantId, Outcome};

/// Where the turn state machine currently stands.
///
/// ```text
/// AwaitingDecision(id) ──execute──▶ Resolving ──▶ BattleOver(outcome)
///         ▲                            │
///         │                            ├──▶ AwaitingDecision(next)  (same round)
///         └──── prepare_next_turn ◀── RoundComplete                 (cursor wrapped)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    /// The combatant under the cursor must submit a decision.
    AwaitingDecision(CombatantId),
    /// A decision is being applied to the roster.
    Resolving,
    /// The cursor wrapped past the end of the roster; the next live
    /// combatant is selected but its turn has not started yet.
    RoundComplete,
    /// Terminal state. No further turns are processed.
    BattleOver(Outcome),
}

impl TurnPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnPhase::AwaitingDecision(_) => "awaiting_decision",
            TurnPhase::Resolving => "resolving",
            TurnPhase::RoundComplete => "round_complete",
            TurnPhase::BattleOver(_) => "battle_over",
        }
    }
}

/// Turn bookkeeping for the cyclic, dead-skipping turn order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Index into the roster of whose turn is active. Always a valid index.
    pub cursor: usize,

    /// Number of completed passes over the roster, starting at 1.
    pub round: u32,

    /// Sequential identifier incremented by every resolved decision.
    pub nonce: u64,

    pub phase: TurnPhase,

    /// Whether the turn-start event for the current `AwaitingDecision` turn
    /// has already been emitted.
    pub announced: bool,
}

impl TurnState {
    pub fn new(cursor: usize, first: CombatantId) -> Self {
        Self {
            cursor,
            round: 1,
            nonce: 0,
            phase: TurnPhase::AwaitingDecision(first),
            announced: false,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, TurnPhase::BattleOver(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            TurnPhase::BattleOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Combatant currently asked for a decision, if any.
    pub fn awaiting(&self) -> Option<CombatantId> {
        match self.phase {
            TurnPhase::AwaitingDecision(id) => Some(id),
            _ => None,
        }
    }
}
