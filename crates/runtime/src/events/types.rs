use serde::{Deserialize, Serialize};

use combat_core::{CombatEvent, CombatantId, Decision, DecisionError, Outcome, RosterSnapshot};

/// One narrative line for the battle log.
///
/// Entries are published in causal order; `seq` increases by one per entry
/// for the lifetime of a runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub seq: u64,
    pub text: String,
    /// Machine-readable form of the same line.
    pub record: CombatEvent,
}

impl LogEntry {
    pub fn new(seq: u64, record: CombatEvent) -> Self {
        Self {
            seq,
            text: record.to_string(),
            record,
        }
    }
}

/// Turn-cycle notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    Started { actor: CombatantId, round: u32 },

    /// A decision was accepted and fully resolved.
    Resolved { actor: CombatantId, nonce: u64 },

    /// The cursor wrapped; `round` is the round about to begin.
    RoundCompleted { round: u32 },

    /// The engine refused a decision; the same turn is still open.
    DecisionRejected {
        decision: Decision,
        error: DecisionError,
    },
}

/// Battle-level state notifications for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// Published after every state change.
    Snapshot(RosterSnapshot),

    Ended { outcome: Outcome },
}
