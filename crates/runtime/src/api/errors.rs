//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, the battle engine, and action
//! providers so clients can bubble them up with consistent context.
use std::fmt;

use thiserror::Error;
use tokio::sync::oneshot;

use combat_core::{CombatantId, ErrorSeverity, ExecuteError, GameError, TurnError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{kind} action provider not set")]
    ProviderNotSet { kind: ProviderKind },

    #[error("action provider channel closed")]
    ActionProviderChannelClosed,

    #[error("scripted provider has no decision left for {actor}")]
    ScriptExhausted { actor: CombatantId },

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a battle to be configured before building")]
    MissingBattle,

    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),
}

impl RuntimeError {
    /// True when the engine rejected a decision and the same turn is still
    /// waiting for another one.
    pub fn is_rejection(&self) -> bool {
        matches!(self, RuntimeError::Execute(err) if err.is_rejection())
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Turn(err) => err.severity(),
            RuntimeError::Execute(err) => err.severity(),
            RuntimeError::ProviderNotSet { .. } | RuntimeError::MissingBattle => {
                ErrorSeverity::Fatal
            }
            _ => ErrorSeverity::Internal,
        }
    }
}

/// Identifies a registered [`ActionProvider`](super::ActionProvider) slot.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum ProviderKind {
    /// Decisions typed or clicked by a person.
    Human,
    /// Uniform-random automatic policy.
    Random,
    /// Fixed decision queue for tests and replays.
    Scripted,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProviderKind::Human => "human",
            ProviderKind::Random => "random",
            ProviderKind::Scripted => "scripted",
        };
        write!(f, "{}", label)
    }
}
