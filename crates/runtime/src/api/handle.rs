//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! stepping the battle or streaming events from specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use combat_core::{Battle, Decision, Resolution, RosterSnapshot, TurnStart};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Start the turn under the cursor and return it with a copy of the battle.
    ///
    /// Safe to call repeatedly; the turn-start event is only published once.
    pub async fn prepare_next_turn(&self) -> Result<(TurnStart, Battle)> {
        self.request(|reply| Command::PrepareNextTurn { reply })
            .await?
    }

    /// Resolve a decision for the current turn.
    ///
    /// A rejected decision leaves the battle untouched; check
    /// [`RuntimeError::is_rejection`] and submit another one.
    pub async fn execute_decision(&self, decision: Decision) -> Result<Resolution> {
        self.request(|reply| Command::ExecuteDecision { decision, reply })
            .await?
    }

    /// Query the current roster snapshot.
    pub async fn query_snapshot(&self) -> Result<RosterSnapshot> {
        self.request(|reply| Command::QuerySnapshot { reply }).await
    }

    /// Query a copy of the whole battle (read-only).
    pub async fn query_battle(&self) -> Result<Battle> {
        self.request(|reply| Command::QueryBattle { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Log` - Narrative battle log lines
    /// - `Topic::Turn` - Turn starts, resolutions, rejections
    /// - `Topic::Battle` - Roster snapshots and the final outcome
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
