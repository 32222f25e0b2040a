//! Topic-based event bus implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{BattleEvent, LogEntry, TurnEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Narrative battle log
    Log,
    /// Turn management events
    Turn,
    /// Roster snapshots and the final outcome
    Battle,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Log, Topic::Turn, Topic::Battle];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Log(LogEntry),
    Turn(TurnEvent),
    Battle(BattleEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Log(_) => Topic::Log,
            Event::Turn(_) => Topic::Turn,
            Event::Battle(_) => Topic::Battle,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Every topic channel exists from construction,
/// so publishing and subscribing never fail.
#[derive(Clone)]
pub struct EventBus {
    log: broadcast::Sender<Event>,
    turn: broadcast::Sender<Event>,
    battle: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            log: broadcast::channel(capacity).0,
            turn: broadcast::channel(capacity).0,
            battle: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Log => &self.log,
            Topic::Turn => &self.turn,
            Topic::Battle => &self.battle,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{CombatantId, Outcome};

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut turn_rx = bus.subscribe(Topic::Turn);
        let mut battle_rx = bus.subscribe(Topic::Battle);

        bus.publish(Event::Battle(BattleEvent::Ended {
            outcome: Outcome::Victory,
        }));
        bus.publish(Event::Turn(TurnEvent::Started {
            actor: CombatantId(0),
            round: 1,
        }));

        assert!(matches!(
            turn_rx.recv().await.unwrap(),
            Event::Turn(TurnEvent::Started { .. })
        ));
        assert!(matches!(
            battle_rx.recv().await.unwrap(),
            Event::Battle(BattleEvent::Ended { .. })
        ));
        assert!(turn_rx.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_harmless() {
        let bus = EventBus::default();
        bus.publish(Event::Turn(TurnEvent::RoundCompleted { round: 2 }));
        assert_eq!(bus.subscribe_multiple(&Topic::ALL).len(), 3);
    }
}
