//! Topic-based event bus for runtime events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need: a log view to [`Topic::Log`], a roster view to
//! [`Topic::Battle`], a scheduler or test harness to [`Topic::Turn`].

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{BattleEvent, LogEntry, TurnEvent};
