//! Runtime orchestration for turn-based battles.
//!
//! This crate wires together the action provider abstraction, the event bus,
//! and the simulation worker into a cohesive runtime API. Consumers embed
//! [`Runtime`] to drive turns, subscribe to events, and feed human decisions
//! through [`HumanInput`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`providers`] ships the human, random, and scripted decision sources
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod providers;
pub mod runtime;

mod workers;

pub use api::{ActionProvider, ProviderKind, ProviderRegistry, Result, RuntimeError, RuntimeHandle};
pub use events::{BattleEvent, Event, EventBus, LogEntry, Topic, TurnEvent};
pub use providers::{
    HumanActionProvider, HumanCommand, HumanInput, RandomActionProvider, ScriptedActionProvider,
    SelectionState, random_decision,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
