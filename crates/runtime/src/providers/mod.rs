//! Built-in [`ActionProvider`](crate::ActionProvider) implementations.
//!
//! - [`HumanActionProvider`] waits on commands sent through [`HumanInput`]
//! - [`RandomActionProvider`] picks a uniform-random skill and target
//! - [`ScriptedActionProvider`] replays a fixed queue of decisions

mod human;
mod random;
mod scripted;

pub use human::{HumanActionProvider, HumanCommand, HumanInput, SelectionState};
pub use random::{RandomActionProvider, random_decision};
pub use scripted::ScriptedActionProvider;
