//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the battle and executes commands serially.

mod simulation;

pub use simulation::{Command, SimulationWorker};
