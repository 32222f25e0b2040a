//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive a battle.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use combat_core::{Battle, CombatantId, Faction, Outcome, Resolution, TurnError};

use crate::api::{ActionProvider, ProviderKind, ProviderRegistry, Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Capacity of each event-bus topic.
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Seed for skill resolution randomness. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
            seed: None,
        }
    }
}

/// Main runtime that orchestrates a battle
///
/// Runtime owns the worker and the providers and coordinates turns.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    providers: ProviderRegistry,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    /// Swap providers or bindings between turns (e.g. toggling autoplay).
    pub fn providers_mut(&mut self) -> &mut ProviderRegistry {
        &mut self.providers
    }

    /// Execute a single live turn.
    ///
    /// Asks the provider bound to the active combatant for a decision and
    /// keeps asking until the engine accepts one. Any other failure is
    /// returned as-is.
    pub async fn step(&mut self) -> Result<Resolution> {
        let (turn, battle) = self.handle.prepare_next_turn().await?;
        let faction = battle
            .roster()
            .get(turn.actor)
            .map_or(Faction::Opponent, |combatant| combatant.faction);
        let provider = self.providers.get_for(turn.actor, faction)?;

        loop {
            let decision = provider.provide_decision(turn.actor, &battle).await?;

            match self.handle.execute_decision(decision).await {
                Ok(resolution) => return Ok(resolution),
                Err(err) if err.is_rejection() => {
                    debug!(
                        target: "runtime",
                        actor = %turn.actor,
                        error = %err,
                        "Decision rejected, asking again"
                    );
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Run turns until the battle ends and return the outcome.
    pub async fn run(&mut self) -> Result<Outcome> {
        loop {
            match self.step().await {
                Ok(Resolution {
                    outcome: Some(outcome),
                    ..
                }) => {
                    info!(target: "runtime", outcome = %outcome, "Battle finished");
                    return Ok(outcome);
                }
                Ok(_) => {}
                Err(RuntimeError::Turn(TurnError::BattleOver(outcome))) => return Ok(outcome),
                Err(err) => return Err(err),
            }
        }
    }

    /// Shutdown the runtime gracefully
    ///
    /// Waits for the worker to drain. Clones of the handle held elsewhere
    /// keep the worker alive, so drop them first.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        drop(self.providers);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    battle: Option<Battle>,
    providers: ProviderRegistry,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            battle: None,
            providers: ProviderRegistry::new(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide the battle to run (required)
    pub fn battle(mut self, battle: Battle) -> Self {
        self.battle = Some(battle);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Register a provider instance for a kind
    pub fn provider(mut self, kind: ProviderKind, provider: impl ActionProvider + 'static) -> Self {
        self.providers.register(kind, provider);
        self
    }

    pub fn provider_arc(mut self, kind: ProviderKind, provider: Arc<dyn ActionProvider>) -> Self {
        self.providers.register_arc(kind, provider);
        self
    }

    /// Route one combatant to a specific provider kind
    pub fn bind(mut self, combatant: CombatantId, kind: ProviderKind) -> Self {
        self.providers.bind(combatant, kind);
        self
    }

    pub fn faction_default(mut self, faction: Faction, kind: ProviderKind) -> Self {
        self.providers.set_faction_default(faction, kind);
        self
    }

    /// Build the runtime and spawn the simulation worker
    ///
    /// Must be called from within a tokio runtime.
    pub async fn build(self) -> Result<Runtime> {
        let battle = self.battle.ok_or(RuntimeError::MissingBattle)?;

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let sim_worker = SimulationWorker::new(battle, self.config.seed, command_rx, event_bus);

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            providers: self.providers,
            sim_worker_handle,
        })
    }
}
