//! Simulation worker that owns the authoritative [`combat_core::Battle`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), executes
//! decisions via [`combat_core::BattleEngine`], and publishes events to the
//! [`EventBus`].

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use combat_core::{
    Battle, BattleEngine, CombatEvent, Decision, ExecuteError, GameError, Resolution,
    RosterSnapshot, TurnStart,
};

use crate::api::Result;
use crate::events::{BattleEvent, Event, EventBus, LogEntry, TurnEvent};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Start the turn under the cursor.
    /// Returns the turn and a copy of the battle for decision-making.
    PrepareNextTurn {
        reply: oneshot::Sender<Result<(TurnStart, Battle)>>,
    },
    /// Resolve a decision (turn must already be prepared).
    ExecuteDecision {
        decision: Decision,
        reply: oneshot::Sender<Result<Resolution>>,
    },
    QuerySnapshot {
        reply: oneshot::Sender<RosterSnapshot>,
    },
    QueryBattle {
        reply: oneshot::Sender<Battle>,
    },
}

/// Background task that processes battle commands one at a time.
///
/// The worker does not own providers or perform I/O; provider orchestration
/// is done by [`Runtime`](crate::Runtime).
pub struct SimulationWorker {
    battle: Battle,
    rng: ChaCha8Rng,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    log_seq: u64,
}

impl SimulationWorker {
    pub fn new(
        battle: Battle,
        seed: Option<u64>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            target: "runtime::worker",
            combatants = battle.roster().len(),
            seeded = seed.is_some(),
            "SimulationWorker initialized"
        );

        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Self {
            battle,
            rng,
            command_rx,
            event_bus,
            log_seq: 0,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                else => break,
            }
        }
        debug!(target: "runtime::worker", "Command channel closed, worker exiting");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::PrepareNextTurn { reply } => {
                let result = self.handle_turn_preparation();
                if reply.send(result).is_err() {
                    debug!("PrepareNextTurn reply channel closed (caller dropped)");
                }
            }
            Command::ExecuteDecision { decision, reply } => {
                let result = self.handle_decision(decision);
                if reply.send(result).is_err() {
                    debug!("ExecuteDecision reply channel closed (caller dropped)");
                }
            }
            Command::QuerySnapshot { reply } => {
                if reply.send(self.battle.snapshot()).is_err() {
                    debug!("QuerySnapshot reply channel closed (caller dropped)");
                }
            }
            Command::QueryBattle { reply } => {
                if reply.send(self.battle.clone()).is_err() {
                    debug!("QueryBattle reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_turn_preparation(&mut self) -> Result<(TurnStart, Battle)> {
        let turn = BattleEngine::new(&mut self.battle).prepare_next_turn()?;

        if !turn.events.is_empty() {
            debug!(
                target: "runtime::worker",
                actor = %turn.actor,
                round = turn.round,
                "Turn started"
            );
            self.event_bus.publish(Event::Turn(TurnEvent::Started {
                actor: turn.actor,
                round: turn.round,
            }));
            self.publish_log(&turn.events);
            self.publish_snapshot();
        }

        Ok((turn, self.battle.clone()))
    }

    /// Resolves against a staged copy; the battle is replaced only on success.
    fn handle_decision(&mut self, decision: Decision) -> Result<Resolution> {
        let mut staged = self.battle.clone();
        let resolution = match BattleEngine::new(&mut staged).execute(&decision, &mut self.rng) {
            Ok(resolution) => resolution,
            Err(error) => {
                self.handle_execute_error(&decision, &error);
                return Err(error.into());
            }
        };
        self.battle = staged;

        debug!(
            target: "runtime::worker",
            actor = %resolution.actor,
            skill = ?decision.skill(),
            target = ?decision.target(),
            events = resolution.events.len(),
            "Decision resolved"
        );

        self.publish_log(&resolution.events);
        self.event_bus.publish(Event::Turn(TurnEvent::Resolved {
            actor: resolution.actor,
            nonce: self.battle.turn().nonce,
        }));
        if resolution.round_completed {
            self.event_bus.publish(Event::Turn(TurnEvent::RoundCompleted {
                round: self.battle.turn().round,
            }));
        }
        self.publish_snapshot();
        if let Some(outcome) = resolution.outcome {
            info!(target: "runtime::worker", outcome = %outcome, "Battle over");
            self.event_bus
                .publish(Event::Battle(BattleEvent::Ended { outcome }));
        }

        Ok(resolution)
    }

    fn handle_execute_error(&self, decision: &Decision, error: &ExecuteError) {
        match error {
            ExecuteError::InvalidDecision(reason) => {
                debug!(
                    target: "runtime::worker",
                    actor = %decision.actor,
                    code = error.error_code(),
                    error = %reason,
                    "Decision rejected"
                );
                self.event_bus
                    .publish(Event::Turn(TurnEvent::DecisionRejected {
                        decision: *decision,
                        error: reason.clone(),
                    }));
            }
            ExecuteError::Skill(_) | ExecuteError::Turn(_) => {
                error!(
                    target: "runtime::worker",
                    actor = %decision.actor,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    error = %error,
                    "Decision execution failed"
                );
            }
            _ => {
                warn!(
                    target: "runtime::worker",
                    actor = %decision.actor,
                    code = error.error_code(),
                    error = %error,
                    "Decision refused"
                );
            }
        }
    }

    fn publish_log(&mut self, events: &[CombatEvent]) {
        for event in events {
            self.log_seq += 1;
            self.event_bus
                .publish(Event::Log(LogEntry::new(self.log_seq, event.clone())));
        }
    }

    fn publish_snapshot(&self) {
        self.event_bus
            .publish(Event::Battle(BattleEvent::Snapshot(self.battle.snapshot())));
    }
}
