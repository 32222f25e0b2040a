use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use combat_core::{Battle, CombatantId, Decision};

use crate::api::{ActionProvider, Result, RuntimeError};

/// Replays a fixed sequence of decisions, one per request.
///
/// Decisions are handed out in order regardless of which combatant is asking,
/// so a script must list them in turn order. Rejected decisions also consume
/// an entry.
#[derive(Default)]
pub struct ScriptedActionProvider {
    queue: Mutex<VecDeque<Decision>>,
}

impl ScriptedActionProvider {
    pub fn new(decisions: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            queue: Mutex::new(decisions.into_iter().collect()),
        }
    }

    pub fn push(&self, decision: Decision) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(decision);
    }

    pub fn remaining(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl ActionProvider for ScriptedActionProvider {
    async fn provide_decision(&self, actor: CombatantId, _battle: &Battle) -> Result<Decision> {
        let next = self
            .queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match next {
            Some(decision) => {
                if decision.actor != actor {
                    tracing::warn!(
                        "Scripted decision is for {}, but {} is acting",
                        decision.actor,
                        actor
                    );
                }
                Ok(decision)
            }
            None => Err(RuntimeError::ScriptExhausted { actor }),
        }
    }
}
