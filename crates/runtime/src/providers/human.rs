//! Decision channel driven by a person at a UI.
//!
//! The UI holds a [`HumanInput`] and sends skill/target picks; the runtime
//! awaits them through [`HumanActionProvider`]. The current selection mode is
//! published on a watch channel so the UI can grey out skill buttons while a
//! target is being picked.
use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc, watch};

use combat_core::{Battle, CombatantId, Decision, SkillId};

use crate::api::{ActionProvider, Result, RuntimeError};

/// Raw input from the person controlling the active combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanCommand {
    ChooseSkill(SkillId),
    ChooseTarget(CombatantId),
    Cancel,
}

/// Where the human channel is in its selection sub-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// No decision is being requested.
    #[default]
    Idle,
    /// Waiting for a skill pick.
    ChoosingSkill,
    /// A targeted skill was picked; waiting for a target or a cancel.
    ChoosingTarget(SkillId),
}

/// Action provider that waits for commands from a [`HumanInput`].
pub struct HumanActionProvider {
    commands: Mutex<mpsc::Receiver<HumanCommand>>,
    selection: watch::Sender<SelectionState>,
}

impl HumanActionProvider {
    /// Creates the provider and the input handle the UI talks to.
    pub fn new(buffer: usize) -> (Self, HumanInput) {
        let (command_tx, command_rx) = mpsc::channel(buffer.max(1));
        let (selection_tx, selection_rx) = watch::channel(SelectionState::Idle);

        let provider = Self {
            commands: Mutex::new(command_rx),
            selection: selection_tx,
        };
        let input = HumanInput {
            command_tx,
            selection: selection_rx,
        };
        (provider, input)
    }

    fn set_selection(&self, state: SelectionState) {
        self.selection.send_replace(state);
    }

    async fn await_decision(
        &self,
        actor: CombatantId,
        battle: &Battle,
        rx: &mut mpsc::Receiver<HumanCommand>,
    ) -> Result<Decision> {
        let mut pending: Option<SkillId> = None;
        self.set_selection(SelectionState::ChoosingSkill);

        loop {
            let command = rx
                .recv()
                .await
                .ok_or(RuntimeError::ActionProviderChannelClosed)?;

            match (pending, command) {
                (None, HumanCommand::ChooseSkill(skill)) => {
                    let known = battle
                        .roster()
                        .get(actor)
                        .is_some_and(|combatant| combatant.knows(skill));
                    let Some(definition) = battle.skills().get(skill).filter(|_| known) else {
                        tracing::warn!(actor = %actor, skill = %skill, "Skill not available");
                        continue;
                    };
                    if !definition.targeted() {
                        return Ok(Decision::untargeted(actor, skill));
                    }
                    pending = Some(skill);
                    self.set_selection(SelectionState::ChoosingTarget(skill));
                }
                (Some(skill), HumanCommand::ChooseTarget(target)) => {
                    if battle.valid_targets(actor, skill).contains(&target) {
                        return Ok(Decision::targeted(actor, skill, target));
                    }
                    tracing::warn!(actor = %actor, target = %target, "Not a valid target");
                }
                (Some(_), HumanCommand::Cancel) => {
                    pending = None;
                    self.set_selection(SelectionState::ChoosingSkill);
                }
                (None, HumanCommand::ChooseTarget(_)) => {
                    tracing::warn!("Target picked before choosing a skill");
                }
                (Some(skill), HumanCommand::ChooseSkill(_)) => {
                    tracing::warn!(skill = %skill, "Pick a target or cancel first");
                }
                (None, HumanCommand::Cancel) => {}
            }
        }
    }
}

#[async_trait]
impl ActionProvider for HumanActionProvider {
    async fn provide_decision(&self, actor: CombatantId, battle: &Battle) -> Result<Decision> {
        let mut rx = self.commands.lock().await;
        let result = self.await_decision(actor, battle, &mut rx).await;
        self.set_selection(SelectionState::Idle);
        // Input queued after the decision belongs to no turn.
        let mut discarded = 0usize;
        while rx.try_recv().is_ok() {
            discarded += 1;
        }
        if discarded > 0 {
            tracing::debug!(actor = %actor, discarded, "Dropped leftover human input");
        }
        result
    }
}

/// Cloneable handle a UI uses to drive the human channel.
#[derive(Clone)]
pub struct HumanInput {
    command_tx: mpsc::Sender<HumanCommand>,
    selection: watch::Receiver<SelectionState>,
}

impl HumanInput {
    pub async fn send(&self, command: HumanCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::ActionProviderChannelClosed)
    }

    pub async fn choose_skill(&self, skill: SkillId) -> Result<()> {
        self.send(HumanCommand::ChooseSkill(skill)).await
    }

    pub async fn choose_target(&self, target: CombatantId) -> Result<()> {
        self.send(HumanCommand::ChooseTarget(target)).await
    }

    /// Leaves target selection and returns to the skill list.
    pub async fn cancel_selection(&self) -> Result<()> {
        self.send(HumanCommand::Cancel).await
    }

    /// Current selection mode.
    pub fn selection(&self) -> SelectionState {
        *self.selection.borrow()
    }

    pub fn watch_selection(&self) -> watch::Receiver<SelectionState> {
        self.selection.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use combat_core::{Combatant, Roster, SkillBook};

    const ATTACK: SkillId = SkillBook::BASIC_ATTACK;
    const CHAOS: SkillId = SkillBook::CHAOS_TRIPLE_STRIKE;

    fn battle() -> Battle {
        Battle::new(
            Roster::new(vec![
                Combatant::player(CombatantId(0), "Player", 100, 10).with_skills([ATTACK, CHAOS]),
                Combatant::opponent(CombatantId(1), "Alleria", 20, 5).with_skills([ATTACK]),
            ]),
            SkillBook::standard(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn untargeted_skill_completes_immediately() {
        let (provider, input) = HumanActionProvider::new(4);
        input.choose_skill(CHAOS).await.unwrap();

        let decision = provider
            .provide_decision(CombatantId(0), &battle())
            .await
            .unwrap();
        assert_eq!(decision, Decision::untargeted(CombatantId(0), CHAOS));
        assert_eq!(input.selection(), SelectionState::Idle);
    }

    #[tokio::test]
    async fn leftover_input_does_not_carry_into_the_next_turn() {
        let (provider, input) = HumanActionProvider::new(4);
        input.choose_skill(CHAOS).await.unwrap();
        input.choose_skill(CHAOS).await.unwrap();

        let first = provider
            .provide_decision(CombatantId(0), &battle())
            .await
            .unwrap();
        assert_eq!(first, Decision::untargeted(CombatantId(0), CHAOS));

        let second = tokio::time::timeout(
            Duration::from_millis(50),
            provider.provide_decision(CombatantId(0), &battle()),
        )
        .await;
        assert!(second.is_err());
        assert_eq!(input.selection(), SelectionState::ChoosingSkill);
    }

    #[tokio::test]
    async fn invalid_target_keeps_waiting_and_cancel_returns_to_skills() {
        let (provider, input) = HumanActionProvider::new(8);
        input.choose_skill(ATTACK).await.unwrap();
        // Own faction is not a legal target.
        input.choose_target(CombatantId(0)).await.unwrap();
        input.cancel_selection().await.unwrap();
        input.choose_skill(ATTACK).await.unwrap();
        input.choose_target(CombatantId(1)).await.unwrap();

        let decision = provider
            .provide_decision(CombatantId(0), &battle())
            .await
            .unwrap();
        assert_eq!(
            decision,
            Decision::targeted(CombatantId(0), ATTACK, CombatantId(1))
        );
    }

    #[tokio::test]
    async fn unknown_skill_is_ignored() {
        let (provider, input) = HumanActionProvider::new(4);
        // Opponent only knows the basic attack.
        input.choose_skill(CHAOS).await.unwrap();
        input.choose_skill(ATTACK).await.unwrap();
        input.choose_target(CombatantId(0)).await.unwrap();

        let decision = provider
            .provide_decision(CombatantId(1), &battle())
            .await
            .unwrap();
        assert_eq!(
            decision,
            Decision::targeted(CombatantId(1), ATTACK, CombatantId(0))
        );
    }

    #[tokio::test]
    async fn selection_state_follows_targeting() {
        let (provider, input) = HumanActionProvider::new(4);
        let provider = Arc::new(provider);
        let mut selection = input.watch_selection();

        let task = {
            let provider = Arc::clone(&provider);
            tokio::spawn(async move { provider.provide_decision(CombatantId(0), &battle()).await })
        };

        selection
            .wait_for(|state| *state == SelectionState::ChoosingSkill)
            .await
            .unwrap();
        input.choose_skill(ATTACK).await.unwrap();
        selection
            .wait_for(|state| *state == SelectionState::ChoosingTarget(ATTACK))
            .await
            .unwrap();
        input.choose_target(CombatantId(1)).await.unwrap();

        let decision = task.await.unwrap().unwrap();
        assert_eq!(decision.target(), Some(CombatantId(1)));
        assert_eq!(input.selection(), SelectionState::Idle);
    }

    #[tokio::test]
    async fn dropped_input_closes_the_channel() {
        let (provider, input) = HumanActionProvider::new(1);
        drop(input);

        let err = provider
            .provide_decision(CombatantId(0), &battle())
            .await
            .unwrap_err();
        assert!(matches!(err, RuntimeError::ActionProviderChannelClosed));
    }
}
