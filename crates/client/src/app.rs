//! Terminal battle session.
//!
//! Owns the composition of runtime, providers, and stdin. Narration is read
//! from the event bus and printed to stdout; typed commands are forwarded to
//! the human channel.
use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use combat_core::{Battle, CombatantId, Faction, Outcome};
use combat_runtime::{
    Event, HumanActionProvider, HumanInput, ProviderKind, RandomActionProvider, Runtime,
    RuntimeConfig, RuntimeHandle, SelectionState, Topic, TurnEvent,
};

use crate::config::ClientConfig;
use crate::input::{self, InputCommand};
use crate::render;

pub struct CliApp {
    config: ClientConfig,
    battle: Battle,
}

impl CliApp {
    pub fn new(config: ClientConfig, battle: Battle) -> Self {
        Self { config, battle }
    }

    /// Play the battle to the end. Returns `None` when the player quits.
    pub async fn run(self) -> Result<Option<Outcome>> {
        let (human, human_input) = HumanActionProvider::new(self.config.input_buffer);
        let random = match self.config.seed {
            // Offset so the policy does not mirror the skill RNG stream.
            Some(seed) => RandomActionProvider::seeded(seed.wrapping_add(1)),
            None => RandomActionProvider::from_entropy(),
        };

        let mut builder = Runtime::builder()
            .config(RuntimeConfig {
                seed: self.config.seed,
                ..RuntimeConfig::default()
            })
            .battle(self.battle)
            .provider(ProviderKind::Human, human)
            .provider(ProviderKind::Random, random);
        if self.config.autoplay {
            builder = builder.faction_default(Faction::Player, ProviderKind::Random);
        }
        let mut runtime = builder.build().await?;

        let handle = runtime.handle();
        let mut log_rx = handle.subscribe(Topic::Log);
        let mut turn_rx = handle.subscribe(Topic::Turn);

        info!(autoplay = self.config.autoplay, "Battle starting");
        if !self.config.autoplay {
            println!("{}", input::HELP);
        }

        let mut game = tokio::spawn(async move {
            let result = runtime.run().await;
            (runtime, result)
        });

        let mut session = Session {
            handle,
            input: human_input,
            human_turn: None,
        };
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let stdin_open = !self.config.autoplay;

        loop {
            tokio::select! {
                joined = &mut game => {
                    let (runtime, result) = joined.context("battle task panicked")?;
                    while let Ok(event) = log_rx.try_recv() {
                        print_log(&event);
                    }
                    let outcome = result?;
                    drop(session);
                    runtime.shutdown().await?;
                    return Ok(Some(outcome));
                }
                event = log_rx.recv() => match event {
                    Ok(event) => print_log(&event),
                    Err(RecvError::Lagged(skipped)) => warn!(skipped, "Log output fell behind"),
                    Err(RecvError::Closed) => {}
                },
                event = turn_rx.recv() => match event {
                    Ok(Event::Turn(turn)) => session.on_turn_event(turn, self.config.autoplay).await?,
                    Ok(_) | Err(RecvError::Closed) => {}
                    Err(RecvError::Lagged(skipped)) => warn!(skipped, "Turn events fell behind"),
                },
                line = lines.next_line(), if stdin_open => {
                    let Some(line) = line.context("Failed to read stdin")? else {
                        debug!("stdin closed");
                        game.abort();
                        return Ok(None);
                    };
                    if session.on_input(input::parse_line(&line)).await? {
                        game.abort();
                        return Ok(None);
                    }
                }
            }
        }
    }
}

struct Session {
    handle: RuntimeHandle,
    input: HumanInput,
    /// Combatant the person is deciding for, while their turn is open.
    human_turn: Option<CombatantId>,
}

impl Session {
    async fn on_turn_event(&mut self, event: TurnEvent, autoplay: bool) -> Result<()> {
        match event {
            TurnEvent::Started { actor, .. } => {
                let battle = self.handle.query_battle().await?;
                let is_player = battle.roster().get(actor).is_some_and(|c| c.is_player());
                self.human_turn = (is_player && !autoplay).then_some(actor);
                if self.human_turn.is_some() {
                    print_lines(render::roster_lines(&battle.snapshot()));
                    print_lines(render::skill_menu(&battle, actor));
                }
            }
            TurnEvent::Resolved { actor, .. } if self.human_turn == Some(actor) => {
                self.human_turn = None;
            }
            TurnEvent::DecisionRejected { error, .. } => println!("Not allowed: {error}"),
            _ => {}
        }
        Ok(())
    }

    /// Returns true when the player asked to quit.
    async fn on_input(&mut self, command: InputCommand) -> Result<bool> {
        match command {
            InputCommand::Quit => return Ok(true),
            InputCommand::Help => println!("{}", input::HELP),
            InputCommand::Status => {
                let snapshot = self.handle.query_snapshot().await?;
                print_lines(render::roster_lines(&snapshot));
            }
            InputCommand::Cancel => {
                if matches!(self.input.selection(), SelectionState::ChoosingTarget(_)) {
                    self.input.cancel_selection().await?;
                    if let Some(actor) = self.human_turn {
                        let battle = self.handle.query_battle().await?;
                        print_lines(render::skill_menu(&battle, actor));
                    }
                }
            }
            InputCommand::Pick(index) => self.pick(index).await?,
            InputCommand::None => {}
        }
        Ok(false)
    }

    async fn pick(&mut self, index: usize) -> Result<()> {
        let Some(actor) = self.human_turn else {
            println!("It is not your turn.");
            return Ok(());
        };
        let battle = self.handle.query_battle().await?;

        match self.input.selection() {
            SelectionState::ChoosingTarget(skill) => {
                match battle.valid_targets(actor, skill).get(index) {
                    Some(&target) => self.input.choose_target(target).await?,
                    None => println!("No such target."),
                }
            }
            SelectionState::Idle => println!("Wait for your turn."),
            SelectionState::ChoosingSkill => {
                let Some(&skill) = render::skills_of(&battle, actor).get(index) else {
                    println!("No such skill.");
                    return Ok(());
                };
                let targeted = battle.skills().get(skill).is_some_and(|s| s.targeted());
                self.input.choose_skill(skill).await?;
                if targeted {
                    println!("Choose a target (c to cancel):");
                    print_lines(render::target_menu(&battle, actor, skill));
                }
            }
        }
        Ok(())
    }
}

fn print_log(event: &Event) {
    if let Event::Log(entry) = event {
        println!("{}", entry.text);
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
