//! `skirmish` binary entry point.
//!
//! Loads `.env`, reads [`ClientConfig`] from the environment, assembles the
//! battle from content files (or the standard lineup), and hands it to
//! [`CliApp`].

use anyhow::{Context, Result};
use combat_client::{CliApp, ClientConfig, logging};
use combat_content::{ConfigLoader, ContentFactory, RosterLoader, SkillCatalog};
use combat_core::{Battle, BattleConfig, Outcome};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let mut config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    let (battle, battle_config) = build_battle(&config)?;
    config.seed = battle_config.seed;
    tracing::info!(combatants = battle.roster().len(), "Battle assembled");

    match CliApp::new(config, battle).run().await? {
        Some(Outcome::Victory) => println!("You won."),
        Some(Outcome::Defeat) => println!("You lost."),
        None => println!("Battle abandoned."),
    }

    Ok(())
}

/// Battle plus the effective config (seed from the environment wins).
fn build_battle(config: &ClientConfig) -> Result<(Battle, BattleConfig)> {
    let mut battle_config = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => BattleConfig::default(),
    };
    if let Some(seed) = config.seed {
        battle_config.seed = Some(seed);
    }

    let battle = match &config.roster_path {
        Some(path) => {
            let catalog = SkillCatalog::standard();
            let roster = RosterLoader::load(path, &catalog, &battle_config)?;
            Battle::new(roster, catalog.into_book())
                .with_context(|| format!("Invalid roster in {}", path.display()))?
        }
        None => ContentFactory::standard_battle(&battle_config).context("Invalid standard battle")?,
    };

    Ok((battle, battle_config))
}
