//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings for one `skirmish` session.
///
/// Environment variables:
/// - `SKIRMISH_CONFIG` - TOML battle config (default: built-in numbers)
/// - `SKIRMISH_ROSTER` - RON roster file (default: Player vs Alleria and Ben)
/// - `SKIRMISH_SEED` - fixed RNG seed, overrides the config file
/// - `SKIRMISH_AUTOPLAY` - let the random policy play the player side
/// - `SKIRMISH_LOG_DIR` - also write tracing output to `<dir>/skirmish.log`
/// - `SKIRMISH_INPUT_BUFFER` - queued commands for the human channel (default: 16)
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub config_path: Option<PathBuf>,
    pub roster_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub autoplay: bool,
    pub log_dir: Option<PathBuf>,
    pub input_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            roster_path: None,
            seed: None,
            autoplay: false,
            log_dir: None,
            input_buffer: 16,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.config_path = read_env::<PathBuf>("SKIRMISH_CONFIG");
        config.roster_path = read_env::<PathBuf>("SKIRMISH_ROSTER");
        config.seed = read_env::<u64>("SKIRMISH_SEED");
        config.log_dir = read_env::<PathBuf>("SKIRMISH_LOG_DIR");

        if let Some(raw) = read_env::<String>("SKIRMISH_AUTOPLAY") {
            config.autoplay = parse_flag(&raw);
        }
        if let Some(buffer) = read_env::<usize>("SKIRMISH_INPUT_BUFFER") {
            config.input_buffer = buffer.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        for raw in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(parse_flag(raw), "{raw}");
        }
        for raw in ["0", "false", "", "nope"] {
            assert!(!parse_flag(raw), "{raw}");
        }
    }

    #[test]
    fn defaults_wait_for_a_human() {
        let config = ClientConfig::default();
        assert!(!config.autoplay);
        assert_eq!(config.input_buffer, 16);
        assert!(config.seed.is_none());
    }
}
