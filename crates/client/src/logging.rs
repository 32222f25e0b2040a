//! Tracing setup for the terminal client.
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "skirmish.log";

/// Install the global subscriber: stderr always, plus a file when `log_dir`
/// is set. Battle narration goes to stdout through the event bus, not here.
///
/// The returned guard flushes the file writer on drop; hold it until exit.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let (writer, guard) = file_writer(dir)?;
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/{LOG_FILE}", dir.display());
    }

    Ok(guard)
}

/// Non-blocking writer appending to `dir/skirmish.log`.
fn file_writer(dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);
    Ok(tracing_appender::non_blocking(file_appender))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn dropping_the_guard_flushes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let (mut writer, guard) = file_writer(&log_dir).unwrap();
        writer.write_all(b"battle started\n").unwrap();
        drop(guard);

        let written = std::fs::read_to_string(log_dir.join(LOG_FILE)).unwrap();
        assert_eq!(written, "battle started\n");
    }
}
