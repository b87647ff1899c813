//! File-based logging for the terminal front end.
//!
//! Stdout belongs to the TUI, so events go to
//! `<data dir>/maze-battle/maze-battle.log`. Set `MAZE_BATTLE_LOG` to an
//! `EnvFilter` directive (e.g. `debug` or `narration=off`) to change the level.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "MAZE_BATTLE_LOG";
const LOG_FILE_NAME: &str = "maze-battle.log";

pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("maze-battle"))
}

/// Installs the global subscriber.
///
/// The returned guard must live until exit so buffered lines are flushed.
/// Returns `None` when no log file can be opened; events are then dropped.
pub fn init() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Failed to create log directory {:?}: {}", dir, e);
        return None;
    }

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init();

    if let Err(e) = installed {
        eprintln!("Failed to install log subscriber: {}", e);
        return None;
    }

    tracing::info!(dir = %dir.display(), "Logging initialized");
    Some(guard)
}
