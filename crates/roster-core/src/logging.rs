//! Logging configuration using tracing
//!
//! The terminal belongs to the TUI, so log output goes to a daily rolling
//! file and never to stdout/stderr.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the tracing filter directive
pub const LOG_ENV_VAR: &str = "ROSTER_LOG";

const LOG_FILE_NAME: &str = "roster.log";
const DEFAULT_FILTER: &str = "roster=info,roster_app=info,roster_client=info,roster_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/roster/logs/` (platform data dir).
/// Log level is controlled by the `ROSTER_LOG` environment variable.
///
/// # Examples
/// ```bash
/// ROSTER_LOG=debug roster
/// ROSTER_LOG=roster_client=trace roster --base-url http://localhost:8080/api/
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Roster starting (v{})", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("roster").join("logs")
}
