//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the tracing filter directive
pub const LOG_ENV_VAR: &str = "TESTLENS_LOG";

const LOG_FILE_NAME: &str = "testlens.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/testlens/logs/` so they never
/// interleave with the frames drawn on the terminal.
/// Log level is controlled by the `TESTLENS_LOG` environment variable.
///
/// # Examples
/// ```bash
/// TESTLENS_LOG=debug testlens
/// TESTLENS_LOG=testlens_core=trace testlens --input run.jsonl
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive()));

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

    tracing::info!("───────────────────────────────────────────────");
    tracing::info!("testlens {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Filter used when `TESTLENS_LOG` is unset or invalid
fn default_directive() -> &'static str {
    "testlens=info,testlens_core=info,testlens_runner=info,testlens_app=info,testlens_tui=info,warn"
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("testlens").join("logs"))
}
