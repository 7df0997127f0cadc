//! Logging setup

use anyhow::Result;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "nshot.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to a file; the terminal belongs to the TUI
pub fn init_file_logging() -> Result<PathBuf> {
    let log_dir = ProjectDirs::from("", "", "nshot")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init()?;

    // Keep the writer alive for the whole run
    std::mem::forget(guard);

    let path = log_dir.join(LOG_FILE);
    tracing::info!("Log file: {}", path.display());
    Ok(path)
}

/// Log to stderr, leaving stdout for the report
pub fn init_stderr_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
