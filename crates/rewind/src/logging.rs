//! Tracing subscriber setup.

use crate::config::LoggingSettings;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise the configured directive applies.
fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.filter()))
}

/// Sends logs to the configured file so they do not corrupt the terminal UI.
pub fn init_file_logging(settings: &LoggingSettings) -> Result<()> {
    let log_file = std::fs::File::create(settings.file()).with_context(|| {
        format!("Failed to create log file {}", settings.file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Sends logs to stderr, keeping stdout for command output.
pub fn init_stderr_logging(settings: &LoggingSettings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .try_init();
}
