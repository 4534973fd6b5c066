use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs a file-backed tracing subscriber when `BF4_LOG_FILE` is set.
///
/// The terminal is owned by the alternate screen, so nothing is ever written
/// to stdout/stderr. Returns `false` when logging stays disabled.
pub fn init_logging(config: &Config) -> Result<bool> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("install tracing subscriber: {err}"))?;

    tracing::info!(path = %path.display(), "file logging enabled");
    Ok(true)
}
