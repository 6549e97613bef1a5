//! Log setup.
//!
//! Stdout belongs to the game screen, so logs only go to a file, and only
//! when `MEMORY_LOG_PATH` is set.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};

use crate::config::GameConfig;

/// Install the file logger. Returns false when logging is off.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(config.log_level)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;
    Ok(true)
}
