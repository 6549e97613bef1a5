//! Runtime configuration.
//!
//! Everything is optional and read from the environment; with nothing set the
//! game loads its images from the working directory, picks a fresh shuffle
//! seed, and does not log.
//!
//! - `MEMORY_ASSET_DIR`: directory holding `image0.bmp` .. `image8.bmp` (default: ".")
//! - `MEMORY_SEED`: shuffle seed for a reproducible board
//! - `MEMORY_LOG_PATH`: append structured logs to this file
//! - `MEMORY_LOG_LEVEL`: `error`, `warn`, `info`, `debug` or `trace` (default: info)

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub asset_dir: PathBuf,
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("."),
            seed: None,
            log_path: None,
            log_level: Level::INFO,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment in production).
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            get(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let defaults = Self::default();
        let asset_dir = non_empty("MEMORY_ASSET_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.asset_dir);
        let seed = non_empty("MEMORY_SEED").and_then(|s| s.parse().ok());
        let log_path = non_empty("MEMORY_LOG_PATH").map(PathBuf::from);
        let log_level = non_empty("MEMORY_LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            asset_dir,
            seed,
            log_path,
            log_level,
        }
    }

    /// The configured seed, or one derived from the system clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default();
            (now.as_secs() as u32) ^ now.subsec_nanos()
        })
    }
}
