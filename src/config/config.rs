// SPDX-License-Identifier: GPL-3.0-only
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the weapons file to monitor
    pub weapons_file: PathBuf,

    /// Poll interval in milliseconds
    pub poll_interval_ms: u64,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from TOML file with environment variable overrides
    pub fn load() -> anyhow::Result<Self> {
        let config_path =
            std::env::var("WEAPONS_WATCHER_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut config: Config = if std::path::Path::new(&config_path).exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            toml::from_str(&contents)?
        } else {
            Config::default()
        };

        if let Ok(val) = std::env::var("WEAPONS_WATCHER_FILE") {
            config.weapons_file = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("WEAPONS_WATCHER_POLL_INTERVAL_MS") {
            config.poll_interval_ms = val.parse()?;
        }
        if let Ok(val) = std::env::var("WEAPONS_WATCHER_LOG_LEVEL") {
            config.log_level = val;
        }

        Ok(config)
    }

    /// Poll interval as a duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weapons_file: PathBuf::from("weapons.json"),
            poll_interval_ms: 250,
            log_level: String::from("info"),
        }
    }
}
