//! Configuration loading
//!
//! Reads `~/.config/lexi/config.toml`. A missing file is not an error; an
//! unreadable or malformed file falls back to defaults with a warning that
//! the app surfaces as a notification.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, DictionaryConfig, MAX_RESULTS_LIMIT, NotificationConfig, SuggestConfig};

use crate::error::LexiError;

const CONFIG_DIR: &str = "lexi";
const CONFIG_FILE: &str = "config.toml";

/// Result of loading the configuration
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when a config file existed but could not be used
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

/// Load configuration from an explicit path, falling back to defaults
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Using default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, LexiError> {
    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents).map_err(|e| LexiError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    if !(1..=MAX_RESULTS_LIMIT).contains(&config.suggest.results_limit) {
        return Err(LexiError::InvalidConfig {
            path: path.to_path_buf(),
            message: format!("suggest.results_limit must be between 1 and {}", MAX_RESULTS_LIMIT),
        });
    }

    Ok(config)
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
