//! Configuration loading.
//!
//! Reads `~/.config/mentions/config.toml`. A missing or broken default file
//! never stops the program; an explicitly requested file must load.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, TemplateSection, TriggerSection};

use crate::error::MentionError;

const CONFIG_DIR: &str = "mentions";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the default config file, falling back to defaults on any problem.
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    if !path.exists() {
        return Config::default();
    }

    match load_config_from_path(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config at {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Load a config file, reporting read and parse failures.
pub fn load_config_from_path(path: &Path) -> Result<Config, MentionError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(content: &str) -> Result<Config, MentionError> {
    toml::from_str(content).map_err(|e| MentionError::Config(e.to_string()))
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
