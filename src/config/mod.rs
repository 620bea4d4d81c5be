//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Preferences are the user-facing knobs (theme, backend address, poll
//! cadence). Transient state that merely improves UX lives elsewhere, in
//! [`crate::app::persisted_state`]. A missing or corrupt settings file is
//! never an error: loading falls back to defaults so a bad edit can not keep
//! the dashboard from starting.

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Backend used when no address is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Notification poll cadence used when none is configured.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Preferred theme; `None` means follow the system.
    pub theme: Option<ThemeMode>,
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub poll_interval_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: None,
            api_base_url: Some(DEFAULT_API_BASE_URL.to_string()),
            poll_interval_secs: Some(DEFAULT_POLL_INTERVAL_SECS),
        }
    }
}

impl Config {
    /// The effective backend address, after defaulting.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// The effective poll cadence, after defaulting. A configured zero is
    /// treated as the default rather than a busy loop.
    #[must_use]
    pub fn poll_interval_secs(&self) -> u64 {
        match self.poll_interval_secs {
            Some(secs) if secs > 0 => secs,
            _ => DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        log::warn!("ignoring malformed settings file {}: {}", path.display(), err);
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
