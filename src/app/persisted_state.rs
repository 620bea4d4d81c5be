// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! This module handles transient application state that should persist
//! across sessions but is not user-configurable (unlike preferences in
//! `settings.toml`): the sidebar collapse flag and the last metrics
//! snapshot used to seed the dashboard before the first poll lands.
//!
//! Absence or corruption of the state file is never an error: loading
//! falls back to defaults and hands back a warning message the caller may
//! surface as a toast.

use super::paths;
use crate::api::model::NotificationCounts;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// The severity totals of the last successful load, with the moment they
/// were captured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub counts: NotificationCounts,
    pub timestamp: DateTime<Utc>,
}

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Whether the sidebar was collapsed when the app last ran.
    #[serde(default)]
    pub sidebar_collapsed: bool,

    /// Severity totals from the last successful notification load.
    /// Seeds the metric cards at startup so they do not sit at zero
    /// until the first poll answers.
    #[serde(default)]
    pub last_metrics: Option<MetricsSnapshot>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns the state plus an optional warning when something went
    /// wrong; the caller decides whether to surface it.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory (tests, portable
    /// deployments). `None` uses the default path resolution.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (
                        Self::default(),
                        Some("Estado salvo inválido; usando padrões".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("Não foi possível ler o estado salvo".to_string()),
            ),
        }
    }

    /// Saves application state to the default location.
    ///
    /// Creates the parent directory if it doesn't exist. Returns an
    /// optional warning when saving failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("Diretório de dados indisponível".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("Não foi possível criar o diretório de dados".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("Não foi possível gravar o estado".to_string());
                }
                None
            }
            Err(_) => Some("Não foi possível criar o arquivo de estado".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_is_expanded_with_no_snapshot() {
        let state = AppState::default();
        assert!(!state.sidebar_collapsed);
        assert!(state.last_metrics.is_none());
    }

    #[test]
    fn sidebar_flag_round_trips() {
        let dir = tempdir().expect("temp dir");
        let state = AppState {
            sidebar_collapsed: true,
            last_metrics: None,
        };

        assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());
        let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert!(loaded.sidebar_collapsed);
    }

    #[test]
    fn metrics_snapshot_round_trips() {
        let dir = tempdir().expect("temp dir");
        let state = AppState {
            sidebar_collapsed: false,
            last_metrics: Some(MetricsSnapshot {
                counts: NotificationCounts {
                    total: 5,
                    danger: 2,
                    warning: 3,
                    info: 0,
                    success: 0,
                },
                timestamp: Utc::now(),
            }),
        };

        assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());
        let (loaded, _) = AppState::load_from(Some(dir.path().to_path_buf()));

        assert_eq!(loaded, state);
    }

    #[test]
    fn missing_file_loads_defaults_without_warning() {
        let dir = tempdir().expect("temp dir");
        let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));

        assert_eq!(loaded, AppState::default());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupt_file_loads_defaults_with_warning() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(STATE_FILE), b"not cbor at all").expect("write garbage");

        let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));

        assert_eq!(loaded, AppState::default());
        assert!(warning.is_some());
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempdir().expect("temp dir");
        let nested = dir.path().join("deep").join("nested");

        let state = AppState {
            sidebar_collapsed: true,
            last_metrics: None,
        };
        assert!(state.save_to(Some(nested.clone())).is_none());
        assert!(nested.join(STATE_FILE).exists());
    }
}
