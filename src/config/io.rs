//! Config file location, loading, and persisted UI state.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Config;
use crate::log;

/// Directory holding the config and state files.
///
/// `PUBBOARD_CONFIG_DIR` overrides everything; otherwise the platform
/// config home is used.
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PUBBOARD_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    if cfg!(windows) {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("pubboard");
        }
    } else {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("pubboard");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config").join("pubboard");
        }
    }
    PathBuf::from(".")
}

pub fn config_path() -> PathBuf {
    config_dir().join("pubboard.toml")
}

pub fn state_path() -> PathBuf {
    config_dir().join("state.toml")
}

impl Config {
    /// Load the config file. An absent file is normal and yields defaults;
    /// a malformed one is logged and also yields defaults; startup never
    /// fails on configuration.
    pub fn load() -> Self {
        let path = config_path();
        match fs::read_to_string(&path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    log(&format!("config: parse error in {}: {e}", path.display()));
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

/// UI state persisted across runs: active route and scroll offset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiState {
    pub route: String,
    pub scroll_top: f32,
}

impl UiState {
    pub fn load() -> Option<Self> {
        let text = fs::read_to_string(state_path()).ok()?;
        toml::from_str(&text).ok()
    }

    pub fn save(&self) {
        if fs::create_dir_all(config_dir()).is_err() {
            return;
        }
        if let Ok(text) = toml::to_string_pretty(self) {
            let _ = fs::write(state_path(), text);
        }
    }
}
