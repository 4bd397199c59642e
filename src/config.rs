//! Configuration loader plus strongly typed settings.
//!
//! Settings come from a TOML file under the platform config directory
//! (or `--config`), falling back to the embedded defaults when no file
//! exists. Displayed data is never configured here; fixtures stay
//! compiled in.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::theme::ThemeMode;

// Embedded at compile time so a fresh install needs no config file
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme mode at startup.
    pub theme: ThemeMode,

    /// Path opened at startup. Unknown paths land on the not-found screen.
    pub start_route: String,

    /// Event poll timeout in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            start_route: "/".to_string(),
            tick_rate_ms: 250,
        }
    }
}

impl Config {
    /// Default config file location, e.g. `~/.config/admin-tui/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("admin-tui").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the default
    /// location is read if present, otherwise the embedded defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => toml::from_str(DEFAULT_CONFIG).context("Failed to parse embedded default config"),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
