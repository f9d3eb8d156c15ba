//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$RSTK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/rstk/config.toml`
//! 3. `~/.rstk/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use routestack::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Format: {}", config.format().as_str());
//! println!("Show keys: {}", config.show_keys());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, OutputFormat, ReplayDefaults};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "RSTK_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Effective configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Path to the config file (if one was loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Keys understood by [`Config::get`].
    pub const KEYS: &'static [&'static str] =
        &["format", "show_keys", "replay.diffs", "replay.steps"];

    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated. A missing file is not an error (defaults are used).
    pub fn load() -> Result<Self, ConfigError> {
        let located = Self::locate(|name| std::env::var(name).ok(), dirs::home_dir());
        match located {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        global.validate()?;

        Ok(Self {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file.
    ///
    /// `env` looks up environment variables and `home` is the user's home
    /// directory; both are injected so the search order can be tested.
    pub fn locate(env: impl Fn(&str) -> Option<String>, home: Option<PathBuf>) -> Option<PathBuf> {
        let candidates = [
            env(CONFIG_ENV).map(PathBuf::from),
            env("XDG_CONFIG_HOME").map(|xdg| PathBuf::from(xdg).join("rstk/config.toml")),
            home.map(|home| home.join(".rstk/config.toml")),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }

    /// Path of the loaded config file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Output format. Defaults to text.
    pub fn format(&self) -> OutputFormat {
        self.global
            .format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    /// Whether text output shows record keys. Defaults to `false`.
    pub fn show_keys(&self) -> bool {
        self.global.show_keys.unwrap_or(false)
    }

    /// Whether replay prints per-step diffs. Defaults to `true`.
    pub fn replay_diffs(&self) -> bool {
        self.global
            .replay
            .as_ref()
            .and_then(|r| r.diffs)
            .unwrap_or(true)
    }

    /// Whether replay prints every intermediate stack. Defaults to `true`.
    pub fn replay_steps(&self) -> bool {
        self.global
            .replay
            .as_ref()
            .and_then(|r| r.steps)
            .unwrap_or(true)
    }

    /// Effective value of a dotted config key, as a string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` for keys not in [`Config::KEYS`].
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "format" => self.format().as_str().to_string(),
            "show_keys" => self.show_keys().to_string(),
            "replay.diffs" => self.replay_diffs().to_string(),
            "replay.steps" => self.replay_steps().to_string(),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        };
        Ok(value)
    }
}
