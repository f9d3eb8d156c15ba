//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$RSTK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/rstk/config.toml`
//! 3. `~/.rstk/config.toml`
//!
//! # Validation
//!
//! Config values are validated after parsing (e.g., `format` must name a
//! known output format).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON document per command.
    Json,
}

impl OutputFormat {
    /// Names accepted in config files.
    pub const NAMES: &'static [&'static str] = &["text", "json"];

    /// The config-file name of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "invalid format '{}', must be one of: {}",
                other,
                Self::NAMES.join(", ")
            ))),
        }
    }
}

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// format = "text"
/// show_keys = false
///
/// [replay]
/// diffs = true
/// steps = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Output format ("text" or "json")
    pub format: Option<String>,

    /// Show record keys in text output
    pub show_keys: Option<bool>,

    /// Replay defaults
    pub replay: Option<ReplayDefaults>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(format) = &self.format {
            format.parse::<OutputFormat>()?;
        }
        Ok(())
    }
}

/// Replay command defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReplayDefaults {
    /// Print the records each step removed
    pub diffs: Option<bool>,

    /// Print the stack after every step, not only the final one
    pub steps: Option<bool>,
}
