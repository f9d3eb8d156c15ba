//! script
//!
//! Navigation scripts: an initial stack plus a list of steps to apply.
//!
//! # Format
//!
//! Scripts are TOML (`.toml`) or JSON (anything else). Routes are
//! arbitrary values and are carried as [`serde_json::Value`].
//!
//! ```toml
//! index = 2
//! routes = ["a", "b", "c"]
//!
//! [[steps]]
//! op = "pop"
//!
//! [[steps]]
//! op = "push"
//! route = { name = "detail", id = 7 }
//!
//! [[steps]]
//! op = "slice"
//! begin = -2
//! ```
//!
//! # Example
//!
//! ```
//! use routestack::script::{Script, ScriptFormat};
//!
//! let script = Script::parse(
//!     r#"{"index": 0, "routes": ["a"], "steps": [{"op": "push", "route": "b"}]}"#,
//!     ScriptFormat::Json,
//! )
//! .unwrap();
//! assert_eq!(script.steps.len(), 1);
//! ```

pub mod replay;

pub use replay::{replay, Replay, StepOutcome};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::core::stack::{RouteStack, StackError};

/// Errors from loading or replaying a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse script: {0}")]
    Parse(String),

    #[error("invalid initial stack")]
    Initial(#[source] StackError),

    #[error("step {step} ({op}) failed")]
    Step {
        step: usize,
        op: &'static str,
        #[source]
        source: StackError,
    },
}

/// Encoding of a script file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    Toml,
    Json,
}

impl ScriptFormat {
    /// Pick the format from a file extension: `.toml` is TOML, anything
    /// else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ScriptFormat::Toml,
            _ => ScriptFormat::Json,
        }
    }
}

/// A navigation script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Initial pointer position.
    #[serde(default)]
    pub index: usize,

    /// Initial routes.
    pub routes: Vec<Value>,

    /// Steps applied in order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    /// Read and parse the script at `path`.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let contents = fs::read_to_string(path).map_err(|e| ScriptError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&contents, ScriptFormat::from_path(path))
    }

    /// Parse a script from `contents`.
    pub fn parse(contents: &str, format: ScriptFormat) -> Result<Self, ScriptError> {
        match format {
            ScriptFormat::Toml => {
                toml::from_str(contents).map_err(|e| ScriptError::Parse(e.to_string()))
            }
            ScriptFormat::Json => {
                serde_json::from_str(contents).map_err(|e| ScriptError::Parse(e.to_string()))
            }
        }
    }

    /// Build the initial stack.
    pub fn initial_stack(&self) -> Result<RouteStack<Value>, ScriptError> {
        RouteStack::new(self.index, self.routes.iter().cloned()).map_err(ScriptError::Initial)
    }
}

/// One stack operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", deny_unknown_fields)]
pub enum Step {
    /// `RouteStack::push`
    Push { route: Value },
    /// `RouteStack::pop`
    Pop,
    /// `RouteStack::slice`
    Slice {
        #[serde(default)]
        begin: Option<isize>,
        #[serde(default)]
        end: Option<isize>,
    },
    /// `RouteStack::jump_to_index`
    Jump { index: usize },
    /// `RouteStack::replace_at_index`
    Replace { index: isize, route: Value },
}

impl Step {
    /// The `op` name of this step.
    pub fn name(&self) -> &'static str {
        match self {
            Step::Push { .. } => "push",
            Step::Pop => "pop",
            Step::Slice { .. } => "slice",
            Step::Jump { .. } => "jump",
            Step::Replace { .. } => "replace",
        }
    }

    /// Apply this step to `stack`.
    pub fn apply(&self, stack: &RouteStack<Value>) -> Result<RouteStack<Value>, StackError> {
        match self {
            Step::Push { route } => stack.push(route.clone()),
            Step::Pop => stack.pop(),
            Step::Slice { begin, end } => stack.slice(*begin, *end),
            Step::Jump { index } => stack.jump_to_index(*index),
            Step::Replace { index, route } => stack.replace_at_index(*index, route.clone()),
        }
    }
}
