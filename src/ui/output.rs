//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! When `--json` is enabled, commands print JSON instead of the text
//! renderings below.
//!
//! # Text layout
//!
//! One line per record: a marker column (`>` for the pointer, `-` for a
//! removed record), the index, the route, and optionally the key.
//!
//! ```text
//!   0  home
//! > 1  {"id":7,"name":"detail"}
//! ```

use std::fmt::Display;

use serde_json::Value;

use crate::core::diff::StackDiff;
use crate::core::key::Key;
use crate::core::stack::RouteStack;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a route for display.
///
/// Strings are shown bare; every other value as compact JSON.
pub fn format_route(route: &Value) -> String {
    match route {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn format_line(marker: char, index: usize, route: &Value, key: Option<&Key>) -> String {
    match key {
        Some(key) => format!("{} {}  {}  [{}]", marker, index, format_route(route), key),
        None => format!("{} {}  {}", marker, index, format_route(route)),
    }
}

/// Format a stack, one record per line, marking the pointer with `>`.
pub fn format_stack(stack: &RouteStack<Value>, show_keys: bool) -> String {
    stack
        .iter()
        .map(|entry| {
            let marker = if entry.index == stack.index() { '>' } else { ' ' };
            format_line(marker, entry.index, entry.route, show_keys.then_some(entry.key))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format removed records, one per line, marked with `-`.
pub fn format_diff(diff: &StackDiff<Value>, show_keys: bool) -> String {
    diff.iter()
        .map(|record| {
            format_line(
                '-',
                record.index(),
                record.route(),
                show_keys.then_some(record.key()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
