//! cli
//!
//! Command-line interface layer for rstk.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and merge it with flags
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Scripts are loaded and replayed by
//! [`crate::script`]; all stack semantics live in [`crate::core`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::core::config::{Config, OutputFormat};
use crate::ui::output::{self, Verbosity};
use anyhow::{Context as _, Result};

/// Settings shared by every command, after applying flags over config.
#[derive(Debug, Clone)]
pub struct Context {
    pub verbosity: Verbosity,
    pub format: OutputFormat,
    pub show_keys: bool,
    pub config: Config,
}

impl Context {
    /// Merge CLI flags over loaded configuration.
    pub fn new(cli: &Cli, config: Config) -> Self {
        let format = if cli.json {
            OutputFormat::Json
        } else {
            config.format()
        };
        Self {
            verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
            format,
            show_keys: cli.keys || config.show_keys(),
            config,
        }
    }

    /// Whether commands should print JSON.
    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = Config::load().context("Failed to load config")?;
    let ctx = Context::new(&cli, config);
    if let Some(path) = ctx.config.path() {
        output::debug(format!("loaded config from {}", path.display()), ctx.verbosity);
    }

    commands::dispatch(cli.command, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn flags_override_config() {
        let config = Config::default();
        let ctx = Context::new(&cli(&["rstk", "--json", "--keys", "check", "s.json"]), config);
        assert!(ctx.json());
        assert!(ctx.show_keys);
        assert_eq!(ctx.verbosity, Verbosity::Normal);
    }

    #[test]
    fn config_applies_without_flags() {
        let mut config = Config::default();
        config.global.format = Some("json".to_string());
        config.global.show_keys = Some(true);
        let ctx = Context::new(&cli(&["rstk", "-q", "check", "s.json"]), config);
        assert!(ctx.json());
        assert!(ctx.show_keys);
        assert_eq!(ctx.verbosity, Verbosity::Quiet);
    }
}
