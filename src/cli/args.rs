//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output
//! - `--keys`: Show record keys in text output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rstk - Replay navigation scripts against a persistent route stack
#[derive(Parser, Debug)]
#[command(name = "rstk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Show record keys in text output
    #[arg(long, global = true)]
    pub keys: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a navigation script and show each resulting stack
    #[command(
        name = "replay",
        long_about = "Replay a navigation script and show each resulting stack.\n\n\
            The script describes an initial stack (routes and pointer) and a list of \
            steps: push, pop, slice, jump and replace. After each step the resulting \
            stack is printed together with the records that step removed.",
        after_help = "\
EXAMPLES:
    # Replay a TOML script
    rstk replay nav.toml

    # Only show the final stack, with keys
    rstk replay nav.toml --final-only --keys

    # Machine-readable output
    rstk replay nav.json --json"
    )]
    Replay {
        /// Script file (.toml, otherwise JSON)
        script: PathBuf,

        /// Do not print the records removed by each step
        #[arg(long)]
        no_diffs: bool,

        /// Only print the final stack
        #[arg(long)]
        final_only: bool,
    },

    /// Check that a navigation script replays without errors
    Check {
        /// Script file (.toml, otherwise JSON)
        script: PathBuf,
    },

    /// Show effective configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    rstk completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    rstk completion zsh >> ~/.zshrc

    # Fish
    rstk completion fish > ~/.config/fish/completions/rstk.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// List all configuration values
    List,
    /// Show the path of the loaded config file
    Path,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
