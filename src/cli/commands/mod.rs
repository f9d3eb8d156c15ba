//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads its inputs (script files, config)
//! 2. Calls into [`crate::script`] / [`crate::core`]
//! 3. Formats and displays output, text or JSON per [`Context`]

mod check;
mod completion;
mod config_cmd;
mod replay;

// Re-export command functions for testing and direct invocation
pub use check::check;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, path as config_path};
pub use replay::replay;

use super::args::{Command, ConfigAction};
use super::Context;
use anyhow::Result;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Replay {
            script,
            no_diffs,
            final_only,
        } => replay::replay(ctx, &script, no_diffs, final_only),
        Command::Check { script } => check::check(ctx, &script),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::List => config_cmd::list(ctx),
            ConfigAction::Path => config_cmd::path(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
