//! check command - Replay a script silently and report the outcome

use std::path::Path;

use crate::cli::Context;
use crate::script::{replay, Script};
use crate::ui::output;
use anyhow::{Context as _, Result};
use serde_json::json;

/// Replay `path` and print a one-line summary.
pub fn check(ctx: &Context, path: &Path) -> Result<()> {
    let script = Script::load(path)?;
    output::debug(
        format!("{}: {} steps", path.display(), script.steps.len()),
        ctx.verbosity,
    );
    if script.steps.is_empty() {
        output::warn(format!("{} has no steps", path.display()), ctx.verbosity);
    }

    let replayed = replay(&script).with_context(|| format!("{} failed", path.display()))?;
    let stack = replayed.final_stack();

    if ctx.json() {
        println!(
            "{}",
            json!({
                "ok": true,
                "steps": replayed.outcomes.len(),
                "size": stack.size(),
                "index": stack.index(),
            })
        );
    } else {
        output::print(
            format!("ok: {} routes, index {}", stack.size(), stack.index()),
            ctx.verbosity,
        );
    }
    Ok(())
}
