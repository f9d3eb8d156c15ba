//! replay command - Apply a navigation script and show each stack

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::cli::Context;
use crate::core::snapshot::{DiffSnapshot, StackSnapshot};
use crate::script::{self, Replay, Script};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// JSON form of one replayed step.
#[derive(Debug, Serialize)]
struct StepReport {
    step: usize,
    op: &'static str,
    stack: StackSnapshot<Value>,
    removed: DiffSnapshot<Value>,
}

/// JSON form of a whole replay.
#[derive(Debug, Serialize)]
struct ReplayReport {
    initial: StackSnapshot<Value>,
    steps: Vec<StepReport>,
    #[serde(rename = "final")]
    final_stack: StackSnapshot<Value>,
}

impl ReplayReport {
    fn new(replay: &Replay, final_only: bool) -> Self {
        let steps = if final_only {
            Vec::new()
        } else {
            replay
                .outcomes
                .iter()
                .map(|outcome| StepReport {
                    step: outcome.step,
                    op: outcome.op,
                    stack: StackSnapshot::of(&outcome.stack),
                    removed: DiffSnapshot::of(&outcome.removed),
                })
                .collect()
        };

        Self {
            initial: StackSnapshot::of(&replay.initial),
            steps,
            final_stack: StackSnapshot::of(replay.final_stack()),
        }
    }
}

/// Replay the script at `path`.
///
/// Config supplies the defaults for showing diffs and intermediate
/// stacks; `--no-diffs` and `--final-only` turn them off.
pub fn replay(ctx: &Context, path: &Path, no_diffs: bool, final_only: bool) -> Result<()> {
    let nav = Script::load(path)?;
    output::debug(
        format!(
            "{}: {} routes, index {}, {} steps",
            path.display(),
            nav.routes.len(),
            nav.index,
            nav.steps.len()
        ),
        ctx.verbosity,
    );

    let replayed =
        script::replay(&nav).with_context(|| format!("{} failed", path.display()))?;

    let show_steps = !final_only && ctx.config.replay_steps();
    let show_diffs = !no_diffs && ctx.config.replay_diffs();

    if ctx.json() {
        let report = ReplayReport::new(&replayed, !show_steps);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_text(ctx, &replayed, show_steps, show_diffs);
    Ok(())
}

fn print_text(ctx: &Context, replayed: &Replay, show_steps: bool, show_diffs: bool) {
    let verbosity = ctx.verbosity;

    if show_steps {
        output::print("initial", verbosity);
        output::print(output::format_stack(&replayed.initial, ctx.show_keys), verbosity);

        for outcome in &replayed.outcomes {
            output::debug(
                format!(
                    "step {}: {} -> size {}, index {}, {} removed",
                    outcome.step,
                    outcome.op,
                    outcome.stack.size(),
                    outcome.stack.index(),
                    outcome.removed.len()
                ),
                verbosity,
            );

            output::print("", verbosity);
            output::print(format!("step {}: {}", outcome.step, outcome.op), verbosity);
            output::print(output::format_stack(&outcome.stack, ctx.show_keys), verbosity);
            if show_diffs && !outcome.removed.is_empty() {
                output::print(output::format_diff(&outcome.removed, ctx.show_keys), verbosity);
            }
        }
        output::print("", verbosity);
    }

    output::print("final", verbosity);
    output::print(
        output::format_stack(replayed.final_stack(), ctx.show_keys),
        verbosity,
    );
}
