//! script::replay
//!
//! Apply a script step by step, keeping every intermediate stack and the
//! records each step removed.

use serde_json::Value;

use super::{Script, ScriptError};
use crate::core::diff::StackDiff;
use crate::core::stack::RouteStack;

/// The result of one applied step.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// 1-based step number.
    pub step: usize,
    /// The step's `op` name.
    pub op: &'static str,
    /// Stack after the step.
    pub stack: RouteStack<Value>,
    /// Records of the previous stack that this step dropped.
    pub removed: StackDiff<Value>,
}

/// A completed replay.
#[derive(Debug, Clone)]
pub struct Replay {
    pub initial: RouteStack<Value>,
    pub outcomes: Vec<StepOutcome>,
}

impl Replay {
    /// The stack after the last step.
    pub fn final_stack(&self) -> &RouteStack<Value> {
        self.outcomes
            .last()
            .map(|outcome| &outcome.stack)
            .unwrap_or(&self.initial)
    }
}

/// Build the script's initial stack and apply every step.
///
/// # Errors
///
/// Stops at the first failing step and returns `ScriptError::Step` naming
/// it. Errors building the initial stack are `ScriptError::Initial`.
pub fn replay(script: &Script) -> Result<Replay, ScriptError> {
    let initial = script.initial_stack()?;
    let mut outcomes: Vec<StepOutcome> = Vec::with_capacity(script.steps.len());

    for (i, step) in script.steps.iter().enumerate() {
        let previous = outcomes.last().map_or(&initial, |o| &o.stack);
        let stack = step.apply(previous).map_err(|source| ScriptError::Step {
            step: i + 1,
            op: step.name(),
            source,
        })?;
        let removed = previous.subtract(&stack);
        outcomes.push(StepOutcome {
            step: i + 1,
            op: step.name(),
            stack,
            removed,
        });
    }

    Ok(Replay { initial, outcomes })
}
