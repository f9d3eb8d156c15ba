//! core::snapshot
//!
//! Serializable, read-only views of stacks and diffs.
//!
//! Snapshots copy route values and keys out of a stack so they can be
//! rendered or emitted as JSON. A stack is never rebuilt from a snapshot.
//!
//! # Example
//!
//! ```
//! use routestack::core::snapshot::StackSnapshot;
//! use routestack::core::stack::RouteStack;
//!
//! let stack = RouteStack::new(1, ["a", "b"]).unwrap();
//! let snapshot = StackSnapshot::of(&stack);
//!
//! assert_eq!(snapshot.index, 1);
//! assert_eq!(snapshot.routes(), vec!["a", "b"]);
//! ```

use serde::{Deserialize, Serialize};

use super::diff::StackDiff;
use super::key::Key;
use super::route::Route;
use super::stack::RouteStack;

/// One record of a [`StackSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSnapshot<R> {
    pub route: R,
    pub key: Key,
}

/// A copy of a stack's pointer and records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackSnapshot<R> {
    pub index: usize,
    pub records: Vec<RecordSnapshot<R>>,
}

impl<R: Route> StackSnapshot<R> {
    /// Capture `stack`.
    pub fn of(stack: &RouteStack<R>) -> Self {
        Self {
            index: stack.index(),
            records: stack
                .iter()
                .map(|entry| RecordSnapshot {
                    route: entry.route.clone(),
                    key: entry.key.clone(),
                })
                .collect(),
        }
    }

    /// The routes in order.
    pub fn routes(&self) -> Vec<R> {
        self.records.iter().map(|r| r.route.clone()).collect()
    }
}

/// One record of a [`DiffSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffRecordSnapshot<R> {
    pub index: usize,
    pub route: R,
    pub key: Key,
}

/// A copy of a [`StackDiff`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffSnapshot<R> {
    pub removed: Vec<DiffRecordSnapshot<R>>,
}

impl<R: Clone> DiffSnapshot<R> {
    /// Capture `diff`.
    pub fn of(diff: &StackDiff<R>) -> Self {
        Self {
            removed: diff
                .iter()
                .map(|record| DiffRecordSnapshot {
                    index: record.index(),
                    route: record.route().clone(),
                    key: record.key().clone(),
                })
                .collect(),
        }
    }
}
