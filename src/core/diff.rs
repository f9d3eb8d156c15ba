//! core::diff
//!
//! Key-based difference between two route stacks.
//!
//! `a.subtract(&b)` lists the records of `a` whose keys are absent from
//! `b`. Within one lineage that is exactly the set of records dropped on
//! the way from `a` to `b` (by `pop`, `slice`, `replace_at_index`, or the
//! truncation done by `push`). Stacks from unrelated lineages share no
//! keys, so the whole of `a` is reported even when routes coincide.
//!
//! A navigator uses this to decide which screens to tear down.

use std::collections::HashSet;
use std::sync::Arc;

use super::key::Key;
use super::record::Record;
use super::stack::RouteStack;

/// One record of a [`StackDiff`].
#[derive(Debug)]
pub struct DiffRecord<R> {
    index: usize,
    record: Arc<Record<R>>,
}

impl<R> DiffRecord<R> {
    /// Position of the record in the stack it was taken from.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The route value.
    pub fn route(&self) -> &R {
        self.record.route()
    }

    /// The record's key.
    pub fn key(&self) -> &Key {
        self.record.key()
    }
}

impl<R> Clone for DiffRecord<R> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            record: Arc::clone(&self.record),
        }
    }
}

/// Records present in one stack and missing from another, in ascending
/// index order.
#[derive(Debug)]
pub struct StackDiff<R> {
    records: Vec<DiffRecord<R>>,
}

impl<R> StackDiff<R> {
    /// Number of removed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was removed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the removed records.
    pub fn iter(&self) -> std::slice::Iter<'_, DiffRecord<R>> {
        self.records.iter()
    }

    /// Keys of the removed records.
    pub fn keys(&self) -> impl Iterator<Item = &Key> + '_ {
        self.records.iter().map(DiffRecord::key)
    }

    /// Routes of the removed records.
    pub fn routes(&self) -> impl Iterator<Item = &R> + '_ {
        self.records.iter().map(DiffRecord::route)
    }

    /// Indices (in the subtracted-from stack) of the removed records.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.records.iter().map(DiffRecord::index)
    }
}

impl<R> Clone for StackDiff<R> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
        }
    }
}

impl<R> IntoIterator for StackDiff<R> {
    type Item = DiffRecord<R>;
    type IntoIter = std::vec::IntoIter<DiffRecord<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a StackDiff<R> {
    type Item = &'a DiffRecord<R>;
    type IntoIter = std::slice::Iter<'a, DiffRecord<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Records of `from` whose keys do not occur anywhere in `other`.
pub fn subtract<R>(from: &RouteStack<R>, other: &RouteStack<R>) -> StackDiff<R> {
    let retained: HashSet<&Key> = other.records().iter().map(|r| r.key()).collect();

    let records = from
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| !retained.contains(record.key()))
        .map(|(index, record)| DiffRecord {
            index,
            record: Arc::clone(record),
        })
        .collect();

    StackDiff { records }
}
