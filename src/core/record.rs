//! core::record
//!
//! Records and the sequence that stores them.
//!
//! # Storage
//!
//! A [`RecordSequence`] is a window (`start..end`) over a shared arena of
//! reference-counted records. Narrowing the window (pop, slice) shares the
//! arena and costs O(1). Operations that add or swap a record build a new
//! arena by copying record pointers; route values are never cloned.
//!
//! # Invariants
//!
//! - A record is never mutated after creation
//! - `start <= end <= arena.len()`

use std::ops::Range;
use std::sync::Arc;

use super::key::Key;

/// A route paired with the key of its occurrence.
#[derive(Debug, PartialEq, Eq)]
pub struct Record<R> {
    route: R,
    key: Key,
}

impl<R> Record<R> {
    pub(crate) fn new(route: R, key: Key) -> Self {
        Self { route, key }
    }

    /// The route value.
    pub fn route(&self) -> &R {
        &self.route
    }

    /// The identity key.
    pub fn key(&self) -> &Key {
        &self.key
    }
}

/// An immutable, ordered sequence of shared records.
#[derive(Debug)]
pub struct RecordSequence<R> {
    arena: Arc<[Arc<Record<R>>]>,
    start: usize,
    end: usize,
}

// Manual impl: cloning shares the arena and needs no `R: Clone`.
impl<R> Clone for RecordSequence<R> {
    fn clone(&self) -> Self {
        Self {
            arena: Arc::clone(&self.arena),
            start: self.start,
            end: self.end,
        }
    }
}

impl<R> RecordSequence<R> {
    pub(crate) fn from_records(records: Vec<Arc<Record<R>>>) -> Self {
        let end = records.len();
        Self {
            arena: Arc::from(records),
            start: 0,
            end,
        }
    }

    /// Number of records in the window.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the window holds no records.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The records in order.
    pub fn as_slice(&self) -> &[Arc<Record<R>>] {
        &self.arena[self.start..self.end]
    }

    /// The record at `index` relative to the window.
    pub fn get(&self, index: usize) -> Option<&Arc<Record<R>>> {
        self.as_slice().get(index)
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Record<R>>> {
        self.as_slice().iter()
    }

    /// A sub-window sharing this sequence's arena.
    ///
    /// `range` is relative to the current window and must lie within it.
    pub(crate) fn narrow(&self, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end && range.end <= self.len());
        Self {
            arena: Arc::clone(&self.arena),
            start: self.start + range.start,
            end: self.start + range.end,
        }
    }

    /// The first `keep` records followed by `record`, in a new arena.
    pub(crate) fn truncate_and_append(&self, keep: usize, record: Record<R>) -> Self {
        let mut records = Vec::with_capacity(keep + 1);
        records.extend(self.as_slice()[..keep].iter().cloned());
        records.push(Arc::new(record));
        Self::from_records(records)
    }

    /// A copy of this sequence with the record at `index` swapped out.
    pub(crate) fn replace(&self, index: usize, record: Record<R>) -> Self {
        let mut records = self.as_slice().to_vec();
        records[index] = Arc::new(record);
        Self::from_records(records)
    }

    /// Whether both sequences are the same window over the same arena.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.arena, &other.arena) && self.start == other.start && self.end == other.end
    }
}
