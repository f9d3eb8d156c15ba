//! core::stack
//!
//! The persistent navigation route stack.
//!
//! # Model
//!
//! A [`RouteStack`] is an ordered, non-empty sequence of records plus a
//! position pointer. Every operation returns a new stack; the receiver is
//! never modified and stays valid.
//!
//! Records keep their key through every derivation that retains them
//! (`pop`, `slice`, `jump_to_index`, the prefix kept by `push`). New
//! records (`push`, `replace_at_index`) get a fresh key from the stack's
//! lineage.
//!
//! # Invariants
//!
//! - The sequence is never empty
//! - `0 <= index < size`
//!
//! # Example
//!
//! ```
//! use routestack::core::stack::RouteStack;
//!
//! let stack = RouteStack::new(0, ["home"]).unwrap();
//! let stack = stack.push("inbox").unwrap().push("message").unwrap();
//! assert_eq!(stack.to_vec(), vec!["home", "inbox", "message"]);
//!
//! let back = stack.pop().unwrap();
//! assert_eq!(back.index(), 1);
//! assert_eq!(back.key_of(&"inbox"), stack.key_of(&"inbox"));
//!
//! let removed = stack.subtract(&back);
//! assert_eq!(removed.routes().collect::<Vec<_>>(), vec![&"message"]);
//! ```

use std::sync::Arc;

use thiserror::Error;

use super::diff::{self, StackDiff};
use super::key::{Key, Lineage};
use super::record::{Record, RecordSequence};
use super::route::Route;

/// Errors from stack construction and derivation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StackError {
    #[error("index {index} out of bounds for stack of size {size}")]
    InvalidIndex { index: isize, size: usize },

    #[error("route cannot be empty")]
    InvalidRoute,

    #[error("slice {begin:?}..{end:?} of stack of size {size} would be empty")]
    InvalidSlice {
        begin: Option<isize>,
        end: Option<isize>,
        size: usize,
    },

    #[error("cannot pop the first route of the stack")]
    InvalidPop,
}

impl StackError {
    fn out_of_bounds(index: usize, size: usize) -> Self {
        StackError::InvalidIndex {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            size,
        }
    }
}

/// A borrowed view of one record, as yielded by [`RouteStack::iter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a, R> {
    pub index: usize,
    pub route: &'a R,
    pub key: &'a Key,
}

/// An immutable navigation history with a position pointer.
#[derive(Debug)]
pub struct RouteStack<R> {
    index: usize,
    records: RecordSequence<R>,
    lineage: Lineage,
}

impl<R> Clone for RouteStack<R> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            records: self.records.clone(),
            lineage: self.lineage.clone(),
        }
    }
}

impl<R: Route> RouteStack<R> {
    /// Create a stack holding `routes` with the pointer at `index`.
    ///
    /// Starts a new lineage: keys of this stack never equal keys of any
    /// other independently constructed stack.
    ///
    /// # Errors
    ///
    /// - `StackError::InvalidIndex` if `routes` is empty or `index` is not
    ///   a position in it
    /// - `StackError::InvalidRoute` if any route is absent
    pub fn new(index: usize, routes: impl IntoIterator<Item = R>) -> Result<Self, StackError> {
        let routes: Vec<R> = routes.into_iter().collect();
        if index >= routes.len() {
            return Err(StackError::out_of_bounds(index, routes.len()));
        }
        if routes.iter().any(|route| route.is_absent()) {
            return Err(StackError::InvalidRoute);
        }

        let lineage = Lineage::new();
        let records = routes
            .into_iter()
            .map(|route| Arc::new(Record::new(route, lineage.issue())))
            .collect();

        Ok(Self {
            index,
            records: RecordSequence::from_records(records),
            lineage,
        })
    }

    /// The route at absolute position `index`.
    pub fn get(&self, index: usize) -> Result<&R, StackError> {
        self.records
            .get(index)
            .map(|record| record.route())
            .ok_or_else(|| StackError::out_of_bounds(index, self.size()))
    }

    /// Number of records.
    pub fn size(&self) -> usize {
        self.records.len()
    }

    /// Position of the pointer.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The route under the pointer.
    pub fn current(&self) -> &R {
        self.records.as_slice()[self.index].route()
    }

    /// First position whose route equals `route`.
    pub fn index_of(&self, route: &R) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.route() == route)
    }

    /// Key of the most recent record whose route equals `route`.
    pub fn key_of(&self, route: &R) -> Option<&Key> {
        self.records
            .iter()
            .rev()
            .find(|record| record.route() == route)
            .map(|record| record.key())
    }

    /// Key of the record at absolute position `index`.
    pub fn key_at(&self, index: usize) -> Option<&Key> {
        self.records.get(index).map(|record| record.key())
    }

    /// Keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> + '_ {
        self.records.iter().map(|record| record.key())
    }

    /// The routes in order, keys dropped.
    pub fn to_vec(&self) -> Vec<R> {
        self.records
            .iter()
            .map(|record| record.route().clone())
            .collect()
    }

    /// Iterate over `(index, route, key)` views in order.
    pub fn iter(&self) -> impl Iterator<Item = Entry<'_, R>> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| Entry {
                index,
                route: record.route(),
                key: record.key(),
            })
    }

    /// Call `f(context, route, index, key)` once per record, in order.
    pub fn for_each<C: ?Sized>(&self, context: &mut C, mut f: impl FnMut(&mut C, &R, usize, &Key)) {
        for entry in self.iter() {
            f(context, entry.route, entry.index, entry.key);
        }
    }

    /// Collect `f(context, route, index, key)` for every record, skipping
    /// records for which `f` returns `None`.
    pub fn map_to_vec<C: ?Sized, T>(
        &self,
        context: &mut C,
        mut f: impl FnMut(&mut C, &R, usize, &Key) -> Option<T>,
    ) -> Vec<T> {
        self.iter()
            .filter_map(|entry| f(context, entry.route, entry.index, entry.key))
            .collect()
    }

    /// Navigate forward to `route`.
    ///
    /// Records after the pointer are discarded, the new record is appended
    /// and the pointer moves onto it.
    ///
    /// # Errors
    ///
    /// Returns `StackError::InvalidRoute` if `route` is absent.
    pub fn push(&self, route: R) -> Result<Self, StackError> {
        if route.is_absent() {
            return Err(StackError::InvalidRoute);
        }

        let record = Record::new(route, self.lineage.issue());
        let records = self.records.truncate_and_append(self.index + 1, record);
        Ok(self.derive(records.len() - 1, records))
    }

    /// Navigate back one step, dropping the current record and everything
    /// after it.
    ///
    /// # Errors
    ///
    /// Returns `StackError::InvalidPop` if the pointer is at the first
    /// record.
    pub fn pop(&self) -> Result<Self, StackError> {
        if self.index == 0 {
            return Err(StackError::InvalidPop);
        }
        Ok(self.derive(self.index - 1, self.records.narrow(0..self.index)))
    }

    /// Keep the records in `begin..end`.
    ///
    /// Bounds follow the usual slice conventions: `None` means the start or
    /// end, negative values count from the end, out-of-range values are
    /// clamped. The pointer keeps its record when it survives, otherwise it
    /// is clamped into the new range. Slicing the full range returns the
    /// same instance (see [`RouteStack::ptr_eq`]).
    ///
    /// # Errors
    ///
    /// Returns `StackError::InvalidSlice` if no record would remain.
    pub fn slice(&self, begin: Option<isize>, end: Option<isize>) -> Result<Self, StackError> {
        let size = self.size();
        let start = begin.map_or(0, |b| normalize_bound(b, size));
        let stop = end.map_or(size, |e| normalize_bound(e, size));

        if start == 0 && stop == size {
            return Ok(self.clone());
        }
        if stop <= start {
            return Err(StackError::InvalidSlice { begin, end, size });
        }

        let records = self.records.narrow(start..stop);
        let index = self.index.saturating_sub(start).min(records.len() - 1);
        Ok(self.derive(index, records))
    }

    /// Move the pointer to `index` without changing the records.
    ///
    /// # Errors
    ///
    /// Returns `StackError::InvalidIndex` if `index` is out of bounds.
    pub fn jump_to_index(&self, index: usize) -> Result<Self, StackError> {
        if index >= self.size() {
            return Err(StackError::out_of_bounds(index, self.size()));
        }
        Ok(self.derive(index, self.records.clone()))
    }

    /// Replace the record at `index` with a new record for `route` and move
    /// the pointer there.
    ///
    /// A negative `index` counts from the end. The replacement is a new
    /// occurrence and receives a fresh key.
    ///
    /// # Errors
    ///
    /// - `StackError::InvalidRoute` if `route` is absent
    /// - `StackError::InvalidIndex` if `index` does not resolve to a record
    pub fn replace_at_index(&self, index: isize, route: R) -> Result<Self, StackError> {
        if route.is_absent() {
            return Err(StackError::InvalidRoute);
        }

        let size = self.size();
        let resolved = if index < 0 {
            size.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        }
        .filter(|&resolved| resolved < size)
        .ok_or(StackError::InvalidIndex { index, size })?;

        let record = Record::new(route, self.lineage.issue());
        Ok(self.derive(resolved, self.records.replace(resolved, record)))
    }

    /// Records of `self` whose keys do not appear in `other`.
    pub fn subtract(&self, other: &Self) -> StackDiff<R> {
        diff::subtract(self, other)
    }
}

impl<R> RouteStack<R> {
    /// The records backing this stack.
    pub fn records(&self) -> &RecordSequence<R> {
        &self.records
    }

    /// The lineage this stack issues keys from.
    pub fn lineage(&self) -> &Lineage {
        &self.lineage
    }

    /// Whether `other` traces back to the same constructor call.
    pub fn is_derived_from(&self, other: &Self) -> bool {
        self.lineage.same_lineage(&other.lineage)
    }

    /// Whether both values are the same stack instance: same storage,
    /// same window, same pointer.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.index == other.index && self.records.ptr_eq(&other.records)
    }

    fn derive(&self, index: usize, records: RecordSequence<R>) -> Self {
        debug_assert!(index < records.len());
        Self {
            index,
            records,
            lineage: self.lineage.clone(),
        }
    }
}

/// Resolve a slice bound against `size`: negative counts from the end,
/// and the result is clamped to `0..=size`.
fn normalize_bound(bound: isize, size: usize) -> usize {
    if bound < 0 {
        size.saturating_sub(bound.unsigned_abs())
    } else {
        bound.unsigned_abs().min(size)
    }
}
