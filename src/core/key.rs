//! core::key
//!
//! Identity keys for route records.
//!
//! # Encoding
//!
//! A key is `<origin>-<sequence>`:
//! - `origin` is the lineage's origin token, a UUIDv7 in 32-character
//!   lowercase hex form
//! - `sequence` is the lineage's issue counter, zero-padded to 20 decimal
//!   digits
//!
//! Twenty digits hold every `u64`, so within one lineage plain string
//! comparison agrees with issue order for the counter's whole range
//! (`0..=u64::MAX`). The counter is never reset and is not expected to
//! wrap in practice.
//!
//! # Invariants
//!
//! - A lineage never issues the same key twice, including to sibling
//!   stacks derived from the same parent
//! - Keys issued later by a lineage compare greater
//! - Keys from different lineages never collide (distinct origins)
//!
//! # Example
//!
//! ```
//! use routestack::core::key::Lineage;
//!
//! let lineage = Lineage::new();
//! let first = lineage.issue();
//! let second = lineage.issue();
//!
//! assert!(first < second);
//! assert_eq!(first.sequence(), Some(0));
//! assert_eq!(second.sequence(), Some(1));
//! assert_eq!(first.origin(), second.origin());
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Width of the zero-padded sequence suffix. `u64::MAX` has 20 digits.
const SEQUENCE_WIDTH: usize = 20;

/// The identity of one route occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    fn encode(origin: Uuid, sequence: u64) -> Self {
        Self(format!(
            "{}-{:0width$}",
            origin.simple(),
            sequence,
            width = SEQUENCE_WIDTH
        ))
    }

    /// The origin token of the lineage that issued this key.
    pub fn origin(&self) -> &str {
        self.0
            .split_once('-')
            .map(|(origin, _)| origin)
            .unwrap_or(&self.0)
    }

    /// The issue counter value this key was minted with.
    ///
    /// Returns `None` for a key that was not produced by a [`Lineage`]
    /// (for example one deserialized from hand-written input).
    pub fn sequence(&self) -> Option<u64> {
        let (_, sequence) = self.0.split_once('-')?;
        sequence.parse().ok()
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The key-issuing context shared by a constructed stack and everything
/// derived from it.
///
/// Cloning a lineage shares its counter; [`Lineage::new`] starts a new one.
#[derive(Debug, Clone)]
pub struct Lineage {
    origin: Uuid,
    next: Arc<AtomicU64>,
}

impl Lineage {
    /// Start a new lineage with a fresh origin token and a zero counter.
    pub fn new() -> Self {
        Self {
            origin: Uuid::now_v7(),
            next: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Mint the next key of this lineage.
    pub fn issue(&self) -> Key {
        let sequence = self.next.fetch_add(1, Ordering::Relaxed);
        Key::encode(self.origin, sequence)
    }

    /// Whether both values trace back to the same constructor call.
    pub fn same_lineage(&self, other: &Lineage) -> bool {
        self.origin == other.origin
    }

    /// Number of keys issued so far.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for Lineage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_ordered_by_issue() {
        let lineage = Lineage::new();
        let keys: Vec<Key> = (0..100).map(|_| lineage.issue()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn ordering_survives_digit_rollover() {
        let origin = Uuid::now_v7();
        assert!(Key::encode(origin, 9) < Key::encode(origin, 10));
        assert!(Key::encode(origin, 99_999) < Key::encode(origin, 100_000));
        assert!(Key::encode(origin, u64::MAX - 1) < Key::encode(origin, u64::MAX));
    }

    #[test]
    fn encoding_is_fixed_width() {
        let origin = Uuid::now_v7();
        let small = Key::encode(origin, 0);
        let large = Key::encode(origin, u64::MAX);
        assert_eq!(small.as_str().len(), large.as_str().len());
        assert_eq!(small.as_str().len(), 32 + 1 + SEQUENCE_WIDTH);
    }

    #[test]
    fn decodes_components() {
        let lineage = Lineage::new();
        lineage.issue();
        let key = lineage.issue();
        assert_eq!(key.sequence(), Some(1));
        assert_eq!(key.origin().len(), 32);
        assert!(key.as_str().starts_with(key.origin()));
    }

    #[test]
    fn clones_share_the_counter() {
        let lineage = Lineage::new();
        let sibling = lineage.clone();
        let a = lineage.issue();
        let b = sibling.issue();
        assert_ne!(a, b);
        assert!(a < b);
        assert_eq!(lineage.issued(), 2);
        assert!(lineage.same_lineage(&sibling));
    }

    #[test]
    fn independent_lineages_never_collide() {
        let mut seen = HashSet::new();
        for _ in 0..50 {
            let lineage = Lineage::new();
            for _ in 0..5 {
                assert!(seen.insert(lineage.issue()));
            }
        }
        assert!(!Lineage::new().same_lineage(&Lineage::new()));
    }

    #[test]
    fn foreign_key_has_no_sequence() {
        let key: Key = serde_json::from_str("\"not-a-number\"").unwrap();
        assert_eq!(key.sequence(), None);
        assert_eq!(key.origin(), "not");
    }

    #[test]
    fn serializes_as_plain_string() {
        let key = Lineage::new().issue();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{}\"", key));
    }
}
