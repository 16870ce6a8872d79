//! Ordered-insertion queue driving the search.

use std::collections::VecDeque;
use std::fmt;

/// Returned by [`Frontier::remove_front`] when there is nothing to remove.
///
/// Callers are expected to check [`Frontier::is_empty`] first; seeing this
/// error means the caller has a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyFrontier;

impl fmt::Display for EmptyFrontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("frontier: remove from empty queue")
    }
}

impl std::error::Error for EmptyFrontier {}

/// A queue kept sorted by ascending key.
///
/// The insertion scan only steps past entries with a strictly smaller key,
/// so a new item lands in front of any entries sharing its key: among equal
/// keys the newest leaves first. Insertion is O(n) in the worst case;
/// appending a key larger than the current back is O(1).
#[derive(Debug, Clone)]
pub struct Frontier<T, K = u32> {
    entries: VecDeque<(K, T)>,
}

impl<T, K: Ord> Default for Frontier<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Ord> Frontier<T, K> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Insert `item` ordered by `key`.
    pub fn insert(&mut self, item: T, key: K) {
        if self.entries.back().is_none_or(|(k, _)| *k < key) {
            self.entries.push_back((key, item));
            return;
        }
        let at = self
            .entries
            .iter()
            .position(|(k, _)| *k >= key)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, (key, item));
    }

    /// Remove and return the item with the smallest key.
    pub fn remove_front(&mut self) -> Result<T, EmptyFrontier> {
        self.entries
            .pop_front()
            .map(|(_, item)| item)
            .ok_or(EmptyFrontier)
    }

    /// Key of the front entry, if any.
    pub fn peek_key(&self) -> Option<&K> {
        self.entries.front().map(|(k, _)| k)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
