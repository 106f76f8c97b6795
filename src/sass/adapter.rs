//! Ordered map builder over Sass keys and values.

use std::fmt;

use super::{SassMap, SassValue};
use crate::index::{KeyIndex, hash_with};

/// Insertion-ordered map of Sass keys to Sass values.
///
/// [`SassMap`] only offers positional access; the adapter adds key lookup,
/// replace-on-set and ordered iteration, then freezes into a [`SassMap`] with
/// [`to_sass_map()`](Self::to_sass_map).
///
/// Keys compare by content, so `"a"` set twice replaces the first value and
/// keeps its position. Keys are indexed by their content when inserted;
/// mutating a key's handle afterwards leaves it under its old content.
#[derive(Debug, Clone, Default)]
pub struct SassMapAdapter {
    entries: Vec<(SassValue, SassValue)>,
    index: KeyIndex,
}

impl SassMapAdapter {
    /// Create an empty adapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every entry of an existing map, in order.
    pub fn from_map(map: &SassMap) -> Self {
        let mut adapter = Self::new();
        for (key, value) in map.entries() {
            adapter.set(key, value);
        }
        adapter
    }

    /// Insert or replace the value for `key`.
    pub fn set(&mut self, key: SassValue, value: SassValue) {
        let hash = key_hash(&key);
        match self.slot(&key, hash) {
            Some(slot) => self.entries[slot].1 = value,
            None => self.append(hash, key, value),
        }
    }

    /// Append an entry whose key is known to be absent.
    pub(crate) fn push_unique(&mut self, key: SassValue, value: SassValue) {
        let hash = key_hash(&key);
        debug_assert!(self.slot(&key, hash).is_none(), "duplicate key {key}");
        self.append(hash, key, value);
    }

    /// Value stored for `key`.
    pub fn get(&self, key: &SassValue) -> Option<&SassValue> {
        self.slot(key, key_hash(key)).map(|slot| &self.entries[slot].1)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &SassValue) -> bool {
        self.get(key).is_some()
    }

    /// Visit entries in order as `(value, key)`.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&SassValue, &SassValue),
    {
        for (key, value) in &self.entries {
            f(value, key);
        }
    }

    /// Iterate entries in order as `(key, value)`.
    pub fn iter(&self) -> impl Iterator<Item = (&SassValue, &SassValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the adapter has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a Sass map with the current entries.
    pub fn to_sass_map(&self) -> SassMap {
        SassMap::from_entries(self.entries.clone())
    }

    fn slot(&self, key: &SassValue, hash: u64) -> Option<usize> {
        self.index.find(hash, |slot| self.entries[slot].0 == *key)
    }

    fn append(&mut self, hash: u64, key: SassValue, value: SassValue) {
        self.index.insert(hash, self.entries.len());
        self.entries.push((key, value));
    }
}

fn key_hash(key: &SassValue) -> u64 {
    hash_with(|h| key.hash_key(h))
}

impl PartialEq for SassMapAdapter {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Display for SassMapAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_sass_map(), f)
    }
}
