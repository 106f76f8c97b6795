//! Sass maps.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{IndexOutOfBounds, SassValue};

/// A fixed-length map addressed by position. Shared handle.
///
/// Keys are not checked for uniqueness; use [`SassMapAdapter`](super::SassMapAdapter)
/// to build maps with key lookup.
#[derive(Debug, Clone)]
pub struct SassMap {
    inner: Arc<RwLock<Vec<(SassValue, SassValue)>>>,
}

impl SassMap {
    /// Create a map with `len` `null: null` entries.
    pub fn new(len: usize) -> Self {
        Self::from_entries(vec![(SassValue::Null, SassValue::Null); len])
    }

    /// Create a map holding `entries` in order.
    pub fn from_entries(entries: Vec<(SassValue, SassValue)>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(entries)),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Key at `index`.
    pub fn key(&self, index: usize) -> Option<SassValue> {
        self.inner.read().get(index).map(|(k, _)| k.clone())
    }

    /// Value at `index`.
    pub fn value(&self, index: usize) -> Option<SassValue> {
        self.inner.read().get(index).map(|(_, v)| v.clone())
    }

    /// Replace the key at `index`.
    pub fn set_key(&self, index: usize, key: SassValue) -> Result<(), IndexOutOfBounds> {
        let mut entries = self.inner.write();
        let len = entries.len();
        let entry = entries.get_mut(index).ok_or(IndexOutOfBounds { index, len })?;
        entry.0 = key;
        Ok(())
    }

    /// Replace the value at `index`.
    pub fn set_value(&self, index: usize, value: SassValue) -> Result<(), IndexOutOfBounds> {
        let mut entries = self.inner.write();
        let len = entries.len();
        let entry = entries.get_mut(index).ok_or(IndexOutOfBounds { index, len })?;
        entry.1 = value;
        Ok(())
    }

    /// Snapshot of the entries in order. No lock is held after this returns.
    pub fn entries(&self) -> Vec<(SassValue, SassValue)> {
        self.inner.read().clone()
    }

    /// Whether both handles point at the same map.
    pub fn ptr_eq(&self, other: &SassMap) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for SassMap {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.entries() == other.entries()
    }
}

impl fmt::Display for SassMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, (key, value)) in self.entries().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str(")")
    }
}
