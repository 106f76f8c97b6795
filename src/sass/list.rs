//! Sass lists.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{IndexOutOfBounds, SassValue};

#[derive(Debug)]
struct ListData {
    items: Vec<SassValue>,
    comma: bool,
}

/// A fixed-length list with a comma or space separator. Shared handle.
#[derive(Debug, Clone)]
pub struct SassList {
    inner: Arc<RwLock<ListData>>,
}

impl SassList {
    /// Create a list of `len` nulls. `comma` selects the separator.
    pub fn new(len: usize, comma: bool) -> Self {
        Self::from_values(vec![SassValue::Null; len], comma)
    }

    /// Create a list holding `items`.
    pub fn from_values(items: Vec<SassValue>, comma: bool) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ListData { items, comma })),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index` (a handle clone).
    pub fn value(&self, index: usize) -> Option<SassValue> {
        self.inner.read().items.get(index).cloned()
    }

    /// Replace the element at `index`.
    pub fn set_value(&self, index: usize, value: SassValue) -> Result<(), IndexOutOfBounds> {
        let mut data = self.inner.write();
        let len = data.items.len();
        let slot = data
            .items
            .get_mut(index)
            .ok_or(IndexOutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    /// `true` for comma-separated, `false` for space-separated.
    pub fn separator(&self) -> bool {
        self.inner.read().comma
    }

    /// Change the separator.
    pub fn set_separator(&self, comma: bool) {
        self.inner.write().comma = comma;
    }

    /// Snapshot of the elements. No lock is held after this returns.
    pub fn values(&self) -> Vec<SassValue> {
        self.inner.read().items.clone()
    }

    /// Whether both handles point at the same list.
    pub fn ptr_eq(&self, other: &SassList) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for SassList {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        self.separator() == other.separator() && self.values() == other.values()
    }
}

impl fmt::Display for SassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.separator() { ", " } else { " " };
        f.write_str("(")?;
        for (i, item) in self.values().iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            write!(f, "{item}")?;
        }
        f.write_str(")")
    }
}
