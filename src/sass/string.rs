//! Sass strings.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use parking_lot::RwLock;

/// A string. Shared handle.
#[derive(Debug, Clone)]
pub struct SassString {
    inner: Arc<RwLock<String>>,
}

impl SassString {
    /// Create a string.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value.into())),
        }
    }

    /// The text.
    pub fn value(&self) -> String {
        self.inner.read().clone()
    }

    /// Replace the text.
    pub fn set_value(&self, value: impl Into<String>) {
        *self.inner.write() = value.into();
    }

    /// Whether both handles point at the same string.
    pub fn ptr_eq(&self, other: &SassString) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn hash_key<H: Hasher>(&self, state: &mut H) {
        self.inner.read().hash(state);
    }
}

impl PartialEq for SassString {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let text = self.value();
        *other.inner.read() == text
    }
}

impl fmt::Display for SassString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.read())
    }
}
