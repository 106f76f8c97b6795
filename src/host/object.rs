//! Plain host records.

use rustc_hash::FxHashMap;

use super::HostValue;

/// A record with string keys, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct HostObject {
    entries: Vec<(String, HostValue)>,
    index: FxHashMap<String, usize>,
}

impl HostObject {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field. Replacing keeps the field's position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<HostValue>) {
        let (key, value) = (key.into(), value.into());
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<HostValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Field value.
    pub fn get(&self, key: &str) -> Option<&HostValue> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HostValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for HostObject {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V> FromIterator<(K, V)> for HostObject
where
    K: Into<String>,
    V: Into<HostValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut obj = Self::new();
        for (key, value) in iter {
            obj.insert(key, value);
        }
        obj
    }
}
