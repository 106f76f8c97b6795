//! Key-ordered host maps.

use super::HostValue;
use crate::index::{KeyIndex, hash_with};

/// A map with arbitrary host keys that iterates in insertion order.
///
/// Setting an existing key replaces its value without moving it. Lookups go
/// through a hashed index of the keys' content at insertion time.
#[derive(Debug, Clone, Default)]
pub struct HostMap {
    entries: Vec<(HostValue, HostValue)>,
    index: KeyIndex,
}

impl HostMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value for `key`.
    pub fn set(&mut self, key: impl Into<HostValue>, value: impl Into<HostValue>) {
        let (key, value) = (key.into(), value.into());
        let hash = key_hash(&key);
        match self.slot(&key, hash) {
            Some(slot) => self.entries[slot].1 = value,
            None => self.append(hash, key, value),
        }
    }

    /// Append an entry whose key is known to be absent.
    pub(crate) fn push_unique(&mut self, key: HostValue, value: HostValue) {
        let hash = key_hash(&key);
        debug_assert!(self.slot(&key, hash).is_none(), "duplicate key {key:?}");
        self.append(hash, key, value);
    }

    /// Value for `key`.
    pub fn get(&self, key: &HostValue) -> Option<&HostValue> {
        self.slot(key, key_hash(key)).map(|slot| &self.entries[slot].1)
    }

    /// Value for a string key.
    pub fn get_str(&self, key: &str) -> Option<&HostValue> {
        self.get(&HostValue::from(key))
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &HostValue) -> bool {
        self.get(key).is_some()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&HostValue, &HostValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &HostValue> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn slot(&self, key: &HostValue, hash: u64) -> Option<usize> {
        self.index.find(hash, |slot| self.entries[slot].0 == *key)
    }

    fn append(&mut self, hash: u64, key: HostValue, value: HostValue) {
        self.index.insert(hash, self.entries.len());
        self.entries.push((key, value));
    }
}

fn key_hash(key: &HostValue) -> u64 {
    hash_with(|h| key.hash_key(h))
}

impl PartialEq for HostMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V> FromIterator<(K, V)> for HostMap
where
    K: Into<HostValue>,
    V: Into<HostValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_and_replace() {
        let mut map = HostMap::new();
        map.set("b", 1);
        map.set("a", 2);
        map.set("b", 3);

        let keys: Vec<_> = map.keys().filter_map(HostValue::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(map.get_str("b"), Some(&HostValue::Number(3.0)));
    }

    #[test]
    fn test_non_string_keys() {
        let map: HostMap = [(HostValue::from(1), "one"), (HostValue::from(true), "yes")]
            .into_iter()
            .collect();
        assert_eq!(map.get(&HostValue::from(1)), Some(&HostValue::from("one")));
        assert!(map.contains_key(&HostValue::from(true)));
        assert!(map.get_str("1").is_none());
    }

    #[test]
    fn test_signed_zero_is_one_key() {
        let mut map = HostMap::new();
        map.set(0.0, "first");
        map.set(-0.0, "second");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&HostValue::Number(0.0)), Some(&HostValue::from("second")));
    }

    #[test]
    fn test_wrapper_and_container_keys() {
        use crate::sass::SassNumber;
        use crate::wrapper::Dimension;

        let mut map = HostMap::new();
        map.set(Dimension::bind(&SassNumber::new(2.0, "px")), "dimension");
        map.set(vec![HostValue::from(1)], "one");
        map.set(vec![HostValue::from(2)], "two");
        map.set(2, "number");

        assert_eq!(map.len(), 4);
        let key = HostValue::from(Dimension::bind(&SassNumber::new(2.0, "px")));
        assert_eq!(map.get(&key), Some(&HostValue::from("dimension")));
        assert_eq!(
            map.get(&HostValue::from(vec![HostValue::from(2)])),
            Some(&HostValue::from("two"))
        );
        assert_eq!(map.get(&HostValue::from(2)), Some(&HostValue::from("number")));
    }
}
