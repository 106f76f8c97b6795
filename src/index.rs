//! Hashed key index for insertion-ordered maps.
//!
//! Map keys are host or Sass values, which compare by content and may hold
//! floats, so they cannot key a hash map directly. The index buckets entry
//! positions by a content hash instead, and callers confirm a hit with `==`.
//!
//! Hashes agree with equality: containers hash their kind and length only,
//! floats hash `-0.0` as `0.0`.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHasher};

/// Entry positions bucketed by key hash.
#[derive(Debug, Clone, Default)]
pub(crate) struct KeyIndex {
    buckets: FxHashMap<u64, Vec<usize>>,
}

impl KeyIndex {
    /// First slot in the `hash` bucket accepted by `matches`.
    pub(crate) fn find(&self, hash: u64, matches: impl Fn(usize) -> bool) -> Option<usize> {
        self.buckets
            .get(&hash)?
            .iter()
            .copied()
            .find(|&slot| matches(slot))
    }

    /// Record that the key at `slot` hashes to `hash`.
    pub(crate) fn insert(&mut self, hash: u64, slot: usize) {
        self.buckets.entry(hash).or_default().push(slot);
    }
}

/// Run `feed` against a fresh hasher and finish it.
pub(crate) fn hash_with(feed: impl FnOnce(&mut FxHasher)) -> u64 {
    let mut hasher = FxHasher::default();
    feed(&mut hasher);
    hasher.finish()
}

/// Hash a float so that values equal under `==` hash alike.
pub(crate) fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_bits().hash(state);
}
