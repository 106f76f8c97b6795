//! Roundtrip tests for host ↔ Sass conversion.
//!
//! Tests verify that:
//! - host values render to the expected Sass text
//! - Sass values come back as the expected host values and wrappers
//! - host → Sass → host keeps primitives, separators and key order

#[cfg(test)]
pub(crate) mod common;

#[cfg(test)]
mod edge;

#[cfg(test)]
mod nested;

#[cfg(test)]
mod primitive;

#[cfg(test)]
mod wrapper;
