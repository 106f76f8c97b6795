//! Sass numbers.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::index::hash_f64;

#[derive(Debug)]
struct NumberData {
    value: f64,
    unit: String,
}

/// A number with a unit (`""` for unitless). Shared handle.
#[derive(Debug, Clone)]
pub struct SassNumber {
    inner: Arc<RwLock<NumberData>>,
}

impl SassNumber {
    /// Create a number.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(NumberData {
                value,
                unit: unit.into(),
            })),
        }
    }

    /// Numeric magnitude.
    pub fn value(&self) -> f64 {
        self.inner.read().value
    }

    /// Set the numeric magnitude.
    pub fn set_value(&self, value: f64) {
        self.inner.write().value = value;
    }

    /// Unit string.
    pub fn unit(&self) -> String {
        self.inner.read().unit.clone()
    }

    /// Set the unit string.
    pub fn set_unit(&self, unit: impl Into<String>) {
        self.inner.write().unit = unit.into();
    }

    /// Whether both handles point at the same number.
    pub fn ptr_eq(&self, other: &SassNumber) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn hash_key<H: Hasher>(&self, state: &mut H) {
        let data = self.inner.read();
        hash_f64(data.value, state);
        data.unit.hash(state);
    }
}

impl PartialEq for SassNumber {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        // One lock at a time: the other side may be comparing in reverse.
        let (value, unit) = {
            let data = self.inner.read();
            (data.value, data.unit.clone())
        };
        let data = other.inner.read();
        value == data.value && unit == data.unit
    }
}

impl fmt::Display for SassNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.read();
        write!(f, "{}{}", format_number(data.value), data.unit)
    }
}

/// Format a number the way Sass prints it: no trailing `.0`, no `-0`,
/// `Infinity` / `-Infinity` / `NaN` for non-finite values.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity");
    }
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
