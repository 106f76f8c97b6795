//! Dimensioned number wrapper.

use std::fmt;

use super::{FieldAccess, call_accessor};
use crate::convert::{ConvertError, ConvertOptions};
use crate::host::HostValue;
use crate::sass::SassNumber;

/// A number with a unit, bound to a [`SassNumber`].
///
/// `unit` is always a string; unitless numbers have `""`.
#[derive(Debug, Clone)]
pub struct Dimension {
    number: SassNumber,
    accessor_functions: bool,
}

impl Dimension {
    /// Bind to a fresh Sass number `0` with no unit.
    pub fn new() -> Self {
        Self::bind(&SassNumber::new(0.0, ""))
    }

    /// Bind to `number`. Setters write through to it.
    pub fn bind(number: &SassNumber) -> Self {
        Self::bind_with(number, &ConvertOptions::default())
    }

    /// Bind to `number`, taking accessor settings from `options`.
    pub fn bind_with(number: &SassNumber, options: &ConvertOptions) -> Self {
        Self {
            number: number.clone(),
            accessor_functions: options.accessor_functions,
        }
    }

    /// Copy of this wrapper bound to a new, independent Sass number.
    pub fn detached(&self) -> Self {
        Self {
            number: SassNumber::new(self.value(), self.unit()),
            accessor_functions: self.accessor_functions,
        }
    }

    /// Numeric magnitude.
    pub fn value(&self) -> f64 {
        self.number.value()
    }

    /// Set the magnitude on the bound Sass number.
    pub fn set_value(&self, value: f64) {
        self.number.set_value(value);
    }

    /// Unit string.
    pub fn unit(&self) -> String {
        self.number.unit()
    }

    /// Set the unit on the bound Sass number.
    pub fn set_unit(&self, unit: impl Into<String>) {
        self.number.set_unit(unit);
    }

    /// The bound Sass number.
    pub fn handle(&self) -> &SassNumber {
        &self.number
    }

    /// Whether explicit getter/setter methods are exposed through [`FieldAccess::call`].
    pub fn has_accessor_functions(&self) -> bool {
        self.accessor_functions
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.number, f)
    }
}

impl FieldAccess for Dimension {
    fn get_field(&self, name: &str) -> Option<HostValue> {
        match name {
            "value" => Some(HostValue::Number(self.value())),
            "unit" => Some(HostValue::String(self.unit())),
            _ => None,
        }
    }

    fn set_field(&self, name: &str, value: &HostValue) -> bool {
        match (name, value) {
            ("value", HostValue::Number(n)) => self.set_value(*n),
            ("unit", HostValue::String(s)) => self.set_unit(s.as_str()),
            _ => return false,
        }
        true
    }

    fn call(&self, method: &str, args: &[HostValue]) -> Result<Option<HostValue>, ConvertError> {
        call_accessor(self, self.accessor_functions, method, args)
    }
}
