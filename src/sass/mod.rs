//! Sass value model.
//!
//! The value types a Sass extension function receives and returns. Compound
//! values are shared handles: cloning a [`SassValue`] clones the handle, so
//! every clone observes mutations made through any other.
//!
//! # Modules
//!
//! - [`number`] - numbers with units
//! - [`color`] - RGBA colors
//! - [`string`] - strings
//! - [`list`] - comma/space separated lists
//! - [`map`] - positional key/value maps
//! - [`adapter`] - ordered map builder with key lookup
//!
//! Rendering (`Display`) produces the canonical text form used in
//! diagnostics and tests, e.g. `15px`, `rgba(255, 0, 0, 0.5)`, `(1, 2)`,
//! `(a: 1, b: 2)`.

mod adapter;
mod color;
mod list;
mod map;
mod number;
mod string;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

pub use adapter::SassMapAdapter;
pub use color::SassColor;
pub use list::SassList;
pub use map::SassMap;
pub use number::SassNumber;
pub use string::SassString;

pub(crate) use color::clamp_channel;

/// Element access past the end of a list or map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of bounds for length {len}")]
pub struct IndexOutOfBounds {
    /// Requested index.
    pub index: usize,
    /// Length of the list or map.
    pub len: usize,
}

/// A Sass value.
#[derive(Debug, Clone)]
pub enum SassValue {
    /// The `null` singleton.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A number with an optional unit.
    Number(SassNumber),
    /// An RGBA color.
    Color(SassColor),
    /// A string.
    String(SassString),
    /// A list.
    List(SassList),
    /// A map.
    Map(SassMap),
    /// An error value raised by an extension function.
    Error(SassError),
}

impl SassValue {
    /// The `null` singleton.
    pub const NULL: SassValue = SassValue::Null;

    /// Create a number.
    pub fn number(value: f64, unit: impl Into<String>) -> Self {
        Self::Number(SassNumber::new(value, unit))
    }

    /// Create a color. Channels are clamped to their valid ranges.
    pub fn color(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::Color(SassColor::from_channels(r, g, b, a))
    }

    /// Create a string.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(SassString::new(value))
    }

    /// Create a boolean.
    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// Create an error value.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(SassError::new(message))
    }

    /// Classify this value.
    pub fn type_of(&self) -> SassType {
        match self {
            Self::Null => SassType::Null,
            Self::Boolean(_) => SassType::Bool,
            Self::Number(_) => SassType::Number,
            Self::Color(_) => SassType::Color,
            Self::String(_) => SassType::String,
            Self::List(_) => SassType::List,
            Self::Map(_) => SassType::Map,
            Self::Error(_) => SassType::Error,
        }
    }

    /// Whether this is the `null` singleton.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether `self` and `other` are the same handle (not just equal content).
    ///
    /// `Null` and booleans are values, so they compare by content here too.
    pub fn same_handle(&self, other: &SassValue) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a.ptr_eq(b),
            (Self::Color(a), Self::Color(b)) => a.ptr_eq(b),
            (Self::String(a), Self::String(b)) => a.ptr_eq(b),
            (Self::List(a), Self::List(b)) => a.ptr_eq(b),
            (Self::Map(a), Self::Map(b)) => a.ptr_eq(b),
            (Self::Error(a), Self::Error(b)) => Arc::ptr_eq(&a.message, &b.message),
            _ => false,
        }
    }

    /// Feed a content hash consistent with `==` into `state`, for map key
    /// indexes. Lists and maps contribute only their length.
    pub(crate) fn hash_key<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Boolean(b) => b.hash(state),
            Self::Number(n) => n.hash_key(state),
            Self::Color(c) => c.hash_key(state),
            Self::String(s) => s.hash_key(state),
            Self::List(l) => l.len().hash(state),
            Self::Map(m) => m.len().hash(state),
            Self::Error(e) => e.message.hash(state),
        }
    }
}

impl PartialEq for SassValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Color(a), Self::Color(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for SassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => fmt::Display::fmt(n, f),
            Self::Color(c) => fmt::Display::fmt(c, f),
            Self::String(s) => fmt::Display::fmt(s, f),
            Self::List(l) => fmt::Display::fmt(l, f),
            Self::Map(m) => fmt::Display::fmt(m, f),
            Self::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl From<SassNumber> for SassValue {
    fn from(value: SassNumber) -> Self {
        Self::Number(value)
    }
}

impl From<SassColor> for SassValue {
    fn from(value: SassColor) -> Self {
        Self::Color(value)
    }
}

impl From<SassString> for SassValue {
    fn from(value: SassString) -> Self {
        Self::String(value)
    }
}

impl From<SassList> for SassValue {
    fn from(value: SassList) -> Self {
        Self::List(value)
    }
}

impl From<SassMap> for SassValue {
    fn from(value: SassMap) -> Self {
        Self::Map(value)
    }
}

/// An error value. Immutable once created.
#[derive(Debug, Clone)]
pub struct SassError {
    message: Arc<str>,
}

impl SassError {
    /// Create an error value with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Arc::from(message.into()),
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl PartialEq for SassError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl fmt::Display for SassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.message)
    }
}

// =============================================================================
// Type tags
// =============================================================================

/// Type tag of a [`SassValue`], used to select a Sass → host converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SassType {
    /// `list`
    List,
    /// `map`
    Map,
    /// `null`
    Null,
    /// `bool`
    Bool,
    /// `string`
    String,
    /// `color`
    Color,
    /// `number`
    Number,
    /// `error`: no host counterpart.
    Error,
}

impl SassType {
    /// Every tag, in table order.
    pub const ALL: [SassType; 8] = [
        Self::List,
        Self::Map,
        Self::Null,
        Self::Bool,
        Self::String,
        Self::Color,
        Self::Number,
        Self::Error,
    ];

    /// Canonical tag name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Map => "map",
            Self::Null => "null",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Color => "color",
            Self::Number => "number",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for SassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SassType {
    type Err = crate::convert::ConvertError;

    /// Parse a tag name, case-insensitively. `boolean` is accepted for `bool`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "boolean" {
            return Ok(Self::Bool);
        }
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == lower)
            .ok_or_else(|| crate::convert::ConvertError::UnknownTypeTag(s.to_string()))
    }
}
