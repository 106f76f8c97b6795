//! Host value model.
//!
//! A dynamic value tree on the caller's side of the bridge: scalars, ordered
//! lists with an optional separator marker, key-ordered maps, plain records,
//! the [`Dimension`] / [`Rgba`] wrappers, and Sass values passed through as-is.

mod list;
mod map;
mod object;

#[cfg(feature = "json")]
mod json;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

pub use list::HostList;
pub use map::HostMap;
pub use object::HostObject;

use crate::convert::ConvertError;
use crate::index::hash_f64;
use crate::sass::{SassMapAdapter, SassValue};
use crate::wrapper::{Dimension, Rgba};

/// A host-side value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum HostValue {
    /// Absent value. Has no Sass counterpart and converts to `null`.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Bare number without a unit.
    Number(f64),
    /// String.
    String(String),
    /// Ordered list.
    Array(HostList),
    /// Key-ordered map with arbitrary keys.
    Map(HostMap),
    /// Plain record with string keys.
    Object(HostObject),
    /// Ordered map already holding Sass keys and values.
    MapAdapter(SassMapAdapter),
    /// Number with a unit, bound to a Sass number.
    Dimension(Dimension),
    /// RGBA color, bound to a Sass color.
    Rgba(Rgba),
    /// A Sass value carried unchanged.
    Sass(SassValue),
}

impl HostValue {
    /// Classify this value.
    ///
    /// Sass values are recognized first, then the wrappers, the containers and
    /// finally the primitives.
    pub fn type_of(&self) -> HostType {
        match self {
            Self::Sass(_) => HostType::Sass,
            Self::Dimension(_) => HostType::Dimension,
            Self::Rgba(_) => HostType::Rgba,
            Self::Array(_) => HostType::Array,
            Self::Map(_) | Self::MapAdapter(_) => HostType::Map,
            Self::Object(_) => HostType::Object,
            Self::Null => HostType::Null,
            Self::Undefined => HostType::Undefined,
            Self::Bool(_) => HostType::Boolean,
            Self::Number(_) => HostType::Number,
            Self::String(_) => HostType::String,
        }
    }

    /// Short name of the variant, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::MapAdapter(_) => "map adapter",
            other => other.type_of().as_str(),
        }
    }

    /// Whether this is [`HostValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether this is [`HostValue::Undefined`].
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Feed a content hash consistent with `==` into `state`, for map key
    /// indexes. Containers contribute only their length.
    pub(crate) fn hash_key<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Undefined | Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Number(n) => hash_f64(*n, state),
            Self::String(s) => s.hash(state),
            Self::Array(list) => list.len().hash(state),
            Self::Map(map) => map.len().hash(state),
            Self::Object(obj) => obj.len().hash(state),
            Self::MapAdapter(adapter) => adapter.len().hash(state),
            Self::Dimension(d) => d.handle().hash_key(state),
            Self::Rgba(c) => c.handle().hash_key(state),
            Self::Sass(v) => v.hash_key(state),
        }
    }

    /// Numeric magnitude of a bare number or a [`Dimension`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Dimension(d) => Some(d.value()),
            _ => None,
        }
    }

    /// Boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// String contents.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// List contents.
    pub fn as_list(&self) -> Option<&HostList> {
        match self {
            Self::Array(list) => Some(list),
            _ => None,
        }
    }

    /// Map contents.
    pub fn as_map(&self) -> Option<&HostMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Record contents.
    pub fn as_object(&self) -> Option<&HostObject> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Dimension wrapper.
    pub fn as_dimension(&self) -> Option<&Dimension> {
        match self {
            Self::Dimension(d) => Some(d),
            _ => None,
        }
    }

    /// Color wrapper.
    pub fn as_rgba(&self) -> Option<&Rgba> {
        match self {
            Self::Rgba(c) => Some(c),
            _ => None,
        }
    }

    /// Sass value carried unchanged.
    pub fn as_sass(&self) -> Option<&SassValue> {
        match self {
            Self::Sass(v) => Some(v),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Conversions into HostValue
// ---------------------------------------------------------------------------

impl From<bool> for HostValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for HostValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for HostValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for HostValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for HostValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<HostList> for HostValue {
    fn from(value: HostList) -> Self {
        Self::Array(value)
    }
}

impl From<Vec<HostValue>> for HostValue {
    fn from(value: Vec<HostValue>) -> Self {
        Self::Array(HostList::new(value))
    }
}

impl From<HostMap> for HostValue {
    fn from(value: HostMap) -> Self {
        Self::Map(value)
    }
}

impl From<HostObject> for HostValue {
    fn from(value: HostObject) -> Self {
        Self::Object(value)
    }
}

impl From<SassMapAdapter> for HostValue {
    fn from(value: SassMapAdapter) -> Self {
        Self::MapAdapter(value)
    }
}

impl From<Dimension> for HostValue {
    fn from(value: Dimension) -> Self {
        Self::Dimension(value)
    }
}

impl From<Rgba> for HostValue {
    fn from(value: Rgba) -> Self {
        Self::Rgba(value)
    }
}

impl From<SassValue> for HostValue {
    fn from(value: SassValue) -> Self {
        Self::Sass(value)
    }
}

impl<T: Into<HostValue>> From<Option<T>> for HostValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// =============================================================================
// Type tags
// =============================================================================

/// Type tag of a [`HostValue`], used to select a host → Sass converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostType {
    /// `undefined`
    Undefined,
    /// `null`
    Null,
    /// `boolean`
    Boolean,
    /// `number`
    Number,
    /// `string`
    String,
    /// `array`
    Array,
    /// `map`: [`HostMap`] and [`SassMapAdapter`].
    Map,
    /// `object`: [`HostObject`].
    Object,
    /// `dimension`
    Dimension,
    /// `rgba`
    Rgba,
    /// `sass`: already a Sass value.
    Sass,
}

impl HostType {
    /// Every tag.
    pub const ALL: [HostType; 11] = [
        Self::Undefined,
        Self::Null,
        Self::Boolean,
        Self::Number,
        Self::String,
        Self::Array,
        Self::Map,
        Self::Object,
        Self::Dimension,
        Self::Rgba,
        Self::Sass,
    ];

    /// Canonical tag name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Map => "map",
            Self::Object => "object",
            Self::Dimension => "dimension",
            Self::Rgba => "rgba",
            Self::Sass => "sass",
        }
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostType {
    type Err = ConvertError;

    /// Parse a tag name, case-insensitively.
    ///
    /// Besides the canonical names, accepts the wrapper constructor names
    /// `sassjsnumber`, `sassjscolor` and `sassjsmap` (which maps to `map`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "sassjsnumber" => return Ok(Self::Dimension),
            "sassjscolor" => return Ok(Self::Rgba),
            "sassjsmap" => return Ok(Self::Map),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == lower)
            .ok_or_else(|| ConvertError::UnknownTypeTag(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sass::SassNumber;

    #[test]
    fn test_classify_primitives() {
        assert_eq!(HostValue::Undefined.type_of(), HostType::Undefined);
        assert_eq!(HostValue::Null.type_of(), HostType::Null);
        assert_eq!(HostValue::from(true).type_of(), HostType::Boolean);
        assert_eq!(HostValue::from(15).type_of(), HostType::Number);
        assert_eq!(HostValue::from("abc").type_of(), HostType::String);
    }

    #[test]
    fn test_classify_structures() {
        assert_eq!(HostValue::from(vec![HostValue::from(1)]).type_of(), HostType::Array);
        assert_eq!(HostValue::from(HostMap::new()).type_of(), HostType::Map);
        assert_eq!(HostValue::from(SassMapAdapter::new()).type_of(), HostType::Map);
        assert_eq!(HostValue::from(HostObject::new()).type_of(), HostType::Object);
        assert_eq!(HostValue::from(Dimension::new()).type_of(), HostType::Dimension);
        assert_eq!(HostValue::from(Rgba::new()).type_of(), HostType::Rgba);
        assert_eq!(HostValue::from(SassValue::NULL).type_of(), HostType::Sass);
    }

    #[test]
    fn test_classify_is_stable() {
        let value = HostValue::from(Dimension::bind(&SassNumber::new(2.0, "em")));
        assert_eq!(value.type_of(), value.type_of());
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("array".parse::<HostType>().unwrap(), HostType::Array);
        assert_eq!("SassJsNumber".parse::<HostType>().unwrap(), HostType::Dimension);
        assert_eq!("sassjsmap".parse::<HostType>().unwrap(), HostType::Map);
        assert!(matches!(
            "symbol".parse::<HostType>(),
            Err(ConvertError::UnknownTypeTag(tag)) if tag == "symbol"
        ));
    }

    #[test]
    fn test_option_into_value() {
        assert_eq!(HostValue::from(None::<f64>), HostValue::Null);
        assert_eq!(HostValue::from(Some("x")), HostValue::from("x"));
    }
}
