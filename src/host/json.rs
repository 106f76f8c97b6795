//! JSON ↔ host value conversion.

use serde_json::{Map, Number, Value as JsonValue};

use super::{HostList, HostObject, HostValue};
use crate::sass::SassValue;

impl From<JsonValue> for HostValue {
    /// Map JSON onto host values:
    /// - `null` → `Null`
    /// - `boolean` → `Bool`
    /// - `number` → `Number`
    /// - `string` → `String`
    /// - `array` → unmarked `Array`
    /// - `object` → `Object` (key order kept)
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => Self::Number(number_to_f64(&n)),
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(arr) => Self::Array(arr.into_iter().map(HostValue::from).collect()),
            JsonValue::Object(obj) => Self::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, HostValue::from(v)))
                    .collect(),
            ),
        }
    }
}

fn number_to_f64(n: &Number) -> f64 {
    match n.as_i64() {
        Some(i) => i as f64,
        None => n.as_f64().unwrap_or(f64::NAN),
    }
}

impl From<&JsonValue> for HostValue {
    fn from(json: &JsonValue) -> Self {
        json.clone().into()
    }
}

impl HostValue {
    /// Render as JSON.
    ///
    /// Lossy where JSON has no counterpart:
    /// - `Undefined` and non-finite numbers become `null`
    /// - a unitless [`Dimension`](crate::Dimension) becomes a number, one with
    ///   a unit becomes its string form (`"15px"`)
    /// - colors and Sass values become their rendered string form
    /// - map keys that are not strings are rendered as JSON text
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Undefined | Self::Null => JsonValue::Null,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Number(n) => number(*n),
            Self::String(s) => JsonValue::String(s.clone()),
            Self::Array(list) => list_to_json(list),
            Self::Map(map) => JsonValue::Object(
                map.iter()
                    .map(|(k, v)| (key_to_string(k), v.to_json()))
                    .collect(),
            ),
            Self::Object(obj) => object_to_json(obj),
            Self::MapAdapter(adapter) => JsonValue::Object(
                adapter
                    .iter()
                    .map(|(k, v)| (k.to_string(), sass_to_json(v)))
                    .collect(),
            ),
            Self::Dimension(d) if d.unit().is_empty() => number(d.value()),
            Self::Dimension(d) => JsonValue::String(d.to_string()),
            Self::Rgba(c) => JsonValue::String(c.to_string()),
            Self::Sass(v) => sass_to_json(v),
        }
    }
}

/// Integral values that fit `i64` become JSON integers, so `3` stays `3`.
fn number(n: f64) -> JsonValue {
    // `i64::MAX as f64` rounds up to 2^63, which no longer fits.
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        return JsonValue::from(n as i64);
    }
    Number::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
}

fn list_to_json(list: &HostList) -> JsonValue {
    JsonValue::Array(list.iter().map(HostValue::to_json).collect())
}

fn object_to_json(obj: &HostObject) -> JsonValue {
    let map: Map<String, JsonValue> = obj
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_json()))
        .collect();
    JsonValue::Object(map)
}

fn key_to_string(key: &HostValue) -> String {
    match key {
        HostValue::String(s) => s.clone(),
        other => other.to_json().to_string(),
    }
}

fn sass_to_json(value: &SassValue) -> JsonValue {
    match value {
        SassValue::Null => JsonValue::Null,
        SassValue::Boolean(b) => JsonValue::Bool(*b),
        other => JsonValue::String(other.to_string()),
    }
}
