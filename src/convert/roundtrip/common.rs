//! Shared helpers for roundtrip tests.

use crate::convert::{ConvertOptions, to_host, to_sass};
use crate::host::{HostMap, HostValue};
use crate::sass::SassValue;

/// Host → Sass with default options.
pub fn sass(value: impl Into<HostValue>) -> SassValue {
    sass_with(value, &ConvertOptions::default())
}

/// Host → Sass with `options`.
pub fn sass_with(value: impl Into<HostValue>, options: &ConvertOptions) -> SassValue {
    to_sass(&value.into(), options).expect("host → Sass conversion failed")
}

/// Host → Sass rendered as text.
pub fn render(value: impl Into<HostValue>) -> String {
    sass(value).to_string()
}

/// Host → Sass with `options`, rendered as text.
pub fn render_with(value: impl Into<HostValue>, options: &ConvertOptions) -> String {
    sass_with(value, options).to_string()
}

/// Sass → host with default options.
pub fn host(value: &SassValue) -> HostValue {
    to_host(value, &ConvertOptions::default()).expect("Sass → host conversion failed")
}

/// Host → Sass → host.
pub fn roundtrip(value: impl Into<HostValue>) -> HostValue {
    host(&sass(value))
}

/// `[1, 2, ..., n]` as host numbers.
pub fn numbers(n: i32) -> Vec<HostValue> {
    (1..=n).map(HostValue::from).collect()
}

/// Host map from string keys.
pub fn map<V: Into<HostValue>>(entries: impl IntoIterator<Item = (&'static str, V)>) -> HostMap {
    entries.into_iter().collect()
}
