//! Host ↔ Sass conversion.
//!
//! # Modules
//!
//! - [`options`] - per-call options
//! - [`table`] - tag → converter tables
//! - [`host_to_sass`] - host → Sass converters
//! - [`sass_to_host`] - Sass → host converters
//! - [`outcome`] - mapped / unmapped results
//! - [`error`] - error types
//!
//! # Fallbacks
//!
//! Conversion never fails because a type has no counterpart:
//!
//! - host values without a Sass counterpart (`Undefined`) become Sass `null`
//! - Sass values without a host counterpart (errors) are returned unchanged,
//!   wrapped in [`HostValue::Sass`]
//!
//! The `*_outcome` functions report these cases as [`Outcome::Unmapped`].
//! Errors are reserved for forced types that cannot read the value, unknown
//! type names and nesting beyond the depth limit.

mod error;
mod host_to_sass;
mod options;
mod outcome;
mod sass_to_host;
mod table;

#[cfg(test)]
mod roundtrip;

pub use error::ConvertError;
pub use options::ConvertOptions;
pub use outcome::Outcome;

use table::Walk;

use crate::host::{HostType, HostValue};
use crate::sass::{SassType, SassValue};

/// Convert a host value to a Sass value.
///
/// # Example
///
/// ```ignore
/// let obj = HostObject::new().with("a", 1).with("b", 2);
/// let map = to_sass(&obj.into(), &ConvertOptions::default())?;
/// assert_eq!(map.to_string(), "(a: 1, b: 2)");
/// ```
pub fn to_sass(value: &HostValue, options: &ConvertOptions) -> Result<SassValue, ConvertError> {
    to_sass_outcome(value, options).map(Outcome::into_inner)
}

/// Convert a host value to a Sass value using the converter for `tag`
/// instead of classifying the value.
///
/// # Errors
///
/// [`ConvertError::TypeMismatch`] when the converter for `tag` cannot read
/// `value`, [`ConvertError::DepthExceeded`] when it nests too deep.
/// [`HostType::Undefined`] has no converter: forcing it never fails
/// and yields Sass `null`, the same fallback as an unforced call.
pub fn to_sass_as(
    value: &HostValue,
    tag: HostType,
    options: &ConvertOptions,
) -> Result<SassValue, ConvertError> {
    log::debug!("to_sass: forcing {tag} for {}", value.type_name());
    host_to_sass::dispatch(value, Some(tag), &Walk::new(options)).map(Outcome::into_inner)
}

/// Like [`to_sass`], reporting whether a converter handled the value.
pub fn to_sass_outcome(
    value: &HostValue,
    options: &ConvertOptions,
) -> Result<Outcome<SassValue>, ConvertError> {
    host_to_sass::dispatch(value, None, &Walk::new(options))
}

/// Convert a Sass value to a host value.
///
/// Numbers and colors become [`Dimension`](crate::Dimension) and
/// [`Rgba`](crate::Rgba) wrappers bound to the original Sass handles.
pub fn to_host(value: &SassValue, options: &ConvertOptions) -> Result<HostValue, ConvertError> {
    to_host_outcome(value, options).map(Outcome::into_inner)
}

/// Convert a Sass value to a host value using the converter for `tag`
/// instead of classifying the value.
///
/// # Errors
///
/// [`ConvertError::TypeMismatch`] when the converter for `tag` cannot read
/// `value`, [`ConvertError::DepthExceeded`] when it nests too deep.
/// [`SassType::Error`] has no converter: forcing it never fails and
/// passes `value` through as [`HostValue::Sass`].
pub fn to_host_as(
    value: &SassValue,
    tag: SassType,
    options: &ConvertOptions,
) -> Result<HostValue, ConvertError> {
    log::debug!("to_host: forcing {tag} for {}", value.type_of());
    sass_to_host::dispatch(value, Some(tag), &Walk::new(options)).map(Outcome::into_inner)
}

/// Like [`to_host`], reporting whether a converter handled the value.
pub fn to_host_outcome(
    value: &SassValue,
    options: &ConvertOptions,
) -> Result<Outcome<HostValue>, ConvertError> {
    sass_to_host::dispatch(value, None, &Walk::new(options))
}
