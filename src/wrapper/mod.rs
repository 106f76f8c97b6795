//! Host-side wrappers over Sass numbers and colors.
//!
//! [`Dimension`] and [`Rgba`] are live bindings: they hold a handle to the
//! Sass value they were created from, and every setter writes through to
//! it. Anything else holding the same handle (a Sass list the number came
//! from, another wrapper) sees the change. Use [`Dimension::detached`] /
//! [`Rgba::detached`] for an independent copy.
//!
//! Besides typed accessors, both implement [`FieldAccess`] for callers that
//! only have field and method names, such as scripting bindings.

mod color;
mod number;

pub use color::Rgba;
pub use number::Dimension;

use crate::convert::ConvertError;
use crate::host::HostValue;

/// Access to wrapper fields and accessor methods by name.
pub trait FieldAccess {
    /// Read a field (`value`, `unit`, `r`, ...). Unknown names yield `None`.
    fn get_field(&self, name: &str) -> Option<HostValue>;

    /// Write a field through to the bound Sass value.
    ///
    /// Returns `false` and changes nothing when the field is unknown or the
    /// value has the wrong kind.
    fn set_field(&self, name: &str, value: &HostValue) -> bool;

    /// Call an accessor method (`getValue`, `setUnit`, `toString`, ...).
    ///
    /// Getter/setter methods are only exposed when the wrapper was created
    /// with [`ConvertOptions::accessor_functions`](crate::ConvertOptions::accessor_functions);
    /// `toString` is always available. Setters return `Ok(None)`.
    fn call(&self, method: &str, args: &[HostValue]) -> Result<Option<HostValue>, ConvertError>;
}

/// Split `getFoo`/`setFoo` into `("get", "foo")`.
fn split_accessor(method: &str) -> Option<(&'static str, String)> {
    let (kind, field) = if let Some(field) = method.strip_prefix("get") {
        ("get", field)
    } else if let Some(field) = method.strip_prefix("set") {
        ("set", field)
    } else {
        return None;
    };
    let mut chars = field.chars();
    let first = chars.next()?;
    if !first.is_ascii_uppercase() {
        return None;
    }
    Some((kind, first.to_ascii_lowercase().to_string() + chars.as_str()))
}

/// Shared `call` logic: `toString`, gating, getter and setter dispatch.
fn call_accessor<W>(
    wrapper: &W,
    enabled: bool,
    method: &str,
    args: &[HostValue],
) -> Result<Option<HostValue>, ConvertError>
where
    W: FieldAccess + std::fmt::Display,
{
    if method == "toString" {
        return Ok(Some(HostValue::String(wrapper.to_string())));
    }
    if !enabled {
        return Err(ConvertError::NoSuchMethod(method.to_string()));
    }
    let (kind, field) =
        split_accessor(method).ok_or_else(|| ConvertError::NoSuchMethod(method.to_string()))?;

    match kind {
        "get" => wrapper
            .get_field(&field)
            .map(Some)
            .ok_or_else(|| ConvertError::NoSuchMethod(method.to_string())),
        _ => {
            if wrapper.get_field(&field).is_none() {
                return Err(ConvertError::NoSuchMethod(method.to_string()));
            }
            let arg = match args {
                [arg] => arg,
                _ => {
                    return Err(ConvertError::InvalidArgument {
                        method: method.to_string(),
                        reason: format!("expected 1 argument, got {}", args.len()),
                    });
                }
            };
            if wrapper.set_field(&field, arg) {
                Ok(None)
            } else {
                Err(ConvertError::InvalidArgument {
                    method: method.to_string(),
                    reason: format!("cannot assign {} to `{field}`", arg.type_name()),
                })
            }
        }
    }
}
