//! Sass → host conversion.

use super::table::{Walk, to_host_converter};
use super::{ConvertError, Outcome};
use crate::host::{HostList, HostMap, HostValue};
use crate::sass::{SassMapAdapter, SassType, SassValue};
use crate::wrapper::{Dimension, Rgba};

/// Classify `value` (or use `forced`), pick a converter and run it.
pub(crate) fn dispatch(
    value: &SassValue,
    forced: Option<SassType>,
    walk: &Walk<'_>,
) -> Result<Outcome<HostValue>, ConvertError> {
    let tag = forced.unwrap_or_else(|| value.type_of());
    log::trace!("to_host: {} as {tag}", value.type_of());

    match to_host_converter(tag) {
        Some(convert) => convert(value, walk).map(Outcome::Mapped),
        None => {
            log::debug!("no host counterpart for {tag}, passing the Sass value through");
            Ok(Outcome::Unmapped(HostValue::Sass(value.clone())))
        }
    }
}

/// Convert a nested value. `walk` is the children's state.
fn convert(value: &SassValue, walk: &Walk<'_>) -> Result<HostValue, ConvertError> {
    dispatch(value, None, walk).map(Outcome::into_inner)
}

fn mismatch(expected: SassType, found: &SassValue) -> ConvertError {
    ConvertError::TypeMismatch {
        expected: expected.as_str(),
        found: found.type_of().as_str(),
    }
}

// =============================================================================
// Converters
// =============================================================================

/// Elements are converted unless shallow; the separator is carried over.
pub(crate) fn list(value: &SassValue, walk: &Walk<'_>) -> Result<HostValue, ConvertError> {
    let SassValue::List(sass_list) = value else {
        return Err(mismatch(SassType::List, value));
    };

    let child = walk.descend()?;
    let mut items = Vec::with_capacity(sass_list.len());
    for item in sass_list.values() {
        let item = if walk.options.shallow {
            HostValue::Sass(item)
        } else {
            convert(&item, &child)?
        };
        items.push(item);
    }
    Ok(HostList::new(items).with_separator(sass_list.separator()).into())
}

/// Keys are always converted; values only when not shallow.
pub(crate) fn map(value: &SassValue, walk: &Walk<'_>) -> Result<HostValue, ConvertError> {
    let SassValue::Map(sass_map) = value else {
        return Err(mismatch(SassType::Map, value));
    };

    let child = walk.descend()?;
    let mut host_map = HostMap::new();
    for (k, v) in SassMapAdapter::from_map(sass_map).iter() {
        let key = convert(k, &child)?;
        let value = if walk.options.shallow {
            HostValue::Sass(v.clone())
        } else {
            convert(v, &child)?
        };
        // Distinct Sass keys convert to distinct host keys.
        host_map.push_unique(key, value);
    }
    Ok(host_map.into())
}

pub(crate) fn null(value: &SassValue, _: &Walk<'_>) -> Result<HostValue, ConvertError> {
    match value {
        SassValue::Null => Ok(HostValue::Null),
        other => Err(mismatch(SassType::Null, other)),
    }
}

pub(crate) fn boolean(value: &SassValue, _: &Walk<'_>) -> Result<HostValue, ConvertError> {
    match value {
        SassValue::Boolean(b) => Ok(HostValue::Bool(*b)),
        other => Err(mismatch(SassType::Bool, other)),
    }
}

pub(crate) fn string(value: &SassValue, _: &Walk<'_>) -> Result<HostValue, ConvertError> {
    match value {
        SassValue::String(s) => Ok(HostValue::String(s.value())),
        other => Err(mismatch(SassType::String, other)),
    }
}

/// Bound to the same color handle.
pub(crate) fn color(value: &SassValue, walk: &Walk<'_>) -> Result<HostValue, ConvertError> {
    match value {
        SassValue::Color(c) => Ok(Rgba::bind_with(c, walk.options).into()),
        other => Err(mismatch(SassType::Color, other)),
    }
}

/// Bound to the same number handle.
pub(crate) fn number(value: &SassValue, walk: &Walk<'_>) -> Result<HostValue, ConvertError> {
    match value {
        SassValue::Number(n) => Ok(Dimension::bind_with(n, walk.options).into()),
        other => Err(mismatch(SassType::Number, other)),
    }
}
