//! Host → Sass conversion.

use super::table::{Walk, to_sass_converter};
use super::{ConvertError, Outcome};
use crate::host::{HostType, HostValue};
use crate::sass::{SassColor, SassList, SassMapAdapter, SassValue};

/// Classify `value` (or use `forced`), pick a converter and run it.
pub(crate) fn dispatch(
    value: &HostValue,
    forced: Option<HostType>,
    walk: &Walk<'_>,
) -> Result<Outcome<SassValue>, ConvertError> {
    let tag = forced.unwrap_or_else(|| value.type_of());
    log::trace!("to_sass: {} as {tag}", value.type_name());

    match to_sass_converter(tag) {
        Some(convert) => convert(value, walk).map(Outcome::Mapped),
        None => {
            log::debug!("no Sass counterpart for {tag}, using null");
            Ok(Outcome::Unmapped(SassValue::NULL))
        }
    }
}

/// Convert a nested value. `walk` is the children's state.
fn convert(value: &HostValue, walk: &Walk<'_>) -> Result<SassValue, ConvertError> {
    dispatch(value, None, walk).map(Outcome::into_inner)
}

fn mismatch(expected: &'static str, found: &HostValue) -> ConvertError {
    ConvertError::TypeMismatch {
        expected,
        found: found.type_name(),
    }
}

// =============================================================================
// Converters
// =============================================================================

/// Already a Sass value: returned as the same handle.
pub(crate) fn sass(value: &HostValue, _: &Walk<'_>) -> Result<SassValue, ConvertError> {
    match value {
        HostValue::Sass(v) => Ok(v.clone()),
        other => Err(mismatch("sass", other)),
    }
}

/// Separator: the list's marker, else the option, else comma.
pub(crate) fn array(value: &HostValue, walk: &Walk<'_>) -> Result<SassValue, ConvertError> {
    let HostValue::Array(list) = value else {
        return Err(mismatch("array", value));
    };
    let comma = list
        .separator()
        .or(walk.options.separator)
        .unwrap_or(true);

    let child = walk.descend()?;
    let sass_list = SassList::new(list.len(), comma);
    for (index, item) in list.iter().enumerate() {
        sass_list.set_value(index, convert(item, &child)?)?;
    }
    Ok(sass_list.into())
}

pub(crate) fn dimension(value: &HostValue, _: &Walk<'_>) -> Result<SassValue, ConvertError> {
    match value {
        HostValue::Dimension(d) => Ok(SassValue::number(d.value(), d.unit())),
        other => Err(mismatch("dimension", other)),
    }
}

pub(crate) fn rgba(value: &HostValue, _: &Walk<'_>) -> Result<SassValue, ConvertError> {
    match value {
        HostValue::Rgba(c) => Ok(SassColor::new(c.r(), c.g(), c.b(), c.a()).into()),
        other => Err(mismatch("rgba", other)),
    }
}

/// Bare number, with the unit from the options.
pub(crate) fn number(value: &HostValue, walk: &Walk<'_>) -> Result<SassValue, ConvertError> {
    match value {
        HostValue::Number(n) => Ok(SassValue::number(*n, walk.options.unit_or_empty())),
        other => Err(mismatch("number", other)),
    }
}

pub(crate) fn boolean(value: &HostValue, _: &Walk<'_>) -> Result<SassValue, ConvertError> {
    match value {
        HostValue::Bool(b) => Ok(SassValue::boolean(*b)),
        other => Err(mismatch("boolean", other)),
    }
}

pub(crate) fn string(value: &HostValue, _: &Walk<'_>) -> Result<SassValue, ConvertError> {
    match value {
        HostValue::String(s) => Ok(SassValue::string(s.as_str())),
        other => Err(mismatch("string", other)),
    }
}

pub(crate) fn null(value: &HostValue, _: &Walk<'_>) -> Result<SassValue, ConvertError> {
    match value {
        HostValue::Null => Ok(SassValue::NULL),
        other => Err(mismatch("null", other)),
    }
}

/// Records iterate their own keys; maps and adapters iterate their entries.
pub(crate) fn object(value: &HostValue, walk: &Walk<'_>) -> Result<SassValue, ConvertError> {
    match value {
        HostValue::Object(obj) => build_map(obj.iter(), true, walk),
        HostValue::Map(_) | HostValue::MapAdapter(_) => map(value, walk),
        other => Err(mismatch("object", other)),
    }
}

pub(crate) fn map(value: &HostValue, walk: &Walk<'_>) -> Result<SassValue, ConvertError> {
    match value {
        HostValue::Map(m) => build_map(m.iter().map(|(k, v)| (k.clone(), v)), false, walk),
        // Entries are Sass values already; a Sass `null` is not a host null.
        HostValue::MapAdapter(adapter) => Ok(adapter.to_sass_map().into()),
        other => Err(mismatch("map", other)),
    }
}

/// Convert each key and value into a Sass map, skipping null values when
/// `exclude_null` is set (the key is not converted either).
///
/// `unique_keys` skips the duplicate check for sources whose converted keys
/// cannot collide (record field names). Host map keys can: `1` and a
/// unitless dimension `1` both become the Sass number `1`.
fn build_map<'v, K>(
    entries: impl Iterator<Item = (K, &'v HostValue)>,
    unique_keys: bool,
    walk: &Walk<'_>,
) -> Result<SassValue, ConvertError>
where
    K: Into<HostValue>,
{
    let child = walk.descend()?;
    let mut adapter = SassMapAdapter::new();
    for (key, value) in entries {
        if walk.options.exclude_null && value.is_null() {
            continue;
        }
        let key = convert(&key.into(), &child)?;
        let value = convert(value, &child)?;
        if unique_keys {
            adapter.push_unique(key, value);
        } else {
            adapter.set(key, value);
        }
    }
    Ok(adapter.to_sass_map().into())
}
