//! Converter tables.
//!
//! Each direction maps a type tag to a plain converter function. A tag
//! without an entry selects the direction's default converter, which the
//! dispatcher reports as [`Outcome::Unmapped`](super::Outcome::Unmapped).

use super::{ConvertError, ConvertOptions, host_to_sass, sass_to_host};
use crate::host::{HostType, HostValue};
use crate::sass::{SassType, SassValue};

/// Host → Sass converter.
pub(crate) type ToSassFn = fn(&HostValue, &Walk<'_>) -> Result<SassValue, ConvertError>;

/// Sass → host converter.
pub(crate) type ToHostFn = fn(&SassValue, &Walk<'_>) -> Result<HostValue, ConvertError>;

/// Look up the host → Sass converter for `tag`.
pub(crate) fn to_sass_converter(tag: HostType) -> Option<ToSassFn> {
    let converter: ToSassFn = match tag {
        HostType::Sass => host_to_sass::sass,
        HostType::Array => host_to_sass::array,
        HostType::Dimension => host_to_sass::dimension,
        HostType::Rgba => host_to_sass::rgba,
        HostType::Number => host_to_sass::number,
        HostType::Boolean => host_to_sass::boolean,
        HostType::String => host_to_sass::string,
        HostType::Object => host_to_sass::object,
        HostType::Map => host_to_sass::map,
        HostType::Null => host_to_sass::null,
        HostType::Undefined => return None,
    };
    Some(converter)
}

/// Look up the Sass → host converter for `tag`.
pub(crate) fn to_host_converter(tag: SassType) -> Option<ToHostFn> {
    let converter: ToHostFn = match tag {
        SassType::List => sass_to_host::list,
        SassType::Map => sass_to_host::map,
        SassType::Null => sass_to_host::null,
        SassType::Bool => sass_to_host::boolean,
        SassType::String => sass_to_host::string,
        SassType::Color => sass_to_host::color,
        SassType::Number => sass_to_host::number,
        SassType::Error => return None,
    };
    Some(converter)
}

// =============================================================================
// Walk - options plus recursion depth
// =============================================================================

/// State threaded through one conversion: the caller's options and the
/// nesting depth of the value being converted.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Walk<'a> {
    pub(crate) options: &'a ConvertOptions,
    depth: usize,
    limit: usize,
}

impl<'a> Walk<'a> {
    /// Start at depth 0.
    pub(crate) fn new(options: &'a ConvertOptions) -> Self {
        Self {
            options,
            depth: 0,
            limit: options.depth_limit(),
        }
    }

    /// State for the children of the current value.
    pub(crate) fn descend(&self) -> Result<Walk<'a>, ConvertError> {
        let depth = self.depth + 1;
        if depth > self.limit {
            return Err(ConvertError::DepthExceeded { limit: self.limit });
        }
        Ok(Walk { depth, ..*self })
    }
}
