//! Per-call conversion options.

use crate::config;

/// Options recognized by [`to_sass`](super::to_sass) and [`to_host`](super::to_host).
///
/// Options are read-only during a conversion; the same value can be reused
/// across calls. Forcing a type is a separate parameter
/// ([`to_sass_as`](super::to_sass_as), [`to_host_as`](super::to_host_as)).
///
/// # Example
///
/// ```ignore
/// let options = ConvertOptions::new().unit("px").separator(false);
/// let list = to_sass(&HostValue::from(vec![1.into(), 2.into()]), &options)?;
/// assert_eq!(list.to_string(), "(1px 2px)");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertOptions {
    /// Sass → host: leave list elements and map values as Sass values.
    pub shallow: bool,
    /// Host → Sass: separator for lists without a marker (`true` comma).
    /// Unset means comma.
    pub separator: Option<bool>,
    /// Host → Sass: unit attached to bare numbers.
    pub unit: Option<String>,
    /// Host → Sass: drop map and record entries whose value is `null`.
    pub exclude_null: bool,
    /// Sass → host: expose getter/setter methods on created wrappers.
    pub accessor_functions: bool,
    /// Nesting limit; unset uses [`config::get()`]'s `max_depth`.
    pub max_depth: Option<usize>,
}

impl ConvertOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set [`shallow`](Self::shallow).
    pub fn shallow(mut self, shallow: bool) -> Self {
        self.shallow = shallow;
        self
    }

    /// Set the default list [`separator`](Self::separator).
    pub fn separator(mut self, comma: bool) -> Self {
        self.separator = Some(comma);
        self
    }

    /// Set the [`unit`](Self::unit) for bare numbers.
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set [`exclude_null`](Self::exclude_null).
    pub fn exclude_null(mut self, exclude: bool) -> Self {
        self.exclude_null = exclude;
        self
    }

    /// Set [`accessor_functions`](Self::accessor_functions).
    pub fn accessor_functions(mut self, enabled: bool) -> Self {
        self.accessor_functions = enabled;
        self
    }

    /// Set the nesting limit.
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Nesting limit in effect.
    pub fn depth_limit(&self) -> usize {
        self.max_depth.unwrap_or_else(|| config::get().max_depth)
    }

    /// Unit for bare numbers, `""` when unset.
    pub fn unit_or_empty(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }
}
