//! Conversion outcomes.

/// Result of a conversion that always produces a value.
///
/// `Unmapped` marks the fallback paths: a host value with no Sass
/// counterpart became Sass `null`, or a Sass value with no host counterpart
/// was passed through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// A converter handled the value.
    Mapped(T),
    /// No converter matched; the fallback value.
    Unmapped(T),
}

impl<T> Outcome<T> {
    /// The converted or fallback value.
    pub fn into_inner(self) -> T {
        match self {
            Self::Mapped(v) | Self::Unmapped(v) => v,
        }
    }

    /// Borrow the value.
    pub fn value(&self) -> &T {
        match self {
            Self::Mapped(v) | Self::Unmapped(v) => v,
        }
    }

    /// Whether a converter handled the value.
    pub fn is_mapped(&self) -> bool {
        matches!(self, Self::Mapped(_))
    }
}
