//! Error types for conversion.

use thiserror::Error;

use crate::sass::IndexOutOfBounds;

/// Error during host ↔ Sass conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Forced type name that no converter table knows.
    #[error("unknown type tag: '{0}'")]
    UnknownTypeTag(String),

    /// Forced type whose converter cannot read the given value.
    #[error("cannot convert {found} as {expected}")]
    TypeMismatch {
        /// Tag the converter was selected for.
        expected: &'static str,
        /// Actual kind of the value.
        found: &'static str,
    },

    /// Nesting deeper than the configured limit (also catches cyclic lists).
    #[error("nesting exceeds the maximum depth of {limit}")]
    DepthExceeded {
        /// The limit that was hit.
        limit: usize,
    },

    /// Accessor method that is unknown or not enabled on the wrapper.
    #[error("no such method: {0}")]
    NoSuchMethod(String),

    /// Accessor method called with unusable arguments.
    #[error("invalid argument for '{method}': {reason}")]
    InvalidArgument {
        /// Method name.
        method: String,
        /// Error reason.
        reason: String,
    },

    /// List or map element access past the end.
    #[error(transparent)]
    IndexOutOfBounds(#[from] IndexOutOfBounds),
}
