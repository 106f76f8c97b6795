//! # sass-bridge
//!
//! Bidirectional conversion between host values and Sass values.
//!
//! Sass extension functions receive and return Sass values (numbers with
//! units, colors, strings, lists with separators, maps). Host code wants
//! plain numbers, strings, lists and ordered maps. This crate converts
//! between the two without either side knowing the other's layout:
//!
//! - **Classification**: every value carries a type tag ([`HostType`],
//!   [`SassType`]) that selects a converter
//! - **Converter tables**: one per direction, with explicit fallbacks
//! - **Wrappers**: [`Dimension`] and [`Rgba`] give host-style accessors over
//!   live Sass numbers and colors
//! - **Options**: separators, units, null exclusion, shallow conversion
//!
//! ## Quick Start
//!
//! ```ignore
//! use sass_bridge::prelude::*;
//!
//! // Host → Sass
//! let list = HostList::space(vec![1.into(), 2.into(), 3.into()]);
//! let sass = to_sass(&list.into(), &ConvertOptions::default())?;
//! assert_eq!(sass.to_string(), "(1 2 3)");
//!
//! // Sass → host
//! let width = to_host(&SassValue::number(15.0, "px"), &ConvertOptions::default())?;
//! let width = width.as_dimension().unwrap();
//! assert_eq!((width.value(), width.unit().as_str()), (15.0, "px"));
//! ```
//!
//! ## Modules
//!
//! - [`convert`]: entry points, options, errors
//! - [`host`]: host value model
//! - [`sass`]: Sass value model
//! - [`wrapper`]: number and color wrappers
//! - [`config`]: process-wide defaults

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod convert;
pub mod host;
pub mod sass;
pub mod wrapper;

mod index;

// =============================================================================
// Prelude - import commonly used items with a single `use`
// =============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use sass_bridge::prelude::*;
/// ```
pub mod prelude {
    // Conversion
    pub use crate::{
        ConvertError, ConvertOptions, Outcome, to_host, to_host_as, to_host_outcome, to_sass,
        to_sass_as, to_sass_outcome,
    };

    // Values
    pub use crate::{
        HostList, HostMap, HostObject, HostType, HostValue, SassMapAdapter, SassType, SassValue,
    };

    // Wrappers
    pub use crate::{Dimension, FieldAccess, Rgba};
}

// =============================================================================
// Conversion
// =============================================================================

pub use convert::{
    ConvertError, ConvertOptions, Outcome, to_host, to_host_as, to_host_outcome, to_sass,
    to_sass_as, to_sass_outcome,
};

// =============================================================================
// Value models
// =============================================================================

pub use host::{HostList, HostMap, HostObject, HostType, HostValue};
pub use sass::{
    SassColor, SassError, SassList, SassMap, SassMapAdapter, SassNumber, SassString, SassType,
    SassValue,
};
pub use wrapper::{Dimension, FieldAccess, Rgba};

pub use config::{Config, ConfigBuilder};
