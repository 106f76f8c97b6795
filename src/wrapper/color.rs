//! RGBA color wrapper.

use std::fmt;

use super::{FieldAccess, call_accessor};
use crate::convert::{ConvertError, ConvertOptions};
use crate::host::HostValue;
use crate::sass::{SassColor, clamp_channel};

/// An RGBA color bound to a [`SassColor`].
#[derive(Debug, Clone)]
pub struct Rgba {
    color: SassColor,
    accessor_functions: bool,
}

impl Rgba {
    /// Bind to a fresh opaque black, `rgba(0, 0, 0, 1)`.
    pub fn new() -> Self {
        Self::bind(&SassColor::new(0, 0, 0, 1.0))
    }

    /// Bind to `color`. Setters write through to it.
    pub fn bind(color: &SassColor) -> Self {
        Self::bind_with(color, &ConvertOptions::default())
    }

    /// Bind to `color`, taking accessor settings from `options`.
    pub fn bind_with(color: &SassColor, options: &ConvertOptions) -> Self {
        Self {
            color: color.clone(),
            accessor_functions: options.accessor_functions,
        }
    }

    /// Copy of this wrapper bound to a new, independent Sass color.
    pub fn detached(&self) -> Self {
        Self {
            color: SassColor::new(self.r(), self.g(), self.b(), self.a()),
            accessor_functions: self.accessor_functions,
        }
    }

    /// Red channel.
    pub fn r(&self) -> u8 {
        self.color.r()
    }

    /// Green channel.
    pub fn g(&self) -> u8 {
        self.color.g()
    }

    /// Blue channel.
    pub fn b(&self) -> u8 {
        self.color.b()
    }

    /// Alpha channel.
    pub fn a(&self) -> f64 {
        self.color.a()
    }

    /// Set the red channel on the bound Sass color.
    pub fn set_r(&self, r: u8) {
        self.color.set_r(r);
    }

    /// Set the green channel on the bound Sass color.
    pub fn set_g(&self, g: u8) {
        self.color.set_g(g);
    }

    /// Set the blue channel on the bound Sass color.
    pub fn set_b(&self, b: u8) {
        self.color.set_b(b);
    }

    /// Set alpha, clamped to `0..=1`.
    pub fn set_a(&self, a: f64) {
        self.color.set_a(a);
    }

    /// The bound Sass color.
    pub fn handle(&self) -> &SassColor {
        &self.color
    }

    /// Whether explicit getter/setter methods are exposed through [`FieldAccess::call`].
    pub fn has_accessor_functions(&self) -> bool {
        self.accessor_functions
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Rgba {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.color, f)
    }
}

impl FieldAccess for Rgba {
    fn get_field(&self, name: &str) -> Option<HostValue> {
        let value = match name {
            "r" => f64::from(self.r()),
            "g" => f64::from(self.g()),
            "b" => f64::from(self.b()),
            "a" => self.a(),
            _ => return None,
        };
        Some(HostValue::Number(value))
    }

    fn set_field(&self, name: &str, value: &HostValue) -> bool {
        let HostValue::Number(n) = *value else {
            return false;
        };
        match name {
            "r" => self.set_r(clamp_channel(n)),
            "g" => self.set_g(clamp_channel(n)),
            "b" => self.set_b(clamp_channel(n)),
            "a" => self.set_a(n),
            _ => return false,
        }
        true
    }

    fn call(&self, method: &str, args: &[HostValue]) -> Result<Option<HostValue>, ConvertError> {
        call_accessor(self, self.accessor_functions, method, args)
    }
}
