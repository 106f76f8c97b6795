//! Sass colors.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use parking_lot::RwLock;

use super::number::format_number;
use crate::index::hash_f64;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Channels {
    r: u8,
    g: u8,
    b: u8,
    a: f64,
}

/// An RGBA color: `r`, `g`, `b` in `0..=255`, `a` in `0..=1`. Shared handle.
#[derive(Debug, Clone)]
pub struct SassColor {
    inner: Arc<RwLock<Channels>>,
}

impl SassColor {
    /// Create a color from integer channels. Alpha is clamped to `0..=1`.
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Channels {
                r,
                g,
                b,
                a: clamp_alpha(a),
            })),
        }
    }

    /// Create a color from floating-point channels, rounding and clamping each.
    pub fn from_channels(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b), a)
    }

    /// Red channel.
    pub fn r(&self) -> u8 {
        self.inner.read().r
    }

    /// Green channel.
    pub fn g(&self) -> u8 {
        self.inner.read().g
    }

    /// Blue channel.
    pub fn b(&self) -> u8 {
        self.inner.read().b
    }

    /// Alpha channel.
    pub fn a(&self) -> f64 {
        self.inner.read().a
    }

    /// Set the red channel.
    pub fn set_r(&self, r: u8) {
        self.inner.write().r = r;
    }

    /// Set the green channel.
    pub fn set_g(&self, g: u8) {
        self.inner.write().g = g;
    }

    /// Set the blue channel.
    pub fn set_b(&self, b: u8) {
        self.inner.write().b = b;
    }

    /// Set the alpha channel, clamped to `0..=1`.
    pub fn set_a(&self, a: f64) {
        self.inner.write().a = clamp_alpha(a);
    }

    /// Whether both handles point at the same color.
    pub fn ptr_eq(&self, other: &SassColor) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn hash_key<H: Hasher>(&self, state: &mut H) {
        let c = *self.inner.read();
        (c.r, c.g, c.b).hash(state);
        hash_f64(c.a, state);
    }
}

impl PartialEq for SassColor {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let channels = *self.inner.read();
        channels == *other.inner.read()
    }
}

impl fmt::Display for SassColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = *self.inner.read();
        write!(f, "rgba({}, {}, {}, {})", c.r, c.g, c.b, format_number(c.a))
    }
}

/// Round and clamp a channel value into `0..=255`. NaN maps to 0.
pub(crate) fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

fn clamp_alpha(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
