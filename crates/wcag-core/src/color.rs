//! Straight-alpha sRGB color types.
//!
//! # Types
//!
//! - [`Rgba8`] - 8-bit channels, the usual web / CSS representation
//! - [`Rgba16`] - 16-bit channels, the working precision for blending
//! - [`Color`] - accessor trait implemented by both
//!
//! Channels are **straight** (not premultiplied): an `Rgba8` of
//! `(255, 0, 0, 128)` is pure red at half coverage.
//!
//! # Widening
//!
//! 8-bit values widen to 16-bit by `v * 257` (0x12 -> 0x1212), so `0xFF`
//! maps to `0xFFFF` exactly and every 8-bit color survives the round trip.
//!
//! ```
//! use wcag_core::{Color, Rgba8};
//!
//! let c = Rgba8::new(0x12, 0x34, 0x56, 0xFF);
//! let wide = c.rgba16();
//! assert_eq!(wide.r, 0x1212);
//! assert_eq!(wide.to_rgba8(), c);
//! ```

use crate::error::{Error, Result};
use std::fmt;

/// Maximum 16-bit channel value.
pub const MAX16: u16 = 0xFFFF;

/// Opaque white.
pub const WHITE: Rgba8 = Rgba8::new(0xFF, 0xFF, 0xFF, 0xFF);

/// Opaque black.
pub const BLACK: Rgba8 = Rgba8::new(0x00, 0x00, 0x00, 0xFF);

/// Fully transparent black.
pub const TRANSPARENT: Rgba8 = Rgba8::new(0x00, 0x00, 0x00, 0x00);

// ============================================================================
// Color trait
// ============================================================================

/// RGBA channel accessors.
///
/// Anything that can report its straight-alpha channels at 16-bit precision
/// can take part in blending and luminance calculations.
pub trait Color {
    /// Returns the channels widened to 16 bits, straight alpha.
    fn rgba16(&self) -> Rgba16;

    /// Returns `true` if alpha is at its maximum.
    #[inline]
    fn is_opaque(&self) -> bool {
        self.rgba16().a == MAX16
    }

    /// Returns the RGB channels normalized to `[0, 1]`.
    #[inline]
    fn rgb_unit(&self) -> [f64; 3] {
        let c = self.rgba16();
        let m = f64::from(MAX16);
        [f64::from(c.r) / m, f64::from(c.g) / m, f64::from(c.b) / m]
    }
}

impl<T: Color + ?Sized> Color for &T {
    #[inline]
    fn rgba16(&self) -> Rgba16 {
        (**self).rgba16()
    }
}

// ============================================================================
// Rgba8
// ============================================================================

/// 8-bit straight-alpha color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    /// Red channel value.
    pub r: u8,
    /// Green channel value.
    pub g: u8,
    /// Blue channel value.
    pub b: u8,
    /// Alpha channel value.
    pub a: u8,
}

impl Rgba8 {
    /// Create a new color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    /// Same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }
}

impl Color for Rgba8 {
    #[inline]
    fn rgba16(&self) -> Rgba16 {
        Rgba16::new(
            widen(self.r),
            widen(self.g),
            widen(self.b),
            widen(self.a),
        )
    }
}

impl From<[u8; 4]> for Rgba8 {
    #[inline]
    fn from(v: [u8; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Rgba8> for [u8; 4] {
    #[inline]
    fn from(c: Rgba8) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

// ============================================================================
// Rgba16
// ============================================================================

/// 16-bit straight-alpha color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba16 {
    /// Red channel value.
    pub r: u16,
    /// Green channel value.
    pub g: u16,
    /// Blue channel value.
    pub b: u16,
    /// Alpha channel value.
    pub a: u16,
}

impl Rgba16 {
    /// Create a new color.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Create from normalized floats, clamping to `[0, 1]`.
    ///
    /// NaN maps to 0.
    ///
    /// ```
    /// use wcag_core::Rgba16;
    ///
    /// let c = Rgba16::from_unit(1.2, 0.5, -0.1, 1.0);
    /// assert_eq!(c, Rgba16::new(0xFFFF, 0x8000, 0, 0xFFFF));
    /// ```
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(quantize(r), quantize(g), quantize(b), quantize(a))
    }

    /// Create from normalized floats, rejecting NaN and out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannel`] naming the first bad channel.
    pub fn try_from_unit(r: f64, g: f64, b: f64, a: f64) -> Result<Self> {
        for (channel, value) in [("red", r), ("green", g), ("blue", b), ("alpha", a)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::invalid_channel(channel, value));
            }
        }
        Ok(Self::from_unit(r, g, b, a))
    }

    /// Narrow to 8 bits, rounding to nearest.
    #[inline]
    pub fn to_rgba8(self) -> Rgba8 {
        Rgba8::new(
            narrow(self.r),
            narrow(self.g),
            narrow(self.b),
            narrow(self.a),
        )
    }
}

impl Color for Rgba16 {
    #[inline]
    fn rgba16(&self) -> Rgba16 {
        *self
    }
}

impl From<Rgba8> for Rgba16 {
    #[inline]
    fn from(c: Rgba8) -> Self {
        c.rgba16()
    }
}

impl fmt::Display for Rgba16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGBA16({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// ============================================================================
// Conversions
// ============================================================================

#[inline]
const fn widen(v: u8) -> u16 {
    (v as u16) * 257
}

#[inline]
fn narrow(v: u16) -> u8 {
    // (v * 255 + 0x7FFF) / 0xFFFF, at most 255
    ((u32::from(v) * 255 + 0x7FFF) / 0xFFFF) as u8
}

#[inline]
fn quantize(v: f64) -> u16 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * f64::from(MAX16)).round() as u16
}
