//! sRGB decoding as defined by WCAG 2.0.
//!
//! WCAG 2.0 quotes the linear-segment threshold as `0.03928`, taken from an
//! early sRGB draft. IEC 61966-2-1 uses `0.04045`. The two differ only for
//! 8-bit codes 10 and 11, and by less than 1e-4 in linear light; we keep the
//! WCAG value so results match published checkers.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! <https://www.w3.org/TR/2008/REC-WCAG20-20081211/#relativeluminancedef>

/// Linear-segment threshold on the encoded value.
pub const THRESHOLD: f64 = 0.03928;

/// Decodes an sRGB encoded value to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.03928:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use wcag_contrast::srgb::decode;
///
/// let linear = decode(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn decode(v: f64) -> f64 {
    if v <= THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies [`decode`] to an RGB triplet.
#[inline]
pub fn decode_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}
