//! WCAG relative luminance.
//!
//! `L = 0.2126 R + 0.7152 G + 0.0722 B` over sRGB-decoded channels
//! (Rec.709 / sRGB primaries). Alpha is ignored.

use crate::srgb;
use wcag_core::Color;

/// Rec.709 luminance coefficient for red channel.
pub const LUMA_R: f64 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const LUMA_G: f64 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const LUMA_B: f64 = 0.0722;

/// Relative luminance of a color, in `[0, 1]`.
///
/// # Example
///
/// ```
/// use wcag_contrast::relative_luminance;
/// use wcag_core::{Rgba8, WHITE};
///
/// assert!((relative_luminance(&WHITE) - 1.0).abs() < 1e-12);
/// let red = Rgba8::opaque(255, 0, 0);
/// assert!((relative_luminance(&red) - 0.2126).abs() < 1e-12);
/// ```
pub fn relative_luminance(c: &impl Color) -> f64 {
    let [r, g, b] = srgb::decode_rgb(c.rgb_unit());
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use wcag_core::{Rgba8, BLACK, WHITE};

    #[test]
    fn test_extremes() {
        assert_eq!(relative_luminance(&BLACK), 0.0);
        assert_abs_diff_eq!(relative_luminance(&WHITE), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert_abs_diff_eq!(LUMA_R + LUMA_G + LUMA_B, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_primaries() {
        assert_abs_diff_eq!(relative_luminance(&Rgba8::opaque(255, 0, 0)), LUMA_R, epsilon = 1e-12);
        assert_abs_diff_eq!(relative_luminance(&Rgba8::opaque(0, 255, 0)), LUMA_G, epsilon = 1e-12);
        assert_abs_diff_eq!(relative_luminance(&Rgba8::opaque(0, 0, 255)), LUMA_B, epsilon = 1e-12);
    }

    #[test]
    fn test_alpha_ignored() {
        let c = Rgba8::opaque(118, 118, 118);
        assert_eq!(relative_luminance(&c), relative_luminance(&c.with_alpha(0)));
    }

    #[test]
    fn test_gray_767676() {
        // #767676 is the darkest gray passing AA on white
        assert_abs_diff_eq!(relative_luminance(&Rgba8::opaque(0x76, 0x76, 0x76)), 0.1812, epsilon = 1e-4);
    }
}
