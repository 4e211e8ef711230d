//! WCAG 2.0 contrast ratio.
//!
//! ```text
//! ratio = (L_lighter + 0.05) / (L_darker + 0.05)      in [1, 21]
//! ```
//!
//! # Translucent colors
//!
//! A translucent foreground is composited over the background before its
//! luminance is taken.
//!
//! A translucent background has no single luminance: it depends on whatever
//! it is drawn on. [`calc_contrast_ratio`] places it on a white and on a
//! black canvas, which bound every possible result, and reports the worst
//! case:
//!
//! - foreground lighter than the background-on-white: ratio against that
//! - foreground darker than the background-on-black: ratio against that
//! - otherwise some canvas makes the two match, and the ratio is 1
//!
//! For an opaque background both canvases give the background itself, so
//! this reduces to the plain definition. Use [`contrast_ratio_on`] when the
//! canvas is known.
//!
//! # Reference
//!
//! <https://www.w3.org/TR/2008/REC-WCAG20-20081211/#contrast-ratiodef>

use crate::blend::alpha_blend;
use crate::luminance::relative_luminance;
use tracing::{debug, trace};
use wcag_core::{Color, BLACK, WHITE};

/// Smallest possible ratio (identical colors).
pub const MIN_RATIO: f64 = 1.0;

/// Largest possible ratio (black on white).
pub const MAX_RATIO: f64 = 21.0;

/// Flare term added to both luminances.
const FLARE: f64 = 0.05;

/// Contrast ratio of `fg` drawn on `bg`.
///
/// See the [module docs](self) for how translucent backgrounds are handled.
///
/// # Example
///
/// ```
/// use wcag_contrast::calc_contrast_ratio;
/// use wcag_core::{Rgba8, BLACK, WHITE};
///
/// assert_eq!(calc_contrast_ratio(&WHITE, &BLACK), 21.0);
///
/// let red = Rgba8::opaque(255, 0, 0);
/// let blue = Rgba8::opaque(0, 0, 255);
/// let ratio = calc_contrast_ratio(&red, &blue);
/// assert!((ratio - 2.149).abs() < 1e-3);
/// ```
pub fn calc_contrast_ratio(fg: &impl Color, bg: &impl Color) -> f64 {
    let bg_on_white = alpha_blend(bg, &WHITE);
    let bg_on_black = alpha_blend(bg, &BLACK);

    let l_white = relative_luminance(&bg_on_white);
    let l_black = relative_luminance(&bg_on_black);
    let l_fg = relative_luminance(fg);
    trace!(l_fg, l_white, l_black, "contrast luminances");

    if l_white < l_fg {
        contrast_ratio_opaque(fg, &bg_on_white)
    } else if l_black > l_fg {
        contrast_ratio_opaque(fg, &bg_on_black)
    } else {
        debug!("foreground luminance inside background range, ratio is 1");
        MIN_RATIO
    }
}

/// Contrast ratio of `fg` on `bg`, with `bg` taken as opaque.
///
/// `fg` is composited over `bg` first; the alpha of `bg` is ignored.
pub fn contrast_ratio_opaque(fg: &impl Color, bg: &impl Color) -> f64 {
    let l_bg = relative_luminance(bg);
    let l_fg = relative_luminance(&alpha_blend(fg, bg));
    ratio(l_fg, l_bg)
}

/// Contrast ratio of `fg` on `bg`, where `bg` is drawn on an opaque `canvas`.
///
/// ```
/// use wcag_contrast::contrast_ratio_on;
/// use wcag_core::{Rgba8, BLACK, WHITE};
///
/// // a fully transparent background shows the canvas
/// let clear = Rgba8::new(0, 0, 0, 0);
/// assert_eq!(contrast_ratio_on(&BLACK, &clear, &WHITE), 21.0);
/// ```
pub fn contrast_ratio_on(fg: &impl Color, bg: &impl Color, canvas: &impl Color) -> f64 {
    contrast_ratio_opaque(fg, &alpha_blend(bg, canvas))
}

/// Contrast ratio of two relative luminances, order independent.
#[inline]
pub fn ratio(l1: f64, l2: f64) -> f64 {
    (l1.max(l2) + FLARE) / (l1.min(l2) + FLARE)
}

/// Truncates a ratio to `decimals` places for display.
///
/// WCAG thresholds are not met by rounding: 4.499 must read as 4.49, not 4.5.
///
/// ```
/// use wcag_contrast::floor_ratio;
///
/// assert_eq!(floor_ratio(4.4999, 2), 4.49);
/// assert_eq!(floor_ratio(21.0, 2), 21.0);
/// ```
pub fn floor_ratio(ratio: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals.min(15) as i32);
    (ratio * scale).floor() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use wcag_core::Rgba8;

    #[test]
    fn test_black_white() {
        assert_eq!(calc_contrast_ratio(&WHITE, &BLACK), MAX_RATIO);
        assert_eq!(calc_contrast_ratio(&BLACK, &WHITE), MAX_RATIO);
    }

    #[test]
    fn test_red_blue() {
        let red = Rgba8::opaque(255, 0, 0);
        let blue = Rgba8::opaque(0, 0, 255);
        assert_eq!(floor_ratio(calc_contrast_ratio(&red, &blue), 2), 2.14);
        assert_eq!(floor_ratio(calc_contrast_ratio(&blue, &red), 2), 2.14);
    }

    #[test]
    fn test_same_color() {
        for c in [WHITE, BLACK, Rgba8::opaque(0x76, 0x76, 0x76), Rgba8::opaque(1, 2, 3)] {
            assert_eq!(calc_contrast_ratio(&c, &c), MIN_RATIO);
        }
    }

    #[test]
    fn test_gray_on_white() {
        let gray = Rgba8::opaque(0x76, 0x76, 0x76);
        assert_abs_diff_eq!(calc_contrast_ratio(&gray, &WHITE), 4.54, epsilon = 0.01);
    }

    #[test]
    fn test_transparent_fg() {
        let fg = Rgba8::new(255, 255, 255, 0);
        assert_eq!(calc_contrast_ratio(&fg, &BLACK), MIN_RATIO);
        assert_eq!(contrast_ratio_opaque(&fg, &Rgba8::opaque(40, 90, 200)), MIN_RATIO);
    }

    #[test]
    fn test_translucent_fg() {
        // half white over black lands on #808080
        let fg = WHITE.with_alpha(128);
        let gray = Rgba8::opaque(128, 128, 128);
        assert_abs_diff_eq!(
            calc_contrast_ratio(&fg, &BLACK),
            calc_contrast_ratio(&gray, &BLACK),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_translucent_bg_worst_case() {
        // half black: #808080 on white canvas, #000000 on black canvas
        let bg = BLACK.with_alpha(128);
        let on_white = contrast_ratio_on(&WHITE, &bg, &WHITE);
        let on_black = contrast_ratio_on(&WHITE, &bg, &BLACK);
        assert_eq!(on_black, MAX_RATIO);
        assert_eq!(calc_contrast_ratio(&WHITE, &bg), on_white);
        assert!(on_white < on_black);

        // on a black canvas the background is black too
        assert!(contrast_ratio_on(&BLACK, &bg, &WHITE) > MIN_RATIO);
        assert_eq!(calc_contrast_ratio(&BLACK, &bg), MIN_RATIO);
    }

    #[test]
    fn test_fg_inside_bg_range() {
        // light gray can match a half-transparent white on some canvas
        let bg = WHITE.with_alpha(128);
        let fg = Rgba8::opaque(200, 200, 200);
        assert_eq!(calc_contrast_ratio(&fg, &bg), MIN_RATIO);
    }

    #[test]
    fn test_fully_transparent_bg() {
        // canvas could be anything; any opaque fg matches one of them
        let bg = Rgba8::new(0, 0, 0, 0);
        assert_eq!(calc_contrast_ratio(&Rgba8::opaque(10, 200, 30), &bg), MIN_RATIO);
    }

    #[test]
    fn test_ratio_symmetric() {
        assert_eq!(ratio(0.2, 0.7), ratio(0.7, 0.2));
        assert_eq!(ratio(0.3, 0.3), MIN_RATIO);
    }

    #[test]
    fn test_floor_ratio() {
        assert_eq!(floor_ratio(2.148936, 2), 2.14);
        assert_eq!(floor_ratio(7.0, 1), 7.0);
        assert_eq!(floor_ratio(3.999, 0), 3.0);
    }
}
