//! Alpha compositing onto an opaque background.
//!
//! Porter-Duff "over" with the background taken as opaque:
//!
//! ```text
//! out = fg * fg.a + bg * (1 - fg.a)
//! out.a = 1
//! ```
//!
//! Background alpha is ignored. Work is done on 16-bit channels in `u32`,
//! with a single rounded division per channel, so blending 8-bit inputs
//! never compounds rounding.
//!
//! # Example
//!
//! ```rust
//! use wcag_contrast::blend::alpha_blend;
//! use wcag_core::{Rgba8, BLACK};
//!
//! let fg = Rgba8::new(255, 255, 255, 128); // half-transparent white
//! let out = alpha_blend(&fg, &BLACK).to_rgba8();
//! assert_eq!(out, Rgba8::opaque(128, 128, 128));
//! ```

use wcag_core::{Color, Rgba16, MAX16};

/// Composites `fg` over `bg`, returning an opaque color.
#[inline]
pub fn alpha_blend(fg: &impl Color, bg: &impl Color) -> Rgba16 {
    let f = fg.rgba16();
    let b = bg.rgba16();
    let a = u32::from(f.a);

    Rgba16::new(
        over(f.r, b.r, a),
        over(f.g, b.g, a),
        over(f.b, b.b, a),
        MAX16,
    )
}

/// One channel of `fg * a + bg * (1 - a)`, rounded to nearest.
#[inline]
fn over(fg: u16, bg: u16, a: u32) -> u16 {
    let max = u32::from(MAX16);
    // max intermediate is 0xFFFF * 0xFFFF + 0x7FFF, fits in u32
    let sum = u32::from(fg) * a + u32::from(bg) * (max - a);
    ((sum + max / 2) / max) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use wcag_core::{Rgba8, BLACK, WHITE};

    #[test]
    fn test_transparent_fg_gives_bg() {
        let bg = Rgba8::opaque(12, 200, 77);
        for fg in [Rgba8::new(255, 0, 0, 0), Rgba8::new(1, 2, 3, 0), Rgba8::new(0, 0, 0, 0)] {
            assert_eq!(alpha_blend(&fg, &bg), bg.rgba16());
        }
    }

    #[test]
    fn test_opaque_fg_gives_fg() {
        let fg = Rgba8::opaque(12, 200, 77);
        assert_eq!(alpha_blend(&fg, &WHITE), fg.rgba16());
        assert_eq!(alpha_blend(&fg, &BLACK), fg.rgba16());
    }

    #[test]
    fn test_output_opaque() {
        let out = alpha_blend(&Rgba8::new(9, 9, 9, 9), &Rgba8::new(0, 0, 0, 0));
        assert_eq!(out.a, MAX16);
    }

    #[test]
    fn test_bg_alpha_ignored() {
        let fg = Rgba8::new(255, 0, 0, 128);
        let a = alpha_blend(&fg, &Rgba8::new(0, 0, 255, 255));
        let b = alpha_blend(&fg, &Rgba8::new(0, 0, 255, 3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_half_red_over_blue() {
        let out = alpha_blend(&Rgba8::new(255, 0, 0, 128), &Rgba8::opaque(0, 0, 255)).to_rgba8();
        assert_eq!(out, Rgba8::opaque(128, 0, 127));
    }

    #[test]
    fn test_channels_stay_in_range() {
        let fg = Rgba16::new(MAX16, MAX16, MAX16, MAX16 - 1);
        let out = alpha_blend(&fg, &WHITE);
        assert_eq!(out, Rgba16::new(MAX16, MAX16, MAX16, MAX16));
    }
}
