//! Color string parsing.
//!
//! Accepted notations:
//!
//! | Form | Example |
//! |------|---------|
//! | Hex, optional `#` | `#f00`, `f00c`, `#ff0000`, `#ff0000cc` |
//! | `rgb()` / `rgba()` | `rgb(255, 0, 0)`, `rgba(255, 0, 0, 0.5)`, `rgb(255 0 0 / 50%)` |
//! | Named | `white`, `black`, `transparent`, `red`, `grey`, ... |
//!
//! ```
//! use wcag_core::{parse_color, Rgba8};
//!
//! assert_eq!(parse_color("#F00").unwrap(), Rgba8::new(255, 0, 0, 255));
//! assert_eq!("rgba(0, 0, 255, 0.5)".parse::<Rgba8>().unwrap().a, 128);
//! ```

use crate::color::{Rgba8, BLACK, TRANSPARENT, WHITE};
use crate::error::{Error, Result};
use std::str::FromStr;

/// Parses a color from hex, `rgb()`/`rgba()` or a color name.
///
/// # Errors
///
/// Returns a syntax error ([`Error::InvalidHex`], [`Error::InvalidFunction`],
/// [`Error::UnknownName`]) or [`Error::ChannelOutOfRange`].
pub fn parse_color(s: &str) -> Result<Rgba8> {
    let s = s.trim();
    let lower = s.to_ascii_lowercase();

    if lower.starts_with("rgb") {
        return parse_function(&lower);
    }
    if let Some(c) = named(&lower) {
        return Ok(c);
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    // bare hex, no leading #
    if matches!(s.len(), 3 | 4 | 6 | 8) && s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return parse_hex(s);
    }
    Err(Error::UnknownName(s.to_string()))
}

impl FromStr for Rgba8 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

// ============================================================================
// Hex
// ============================================================================

fn parse_hex(hex: &str) -> Result<Rgba8> {
    let invalid = || Error::InvalidHex(hex.to_string());
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let digit = |i: usize| -> Result<u8> {
        u8::from_str_radix(&hex[i..=i], 16)
            .map(|d| d * 17)
            .map_err(|_| invalid())
    };
    let pair = |i: usize| -> Result<u8> {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid())
    };

    match hex.len() {
        3 => Ok(Rgba8::opaque(digit(0)?, digit(1)?, digit(2)?)),
        4 => Ok(Rgba8::new(digit(0)?, digit(1)?, digit(2)?, digit(3)?)),
        6 => Ok(Rgba8::opaque(pair(0)?, pair(2)?, pair(4)?)),
        8 => Ok(Rgba8::new(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
        _ => Err(invalid()),
    }
}

// ============================================================================
// rgb() / rgba()
// ============================================================================

fn parse_function(s: &str) -> Result<Rgba8> {
    let invalid = || Error::InvalidFunction(s.to_string());

    let inner = s
        .strip_prefix("rgba")
        .or_else(|| s.strip_prefix("rgb"))
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let parts: Vec<&str> = if inner.contains(',') {
        inner.split(',').map(str::trim).collect()
    } else {
        inner
            .split(|c: char| c.is_whitespace() || c == '/')
            .filter(|p| !p.is_empty())
            .collect()
    };

    let (rgb, alpha) = match parts.as_slice() {
        [r, g, b] => ([*r, *g, *b], None),
        [r, g, b, a] => ([*r, *g, *b], Some(*a)),
        _ => return Err(invalid()),
    };

    let r = parse_channel("red", rgb[0])?;
    let g = parse_channel("green", rgb[1])?;
    let b = parse_channel("blue", rgb[2])?;
    let a = match alpha {
        Some(a) => parse_alpha(a)?,
        None => 0xFF,
    };
    Ok(Rgba8::new(r, g, b, a))
}

fn parse_channel(channel: &'static str, s: &str) -> Result<u8> {
    s.parse::<u8>()
        .map_err(|_| Error::channel_out_of_range(channel, s))
}

fn parse_alpha(s: &str) -> Result<u8> {
    let out_of_range = || Error::channel_out_of_range("alpha", s);
    let value = match s.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().map_err(|_| out_of_range())? / 100.0,
        None => s.parse::<f64>().map_err(|_| out_of_range())?,
    };
    if !(0.0..=1.0).contains(&value) {
        return Err(out_of_range());
    }
    Ok((value * 255.0).round() as u8)
}

// ============================================================================
// Names
// ============================================================================

fn named(name: &str) -> Option<Rgba8> {
    let c = match name {
        "white" => WHITE,
        "black" => BLACK,
        "transparent" => TRANSPARENT,
        "red" => Rgba8::opaque(0xFF, 0x00, 0x00),
        "green" => Rgba8::opaque(0x00, 0x80, 0x00),
        "lime" => Rgba8::opaque(0x00, 0xFF, 0x00),
        "blue" => Rgba8::opaque(0x00, 0x00, 0xFF),
        "gray" | "grey" => Rgba8::opaque(0x80, 0x80, 0x80),
        "silver" => Rgba8::opaque(0xC0, 0xC0, 0xC0),
        "yellow" => Rgba8::opaque(0xFF, 0xFF, 0x00),
        "cyan" | "aqua" => Rgba8::opaque(0x00, 0xFF, 0xFF),
        "magenta" | "fuchsia" => Rgba8::opaque(0xFF, 0x00, 0xFF),
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(parse_color("#fff").unwrap(), WHITE);
        assert_eq!(parse_color("#0008").unwrap(), Rgba8::new(0, 0, 0, 0x88));
        assert_eq!(parse_color("#1E293B").unwrap(), Rgba8::opaque(0x1E, 0x29, 0x3B));
        assert_eq!(parse_color("ff000080").unwrap(), Rgba8::new(0xFF, 0, 0, 0x80));
        assert_eq!(parse_color("  #000000  ").unwrap(), BLACK);
    }

    #[test]
    fn test_hex_errors() {
        assert!(matches!(parse_color("#12"), Err(Error::InvalidHex(_))));
        assert!(matches!(parse_color("#12345"), Err(Error::InvalidHex(_))));
        assert!(matches!(parse_color("#ggg"), Err(Error::InvalidHex(_))));
        assert!(matches!(parse_color("#ff00é"), Err(Error::InvalidHex(_))));
    }

    #[test]
    fn test_functions() {
        assert_eq!(parse_color("rgb(255, 0, 0)").unwrap(), Rgba8::opaque(255, 0, 0));
        assert_eq!(parse_color("RGBA(0,0,255,0.5)").unwrap(), Rgba8::new(0, 0, 255, 128));
        assert_eq!(parse_color("rgba(0, 0, 0, 0)").unwrap(), TRANSPARENT);
        assert_eq!(parse_color("rgb(10 20 30 / 50%)").unwrap(), Rgba8::new(10, 20, 30, 128));
        assert_eq!(parse_color("rgb(10 20 30)").unwrap(), Rgba8::opaque(10, 20, 30));
    }

    #[test]
    fn test_function_errors() {
        assert!(matches!(parse_color("rgb(1, 2)"), Err(Error::InvalidFunction(_))));
        assert!(matches!(parse_color("rgb 1, 2, 3"), Err(Error::InvalidFunction(_))));
        assert!(matches!(
            parse_color("rgb(256, 0, 0)"),
            Err(Error::ChannelOutOfRange { channel: "red", .. })
        ));
        assert!(matches!(
            parse_color("rgba(0, 0, 0, 1.5)"),
            Err(Error::ChannelOutOfRange { channel: "alpha", .. })
        ));
        assert!(matches!(
            parse_color("rgba(0, 0, 0, 120%)"),
            Err(Error::ChannelOutOfRange { channel: "alpha", .. })
        ));
    }

    #[test]
    fn test_names() {
        assert_eq!(parse_color("White").unwrap(), WHITE);
        assert_eq!(parse_color("grey").unwrap(), parse_color("gray").unwrap());
        assert_eq!(parse_color("transparent").unwrap(), TRANSPARENT);
        assert!(matches!(parse_color("mauve"), Err(Error::UnknownName(_))));
        assert!(matches!(parse_color(""), Err(Error::UnknownName(_))));
    }

    #[test]
    fn test_from_str() {
        let c: Rgba8 = "#00ff00".parse().unwrap();
        assert_eq!(c, Rgba8::opaque(0, 255, 0));
    }
}
