//! CLI command implementations

pub mod blend;
pub mod check;
pub mod ratio;

use anyhow::{Context, Result};
use wcag_contrast::{floor_ratio, Rgba8};

/// Parse a color argument
pub fn parse_color(s: &str) -> Result<Rgba8> {
    wcag_core::parse_color(s).with_context(|| format!("Invalid color: {}", s))
}

/// Format a ratio as `N.NN:1`, truncated to `decimals`
pub fn format_ratio(ratio: f64, decimals: u32) -> String {
    let shown = floor_ratio(ratio, decimals);
    format!("{:.*}:1", decimals as usize, shown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ratio_truncates() {
        assert_eq!(format_ratio(4.4999, 2), "4.49:1");
        assert_eq!(format_ratio(21.0, 2), "21.00:1");
        assert_eq!(format_ratio(2.148936, 1), "2.1:1");
        assert_eq!(format_ratio(3.7, 0), "3:1");
    }

    #[test]
    fn test_parse_color_context() {
        let err = parse_color("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
        assert_eq!(parse_color("#fff").unwrap(), wcag_contrast::WHITE);
    }
}
