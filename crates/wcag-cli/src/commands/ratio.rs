//! Ratio command

use crate::RatioArgs;
use anyhow::Result;
use serde::Serialize;
use tracing::{debug, trace};
use wcag_contrast::{calc_contrast_ratio, relative_luminance, Color};

#[derive(Serialize)]
struct RatioReport {
    foreground: String,
    background: String,
    ratio: f64,
    display: String,
}

pub fn run(args: RatioArgs, verbose: u8) -> Result<()> {
    let fg = super::parse_color(&args.fg)?;
    let bg = super::parse_color(&args.bg)?;
    trace!(%fg, %bg, "parsed colors");

    if !bg.is_opaque() {
        debug!("background {} is translucent, reporting worst case over white/black", bg);
    }

    let ratio = calc_contrast_ratio(&fg, &bg);
    let display = super::format_ratio(ratio, args.decimals);
    debug!(ratio, "contrast ratio");

    if args.json {
        let report = RatioReport {
            foreground: fg.to_string(),
            background: bg.to_string(),
            ratio,
            display,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if verbose > 0 {
        println!("Foreground: {} (L = {:.4})", fg, relative_luminance(&fg));
        println!("Background: {} (L = {:.4})", bg, relative_luminance(&bg));
    }
    println!("{}", display);

    Ok(())
}
