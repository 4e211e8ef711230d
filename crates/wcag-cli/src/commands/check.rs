//! Check command

use crate::CheckArgs;
use anyhow::{bail, Result};
use serde::Serialize;
use tracing::{debug, info};
use wcag_contrast::{calc_contrast_ratio, Conformance, Level, TextSize};

#[derive(Serialize)]
struct CheckReport {
    foreground: String,
    background: String,
    ratio: f64,
    large_text: bool,
    aa: bool,
    aaa: bool,
    required: String,
    pass: bool,
}

pub fn run(args: CheckArgs, verbose: u8) -> Result<()> {
    let fg = super::parse_color(&args.fg)?;
    let bg = super::parse_color(&args.bg)?;
    let size = if args.large { TextSize::Large } else { TextSize::Normal };
    let required = Level::from(args.level);

    let ratio = calc_contrast_ratio(&fg, &bg);
    let conformance = Conformance::evaluate(ratio);
    let pass = conformance.passes(required, size);
    debug!(ratio, ?size, %required, pass, "conformance");

    if args.json {
        let report = CheckReport {
            foreground: fg.to_string(),
            background: bg.to_string(),
            ratio,
            large_text: args.large,
            aa: conformance.passes(Level::AA, size),
            aaa: conformance.passes(Level::AAA, size),
            required: required.to_string(),
            pass,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let text = if args.large { "large text" } else { "normal text" };
        println!("Contrast {} ({})", super::format_ratio(ratio, 2), text);
        for level in Level::ALL {
            let mark = if conformance.passes(level, size) { "pass" } else { "FAIL" };
            println!("  {:<3}  >= {:<4}  {}", level, level.min_ratio(size), mark);
        }
        if verbose > 0 {
            match conformance.best(size) {
                Some(best) => println!("Best level: {}", best),
                None => println!("Best level: none"),
            }
        }
    }

    if !pass {
        bail!(
            "FAIL: contrast {} below {} minimum {}",
            super::format_ratio(ratio, 2),
            required,
            required.min_ratio(size)
        );
    }
    info!("{} {} on {} passes {}", super::format_ratio(ratio, 2), fg, bg, required);

    Ok(())
}
