//! Blend command

use crate::BlendArgs;
use anyhow::Result;
use tracing::debug;
use wcag_contrast::alpha_blend;

pub fn run(args: BlendArgs, verbose: u8) -> Result<()> {
    let fg = super::parse_color(&args.fg)?;
    let bg = super::parse_color(&args.bg)?;

    let out = alpha_blend(&fg, &bg);
    debug!(%fg, %bg, %out, "blended");

    if verbose > 0 {
        println!("{} over {}", fg, bg);
    }
    println!("{}", out.to_rgba8());

    Ok(())
}
