//! wcag - WCAG 2.0 contrast checker
//!
//! Computes contrast ratios and AA/AAA conformance for color pairs.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "wcag")]
#[command(author, version, about = "WCAG 2.0 contrast checker")]
#[command(long_about = "
Computes the WCAG 2.0 contrast ratio between a foreground and a background.

Colors may be hex (#f00, #ff000080), rgb()/rgba() or a name (white, black).
A translucent foreground is composited over the background. A translucent
background is checked on both a white and a black canvas and the worst case
is reported.

Examples:
  wcag ratio '#767676' white            # 4.54:1
  wcag ratio 'rgba(0,0,0,0.6)' white    # translucent text
  wcag check '#777' '#fff' --level aa   # exits 1 on failure
  wcag check '#777' '#fff' --large --json
  wcag blend '#ff000080' blue           # composited color
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the contrast ratio of two colors
    #[command(visible_alias = "r")]
    Ratio(RatioArgs),

    /// Check AA / AAA conformance
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    /// Composite foreground over background
    #[command(visible_alias = "b")]
    Blend(BlendArgs),
}

#[derive(Args)]
struct RatioArgs {
    /// Foreground (text) color
    fg: String,

    /// Background color
    bg: String,

    /// Decimal places shown (truncated, never rounded up)
    #[arg(short, long, default_value = "2")]
    decimals: u32,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CheckArgs {
    /// Foreground (text) color
    fg: String,

    /// Background color
    bg: String,

    /// Large text (18pt+, or 14pt+ bold)
    #[arg(short, long)]
    large: bool,

    /// Level that must pass
    #[arg(long, value_enum, default_value = "aa")]
    level: LevelArg,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct BlendArgs {
    /// Foreground color
    fg: String,

    /// Background color (alpha ignored)
    bg: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    Aa,
    Aaa,
}

impl From<LevelArg> for wcag_contrast::Level {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Aa => Self::AA,
            LevelArg::Aaa => Self::AAA,
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Ratio(args) => commands::ratio::run(args, cli.verbose),
        Commands::Check(args) => commands::check::run(args, cli.verbose),
        Commands::Blend(args) => commands::blend::run(args, cli.verbose),
    }
}
