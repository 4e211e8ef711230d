//! # wcag-contrast
//!
//! WCAG 2.0 contrast ratio between a foreground and a background color.
//!
//! The pipeline is three pure steps:
//!
//! ```text
//!   fg, bg
//!     |
//!     +-- blend      (fg over bg, bg over white/black canvases)
//!     |
//!     +-- luminance  (sRGB decode, Rec.709 weights)
//!     |
//!     +-- ratio      ((L1 + 0.05) / (L2 + 0.05))
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use wcag_contrast::{calc_contrast_ratio, floor_ratio, Conformance, TextSize};
//! use wcag_core::parse_color;
//!
//! let fg = parse_color("#767676").unwrap();
//! let bg = parse_color("white").unwrap();
//!
//! let ratio = calc_contrast_ratio(&fg, &bg);
//! assert_eq!(floor_ratio(ratio, 2), 4.54);
//! assert!(Conformance::evaluate(ratio).best(TextSize::Normal).is_some());
//! ```
//!
//! # Modules
//!
//! - [`blend`] - over compositing at 16-bit precision
//! - [`srgb`] - WCAG sRGB decode
//! - [`luminance`] - relative luminance
//! - [`contrast`] - contrast ratio and the translucent-background policy
//! - [`level`] - AA / AAA thresholds
//!
//! All functions are pure and the color types are `Copy`, so everything is
//! safe to call from any thread.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod blend;
pub mod contrast;
pub mod level;
pub mod luminance;
pub mod srgb;

pub use blend::alpha_blend;
pub use contrast::{
    calc_contrast_ratio, contrast_ratio_on, contrast_ratio_opaque, floor_ratio, ratio, MAX_RATIO,
    MIN_RATIO,
};
pub use level::{Conformance, Level, TextSize};
pub use luminance::relative_luminance;

// Re-export core types
pub use wcag_core::{parse_color, Color, Error, Result, Rgba16, Rgba8, BLACK, TRANSPARENT, WHITE};
