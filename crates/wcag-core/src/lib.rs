//! # wcag-core
//!
//! Core types for WCAG contrast checking.
//!
//! - [`Rgba8`], [`Rgba16`] - straight-alpha sRGB colors at 8 and 16 bits
//! - [`Color`] - channel accessor trait used by the contrast math
//! - [`parse_color`] - hex, `rgb()`/`rgba()` and named color parsing
//! - [`Error`], [`Result`] - construction and parse errors
//!
//! ## Crate Structure
//!
//! ```text
//! wcag-core (this crate)
//!    ^
//!    |
//!    +-- wcag-contrast (blending, luminance, contrast ratio)
//!           ^
//!           |
//!           +-- wcag-cli (the `wcag` binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod parse;

pub use color::{Color, Rgba16, Rgba8, BLACK, MAX16, TRANSPARENT, WHITE};
pub use error::{Error, Result};
pub use parse::parse_color;
