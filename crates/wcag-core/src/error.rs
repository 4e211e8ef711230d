//! Error types for color construction and parsing.
//!
//! The contrast math itself cannot fail: every well-formed color produces a
//! finite ratio. Errors only arise at the edges, when a color is built from
//! unchecked floats or parsed from text.
//!
//! # Usage
//!
//! ```rust
//! use wcag_core::{Error, Rgba16};
//!
//! let err = Rgba16::try_from_unit(1.5, 0.0, 0.0, 1.0).unwrap_err();
//! assert!(matches!(err, Error::InvalidChannel { channel: "red", .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building or parsing colors.
///
/// # Categories
///
/// - **Value errors**: [`InvalidChannel`](Error::InvalidChannel),
///   [`ChannelOutOfRange`](Error::ChannelOutOfRange)
/// - **Syntax errors**: [`InvalidHex`](Error::InvalidHex),
///   [`InvalidFunction`](Error::InvalidFunction), [`UnknownName`](Error::UnknownName)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A normalized channel is NaN or outside `[0, 1]`.
    #[error("invalid {channel} channel: {value} is not in [0, 1]")]
    InvalidChannel {
        /// Channel name (`red`, `green`, `blue`, `alpha`)
        channel: &'static str,
        /// Offending value
        value: f64,
    },

    /// A parsed channel does not fit its range (0-255, or 0-1 for alpha).
    #[error("{channel} channel out of range: {value}")]
    ChannelOutOfRange {
        /// Channel name (`red`, `green`, `blue`, `alpha`)
        channel: &'static str,
        /// Channel text as written
        value: String,
    },

    /// Malformed hex notation.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// Malformed `rgb(...)` / `rgba(...)` notation.
    #[error("invalid color function: {0:?}")]
    InvalidFunction(String),

    /// Not a hex string, not a color function, not a known name.
    #[error("unknown color name: {0:?}")]
    UnknownName(String),
}

impl Error {
    /// Creates an [`Error::InvalidChannel`] error.
    #[inline]
    pub fn invalid_channel(channel: &'static str, value: f64) -> Self {
        Self::InvalidChannel { channel, value }
    }

    /// Creates an [`Error::ChannelOutOfRange`] error.
    #[inline]
    pub fn channel_out_of_range(channel: &'static str, value: impl Into<String>) -> Self {
        Self::ChannelOutOfRange {
            channel,
            value: value.into(),
        }
    }

    /// Returns `true` if the input text could not be understood at all.
    #[inline]
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidHex(_) | Self::InvalidFunction(_) | Self::UnknownName(_)
        )
    }
}
