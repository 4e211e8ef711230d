//! Integration tests for wcag-rs crates.
//!
//! End-to-end checks from color strings through blending and luminance to
//! the final ratio and conformance level.

pub mod golden;
