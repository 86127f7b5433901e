//! Deterministic generator for symmetric pixel-art profile pictures
//!
//! A seed (text, a number, or the clock) drives a private generator that fills
//! a half-width matrix from a weighted two-color palette. Mirroring each row
//! yields the final symmetric pattern, so the same text always gives the same
//! picture.

#![forbid(unsafe_code)]

/// Batch construction and color selection policy
pub mod batch;
/// Color value type, parsing and perceptual distance
pub mod color;
/// Rendering, persistence, configuration and command-line interface
pub mod io;
/// Weighted palettes and mirrored color matrices
pub mod pattern;
/// Seed normalization and derivation
pub mod seed;

pub use io::error::{GeneratorError, Result};
