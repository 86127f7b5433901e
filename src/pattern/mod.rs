//! Pattern engine: weighted palettes and mirrored color matrices

/// Seeded matrix generation and mirroring
pub mod matrix;
/// Validated color/weight pairs
pub mod palette;

pub use matrix::{ColorMatrix, Pattern};
pub use palette::WeightedPalette;
