//! Perceptual color distance and the similarity heuristic
//!
//! Uses the "redmean" weighting from Thiadmer Riemersma's low-cost
//! approximation, which scales the red and blue terms by the average red
//! level of the two colors.

use crate::color::rgb::Color;

/// Distance below which two colors count as too similar
///
/// Calibrated at roughly 0.4 of the largest possible distance (black to
/// white, about 765). Fixed, not derived at runtime.
pub const COLOR_THRESHOLD: f64 = 306.0;

/// Redmean perceptual distance between two colors
///
/// Symmetric in its arguments and zero for identical colors.
pub fn distance(a: Color, b: Color) -> f64 {
    let r_mean = (f64::from(a.r) + f64::from(b.r)) / 2.0;
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);

    let red_weight = 2.0 + r_mean / 256.0;
    let blue_weight = 2.0 + (255.0 - r_mean) / 256.0;

    (red_weight * dr * dr + 4.0 * dg * dg + blue_weight * db * db).sqrt()
}

/// Whether two colors are too close to tell apart in a pattern
pub fn too_similar(a: Color, b: Color) -> bool {
    distance(a, b) < COLOR_THRESHOLD
}
