//! Weighted palette of candidate cell colors

use crate::color::Color;
use crate::io::error::{Result, invalid_configuration};

/// Ordered colors paired one-to-one with relative sampling weights
///
/// Weights need not sum to one. Duplicate colors are allowed and simply add
/// their weights together during sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPalette {
    colors: Vec<Color>,
    weights: Vec<f64>,
}

impl WeightedPalette {
    /// Validate and build a palette
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if:
    /// - `colors` is empty or differs in length from `weights`
    /// - Any weight is negative or not finite
    /// - The weights sum to zero
    pub fn new(colors: Vec<Color>, weights: Vec<f64>) -> Result<Self> {
        if colors.len() != weights.len() {
            return Err(invalid_configuration(
                "palette",
                &format!("{} colors, {} weights", colors.len(), weights.len()),
                &"color and weight lists must have the same length",
            ));
        }
        if colors.is_empty() {
            return Err(invalid_configuration(
                "palette",
                &"[]",
                &"at least one color is required",
            ));
        }
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(invalid_configuration(
                "weights",
                bad,
                &"weights must be finite and non-negative",
            ));
        }

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(invalid_configuration(
                "weights",
                &total,
                &"the sum of weights must be greater than 0",
            ));
        }

        Ok(Self { colors, weights })
    }

    /// Background/foreground palette with the foreground drawn at `color_weight`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `color_weight` lies outside `[0, 1]`
    pub fn two_tone(background: Color, foreground: Color, color_weight: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&color_weight) {
            return Err(invalid_configuration(
                "color_weight",
                &color_weight,
                &"must be between 0 and 1",
            ));
        }
        Self::new(
            vec![background, foreground],
            vec![1.0 - color_weight, color_weight],
        )
    }

    /// Candidate colors in palette order
    pub const fn colors(&self) -> &[Color] {
        self.colors.as_slice()
    }

    /// Relative weights in palette order
    pub const fn weights(&self) -> &[f64] {
        self.weights.as_slice()
    }

    /// Number of entries
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a validated palette
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
