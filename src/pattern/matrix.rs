//! Seeded color matrix that produces one mirrored pattern
//!
//! A [`ColorMatrix`] is built once per image. Construction validates the
//! size, seeding gives it a private generator, and [`ColorMatrix::generate`]
//! consumes it to yield the final [`Pattern`].

use crate::color::Color;
use crate::io::configuration::MAX_SIZE;
use crate::io::error::{Result, invalid_configuration};
use crate::pattern::palette::WeightedPalette;
use crate::seed::Seed;
use ndarray::{Array2, ArrayView1};
use rand::{Rng, rngs::StdRng};

/// Seeded random selector for reproducible weighted draws
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a selector whose stream derives only from `seed`
    pub fn new(seed: &Seed) -> Self {
        Self { rng: seed.rng() }
    }

    /// Weighted random selection
    ///
    /// Returns an index into `weights` using the cumulative distribution.
    /// Zero-weight entries are never returned while any weight is positive.
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            if rand_val < weight {
                return i;
            }
            rand_val -= weight;
        }
        // Float drift can leave a remainder past the last bucket
        weights.iter().rposition(|&w| w > 0.0).unwrap_or(0)
    }
}

/// Generated grid of colors, symmetric about its vertical center line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    cells: Array2<Color>,
}

impl Pattern {
    /// Mirror a half-width matrix into a full symmetric pattern
    ///
    /// Each output row is the input row followed by its own reverse.
    pub fn from_half(half: &Array2<Color>) -> Self {
        let (rows, half_cols) = half.dim();
        let width = half_cols * 2;
        let cells = Array2::from_shape_fn((rows, width), |(row, col)| {
            let source = if col < half_cols { col } else { width - 1 - col };
            half.get([row, source]).copied().unwrap_or_default()
        });
        Self { cells }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Color at a cell, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        self.cells.get([row, col]).copied()
    }

    /// One row of the pattern
    pub fn row(&self, row: usize) -> Option<ArrayView1<'_, Color>> {
        (row < self.rows()).then(|| self.cells.row(row))
    }

    /// Underlying array view
    pub const fn cells(&self) -> &Array2<Color> {
        &self.cells
    }

    /// Whether every row reads the same left to right and right to left
    pub fn is_symmetric(&self) -> bool {
        let cols = self.cols();
        self.cells.rows().into_iter().all(|row| {
            (0..cols / 2).all(|col| row.get(col) == row.get(cols - 1 - col))
        })
    }
}

/// Pattern request holding size, palette and seed
///
/// Owns its own generator, so independent matrices never interfere.
pub struct ColorMatrix {
    size: usize,
    palette: WeightedPalette,
    seed: Seed,
    selector: RandomSelector,
}

impl ColorMatrix {
    /// Validate the request and seed its private generator
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `size` is zero or exceeds [`MAX_SIZE`]
    pub fn new(size: usize, palette: WeightedPalette, seed: Seed) -> Result<Self> {
        if size == 0 {
            return Err(invalid_configuration(
                "size",
                &size,
                &"size must be greater than 0",
            ));
        }
        if size > MAX_SIZE {
            return Err(invalid_configuration(
                "size",
                &size,
                &format!("size must be at most {MAX_SIZE}"),
            ));
        }

        let selector = RandomSelector::new(&seed);
        Ok(Self {
            size,
            palette,
            seed,
            selector,
        })
    }

    /// Half-width of the pattern
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Seed the generator was built from
    pub const fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Palette cells are drawn from
    pub const fn palette(&self) -> &WeightedPalette {
        &self.palette
    }

    /// Draw the `2·size × size` half matrix in row-major order
    fn draw_half(&mut self) -> Array2<Color> {
        let rows = self.size * 2;
        let cols = self.size;
        let colors = self.palette.colors();
        let weights = self.palette.weights();

        let mut half = Array2::from_elem((rows, cols), Color::default());
        for cell in &mut half {
            let index = self.selector.weighted_choice(weights);
            *cell = colors.get(index).copied().unwrap_or_default();
        }
        half
    }

    /// Produce the full `2·size × 2·size` symmetric pattern
    pub fn generate(mut self) -> Pattern {
        let half = self.draw_half();
        Pattern::from_half(&half)
    }
}
