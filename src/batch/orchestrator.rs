//! Batch construction from a single root seed

use crate::batch::selection::{ColorPair, select_colors};
use crate::io::configuration::{DEFAULT_COLOR_WEIGHT, DEFAULT_COUNT, DEFAULT_SIZE, MAX_COUNT};
use crate::io::error::{Result, invalid_configuration};
use crate::pattern::{ColorMatrix, Pattern, WeightedPalette};
use crate::seed::{Seed, SeedChain, derive_color_seed};

/// Parameters shared by every item of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRequest {
    /// Number of patterns to build
    pub count: usize,
    /// Half-width of each pattern
    pub size: usize,
    /// Sampling weight of the foreground color in `[0, 1]`
    pub color_weight: f64,
    /// Background color input, random when `None`
    pub background: Option<String>,
    /// Foreground color input, random when `None`
    pub foreground: Option<String>,
}

impl Default for BatchRequest {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            size: DEFAULT_SIZE,
            color_weight: DEFAULT_COLOR_WEIGHT,
            background: None,
            foreground: None,
        }
    }
}

/// One pattern request within a batch
pub struct BatchItem {
    /// Seed of the background color and of the cell draws
    pub seed: Seed,
    /// Seed of the foreground color
    pub color_seed: Seed,
    /// Colors chosen for this item
    pub colors: ColorPair,
    /// Matrix ready to generate
    pub matrix: ColorMatrix,
}

/// Ordered pattern requests derived from one root seed
pub struct Batch {
    root_seed: Seed,
    items: Vec<BatchItem>,
}

impl Batch {
    /// Seed the batch was rooted at
    pub const fn root_seed(&self) -> &Seed {
        &self.root_seed
    }

    /// Display name used for output files
    pub fn name(&self) -> String {
        self.root_seed.to_string()
    }

    /// Pattern requests in order
    pub const fn items(&self) -> &[BatchItem] {
        self.items.as_slice()
    }

    /// Number of requests
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the batch holds no requests
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Generate every pattern in order
    pub fn generate(self) -> Vec<Pattern> {
        self.generate_with(|_| {})
    }

    /// Generate every pattern, reporting each finished index to `on_item`
    pub fn generate_with(self, mut on_item: impl FnMut(usize)) -> Vec<Pattern> {
        self.items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let pattern = item.matrix.generate();
                on_item(index);
                pattern
            })
            .collect()
    }
}

/// Build the batch of pattern requests for `root_seed`
///
/// Item seeds follow [`SeedChain`]; each item's foreground seed is the
/// reversal of its own seed.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if `count` is zero or above [`MAX_COUNT`],
/// `size` is out of range, or `color_weight` lies outside `[0, 1]`
pub fn build_batch(root_seed: Seed, request: &BatchRequest) -> Result<Batch> {
    if request.count == 0 {
        return Err(invalid_configuration(
            "count",
            &request.count,
            &"at least one image must be requested",
        ));
    }
    if request.count > MAX_COUNT {
        return Err(invalid_configuration(
            "count",
            &request.count,
            &format!("at most {MAX_COUNT} images can be requested"),
        ));
    }

    let items = SeedChain::new(root_seed.clone())
        .take(request.count)
        .map(|seed| build_item(seed, request))
        .collect::<Result<Vec<_>>>()?;

    Ok(Batch { root_seed, items })
}

fn build_item(seed: Seed, request: &BatchRequest) -> Result<BatchItem> {
    let color_seed = derive_color_seed(&seed);
    let colors = select_colors(
        request.background.as_deref(),
        request.foreground.as_deref(),
        &seed,
        &color_seed,
    );
    let palette =
        WeightedPalette::two_tone(colors.background, colors.foreground, request.color_weight)?;
    let matrix = ColorMatrix::new(request.size, palette, seed.clone())?;

    Ok(BatchItem {
        seed,
        color_seed,
        colors,
        matrix,
    })
}
