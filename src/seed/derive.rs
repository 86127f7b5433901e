//! Related-seed derivation for secondary colors and batch items

use crate::seed::normalize::Seed;

/// Literal appended when reversing a seed gives back the same text
pub const PALINDROME_SUFFIX: &str = "1";

/// Seed for the secondary color of a pattern
///
/// Reverses the decimal digits or characters of `seed`. Palindromes (every
/// single-character seed included) get [`PALINDROME_SUFFIX`] appended so the
/// two colors never share a generator stream.
pub fn derive_color_seed(seed: &Seed) -> Seed {
    let original = seed.to_string();
    let mut reversed: String = original.chars().rev().collect();
    if reversed == original {
        reversed.push_str(PALINDROME_SUFFIX);
    }
    Seed::from_text(&reversed)
}

/// Seed of batch item `index` given the seed of the item before it
///
/// Numeric seeds add `index`, text seeds append its decimal form. Numeric
/// overflow falls back to appending.
pub fn derive_batch_seed(previous: &Seed, index: usize) -> Seed {
    match previous {
        Seed::Numeric(value) => u64::try_from(index)
            .ok()
            .and_then(|offset| value.checked_add(offset))
            .map_or_else(|| Seed::Text(format!("{value}{index}")), Seed::Numeric),
        Seed::Text(text) => Seed::Text(format!("{text}{index}")),
    }
}

/// Iterator over the seeds of a batch, starting at the root
#[derive(Debug, Clone)]
pub struct SeedChain {
    next: Option<Seed>,
    index: usize,
}

impl SeedChain {
    /// Start a chain at `root`
    pub const fn new(root: Seed) -> Self {
        Self {
            next: Some(root),
            index: 0,
        }
    }
}

impl Iterator for SeedChain {
    type Item = Seed;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.index += 1;
        self.next = Some(derive_batch_seed(&current, self.index));
        Some(current)
    }
}
