//! Seed normalization and derivation of related seeds

/// Color and batch seed derivation
pub mod derive;
/// Canonical seed type and generator construction
pub mod normalize;

pub use derive::{SeedChain, derive_batch_seed, derive_color_seed};
pub use normalize::{Seed, normalize_seed};
