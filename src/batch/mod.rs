//! Batch orchestration: seed chains and per-item color selection

/// Batch construction and generation
pub mod orchestrator;
/// Background/foreground selection policy
pub mod selection;

pub use orchestrator::{Batch, BatchItem, BatchRequest, build_batch};
pub use selection::{ColorPair, select_colors};
