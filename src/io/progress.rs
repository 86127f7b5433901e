//! Progress display for batch generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}} \
             [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the patterns of one batch
///
/// Single-image runs stay silent.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a bar for `total` patterns labelled with the batch name
    pub fn new(total: usize, name: &str) -> Self {
        let bar = (total > 1).then(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(BATCH_STYLE.clone());
            bar.set_prefix(name.to_string());
            bar
        });
        Self { bar }
    }

    /// Create a manager that never draws
    pub const fn hidden() -> Self {
        Self { bar: None }
    }

    /// Create a bar that tracks progress without drawing to the terminal
    pub fn detached(total: usize) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::hidden());
        Self { bar: Some(bar) }
    }

    /// Record one finished pattern
    pub fn complete_item(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Patterns completed so far
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Clean up the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
