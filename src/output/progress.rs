//! Progress reporting for long checks
//!
//! Bars are drawn on stderr so the report on stdout stays machine-readable.

use crate::core::parallel::ProgressUpdate;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use tracing::debug;

/// Below this many files no bar is drawn
pub const MIN_FILES_FOR_BAR: usize = 20;

/// Progress reporter for a check run
pub struct ProgressReporter {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a new progress reporter; a disabled reporter only logs
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Start a new progress operation
    pub fn start(&mut self, total: usize, operation: &str) {
        debug!(total, "{}", operation);

        if !self.enabled || total < MIN_FILES_FOR_BAR {
            return;
        }

        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar.set_message(operation.to_string());
        self.bar = Some(bar);
    }

    /// Update progress
    pub fn update(&self, current: usize, total: usize, message: &str) {
        match &self.bar {
            Some(bar) => {
                bar.set_length(total as u64);
                bar.set_position(current as u64);
                bar.set_message(message.to_string());
            }
            None => debug!(current, total, "{}", message),
        }
    }

    /// Update progress from a ProgressUpdate
    pub fn update_from(&self, progress: ProgressUpdate) {
        self.update(progress.current, progress.total, &progress.message);
    }

    /// Finish the progress operation and clear the bar
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    /// Whether a bar is being drawn
    pub fn is_drawing(&self) -> bool {
        self.bar.is_some()
    }
}

/// Create a progress callback function that updates a ProgressReporter
pub fn create_progress_callback(
    reporter: Arc<ProgressReporter>,
) -> impl Fn(ProgressUpdate) + Send + Sync {
    move |progress: ProgressUpdate| {
        reporter.update_from(progress);
    }
}
