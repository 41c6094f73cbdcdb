//! Parallel processing utilities

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Progress update information for parallel operations
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub current: usize,
    pub total: usize,
    pub message: String,
}

impl ProgressUpdate {
    /// Create a new progress update
    pub fn new(current: usize, total: usize, message: impl Into<String>) -> Self {
        Self {
            current,
            total,
            message: message.into(),
        }
    }

    /// Calculate progress percentage
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.current as f64 / self.total as f64) * 100.0
        }
    }
}

/// Map `f` over `items`, in parallel or sequentially, reporting progress
///
/// Output order matches input order either way.
pub fn process_with_progress<T, F, R, P>(items: Vec<T>, parallel: bool, f: F, progress: P) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> (R, String) + Send + Sync,
    P: Fn(ProgressUpdate) + Send + Sync,
{
    let total = items.len();
    let counter = AtomicUsize::new(0);

    let step = |item: T| {
        let (result, label) = f(item);
        let current = counter.fetch_add(1, Ordering::Relaxed) + 1;
        progress(ProgressUpdate::new(current, total, label));
        result
    };

    if parallel {
        items.into_par_iter().map(step).collect()
    } else {
        items.into_iter().map(step).collect()
    }
}
