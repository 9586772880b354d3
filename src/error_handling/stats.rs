//! Extraction statistics tracking.
//!
//! This module provides thread-safe counters for the sub-parts skipped while
//! extracting structured data.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ExtractionIssue;

/// Thread-safe extraction statistics tracker.
///
/// Every `ExtractionIssue` is initialized to zero on creation. The counters can
/// be shared across concurrent extraction tasks using `Arc`.
#[derive(Debug)]
pub struct ExtractionStats {
    issues: HashMap<ExtractionIssue, AtomicUsize>,
}

impl ExtractionStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut issues = HashMap::new();
        for issue in ExtractionIssue::iter() {
            issues.insert(issue, AtomicUsize::new(0));
        }
        ExtractionStats { issues }
    }

    /// Increment an issue counter.
    pub fn increment(&self, issue: ExtractionIssue) {
        if let Some(counter) = self.issues.get(&issue) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment issue counter for {:?} which is not in the map. \
                 This indicates a bug in ExtractionStats initialization.",
                issue
            );
        }
    }

    /// Get the count for an issue.
    pub fn get_count(&self, issue: ExtractionIssue) -> usize {
        self.issues
            .get(&issue)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total number of skipped sub-parts.
    pub fn total(&self) -> usize {
        self.issues.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    /// Logs the non-zero counters at info level.
    pub fn log_summary(&self) {
        let total = self.total();
        if total == 0 {
            return;
        }
        log::info!("Skipped structured-data parts ({} total):", total);
        for issue in ExtractionIssue::iter() {
            let count = self.get_count(issue);
            if count > 0 {
                log::info!("   {}: {}", issue.as_str(), count);
            }
        }
    }
}

impl Default for ExtractionStats {
    fn default() -> Self {
        Self::new()
    }
}
