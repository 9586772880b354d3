//! Error handling and extraction statistics.
//!
//! This module provides:
//! - Error type definitions (audit validation, logger setup, export)
//! - Counting of the malformed sub-parts extraction skips
//!
//! Failures fall in two groups:
//! - **Absorbed**: malformed or empty sub-parts of a document; skipped and counted
//! - **Surfaced**: missing inputs, failed extraction tasks, export I/O; returned as errors

mod stats;
mod types;

// Re-export public API
pub use stats::ExtractionStats;
pub use types::{AuditError, ExportError, ExtractionIssue, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_extraction_stats_initialization() {
        let stats = ExtractionStats::new();
        for issue in ExtractionIssue::iter() {
            assert_eq!(stats.get_count(issue), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_extraction_stats_increment() {
        let stats = ExtractionStats::new();
        stats.increment(ExtractionIssue::MalformedJsonLd);
        stats.increment(ExtractionIssue::MalformedJsonLd);
        stats.increment(ExtractionIssue::EmptyRecord);
        assert_eq!(stats.get_count(ExtractionIssue::MalformedJsonLd), 2);
        assert_eq!(stats.get_count(ExtractionIssue::EmptyRecord), 1);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_audit_error_messages_are_distinct() {
        let missing = AuditError::MissingReference.to_string();
        let none = AuditError::NoCompetitors.to_string();
        assert_ne!(missing, none);
        assert!(missing.contains("reference"));
        assert!(none.contains("competitor"));
    }

    #[test]
    fn test_issue_display_uses_description() {
        assert_eq!(
            ExtractionIssue::EmptyMicrodataProperty.to_string(),
            "Empty microdata property"
        );
    }
}
