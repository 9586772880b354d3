//! Error type definitions.
//!
//! This module defines the errors surfaced to callers and the extraction issues
//! that are absorbed locally and only counted.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Validation and execution failures of an audit run.
///
/// Validation variants are returned before any extraction or comparison work
/// starts, so a caller never mistakes a refused run for an empty report.
#[derive(Error, Debug)]
pub enum AuditError {
    /// No reference document was supplied (or it is blank).
    #[error("No reference HTML supplied: the page to audit is required")]
    MissingReference,

    /// No competitor document with content was supplied.
    #[error("No competitor HTML supplied: at least one competitor page is required")]
    NoCompetitors,

    /// An extraction task panicked or was cancelled before the comparison barrier.
    #[error("Extraction task for '{label}' did not complete: {reason}")]
    ExtractionTask {
        /// Label of the document whose extraction failed
        label: String,
        /// Join error description
        reason: String,
    },
}

/// Error types for report export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Writing to the output failed.
    #[error("Export I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV writer failed.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A payload could not be rendered as JSON text.
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Malformed or empty sub-parts skipped during extraction.
///
/// None of these surfaces as an error; they are counted so a caller can tell
/// how much of a document was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ExtractionIssue {
    // JSON-LD
    MalformedJsonLd, // Script block is not valid JSON
    EmptyJsonLd,     // Script block has no content
    NonObjectJsonLd, // Top-level value (or array element) is not an object
    // Any format
    EmptyRecord, // Record had no properties left and was discarded
    // Microdata
    EmptyMicrodataProperty, // itemprop with empty name or empty value
}

impl std::fmt::Display for ExtractionIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ExtractionIssue {
    /// Human-readable name used in the summary log.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionIssue::MalformedJsonLd => "Malformed JSON-LD block",
            ExtractionIssue::EmptyJsonLd => "Empty JSON-LD block",
            ExtractionIssue::NonObjectJsonLd => "Non-object JSON-LD value",
            ExtractionIssue::EmptyRecord => "Record without properties",
            ExtractionIssue::EmptyMicrodataProperty => "Empty microdata property",
        }
    }
}
