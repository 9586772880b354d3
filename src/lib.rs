//! schema_gap library: structured-data gap analysis between web pages
//!
//! This library extracts the structured data a page declares (JSON-LD, Microdata,
//! OpenGraph, Twitter Card and basic meta tags), normalizes it into an inventory,
//! and compares a reference page against competitor pages. The result lists the
//! types the reference lacks, with canonical schema.org templates, and the
//! properties competitors declare for types both sides share.
//!
//! # Example
//!
//! ```
//! use schema_gap::{run_audit_blocking, AuditRequest, AuditStatus};
//!
//! let mine = r#"<script type="application/ld+json">{"@type": "Article", "headline": "Hi"}</script>"#;
//! let theirs = r#"<script type="application/ld+json">{"@type": "FAQPage", "mainEntity": []}</script>"#;
//!
//! let outcome = run_audit_blocking(AuditRequest::new(mine).with_competitor("Acme", theirs))?;
//! assert_eq!(outcome.status(), AuditStatus::GapsFound);
//! assert!(outcome.report.missing_types.contains_key("FAQPage"));
//! # Ok::<(), schema_gap::AuditError>(())
//! ```
//!
//! # Requirements
//!
//! [`run_audit`] requires a Tokio runtime. [`run_audit_blocking`] and the
//! building blocks ([`extract`], [`compare()`], [`resolve`]) do not.

#![warn(missing_docs)]
#![recursion_limit = "256"]

mod canonical;
pub mod compare;
pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
mod inventory;
mod models;
mod parse;
mod run;
mod utils;

// Re-export public API
pub use canonical::{canonical_type_names, resolve, resolve_with_kind, Resolution};
pub use compare::{compare, MissingDataReport, MissingPropertyRow, MissingTypeEntry, ReportStatistics};
pub use config::{CompetitorSource, Config, LogFormat, LogLevel};
pub use error_handling::{AuditError, ExportError, ExtractionIssue, ExtractionStats, InitializationError};
pub use inventory::StructuredDataInventory;
pub use models::{EntityRecord, PropertyMap, PropertyValue, SourceFormat};
pub use parse::{extract, extract_records, extract_with_stats};
pub use run::{run_audit, run_audit_blocking, AuditOutcome, AuditRequest, AuditStatus};
pub use utils::default_competitor_label;
