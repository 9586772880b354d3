//! Audit results.

use serde::Serialize;
use std::sync::Arc;

use crate::compare::MissingDataReport;
use crate::error_handling::ExtractionStats;
use crate::inventory::StructuredDataInventory;

/// Overall verdict of an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
pub enum AuditStatus {
    /// The reference page carries no structured data at all
    #[strum(to_string = "reference has no structured data")]
    ReferenceEmpty,
    /// The reference lacks nothing the competitors carry
    #[strum(to_string = "no gaps found")]
    NoGaps,
    /// The report lists missing types or properties
    #[strum(to_string = "gaps found")]
    GapsFound,
}

/// Everything an audit produced.
#[derive(Debug)]
pub struct AuditOutcome {
    /// Inventory of the reference page
    pub reference: StructuredDataInventory,
    /// Competitor labels and inventories, in request order (blank ones skipped)
    pub competitors: Vec<(String, StructuredDataInventory)>,
    /// The comparison result
    pub report: MissingDataReport,
    /// Sub-parts skipped while extracting all documents
    pub stats: Arc<ExtractionStats>,
}

impl AuditOutcome {
    /// Distinguishes "nothing to compare" from "matches competitors".
    ///
    /// An empty reference wins over the report contents.
    pub fn status(&self) -> AuditStatus {
        if self.reference.is_empty() {
            AuditStatus::ReferenceEmpty
        } else if self.report.is_empty() {
            AuditStatus::NoGaps
        } else {
            AuditStatus::GapsFound
        }
    }
}
