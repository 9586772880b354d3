//! Comparison and summary after the extraction barrier.

use log::info;
use std::sync::Arc;
use std::time::Instant;

use crate::compare::compare;
use crate::error_handling::{AuditError, ExtractionStats};
use crate::inventory::StructuredDataInventory;

use super::AuditOutcome;

/// Compares the extracted inventories and logs the run summary.
///
/// Only called once every document has been extracted.
pub(crate) fn finalize_audit(
    reference: StructuredDataInventory,
    competitors: Vec<(String, StructuredDataInventory)>,
    stats: Arc<ExtractionStats>,
    start_time: Instant,
) -> Result<AuditOutcome, AuditError> {
    if reference.is_empty() {
        info!("Reference page has no structured data");
    }

    let report = compare(&reference, &competitors)?;
    stats.log_summary();

    let outcome = AuditOutcome {
        reference,
        competitors,
        report,
        stats,
    };
    info!(
        "Audit of {} competitor(s) finished in {:.2}s: {} ({} missing type(s), {} missing-property row(s))",
        outcome.competitors.len(),
        start_time.elapsed().as_secs_f64(),
        outcome.status(),
        outcome.report.missing_types.len(),
        outcome.report.missing_properties.len()
    );
    Ok(outcome)
}
