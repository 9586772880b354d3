//! Reference vs. competitor comparison.
//!
//! For every competitor, in caller order:
//! - types it carries that the reference lacks become report entries, each with
//!   a canonical example and the first competitor example seen
//! - for types both sides carry, competitor records with properties absent from
//!   every matching reference record produce missing-property rows
//!
//! Records are matched to a type by substring on index keys, so `Event` also
//! matches `MusicEvent` entries.

mod contribution;
mod report;

pub use contribution::{
    competitor_contribution, merge_contributions, CompetitorContribution, MissingTypeFinding,
};
pub use report::{MissingDataReport, MissingPropertyRow, MissingTypeEntry, ReportStatistics};

use crate::error_handling::AuditError;
use crate::inventory::StructuredDataInventory;

/// Compares a reference inventory against labelled competitor inventories.
///
/// Competitor labels need not be unique. The fold is sequential in the order
/// given, so the same inputs always produce the same report.
///
/// # Errors
///
/// Returns `AuditError::NoCompetitors` if `competitors` is empty; an empty
/// report is never returned in place of a refused comparison.
pub fn compare(
    reference: &StructuredDataInventory,
    competitors: &[(String, StructuredDataInventory)],
) -> Result<MissingDataReport, AuditError> {
    if competitors.is_empty() {
        return Err(AuditError::NoCompetitors);
    }

    let contributions = competitors
        .iter()
        .enumerate()
        .map(|(position, (label, inventory))| {
            competitor_contribution(reference, position, label, inventory)
        })
        .collect();

    let report = merge_contributions(contributions);
    log::debug!(
        "Comparison found {} missing type(s) and {} missing-property row(s)",
        report.missing_types.len(),
        report.missing_properties.len()
    );
    Ok(report)
}
