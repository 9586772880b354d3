//! Per-document extraction tasks.

use std::sync::Arc;

use crate::error_handling::{AuditError, ExtractionStats};
use crate::inventory::StructuredDataInventory;
use crate::parse::extract_with_stats;

/// Extracts one document on the blocking pool.
///
/// HTML parsing is CPU-bound, so it runs under `spawn_blocking` to keep the
/// async workers free. A panic inside extraction surfaces as
/// `AuditError::ExtractionTask` for that document.
pub(crate) async fn extract_document_task(
    label: String,
    html: String,
    stats: Arc<ExtractionStats>,
) -> Result<(String, StructuredDataInventory), AuditError> {
    let task_label = label.clone();
    let handle = tokio::task::spawn_blocking(move || {
        let inventory = extract_with_stats(&html, &stats);
        log::debug!(
            "Extracted {} record(s) from '{}'",
            inventory.record_count(),
            task_label
        );
        inventory
    });

    match handle.await {
        Ok(inventory) => Ok((label, inventory)),
        Err(e) => Err(AuditError::ExtractionTask {
            label,
            reason: e.to_string(),
        }),
    }
}
