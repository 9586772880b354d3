//! Audit orchestration.
//!
//! A run has three phases:
//! 1. validate the request (reference present, at least one non-blank competitor)
//! 2. extract every document, concurrently on the blocking pool
//! 3. once all extractions are done, compare and summarize
//!
//! Runs share no state with each other.

mod finalize;
mod outcome;
mod request;
mod task;

use futures::future::join_all;
use log::info;
use std::sync::Arc;
use std::time::Instant;

use crate::config::REFERENCE_LABEL;
use crate::error_handling::{AuditError, ExtractionStats};
use crate::parse::extract_with_stats;

use finalize::finalize_audit;
use task::extract_document_task;

pub use outcome::{AuditOutcome, AuditStatus};
pub use request::AuditRequest;

/// Runs an audit, extracting all documents concurrently.
///
/// Must be called within a Tokio runtime. Results do not depend on which
/// extraction finishes first: inventories are collected in request order
/// before the comparison starts.
///
/// # Errors
///
/// - `AuditError::MissingReference` / `AuditError::NoCompetitors` if validation fails
/// - `AuditError::ExtractionTask` if an extraction task panics
///
/// # Example
///
/// ```no_run
/// use schema_gap::{run_audit, AuditRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let request = AuditRequest::new(std::fs::read_to_string("mine.html")?)
///     .with_competitor("Acme", std::fs::read_to_string("acme.html")?);
/// let outcome = run_audit(request).await?;
/// println!("{}", outcome.status());
/// # Ok(())
/// # }
/// ```
pub async fn run_audit(request: AuditRequest) -> Result<AuditOutcome, AuditError> {
    let validated = request.validate()?;
    let start_time = Instant::now();
    let stats = Arc::new(ExtractionStats::new());
    info!(
        "Extracting structured data from {} document(s)",
        validated.competitors.len() + 1
    );

    let documents = std::iter::once((REFERENCE_LABEL.to_string(), validated.reference_html))
        .chain(validated.competitors);
    let tasks = documents.map(|(label, html)| extract_document_task(label, html, Arc::clone(&stats)));

    // Barrier: nothing is compared until every document is extracted
    let mut inventories = join_all(tasks)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?
        .into_iter();

    let (_, reference) = inventories.next().ok_or(AuditError::MissingReference)?;
    finalize_audit(reference, inventories.collect(), stats, start_time)
}

/// Runs an audit on the current thread, one document after another.
///
/// Produces the same outcome as [`run_audit`] without needing a runtime.
///
/// # Errors
///
/// `AuditError::MissingReference` / `AuditError::NoCompetitors` if validation fails.
pub fn run_audit_blocking(request: AuditRequest) -> Result<AuditOutcome, AuditError> {
    let validated = request.validate()?;
    let start_time = Instant::now();
    let stats = Arc::new(ExtractionStats::new());

    let reference = extract_with_stats(&validated.reference_html, &stats);
    let competitors = validated
        .competitors
        .into_iter()
        .map(|(label, html)| {
            let inventory = extract_with_stats(&html, &stats);
            (label, inventory)
        })
        .collect();

    finalize_audit(reference, competitors, stats, start_time)
}
