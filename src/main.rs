//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `schema_gap` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading the saved HTML files
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use schema_gap::config::Opt;
use schema_gap::export::export_csv;
use schema_gap::initialization::init_logger_with;
use schema_gap::{run_audit, AuditOutcome, AuditRequest, AuditStatus, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match audit(&config).await {
        Ok(outcome) => {
            print_summary(&outcome);
            Ok(())
        }
        Err(e) => {
            eprintln!("schema_gap error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn audit(config: &Config) -> Result<AuditOutcome> {
    let request = read_request(config)?;
    let outcome = run_audit(request).await.context("Audit failed")?;

    if config.print_inventory {
        let inventory = serde_json::to_string_pretty(&outcome.reference.to_json())
            .context("Failed to render reference inventory")?;
        eprintln!("{}", inventory);
    }

    export_csv(&outcome.report, config.output.as_deref()).context("Failed to export report")?;
    Ok(outcome)
}

fn read_request(config: &Config) -> Result<AuditRequest> {
    let reference_html = std::fs::read_to_string(&config.reference).context(format!(
        "Failed to read reference page: {}",
        config.reference.display()
    ))?;

    let mut request = AuditRequest::new(reference_html);
    for source in &config.competitors {
        let html = std::fs::read_to_string(&source.path).context(format!(
            "Failed to read competitor page: {}",
            source.path.display()
        ))?;
        request = match &source.label {
            Some(label) => request.with_competitor(label.as_str(), html),
            None => request.with_unlabeled_competitor(html),
        };
    }
    Ok(request)
}

fn print_summary(outcome: &AuditOutcome) {
    let stats = outcome.report.statistics();
    // stdout may carry the CSV, so the summary goes to stderr
    match outcome.status() {
        AuditStatus::ReferenceEmpty => eprintln!(
            "Reference page has no structured data; {} type(s) found at competitors",
            stats.missing_type_count
        ),
        AuditStatus::NoGaps => eprintln!(
            "No gaps: the reference covers everything {} competitor{} declare",
            outcome.competitors.len(),
            if outcome.competitors.len() == 1 { "" } else { "s" }
        ),
        AuditStatus::GapsFound => eprintln!(
            "{} missing item{} ({} opportunit{}), most frequent: {}",
            stats.missing_type_count,
            if stats.missing_type_count == 1 { "" } else { "s" },
            stats.total_opportunities,
            if stats.total_opportunities == 1 { "y" } else { "ies" },
            stats.most_frequent.as_deref().unwrap_or("-")
        ),
    }
}
