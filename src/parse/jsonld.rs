//! JSON-LD extraction.
//!
//! Every `<script type="application/ld+json">` block is parsed on its own; a
//! block that is not valid JSON is skipped without affecting the others.

use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::LazyLock;

use crate::error_handling::{ExtractionIssue, ExtractionStats};
use crate::models::{EntityRecord, SourceFormat};
use crate::utils::parse_selector_with_fallback;

const JSON_LD_SELECTOR_STR: &str = r#"script[type="application/ld+json" i]"#;

static JSON_LD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(JSON_LD_SELECTOR_STR, "JSON-LD extraction"));

/// Extracts JSON-LD records from a parsed document.
///
/// A top-level array fans out into one record per element; any other value is
/// one record. Values that are not JSON objects carry no properties and are
/// skipped, as are records left without properties once `@type` is lifted out.
pub(crate) fn extract_json_ld(document: &Html, stats: &ExtractionStats) -> Vec<EntityRecord> {
    let mut records = Vec::new();

    for (block, script) in document.select(&JSON_LD_SELECTOR).enumerate() {
        let content: String = script.text().collect();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            log::debug!("Skipping empty JSON-LD block #{}", block);
            stats.increment(ExtractionIssue::EmptyJsonLd);
            continue;
        }

        let parsed = match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("Skipping malformed JSON-LD block #{}: {}", block, e);
                stats.increment(ExtractionIssue::MalformedJsonLd);
                continue;
            }
        };

        match parsed {
            Value::Array(items) => {
                for item in items {
                    push_json_ld_value(item, &mut records, stats);
                }
            }
            other => push_json_ld_value(other, &mut records, stats),
        }
    }

    records
}

fn push_json_ld_value(value: Value, records: &mut Vec<EntityRecord>, stats: &ExtractionStats) {
    let Value::Object(object) = value else {
        log::debug!("Skipping non-object JSON-LD value");
        stats.increment(ExtractionIssue::NonObjectJsonLd);
        return;
    };

    let record = EntityRecord::from_json_object(object, SourceFormat::JsonLd);
    if record.has_properties() {
        records.push(record);
    } else {
        log::debug!(
            "Discarding JSON-LD record '{}' without properties",
            record.type_label()
        );
        stats.increment(ExtractionIssue::EmptyRecord);
    }
}
