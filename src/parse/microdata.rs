//! Microdata extraction.
//!
//! Each `itemscope` element yields one record typed by the last path segment of
//! its `itemtype`. Properties are read from every descendant carrying `itemprop`.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::error_handling::{ExtractionIssue, ExtractionStats};
use crate::models::{EntityRecord, PropertyValue, SourceFormat};
use crate::utils::parse_selector_with_fallback;

const ITEMSCOPE_SELECTOR_STR: &str = "[itemscope]";
const ITEMPROP_SELECTOR_STR: &str = "[itemprop]";

static ITEMSCOPE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(ITEMSCOPE_SELECTOR_STR, "microdata items"));

static ITEMPROP_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(ITEMPROP_SELECTOR_STR, "microdata properties"));

/// Extracts microdata records from a parsed document.
///
/// Nested scopes produce their own records and their properties also appear on
/// every enclosing scope.
pub(crate) fn extract_microdata(document: &Html, stats: &ExtractionStats) -> Vec<EntityRecord> {
    let mut records = Vec::new();

    for item in document.select(&ITEMSCOPE_SELECTOR) {
        let mut record = EntityRecord::new(SourceFormat::Microdata);
        if let Some(itemtype) = item.value().attr("itemtype") {
            record.types = type_names(itemtype);
        }

        for prop in item.select(&ITEMPROP_SELECTOR) {
            let name = prop.value().attr("itemprop").unwrap_or("").trim();
            let value = property_value(&prop);
            if name.is_empty() || value.is_empty() {
                stats.increment(ExtractionIssue::EmptyMicrodataProperty);
                continue;
            }
            record
                .properties
                .insert(name.to_string(), PropertyValue::Text(value));
        }

        if record.has_properties() {
            records.push(record);
        } else {
            log::debug!(
                "Discarding microdata item '{}' without properties",
                record.type_label()
            );
            stats.increment(ExtractionIssue::EmptyRecord);
        }
    }

    records
}

/// Type names of an `itemtype` attribute: the final path segment of each
/// space-separated URI, e.g. `https://schema.org/Product` → `Product`.
pub(crate) fn type_names(itemtype: &str) -> Vec<String> {
    itemtype
        .split_whitespace()
        .filter_map(|uri| uri.rsplit('/').next())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Explicit `content` attribute if non-empty, else the trimmed visible text.
fn property_value(prop: &ElementRef) -> String {
    match prop.value().attr("content") {
        Some(content) if !content.is_empty() => content.to_string(),
        _ => prop.text().collect::<String>().trim().to_string(),
    }
}
