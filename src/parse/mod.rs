//! Structured-data extraction from HTML.
//!
//! This module turns one HTML document into a `StructuredDataInventory`:
//! - JSON-LD (`<script type="application/ld+json">`)
//! - Microdata (`itemscope` / `itemtype` / `itemprop`)
//! - OpenGraph meta tags (`og:*`)
//! - Twitter Card meta tags (`twitter:*`)
//! - Basic meta tags (description, keywords, title)
//!
//! All parsing is static (no script execution) and done with CSS selectors via
//! the `scraper` crate. Extraction never fails: malformed sub-parts are skipped
//! and counted in `ExtractionStats`.

mod jsonld;
mod meta;
mod microdata;

use scraper::Html;
use std::collections::BTreeMap;

use crate::error_handling::ExtractionStats;
use crate::inventory::StructuredDataInventory;
use crate::models::{EntityRecord, SourceFormat};

/// Extracts the structured-data inventory of an HTML document.
///
/// Pure function of `html`: calling it twice on the same text yields equal
/// inventories.
///
/// # Example
///
/// ```
/// let html = r#"<script type="application/ld+json">{"@type": "FAQPage", "name": "Help"}</script>"#;
/// let inventory = schema_gap::extract(html);
/// assert!(inventory.contains_type("FAQPage"));
/// ```
pub fn extract(html: &str) -> StructuredDataInventory {
    extract_with_stats(html, &ExtractionStats::new())
}

/// Same as [`extract`], recording skipped sub-parts in `stats`.
pub fn extract_with_stats(html: &str, stats: &ExtractionStats) -> StructuredDataInventory {
    StructuredDataInventory::build(extract_records(html, stats))
}

/// Extracts the per-format record lists of an HTML document.
///
/// Formats without records are omitted from the map.
pub fn extract_records(
    html: &str,
    stats: &ExtractionStats,
) -> BTreeMap<SourceFormat, Vec<EntityRecord>> {
    let document = Html::parse_document(html);
    let mut by_format = BTreeMap::new();

    let mut insert = |format: SourceFormat, records: Vec<EntityRecord>| {
        if !records.is_empty() {
            log::debug!("Extracted {} {} record(s)", records.len(), format);
            by_format.insert(format, records);
        }
    };

    insert(SourceFormat::JsonLd, jsonld::extract_json_ld(&document, stats));
    insert(
        SourceFormat::Microdata,
        microdata::extract_microdata(&document, stats),
    );
    insert(
        SourceFormat::OpenGraph,
        meta::extract_open_graph(&document).into_iter().collect(),
    );
    insert(
        SourceFormat::TwitterCard,
        meta::extract_twitter_card(&document).into_iter().collect(),
    );
    insert(
        SourceFormat::MetaTags,
        meta::extract_meta_tags(&document).into_iter().collect(),
    );

    by_format
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
