//! Configuration constants.
//!
//! Fixed strings shared by extraction, resolution, comparison and export.

// Competitor labels
/// Prefix of the default competitor label (`Competitor 1`, `Competitor 2`, ...)
pub const DEFAULT_COMPETITOR_LABEL_PREFIX: &str = "Competitor";

// Structured-data vocabulary
/// `@context` value written into every canonical example
pub const SCHEMA_CONTEXT: &str = "https://schema.org";
/// JSON-LD key for the context marker
pub const CONTEXT_KEY: &str = "@context";
/// Placeholder URL used by synthesized examples
pub const EXAMPLE_URL: &str = "https://example.com";

// Meta tag prefixes
/// OpenGraph property prefix
pub const OPEN_GRAPH_PREFIX: &str = "og:";
/// Twitter Card name prefix
pub const TWITTER_CARD_PREFIX: &str = "twitter:";

// Report labels
/// Suffix appended to a shared type in a missing-properties row
pub const MISSING_PROPERTIES_SUFFIX: &str = " (missing properties)";
/// Export placeholder when no competitor example was captured
pub const NOT_AVAILABLE_PLACEHOLDER: &str = "not available";

// Export
/// UTF-8 byte-order mark written before CSV output so spreadsheets detect the encoding
pub const UTF8_BOM: &str = "\u{feff}";
/// CSV header row of the report export
pub const REPORT_CSV_HEADERS: [&str; 5] = [
    "missing_type",
    "competitors_with_type",
    "properties",
    "canonical_example",
    "competitor_example",
];

// Audit
/// Label under which the reference document is extracted and logged
pub const REFERENCE_LABEL: &str = "Reference";
