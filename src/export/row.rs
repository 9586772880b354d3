//! Flattening a report into tabular rows.
//!
//! The CSV exporter (and any display collaborator) share the same row shape:
//! one row per missing type in first-seen order, followed by one row per
//! missing-property finding.

use serde::Serialize;
use serde_json::Value;

use crate::canonical::resolve;
use crate::compare::{MissingDataReport, MissingPropertyRow, MissingTypeEntry};
use crate::config::NOT_AVAILABLE_PLACEHOLDER;
use crate::error_handling::ExportError;

/// One exported line of a missing-data report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Missing type, or `"{type} (missing properties)"`
    pub missing_type: String,
    /// Comma-joined competitor labels
    pub competitors_with_type: String,
    /// Comma-joined property names of the competitor example
    pub properties: String,
    /// Pretty-printed canonical example
    pub canonical_example: String,
    /// Pretty-printed competitor example, or the "not available" placeholder
    pub competitor_example: String,
}

impl ReportRow {
    /// Cells in CSV header order.
    pub fn as_record(&self) -> [&str; 5] {
        [
            self.missing_type.as_str(),
            self.competitors_with_type.as_str(),
            self.properties.as_str(),
            self.canonical_example.as_str(),
            self.competitor_example.as_str(),
        ]
    }
}

/// Builds the export rows for `report`.
///
/// # Errors
///
/// Returns `ExportError::JsonError` if an example cannot be rendered as JSON text.
pub fn report_rows(report: &MissingDataReport) -> Result<Vec<ReportRow>, ExportError> {
    let mut rows = Vec::with_capacity(report.missing_types.len() + report.missing_properties.len());

    for (type_name, entry) in &report.missing_types {
        rows.push(missing_type_row(type_name, entry)?);
    }
    for row in &report.missing_properties {
        rows.push(missing_property_row(row)?);
    }

    Ok(rows)
}

fn missing_type_row(type_name: &str, entry: &MissingTypeEntry) -> Result<ReportRow, ExportError> {
    let (properties, competitor_example) = match &entry.competitor_example {
        Some(example) => (property_list(example), pretty_json(example)?),
        None => (String::new(), NOT_AVAILABLE_PLACEHOLDER.to_string()),
    };

    Ok(ReportRow {
        missing_type: type_name.to_string(),
        competitors_with_type: entry.competitors_with_type.join(", "),
        properties,
        canonical_example: pretty_json(&entry.canonical_example)?,
        competitor_example,
    })
}

fn missing_property_row(row: &MissingPropertyRow) -> Result<ReportRow, ExportError> {
    Ok(ReportRow {
        missing_type: row.label.clone(),
        competitors_with_type: row.competitor.clone(),
        properties: row.properties.join(", "),
        canonical_example: pretty_json(&resolve(&row.type_name))?,
        competitor_example: pretty_json(&row.example)?,
    })
}

fn property_list(example: &Value) -> String {
    example
        .as_object()
        .map(|object| object.keys().map(String::as_str).collect::<Vec<_>>().join(", "))
        .unwrap_or_default()
}

/// Two-space indented JSON; serde_json leaves non-ASCII characters unescaped.
pub(crate) fn pretty_json(value: &Value) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use serde_json::json;

    fn report() -> MissingDataReport {
        let mut missing_types = IndexMap::new();
        missing_types.insert(
            "FAQPage".to_string(),
            MissingTypeEntry {
                competitors_with_type: vec!["A".to_string(), "B".to_string()],
                competitor_example: Some(json!({"mainEntity": [], "name": "Questions"})),
                canonical_example: resolve("FAQPage"),
            },
        );
        missing_types.insert(
            "Custom".to_string(),
            MissingTypeEntry {
                competitors_with_type: vec!["B".to_string()],
                competitor_example: None,
                canonical_example: resolve("Custom"),
            },
        );
        MissingDataReport {
            missing_types,
            missing_properties: vec![MissingPropertyRow {
                label: "Article (missing properties)".to_string(),
                type_name: "Article".to_string(),
                competitor: "A".to_string(),
                properties: vec!["publisher".to_string()],
                example: json!({"publisher": "Éditions Acme"}),
            }],
        }
    }

    #[test]
    fn test_rows_follow_report_order() {
        let rows = report_rows(&report()).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.missing_type.as_str()).collect();
        assert_eq!(names, vec!["FAQPage", "Custom", "Article (missing properties)"]);
    }

    #[test]
    fn test_missing_type_row_cells() {
        let rows = report_rows(&report()).unwrap();
        assert_eq!(rows[0].competitors_with_type, "A, B");
        assert_eq!(rows[0].properties, "mainEntity, name");
        assert!(rows[0].canonical_example.contains("\"@type\": \"FAQPage\""));
        assert!(rows[0].competitor_example.starts_with("{\n  \"mainEntity\""));
    }

    #[test]
    fn test_absent_example_uses_placeholder() {
        let rows = report_rows(&report()).unwrap();
        assert_eq!(rows[1].competitor_example, NOT_AVAILABLE_PLACEHOLDER);
        assert_eq!(rows[1].properties, "");
    }

    #[test]
    fn test_property_row_keeps_non_ascii() {
        let rows = report_rows(&report()).unwrap();
        let row = &rows[2];
        assert_eq!(row.properties, "publisher");
        assert_eq!(row.competitors_with_type, "A");
        assert!(row.competitor_example.contains("Éditions Acme"));
        assert!(row.canonical_example.contains("\"@type\": \"Article\""));
    }

    #[test]
    fn test_empty_report_has_no_rows() {
        assert!(report_rows(&MissingDataReport::default()).unwrap().is_empty());
    }
}
