//! Missing-data report types.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// A type present at one or more competitors and absent from the reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingTypeEntry {
    /// Labels of the competitors carrying the type, first-seen order, no repeats
    pub competitors_with_type: Vec<String>,
    /// Properties of the first matching record at the first competitor seen with the type
    pub competitor_example: Option<Value>,
    /// Template payload from the canonical resolver
    pub canonical_example: Value,
}

impl MissingTypeEntry {
    pub(crate) fn new(canonical_example: Value) -> Self {
        Self {
            competitors_with_type: Vec::new(),
            competitor_example: None,
            canonical_example,
        }
    }
}

/// Properties a competitor record has for a type the reference also carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingPropertyRow {
    /// Row tag: `"{type} (missing properties)"`
    pub label: String,
    /// The shared type the row is about
    pub type_name: String,
    /// Competitor the properties were found at
    pub competitor: String,
    /// Missing property names, in the competitor record's order
    pub properties: Vec<String>,
    /// The missing key/value pairs only
    pub example: Value,
}

/// Result of comparing a reference inventory against competitor inventories.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingDataReport {
    /// Missing type name → entry, in first-seen order
    pub missing_types: IndexMap<String, MissingTypeEntry>,
    /// Missing-property rows, in competitor order
    pub missing_properties: Vec<MissingPropertyRow>,
}

/// Summary figures of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatistics {
    /// Distinct row labels (missing types plus `"... (missing properties)"` tags)
    pub missing_type_count: usize,
    /// One per (missing type, competitor) pair plus one per missing-property row
    pub total_opportunities: usize,
    /// Label with the most opportunities; ties go to the first seen
    pub most_frequent: Option<String>,
}

impl MissingDataReport {
    /// Returns `true` if the reference lacks nothing the competitors have.
    pub fn is_empty(&self) -> bool {
        self.missing_types.is_empty() && self.missing_properties.is_empty()
    }

    /// Computes the summary figures.
    pub fn statistics(&self) -> ReportStatistics {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for (type_name, entry) in &self.missing_types {
            *counts.entry(type_name.as_str()).or_insert(0) += entry.competitors_with_type.len();
        }
        for row in &self.missing_properties {
            *counts.entry(row.label.as_str()).or_insert(0) += 1;
        }

        let mut most_frequent: Option<(&str, usize)> = None;
        for (label, count) in &counts {
            match most_frequent {
                Some((_, best)) if best >= *count => {}
                _ => most_frequent = Some((label, *count)),
            }
        }

        ReportStatistics {
            missing_type_count: counts.len(),
            total_opportunities: counts.values().sum(),
            most_frequent: most_frequent.map(|(label, _)| label.to_string()),
        }
    }
}
