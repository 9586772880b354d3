//! Per-competitor partial results and their ordered merge.

use serde_json::{Map, Value};
use std::collections::HashSet;

use super::report::{MissingDataReport, MissingPropertyRow, MissingTypeEntry};
use crate::canonical::resolve;
use crate::config::MISSING_PROPERTIES_SUFFIX;
use crate::inventory::StructuredDataInventory;

/// A type the competitor has and the reference lacks, with this competitor's example.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingTypeFinding {
    /// Missing type name
    pub type_name: String,
    /// Properties of the first index entry whose key contains the type
    pub example: Option<Value>,
}

/// Everything one competitor adds to a report, computed without touching the
/// shared report so competitors can be processed independently.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorContribution {
    /// Position of the competitor in the caller-supplied order
    pub position: usize,
    /// Competitor label
    pub label: String,
    /// Missing types, in the competitor's type-set order
    pub missing_types: Vec<MissingTypeFinding>,
    /// Missing-property rows for types both sides carry
    pub missing_properties: Vec<MissingPropertyRow>,
}

/// Computes what one competitor contributes to the report.
pub fn competitor_contribution(
    reference: &StructuredDataInventory,
    position: usize,
    label: &str,
    competitor: &StructuredDataInventory,
) -> CompetitorContribution {
    let missing_types = competitor
        .type_set()
        .iter()
        .filter(|type_name| !reference.contains_type(type_name))
        .map(|type_name| MissingTypeFinding {
            type_name: type_name.clone(),
            example: competitor
                .entries_matching(type_name)
                .next()
                .map(|(_, record)| record.properties_json()),
        })
        .collect();

    let mut missing_properties = Vec::new();
    for type_name in reference
        .type_set()
        .iter()
        .filter(|type_name| competitor.contains_type(type_name))
    {
        let reference_entries: Vec<_> = reference.entries_matching(type_name).collect();
        if reference_entries.is_empty() {
            continue;
        }
        let reference_properties: HashSet<&str> = reference_entries
            .iter()
            .flat_map(|(_, record)| record.property_names())
            .collect();

        for (key, record) in competitor.entries_matching(type_name) {
            let mut example = Map::new();
            let mut properties = Vec::new();
            for (name, value) in &record.properties {
                if !reference_properties.contains(name.as_str()) {
                    properties.push(name.clone());
                    example.insert(name.clone(), value.to_json());
                }
            }
            if properties.is_empty() {
                continue;
            }

            log::debug!(
                "{} entry '{}' has {} properties the reference lacks for {}",
                label,
                key,
                properties.len(),
                type_name
            );
            missing_properties.push(MissingPropertyRow {
                label: format!("{type_name}{MISSING_PROPERTIES_SUFFIX}"),
                type_name: type_name.clone(),
                competitor: label.to_string(),
                properties,
                example: Value::Object(example),
            });
        }
    }

    CompetitorContribution {
        position,
        label: label.to_string(),
        missing_types,
        missing_properties,
    }
}

/// Folds contributions into one report, in competitor position order
/// regardless of the order they were computed in.
///
/// The first competitor (by position) to show a type fixes its
/// `competitor_example`; later competitors only add their label.
pub fn merge_contributions(mut contributions: Vec<CompetitorContribution>) -> MissingDataReport {
    contributions.sort_by_key(|c| c.position);

    let mut report = MissingDataReport::default();
    for contribution in contributions {
        for finding in contribution.missing_types {
            let type_name = finding.type_name;
            let entry = report
                .missing_types
                .entry(type_name.clone())
                .or_insert_with(|| MissingTypeEntry::new(resolve(&type_name)));

            if !entry.competitors_with_type.contains(&contribution.label) {
                entry.competitors_with_type.push(contribution.label.clone());
            }
            if entry.competitor_example.is_none() {
                entry.competitor_example = finding.example;
            }
        }
        report
            .missing_properties
            .extend(contribution.missing_properties);
    }
    report
}
