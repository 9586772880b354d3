//! Inventory data structure.

use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::builder::{build_index, build_type_set};
use crate::models::{EntityRecord, SourceFormat};

/// Normalized structured-data inventory of one document.
///
/// `type_set` and `index` are derived from `by_format` at construction time and
/// are never edited independently; rebuilding from the same buckets yields the
/// same inventory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructuredDataInventory {
    by_format: BTreeMap<SourceFormat, Vec<EntityRecord>>,
    type_set: IndexSet<String>,
    index: IndexMap<String, EntityRecord>,
}

impl StructuredDataInventory {
    /// Builds an inventory from per-format record lists.
    ///
    /// Records without properties are dropped and empty formats are omitted,
    /// so the inventory never carries empty categories.
    pub fn build(by_format: BTreeMap<SourceFormat, Vec<EntityRecord>>) -> Self {
        let by_format: BTreeMap<SourceFormat, Vec<EntityRecord>> = by_format
            .into_iter()
            .map(|(format, records)| {
                let kept: Vec<EntityRecord> =
                    records.into_iter().filter(|r| r.has_properties()).collect();
                (format, kept)
            })
            .filter(|(_, records)| !records.is_empty())
            .collect();

        let type_set = build_type_set(&by_format);
        let index = build_index(&by_format);

        Self {
            by_format,
            type_set,
            index,
        }
    }

    /// Re-derives the inventory from its own format buckets.
    pub fn rebuild(&self) -> Self {
        Self::build(self.by_format.clone())
    }

    /// Records grouped by format, in format order.
    pub fn by_format(&self) -> &BTreeMap<SourceFormat, Vec<EntityRecord>> {
        &self.by_format
    }

    /// Records of one format (empty slice if the format is absent).
    pub fn records(&self, format: SourceFormat) -> &[EntityRecord] {
        self.by_format
            .get(&format)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All type tags of the document, in first-seen order.
    pub fn type_set(&self) -> &IndexSet<String> {
        &self.type_set
    }

    /// Disambiguated key → record index.
    pub fn index(&self) -> &IndexMap<String, EntityRecord> {
        &self.index
    }

    /// Returns `true` if the document type set contains `type_name`.
    pub fn contains_type(&self, type_name: &str) -> bool {
        self.type_set.contains(type_name)
    }

    /// Index entries whose key contains `type_name` as a substring, in index order.
    pub fn entries_matching<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = (&'a String, &'a EntityRecord)> + 'a {
        self.index
            .iter()
            .filter(move |(key, _)| key.contains(type_name))
    }

    /// Returns `true` if no structured data was found at all.
    pub fn is_empty(&self) -> bool {
        self.by_format.is_empty()
    }

    /// Total number of records across all formats.
    pub fn record_count(&self) -> usize {
        self.by_format.values().map(Vec::len).sum()
    }

    /// JSON rendering for display: `{"JSON-LD": [...], "Microdata": [...], ...}`.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        for (format, records) in &self.by_format {
            object.insert(
                format.to_string(),
                Value::Array(records.iter().map(EntityRecord::to_json).collect()),
            );
        }
        Value::Object(object)
    }
}
