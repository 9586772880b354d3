//! Derivation of the type set and lookup index from format buckets.

use indexmap::{IndexMap, IndexSet};
use std::collections::{BTreeMap, HashMap};

use crate::models::{EntityRecord, SourceFormat};

/// Collects every type tag of every record, in first-seen order.
///
/// Untyped records contribute their format name.
pub(crate) fn build_type_set(
    by_format: &BTreeMap<SourceFormat, Vec<EntityRecord>>,
) -> IndexSet<String> {
    let mut type_set = IndexSet::new();
    for records in by_format.values() {
        for record in records {
            for type_name in record.effective_types() {
                if !type_set.contains(type_name) {
                    type_set.insert(type_name.to_string());
                }
            }
        }
    }
    type_set
}

/// Builds the disambiguated lookup index.
///
/// A record is keyed by its type label when that label occurs once in its
/// format bucket, otherwise by `"{label}_{position}"` with its 0-based position
/// inside the bucket. A key produced again by a later bucket replaces the
/// earlier record but keeps the earlier position.
pub(crate) fn build_index(
    by_format: &BTreeMap<SourceFormat, Vec<EntityRecord>>,
) -> IndexMap<String, EntityRecord> {
    let mut index = IndexMap::new();

    for (format, records) in by_format {
        let labels: Vec<String> = records.iter().map(EntityRecord::type_label).collect();

        let mut occurrences: HashMap<&str, usize> = HashMap::new();
        for label in &labels {
            *occurrences.entry(label.as_str()).or_insert(0) += 1;
        }

        for (position, (record, label)) in records.iter().zip(labels.iter()).enumerate() {
            let key = if occurrences.get(label.as_str()).copied().unwrap_or(0) > 1 {
                format!("{label}_{position}")
            } else {
                label.clone()
            };

            if let Some(previous) = index.insert(key.clone(), record.clone()) {
                log::debug!(
                    "Index key '{}' from {} replaces the {} record registered earlier",
                    key,
                    format,
                    previous.format
                );
            }
        }
    }

    index
}
