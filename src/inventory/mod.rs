//! Per-document structured-data inventory.
//!
//! Aggregates the records of one document into:
//! - format buckets (formats without records omitted)
//! - a first-seen-ordered type set
//! - a disambiguated key → record index used by the comparator

mod builder;
mod types;

// Re-export public API
pub use types::StructuredDataInventory;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityRecord, SourceFormat};
    use std::collections::BTreeMap;

    fn record(format: SourceFormat, types: &[&str], props: &[(&str, &str)]) -> EntityRecord {
        let mut record = EntityRecord::new(format);
        record.types = types.iter().map(|t| t.to_string()).collect();
        for (key, value) in props {
            record.properties.insert(key.to_string(), (*value).into());
        }
        record
    }

    fn buckets(records: Vec<EntityRecord>) -> BTreeMap<SourceFormat, Vec<EntityRecord>> {
        let mut by_format: BTreeMap<SourceFormat, Vec<EntityRecord>> = BTreeMap::new();
        for r in records {
            by_format.entry(r.format).or_default().push(r);
        }
        by_format
    }

    #[test]
    fn test_type_set_uses_format_name_for_untyped_records() {
        let inventory = StructuredDataInventory::build(buckets(vec![
            record(SourceFormat::JsonLd, &["Article"], &[("headline", "a")]),
            record(SourceFormat::JsonLd, &[], &[("name", "b")]),
            record(SourceFormat::Microdata, &[], &[("name", "c")]),
        ]));
        let types: Vec<&str> = inventory.type_set().iter().map(String::as_str).collect();
        assert_eq!(types, vec!["Article", "JSON-LD", "Microdata"]);
    }

    #[test]
    fn test_multi_typed_record_contributes_every_type() {
        let inventory = StructuredDataInventory::build(buckets(vec![record(
            SourceFormat::JsonLd,
            &["Product", "Vehicle"],
            &[("name", "car")],
        )]));
        assert!(inventory.contains_type("Product"));
        assert!(inventory.contains_type("Vehicle"));
        assert!(inventory.index().contains_key("Product, Vehicle"));
    }

    #[test]
    fn test_index_keys_disambiguate_repeated_types() {
        let inventory = StructuredDataInventory::build(buckets(vec![
            record(SourceFormat::JsonLd, &["Organization"], &[("name", "a")]),
            record(SourceFormat::JsonLd, &["Person"], &[("name", "b")]),
            record(SourceFormat::JsonLd, &["Person"], &[("name", "c")]),
        ]));
        let keys: Vec<&str> = inventory.index().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Organization", "Person_1", "Person_2"]);
    }

    #[test]
    fn test_index_collision_across_formats_keeps_later_record() {
        let inventory = StructuredDataInventory::build(buckets(vec![
            record(SourceFormat::JsonLd, &["Organization"], &[("name", "from-jsonld")]),
            record(SourceFormat::Microdata, &["Organization"], &[("name", "from-microdata")]),
        ]));
        assert_eq!(inventory.index().len(), 1);
        let entry = &inventory.index()["Organization"];
        assert_eq!(entry.format, SourceFormat::Microdata);
        assert_eq!(inventory.record_count(), 2);
    }

    #[test]
    fn test_empty_records_and_formats_are_dropped() {
        let mut by_format = buckets(vec![record(SourceFormat::JsonLd, &["Thing"], &[])]);
        by_format.insert(SourceFormat::OpenGraph, Vec::new());
        let inventory = StructuredDataInventory::build(by_format);
        assert!(inventory.is_empty());
        assert!(inventory.type_set().is_empty());
        assert!(inventory.index().is_empty());
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let inventory = StructuredDataInventory::build(buckets(vec![
            record(SourceFormat::JsonLd, &["Event"], &[("name", "a")]),
            record(SourceFormat::JsonLd, &["Event"], &[("name", "b")]),
            record(SourceFormat::OpenGraph, &["OpenGraph"], &[("title", "t")]),
        ]));
        assert_eq!(inventory.rebuild(), inventory);
        assert_eq!(inventory.rebuild().rebuild(), inventory);
    }

    #[test]
    fn test_entries_matching_is_substring_based() {
        let inventory = StructuredDataInventory::build(buckets(vec![
            record(SourceFormat::JsonLd, &["MusicEvent"], &[("name", "gig")]),
            record(SourceFormat::Microdata, &["Event"], &[("name", "fair")]),
        ]));
        let keys: Vec<&str> = inventory
            .entries_matching("Event")
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, vec!["MusicEvent", "Event"]);
    }

    #[test]
    fn test_to_json_groups_by_format_name() {
        let inventory = StructuredDataInventory::build(buckets(vec![record(
            SourceFormat::TwitterCard,
            &["TwitterCard"],
            &[("card", "summary")],
        )]));
        let json = inventory.to_json();
        assert_eq!(json["TwitterCard"][0]["@type"], "TwitterCard");
        assert_eq!(json["TwitterCard"][0]["card"], "summary");
    }
}
