//! Canonical example resolution.
//!
//! Maps a structured-data type name to a representative schema.org payload that
//! can be offered as a template for a missing type. Resolution never fails:
//! unknown names get a synthesized minimal example.
//!
//! Lookup order, first match wins:
//! 1. exact key
//! 2. ASCII case-insensitive key
//! 3. first key (in table order) that contains the name or is contained in it
//! 4. synthesized fallback

mod table;

use serde_json::{Map, Value};

use crate::config::{CONTEXT_KEY, EXAMPLE_URL, SCHEMA_CONTEXT};
use crate::models::TYPE_KEY;
use table::CANONICAL_TABLE;

/// How a type name was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Exact table key
    Exact,
    /// Table key differing only in ASCII case
    CaseInsensitive,
    /// First table key sharing a substring relation with the name
    Substring,
    /// No table match; example synthesized from the name
    Fallback,
}

/// Returns the canonical example payload for `type_name`.
///
/// # Example
///
/// ```
/// let example = schema_gap::resolve("FAQPage");
/// assert_eq!(example["@type"], "FAQPage");
///
/// let unknown = schema_gap::resolve("CustomWidget");
/// assert_eq!(unknown["@type"], "CustomWidget");
/// ```
pub fn resolve(type_name: &str) -> Value {
    resolve_with_kind(type_name).0
}

/// Same as [`resolve`], also reporting which lookup step matched.
pub fn resolve_with_kind(type_name: &str) -> (Value, Resolution) {
    if let Some((_, example)) = CANONICAL_TABLE.iter().find(|(key, _)| *key == type_name) {
        return (example.clone(), Resolution::Exact);
    }

    if type_name.is_empty() {
        return (fallback_example(type_name), Resolution::Fallback);
    }

    if let Some((key, example)) = CANONICAL_TABLE
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(type_name))
    {
        log::debug!("Resolved '{}' to canonical '{}' ignoring case", type_name, key);
        return (example.clone(), Resolution::CaseInsensitive);
    }

    if let Some((key, example)) = CANONICAL_TABLE
        .iter()
        .find(|(key, _)| key.contains(type_name) || type_name.contains(*key))
    {
        log::debug!("Resolved '{}' to canonical '{}' by substring", type_name, key);
        return (example.clone(), Resolution::Substring);
    }

    log::debug!("No canonical example for '{}', synthesizing one", type_name);
    (fallback_example(type_name), Resolution::Fallback)
}

/// Names of every canonical example, in lookup order.
pub fn canonical_type_names() -> impl Iterator<Item = &'static str> {
    CANONICAL_TABLE.iter().map(|(key, _)| *key)
}

/// Minimal generic example: context marker, the name verbatim as `@type`, and
/// placeholder `name` / `description` / `url`.
fn fallback_example(type_name: &str) -> Value {
    let mut object = Map::new();
    object.insert(
        CONTEXT_KEY.to_string(),
        Value::String(SCHEMA_CONTEXT.to_string()),
    );
    object.insert(TYPE_KEY.to_string(), Value::String(type_name.to_string()));
    object.insert(
        "name".to_string(),
        Value::String(format!("Example {type_name}")),
    );
    object.insert(
        "description".to_string(),
        Value::String(format!("Description for {type_name}")),
    );
    object.insert("url".to_string(), Value::String(EXAMPLE_URL.to_string()));
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_broad_coverage() {
        let names: Vec<&str> = canonical_type_names().collect();
        assert!(names.len() >= 90, "only {} canonical entries", names.len());
        for expected in [
            "Thing", "Action", "Article", "Event", "Organization", "Place", "Person", "Product",
            "Offer", "Review", "BreadcrumbList", "FAQPage", "HowTo", "OpenGraph", "TwitterCard",
            "MetaTags",
        ] {
            assert!(names.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_table_keys_are_unique() {
        let names: Vec<&str> = canonical_type_names().collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_every_entry_is_a_typed_object_with_context() {
        for (key, example) in CANONICAL_TABLE.iter() {
            assert!(example.is_object(), "{} is not an object", key);
            assert_eq!(example[CONTEXT_KEY], SCHEMA_CONTEXT, "{} lacks @context", key);
            assert!(example[TYPE_KEY].is_string(), "{} lacks @type", key);
        }
    }

    #[test]
    fn test_exact_match() {
        let (example, kind) = resolve_with_kind("FAQPage");
        assert_eq!(kind, Resolution::Exact);
        assert_eq!(example[TYPE_KEY], "FAQPage");
    }

    #[test]
    fn test_case_insensitive_match() {
        let (example, kind) = resolve_with_kind("faqpage");
        assert_eq!(kind, Resolution::CaseInsensitive);
        assert_eq!(example[TYPE_KEY], "FAQPage");
    }

    #[test]
    fn test_substring_match_takes_first_table_hit() {
        // "Thing" is the first key contained in "ThingGroup"
        let (example, kind) = resolve_with_kind("ThingGroup");
        assert_eq!(kind, Resolution::Substring);
        assert_eq!(example[TYPE_KEY], "Thing");

        // "Concert" is contained in no key; "Event" is the first key contained in it
        let (example, kind) = resolve_with_kind("ConcertEvent");
        assert_eq!(kind, Resolution::Substring);
        assert_eq!(example[TYPE_KEY], "Event");
    }

    #[test]
    fn test_legacy_meta_formats_map_to_web_page() {
        assert_eq!(resolve("OpenGraph")[TYPE_KEY], "WebPage");
        assert_eq!(resolve("TwitterCard")[TYPE_KEY], "WebPage");
        assert_eq!(resolve("MetaTags")[TYPE_KEY], "WebPage");
    }

    #[test]
    fn test_fallback_uses_name_verbatim() {
        let (example, kind) = resolve_with_kind("JSON-LD");
        assert_eq!(kind, Resolution::Fallback);
        assert_eq!(example[TYPE_KEY], "JSON-LD");
        assert_eq!(example[CONTEXT_KEY], SCHEMA_CONTEXT);
        assert_eq!(example["name"], "Example JSON-LD");
        assert_eq!(example["url"], EXAMPLE_URL);
    }

    #[test]
    fn test_empty_name_falls_back() {
        let (example, kind) = resolve_with_kind("");
        assert_eq!(kind, Resolution::Fallback);
        assert_eq!(example[TYPE_KEY], "");
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_resolve_is_total_and_typed(name in "[A-Za-z0-9 _-]{1,24}") {
            let (example, kind) = resolve_with_kind(&name);
            prop_assert!(example.is_object());
            prop_assert!(example[TYPE_KEY].is_string());
            if kind == Resolution::Fallback {
                prop_assert_eq!(example[TYPE_KEY].as_str(), Some(name.as_str()));
            }
        }
    }
}
