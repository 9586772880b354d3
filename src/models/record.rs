//! Entity records: one structured-data item each.

use serde_json::{Map, Value};

use super::format::SourceFormat;
use super::value::{properties_to_json, PropertyMap, PropertyValue};

/// JSON-LD key carrying the type tag(s) of an item.
pub const TYPE_KEY: &str = "@type";

/// One structured-data item extracted from a document.
///
/// Records are built once during extraction and never patched afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRecord {
    /// Type tags; usually one, empty when the source carried none
    pub types: Vec<String>,
    /// Properties in source order, the type tags excluded
    pub properties: PropertyMap,
    /// Format the record was extracted from
    pub format: SourceFormat,
}

impl EntityRecord {
    /// Creates an empty, untyped record.
    pub fn new(format: SourceFormat) -> Self {
        Self {
            types: Vec::new(),
            properties: PropertyMap::new(),
            format,
        }
    }

    /// Creates an empty record with a single type tag.
    pub fn with_type(format: SourceFormat, type_name: &str) -> Self {
        Self {
            types: vec![type_name.to_string()],
            properties: PropertyMap::new(),
            format,
        }
    }

    /// Builds a record from a JSON object, lifting `@type` out of the properties.
    ///
    /// `@type` may be a string or an array of strings; other shapes carry no
    /// usable tag and are dropped.
    pub fn from_json_object(mut object: Map<String, Value>, format: SourceFormat) -> Self {
        let types = match object.shift_remove(TYPE_KEY) {
            Some(Value::String(s)) => vec![s],
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };

        let properties = object
            .into_iter()
            .map(|(key, value)| (key, PropertyValue::from(value)))
            .collect();

        Self {
            types,
            properties,
            format,
        }
    }

    /// Returns `true` if the record carries at least one property.
    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }

    /// Types this record contributes to a document's type set.
    ///
    /// An untyped record contributes its format name as a synthetic type.
    pub fn effective_types(&self) -> Vec<&str> {
        if self.types.is_empty() {
            vec![self.format.as_str()]
        } else {
            self.types.iter().map(String::as_str).collect()
        }
    }

    /// Label used to build index keys: the type tags joined with `", "`,
    /// or the format name when untyped.
    pub fn type_label(&self) -> String {
        self.effective_types().join(", ")
    }

    /// Iterates over property names in source order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Properties only, as a JSON object.
    pub fn properties_json(&self) -> Value {
        properties_to_json(&self.properties)
    }

    /// Full record as a JSON object: `@type` first (a string for one tag, an
    /// array for several, absent when untyped), then the properties.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        match self.types.as_slice() {
            [] => {}
            [single] => {
                object.insert(TYPE_KEY.to_string(), Value::String(single.clone()));
            }
            many => {
                object.insert(
                    TYPE_KEY.to_string(),
                    Value::Array(many.iter().cloned().map(Value::String).collect()),
                );
            }
        }
        for (key, value) in &self.properties {
            object.insert(key.clone(), value.to_json());
        }
        Value::Object(object)
    }
}
