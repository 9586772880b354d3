//! Property values of structured-data records.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Insertion-ordered property name → value mapping.
pub type PropertyMap = IndexMap<String, PropertyValue>;

/// A single property value.
///
/// Nested schema.org objects (e.g. `author.name`) are kept as `Nested` maps so
/// nothing is flattened away; JSON-LD numbers, booleans and nulls stay `Literal`
/// so they serialize back exactly as they were written.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A scalar string
    Text(String),
    /// A non-string JSON scalar (number, boolean or null)
    Literal(Value),
    /// A nested object, `@type` included when the source carried one
    Nested(PropertyMap),
    /// A list of values
    List(Vec<PropertyValue>),
}

impl PropertyValue {
    /// Returns the string content of a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Converts the value back into a `serde_json::Value`.
    pub fn to_json(&self) -> Value {
        match self {
            PropertyValue::Text(s) => Value::String(s.clone()),
            PropertyValue::Literal(v) => v.clone(),
            PropertyValue::Nested(map) => properties_to_json(map),
            PropertyValue::List(items) => Value::Array(items.iter().map(|v| v.to_json()).collect()),
        }
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => PropertyValue::Text(s),
            Value::Array(items) => {
                PropertyValue::List(items.into_iter().map(PropertyValue::from).collect())
            }
            Value::Object(map) => PropertyValue::Nested(
                map.into_iter()
                    .map(|(key, value)| (key, PropertyValue::from(value)))
                    .collect(),
            ),
            other => PropertyValue::Literal(other),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyValue::Text(s) => serializer.serialize_str(s),
            PropertyValue::Literal(v) => v.serialize(serializer),
            PropertyValue::Nested(map) => map.serialize(serializer),
            PropertyValue::List(items) => items.serialize(serializer),
        }
    }
}

/// Renders a property map as a JSON object, keeping insertion order.
pub fn properties_to_json(map: &PropertyMap) -> Value {
    let mut object = Map::new();
    for (key, value) in map {
        object.insert(key.clone(), value.to_json());
    }
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_keeps_nested_objects() {
        let value = PropertyValue::from(json!({"@type": "Person", "name": "Jane"}));
        match value {
            PropertyValue::Nested(map) => {
                assert_eq!(map.get("name").and_then(|v| v.as_text()), Some("Jane"));
                assert_eq!(map.get("@type").and_then(|v| v.as_text()), Some("Person"));
            }
            other => panic!("expected nested value, got {:?}", other),
        }
    }

    #[test]
    fn test_literals_survive_conversion() {
        let original = json!({"ratingValue": 4.5, "reviewCount": 12, "isFamilyFriendly": true, "x": null});
        let value = PropertyValue::from(original.clone());
        assert_eq!(value.to_json(), original);
    }

    #[test]
    fn test_serialize_matches_to_json() {
        let value = PropertyValue::from(json!(["a", {"b": 1}]));
        let serialized = serde_json::to_value(&value).unwrap();
        assert_eq!(serialized, value.to_json());
    }

    #[test]
    fn test_properties_to_json_preserves_order() {
        let mut map = PropertyMap::new();
        map.insert("zeta".to_string(), "z".into());
        map.insert("alpha".to_string(), "a".into());
        let rendered = serde_json::to_string(&properties_to_json(&map)).unwrap();
        assert_eq!(rendered, r#"{"zeta":"z","alpha":"a"}"#);
    }
}
