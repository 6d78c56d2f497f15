//! Layered value sources for placeholder substitution.
//!
//! A prompt draws its values from four layers, lowest precedence first:
//!
//! | Layer | Supplied by |
//! |-------|-------------|
//! | `global` | profile values shared by every task of an app |
//! | `task_defaults` | field `default_value`s and task-level values |
//! | `fields` | the end user's form submission |
//! | `runtime` | the embedding application at generation time |
//!
//! On a key collision the later layer wins.

use serde_json::Value;
use std::collections::BTreeMap;

/// The four value layers feeding one composition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueLayers {
    pub global: BTreeMap<String, String>,
    pub task_defaults: BTreeMap<String, String>,
    pub fields: BTreeMap<String, String>,
    pub runtime: BTreeMap<String, String>,
}

impl ValueLayers {
    /// Merge the layers into one mapping, later layers overwriting earlier ones.
    pub fn merged(&self) -> BTreeMap<String, String> {
        let mut merged = BTreeMap::new();
        for layer in [
            &self.global,
            &self.task_defaults,
            &self.fields,
            &self.runtime,
        ] {
            for (key, value) in layer {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}

/// Render a JSON value as substitution text.
///
/// `null` becomes the empty string, strings are taken verbatim, numbers and
/// booleans use their JSON text, arrays join their items with `", "`, and
/// objects are written as compact JSON.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(stringify_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

/// Stringify every entry of a JSON object.
pub fn stringify_map(map: &serde_json::Map<String, Value>) -> BTreeMap<String, String> {
    map.iter()
        .map(|(key, value)| (key.clone(), stringify_value(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn layer(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_merge_precedence() {
        let layers = ValueLayers {
            global: layer(&[("name", "global"), ("only_global", "g")]),
            task_defaults: layer(&[("name", "default"), ("tone", "formal")]),
            fields: layer(&[("name", "field"), ("tone", "casual")]),
            runtime: layer(&[("name", "runtime")]),
        };

        let merged = layers.merged();
        assert_eq!(merged.get("name"), Some(&"runtime".to_string()));
        assert_eq!(merged.get("tone"), Some(&"casual".to_string()));
        assert_eq!(merged.get("only_global"), Some(&"g".to_string()));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_empty_later_value_still_overwrites() {
        let layers = ValueLayers {
            task_defaults: layer(&[("tone", "formal")]),
            fields: layer(&[("tone", "")]),
            ..Default::default()
        };
        assert_eq!(layers.merged().get("tone"), Some(&String::new()));
    }

    #[test]
    fn test_merge_empty_layers() {
        assert!(ValueLayers::default().merged().is_empty());
    }

    #[test]
    fn test_stringify_value() {
        assert_eq!(stringify_value(&json!(null)), "");
        assert_eq!(stringify_value(&json!("text")), "text");
        assert_eq!(stringify_value(&json!(42)), "42");
        assert_eq!(stringify_value(&json!(1.5)), "1.5");
        assert_eq!(stringify_value(&json!(false)), "false");
        assert_eq!(stringify_value(&json!(["a", 1, null])), "a, 1, ");
        assert_eq!(stringify_value(&json!({"k": "v"})), r#"{"k":"v"}"#);
    }

    #[test]
    fn test_stringify_map() {
        let value = json!({"name": "Sam", "count": 3, "missing": null});
        let map = stringify_map(value.as_object().unwrap());
        assert_eq!(map.get("name"), Some(&"Sam".to_string()));
        assert_eq!(map.get("count"), Some(&"3".to_string()));
        assert_eq!(map.get("missing"), Some(&String::new()));
    }
}
