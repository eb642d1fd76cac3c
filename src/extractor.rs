use crate::types::{ExtractConfig, KeySet};
use serde_json::{Map, Value};

/// Flattens a JSON document into the set of key paths reachable through object keys
pub struct KeyExtractor {
    config: ExtractConfig,
}

impl KeyExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        KeyExtractor { config }
    }

    /// Extract every key path in a document, starting from the root
    pub fn extract(&self, value: &Value) -> KeySet {
        self.extract_with_prefix(value, "")
    }

    /// Extract key paths below `prefix`. An empty prefix means the root.
    pub fn extract_with_prefix(&self, value: &Value, prefix: &str) -> KeySet {
        let mut keys = KeySet::new();
        self.extract_value(value, prefix, &mut keys);
        keys
    }

    fn extract_value(&self, value: &Value, prefix: &str, keys: &mut KeySet) {
        match value {
            Value::Object(obj) => self.extract_from_object(obj, prefix, keys),
            Value::Array(arr) => self.extract_from_array(arr, prefix, keys),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                // The parent already added the key that points here
            }
        }
    }

    fn extract_from_object(&self, obj: &Map<String, Value>, prefix: &str, keys: &mut KeySet) {
        for (key, value) in obj {
            let full_key = self.join(prefix, key);
            self.extract_value(value, &full_key, keys);
            keys.insert(full_key);
        }
    }

    /// Array elements share the parent's prefix; indices never enter the path.
    fn extract_from_array(&self, arr: &[Value], prefix: &str, keys: &mut KeySet) {
        for item in arr {
            self.extract_value(item, prefix, keys);
        }
    }

    fn join(&self, prefix: &str, key: &str) -> String {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}{}{}", prefix, self.config.separator, key)
        }
    }
}

impl Default for KeyExtractor {
    fn default() -> Self {
        KeyExtractor::new(ExtractConfig::default())
    }
}

/// Extract dot-separated key paths with the default configuration
pub fn extract_keys(value: &Value) -> KeySet {
    KeyExtractor::default().extract(value)
}
