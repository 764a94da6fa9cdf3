use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use super::value::{CardValue, number_text};

/// Computes a replacement from the variable name and the whole original string.
pub type VariableCallback = Arc<dyn Fn(&str, &str) -> CardValue + Send + Sync>;

/// Value supplied for a `{variable}` placeholder.
#[derive(Clone)]
pub enum VariableValue {
    Text(String),
    Number(f64),
    /// Replaces the entire target string, not just the placeholder.
    Callback(VariableCallback),
}

/// Variable values keyed by name.
///
/// Lookups are case-insensitive; when two keys fold to the same lower-case
/// name, the one later in key order wins.
pub type VariableMap = BTreeMap<String, VariableValue>;

impl VariableValue {
    pub fn callback(f: impl Fn(&str, &str) -> CardValue + Send + Sync + 'static) -> Self {
        VariableValue::Callback(Arc::new(f))
    }

    /// Text spliced into a string; callbacks have none.
    pub fn as_text(&self) -> Option<String> {
        match self {
            VariableValue::Text(s) => Some(s.clone()),
            VariableValue::Number(n) => Some(number_text(*n)),
            VariableValue::Callback(_) => None,
        }
    }
}

impl fmt::Debug for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            VariableValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            VariableValue::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        VariableValue::Text(value.to_string())
    }
}

impl From<String> for VariableValue {
    fn from(value: String) -> Self {
        VariableValue::Text(value)
    }
}

impl From<f64> for VariableValue {
    fn from(value: f64) -> Self {
        VariableValue::Number(value)
    }
}

impl From<i32> for VariableValue {
    fn from(value: i32) -> Self {
        VariableValue::Number(f64::from(value))
    }
}

/// Build a variable map from a JSON object.
///
/// `null` entries are dropped since they never substitute; booleans and
/// nested structures are kept as their text form.
pub fn variables_from_json(map: &serde_json::Map<String, JsonValue>) -> VariableMap {
    map.iter()
        .filter_map(|(name, value)| {
            let value = match value {
                JsonValue::Null => return None,
                JsonValue::String(s) => VariableValue::Text(s.clone()),
                JsonValue::Number(n) => VariableValue::Number(n.as_f64().unwrap_or(f64::NAN)),
                JsonValue::Bool(b) => VariableValue::Text(b.to_string()),
                other => VariableValue::Text(other.to_string()),
            };
            Some((name.clone(), value))
        })
        .collect()
}
