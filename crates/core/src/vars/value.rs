use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

/// Key marking a JSON object as an opaque render node.
pub const NODE_TAG: &str = "$node";

/// Card data keyed by property name, in key order.
pub type Mapping = BTreeMap<String, CardValue>;

/// Externally rendered content embedded in card data.
///
/// Implementors are carried through variable resolution untouched.
pub trait RenderNode: fmt::Debug + Send + Sync {
    fn kind(&self) -> &str;

    /// Representation used when the card is serialized.
    fn to_json(&self) -> JsonValue;
}

/// Shared handle to a [`RenderNode`]; equality is identity.
#[derive(Clone, Debug)]
pub struct NodeRef(Arc<dyn RenderNode>);

impl NodeRef {
    pub fn new(node: impl RenderNode + 'static) -> Self {
        Self(Arc::new(node))
    }

    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn node(&self) -> &dyn RenderNode {
        self.0.as_ref()
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// Render node loaded from a `{"$node": ...}` object in a card file.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonNode(pub JsonValue);

impl RenderNode for JsonNode {
    fn kind(&self) -> &str {
        self.0.get(NODE_TAG).and_then(JsonValue::as_str).unwrap_or("node")
    }

    fn to_json(&self) -> JsonValue {
        self.0.clone()
    }
}

/// One node of card configuration data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CardValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Sequence(Vec<CardValue>),
    Mapping(Mapping),
    Node(NodeRef),
}

impl CardValue {
    pub fn node(node: impl RenderNode + 'static) -> Self {
        CardValue::Node(NodeRef::new(node))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CardValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CardValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            CardValue::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            CardValue::Null => "null",
            CardValue::Bool(_) => "boolean",
            CardValue::Number(_) => "number",
            CardValue::Text(_) => "string",
            CardValue::Sequence(_) => "array",
            CardValue::Mapping(_) => "object",
            CardValue::Node(_) => "node",
        }
    }
}

impl From<&str> for CardValue {
    fn from(value: &str) -> Self {
        CardValue::Text(value.to_string())
    }
}

impl From<String> for CardValue {
    fn from(value: String) -> Self {
        CardValue::Text(value)
    }
}

impl From<f64> for CardValue {
    fn from(value: f64) -> Self {
        CardValue::Number(value)
    }
}

impl From<bool> for CardValue {
    fn from(value: bool) -> Self {
        CardValue::Bool(value)
    }
}

impl From<Vec<CardValue>> for CardValue {
    fn from(value: Vec<CardValue>) -> Self {
        CardValue::Sequence(value)
    }
}

impl From<Mapping> for CardValue {
    fn from(value: Mapping) -> Self {
        CardValue::Mapping(value)
    }
}

impl From<JsonValue> for CardValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => CardValue::Null,
            JsonValue::Bool(b) => CardValue::Bool(b),
            JsonValue::Number(n) => CardValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => CardValue::Text(s),
            JsonValue::Array(items) => {
                CardValue::Sequence(items.into_iter().map(CardValue::from).collect())
            }
            JsonValue::Object(map) if map.contains_key(NODE_TAG) => {
                CardValue::node(JsonNode(JsonValue::Object(map)))
            }
            JsonValue::Object(map) => CardValue::Mapping(
                map.into_iter().map(|(k, v)| (k, CardValue::from(v))).collect(),
            ),
        }
    }
}

impl Serialize for CardValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CardValue::Null => serializer.serialize_unit(),
            CardValue::Bool(b) => serializer.serialize_bool(*b),
            CardValue::Number(n) if is_safe_integer(*n) => serializer.serialize_i64(*n as i64),
            CardValue::Number(n) => serializer.serialize_f64(*n),
            CardValue::Text(s) => serializer.serialize_str(s),
            CardValue::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            CardValue::Mapping(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
            CardValue::Node(node) => node.node().to_json().serialize(serializer),
        }
    }
}

fn is_safe_integer(n: f64) -> bool {
    n.fract() == 0.0 && n.abs() <= 9_007_199_254_740_991.0
}

/// Text form of a number as spliced into a string.
///
/// Magnitudes outside `[1e-6, 1e21)` use exponent form with an explicit
/// sign on positive exponents (`1e+21`, `1.5e-7`).
pub(crate) fn number_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if (1e-6..1e21).contains(&n.abs()) {
        n.to_string()
    } else {
        let sci = format!("{n:e}");
        match sci.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => sci,
        }
    }
}
