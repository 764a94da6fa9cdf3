use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::debug;

use super::discovery::discover_variables_deep;
use super::substitute::{substitute, substitute_mapping};
use super::value::{CardValue, Mapping};
use super::variable::{VariableMap, VariableValue, variables_from_json};

/// Key holding a card's variable values in card files.
pub const CARD_VARIABLES_KEY: &str = "cardVariables";

#[derive(Debug, Error)]
pub enum CardError {
    #[error("card must be an object, got {0}")]
    NotAnObject(&'static str),

    #[error("cardVariables must be an object, got {0}")]
    VariablesNotAnObject(&'static str),
}

/// A card's configuration plus the values for its placeholders.
#[derive(Debug, Clone, Default)]
pub struct Card {
    pub fields: Mapping,
    pub card_variables: Option<VariableMap>,
}

impl Card {
    pub fn new(fields: Mapping) -> Self {
        Self { fields, card_variables: None }
    }

    #[must_use]
    pub fn with_variables(mut self, variables: VariableMap) -> Self {
        self.card_variables = Some(variables);
        self
    }

    pub fn get(&self, key: &str) -> Option<&CardValue> {
        self.fields.get(key)
    }

    /// Load a card from a JSON object; `cardVariables` is split off.
    pub fn from_json(value: JsonValue) -> Result<Self, CardError> {
        let JsonValue::Object(mut map) = value else {
            return Err(CardError::NotAnObject(json_type_name(&value)));
        };

        let card_variables = match map.remove(CARD_VARIABLES_KEY) {
            None => None,
            Some(JsonValue::Object(vars)) => Some(variables_from_json(&vars)),
            Some(other) => return Err(CardError::VariablesNotAnObject(json_type_name(&other))),
        };

        let fields = map.into_iter().map(|(k, v)| (k, CardValue::from(v))).collect();
        Ok(Self { fields, card_variables })
    }

    /// JSON form of the card. Callback variables have no JSON form and are left out.
    pub fn to_json(&self) -> JsonValue {
        let mut out = serde_json::to_value(&self.fields)
            .ok()
            .and_then(|v| match v {
                JsonValue::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default();

        if let Some(vars) = &self.card_variables {
            let vars: serde_json::Map<String, JsonValue> = vars
                .iter()
                .filter_map(|(name, value)| {
                    let json = match value {
                        VariableValue::Text(s) => JsonValue::from(s.clone()),
                        VariableValue::Number(n) => serde_json::to_value(CardValue::Number(*n)).ok()?,
                        VariableValue::Callback(_) => return None,
                    };
                    Some((name.clone(), json))
                })
                .collect();
            out.insert(CARD_VARIABLES_KEY.to_string(), JsonValue::Object(vars));
        }

        JsonValue::Object(out)
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Properties passed alongside a card; they lead the merged field order.
const POSITIONAL_KEYS: [&str; 3] = ["title", "content", "values"];

/// Merge the positional card properties into `card` and resolve its variables.
///
/// Fields already present on `card` win over `title`, `content` and
/// `values`. Without card variables the merged card is returned as is.
/// Otherwise placeholders are discovered in the positional properties, then
/// the remaining fields in key order, then the text variable values, and
/// substituted everywhere, including inside the variable values themselves.
/// Callback variables come back unchanged.
pub fn resolve_card_variables(
    title: Option<CardValue>,
    content: Option<CardValue>,
    values: Option<CardValue>,
    card: Card,
) -> Card {
    let mut merged = Mapping::new();
    for (key, value) in POSITIONAL_KEYS.into_iter().zip([title, content, values]) {
        if let Some(value) = value {
            merged.insert(key.to_string(), value);
        }
    }
    merged.extend(card.fields);

    let Some(card_variables) = card.card_variables else {
        return Card::new(merged);
    };

    let names = discover_card_variables(&merged, &card_variables);
    debug!(variables = ?names, "resolving card variables");
    let fields = substitute_mapping(&names, &card_variables, &merged);
    let resolved_variables = substitute_variables(&names, &card_variables);

    Card { fields, card_variables: Some(resolved_variables) }
}

fn discover_card_variables(fields: &Mapping, variables: &VariableMap) -> Vec<String> {
    let positional = POSITIONAL_KEYS.iter().filter_map(|key| fields.get(*key));
    let rest = fields
        .iter()
        .filter(|(key, _)| !POSITIONAL_KEYS.contains(&key.as_str()))
        .map(|(_, value)| value);

    let variable_texts: Mapping = variables
        .iter()
        .filter_map(|(name, value)| match value {
            VariableValue::Text(text) => Some((name.clone(), CardValue::Text(text.clone()))),
            _ => None,
        })
        .collect();

    let mut ordered: Vec<CardValue> = positional.chain(rest).cloned().collect();
    ordered.push(CardValue::Mapping(variable_texts));
    discover_variables_deep(&CardValue::Sequence(ordered))
}

/// Substitute inside text variable values, looking values up in the
/// original map. Results that are neither text nor a number keep the
/// original value.
fn substitute_variables(names: &[String], variables: &VariableMap) -> VariableMap {
    variables
        .iter()
        .map(|(name, value)| {
            let resolved = match value {
                VariableValue::Text(text) => {
                    match substitute(names, variables, &CardValue::Text(text.clone())) {
                        CardValue::Text(text) => VariableValue::Text(text),
                        CardValue::Number(n) => VariableValue::Number(n),
                        _ => value.clone(),
                    }
                }
                other => other.clone(),
            };
            (name.clone(), resolved)
        })
        .collect()
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_splits_variables() {
        let card = Card::from_json(json!({
            "title": "{site} load",
            "cardVariables": {"site": "Boston"}
        }))
        .unwrap();
        assert_eq!(card.get("title"), Some(&CardValue::from("{site} load")));
        assert!(card.get(CARD_VARIABLES_KEY).is_none());
        assert_eq!(card.card_variables.unwrap().len(), 1);
    }

    #[test]
    fn from_json_rejects_non_objects() {
        assert!(matches!(Card::from_json(json!([1, 2])), Err(CardError::NotAnObject("array"))));
        assert!(matches!(
            Card::from_json(json!({"cardVariables": "nope"})),
            Err(CardError::VariablesNotAnObject("string"))
        ));
    }

    #[test]
    fn to_json_round_trips_plain_values() {
        let source = json!({
            "title": "Pressure",
            "size": "MEDIUM",
            "cardVariables": {"limit": 7, "unit": "psi"}
        });
        let card = Card::from_json(source.clone()).unwrap();
        assert_eq!(card.to_json(), source);
    }
}
