use std::collections::HashMap;

use super::value::{CardValue, Mapping};
use super::variable::{VariableMap, VariableValue};

/// Replace `variables` inside `target` with values from `values`.
///
/// Sequences and mappings are rebuilt with every element substituted;
/// render nodes and non-text primitives come back unchanged. For a string,
/// variables are applied one after another in the given order:
///
/// 1. a numeric value whose placeholder is the whole string turns the result
///    into that number;
/// 2. a callback value replaces the whole result with
///    `callback(variable, original)`;
/// 3. otherwise, while the result is still text, every `{variable}` is
///    replaced by the value's text.
///
/// Placeholders without a value are left as they are. Later variables see
/// the output of earlier ones; the result is never re-scanned.
pub fn substitute(variables: &[String], values: &VariableMap, target: &CardValue) -> CardValue {
    match target {
        CardValue::Sequence(items) => CardValue::Sequence(
            items.iter().map(|item| substitute(variables, values, item)).collect(),
        ),
        CardValue::Mapping(map) => CardValue::Mapping(substitute_mapping(variables, values, map)),
        CardValue::Text(text) => substitute_text(variables, &fold_case(values), text),
        other => other.clone(),
    }
}

pub(crate) fn substitute_mapping(
    variables: &[String],
    values: &VariableMap,
    map: &Mapping,
) -> Mapping {
    map.iter()
        .map(|(key, value)| (key.clone(), substitute(variables, values, value)))
        .collect()
}

/// Lower-case every key; on collision the later key in map order wins.
fn fold_case(values: &VariableMap) -> HashMap<String, &VariableValue> {
    values.iter().map(|(name, value)| (name.to_lowercase(), value)).collect()
}

fn substitute_text(
    variables: &[String],
    folded: &HashMap<String, &VariableValue>,
    target: &str,
) -> CardValue {
    let mut updated = CardValue::Text(target.to_string());

    for variable in variables {
        let key = variable.to_lowercase();
        let Some(value) = folded.get(&key) else {
            continue;
        };
        match value {
            VariableValue::Number(n) if is_whole_placeholder(target, &key) => {
                updated = CardValue::Number(*n);
            }
            VariableValue::Callback(callback) => {
                updated = callback(variable, target);
            }
            other => {
                if let (CardValue::Text(current), Some(replacement)) =
                    (&mut updated, other.as_text())
                {
                    *current = current.replace(&format!("{{{variable}}}"), &replacement);
                }
            }
        }
    }

    updated
}

fn is_whole_placeholder(target: &str, folded_name: &str) -> bool {
    target
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .is_some_and(|inner| inner.to_lowercase() == folded_name)
}
