use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::value::CardValue;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-zA-Z0-9_-]+)\}").expect("valid regex"));

/// Find `{name}` placeholders in a string.
///
/// Names come back in order of appearance with duplicates kept; `None` when
/// there are no placeholders.
///
/// ```
/// use cardkit_core::discover_variables;
///
/// let vars = discover_variables("{manufacturer} over the last {hours} hours");
/// assert_eq!(vars, Some(vec!["manufacturer".to_string(), "hours".to_string()]));
/// ```
pub fn discover_variables(text: &str) -> Option<Vec<String>> {
    let names: Vec<String> =
        PLACEHOLDER.captures_iter(text).map(|caps| caps[1].to_string()).collect();
    (!names.is_empty()).then_some(names)
}

/// Like [`discover_variables`], but `None` for anything that is not text.
pub fn discover_value_variables(value: &CardValue) -> Option<Vec<String>> {
    value.as_text().and_then(discover_variables)
}

/// Every distinct placeholder name found below `value`.
///
/// Walks mappings and sequences recursively, skipping render nodes. Names
/// are unique and listed in first-appearance order.
pub fn discover_variables_deep(value: &CardValue) -> Vec<String> {
    let mut found = Vec::new();
    match value {
        CardValue::Mapping(map) => collect(map.values(), &mut found),
        CardValue::Sequence(items) => collect(items.iter(), &mut found),
        _ => {}
    }
    dedupe(found)
}

fn collect<'a>(children: impl Iterator<Item = &'a CardValue>, found: &mut Vec<String>) {
    for child in children {
        match child {
            CardValue::Mapping(map) => collect(map.values(), found),
            CardValue::Sequence(items) => collect(items.iter(), found),
            CardValue::Text(text) => {
                if let Some(names) = discover_variables(text) {
                    found.extend(names);
                }
            }
            _ => {}
        }
    }
}

fn dedupe(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names.into_iter().filter(|name| seen.insert(name.clone())).collect()
}
