use cardkit_core::vars::{Card, CardValue, VariableValue, discover_variables_deep};
use cardkit_core::{VariableMap, resolve_card_variables};
use color_eyre::eyre::{Result, WrapErr, eyre};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::VarsCommand;

pub fn run(command: VarsCommand) -> Result<()> {
    match command {
        VarsCommand::Discover { file } => {
            let card = load_card(&file)?;
            let names = discover_variables_deep(&CardValue::Mapping(card.fields));
            if names.is_empty() {
                info!(file = %file.display(), "no placeholders found");
            }
            for name in names {
                println!("{name}");
            }
        }
        VarsCommand::Resolve { file, set } => {
            let mut card = load_card(&file)?;
            if !set.is_empty() {
                let variables = card.card_variables.get_or_insert_with(VariableMap::new);
                for assignment in &set {
                    let (name, value) = parse_assignment(assignment)?;
                    variables.insert(name, value);
                }
            }
            let resolved = resolve_card_variables(None, None, None, card);
            println!("{}", serde_json::to_string_pretty(&resolved.to_json())?);
        }
    }
    Ok(())
}

/// Read a card file; `.yaml`/`.yml` files are YAML, anything else JSON.
fn load_card(path: &Path) -> Result<Card> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    let json: JsonValue = if is_yaml {
        serde_yaml::from_str(&text)
            .wrap_err_with(|| format!("failed to parse {}", path.display()))?
    } else {
        serde_json::from_str(&text)
            .wrap_err_with(|| format!("failed to parse {}", path.display()))?
    };

    Card::from_json(json).wrap_err_with(|| format!("invalid card in {}", path.display()))
}

/// Parse `NAME=VALUE`; values that read as finite numbers become numbers.
fn parse_assignment(assignment: &str) -> Result<(String, VariableValue)> {
    let (name, value) = assignment
        .split_once('=')
        .ok_or_else(|| eyre!("expected NAME=VALUE, got {assignment:?}"))?;
    if name.is_empty() {
        return Err(eyre!("missing variable name in {assignment:?}"));
    }

    let value = match value.parse::<f64>() {
        Ok(n) if n.is_finite() => VariableValue::Number(n),
        _ => VariableValue::Text(value.to_string()),
    };
    Ok((name.to_string(), value))
}
