use cardkit_core::config::ResolvedConfig;
use cardkit_core::{CardSize, CardValue, format_chart_value, format_magnitude, format_plain};
use color_eyre::eyre::{Result, WrapErr};

use crate::{ChartValueArgs, FormatArgs};

pub fn run(cfg: &ResolvedConfig, args: &FormatArgs) {
    let text = if args.plain {
        format_plain(args.value, args.precision, &cfg.locale)
    } else {
        format_magnitude(args.value, args.precision, &cfg.locale)
    };
    println!("{text}");
}

pub fn run_chart_value(cfg: &ResolvedConfig, args: &ChartValueArgs) -> Result<()> {
    let size: CardSize = args.size.parse().wrap_err("invalid --size")?;
    println!("{}", format_chart_value(&parse_value(&args.value), size, args.unit.as_deref(), &cfg.locale));
    Ok(())
}

/// Read a command-line value as JSON, falling back to plain text.
fn parse_value(raw: &str) -> CardValue {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(CardValue::from)
        .unwrap_or_else(|_| CardValue::Text(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_reads_json_scalars() {
        assert_eq!(parse_value("12.5"), CardValue::Number(12.5));
        assert_eq!(parse_value("null"), CardValue::Null);
        assert_eq!(parse_value("\"12\""), CardValue::Text("12".into()));
    }

    #[test]
    fn parse_value_falls_back_to_text() {
        assert_eq!(parse_value("n/a"), CardValue::Text("n/a".into()));
    }
}
