use cardkit_core::config::ResolvedConfig;
use cardkit_core::diagnostics::sink_for;
use cardkit_core::{CardSize, ensure_chart_size, max_attribute_count, migrate_legacy_size};
use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::SizeArgs;

/// Size policy for JSON output.
#[derive(Debug, Serialize)]
struct SizePolicy {
    size: CardSize,
    deprecated: bool,
    displayed_as: CardSize,
    max_attributes: usize,
    chart_size: CardSize,
}

#[derive(Tabled)]
struct PolicyRow {
    #[tabled(rename = "Property")]
    property: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn run(cfg: &ResolvedConfig, args: &SizeArgs) -> Result<()> {
    let size: CardSize = args.size.parse().wrap_err("invalid card size")?;
    let sink = sink_for(cfg.diagnostics.dev_warnings);
    let card_name = args.card.as_deref().unwrap_or("Chart");

    let displayed_as = migrate_legacy_size(size, sink.as_ref());
    let policy = SizePolicy {
        size,
        deprecated: size.is_deprecated(),
        displayed_as,
        max_attributes: max_attribute_count(displayed_as, args.attributes),
        chart_size: ensure_chart_size(displayed_as, card_name, sink.as_ref()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&policy)?);
        return Ok(());
    }

    let rows = vec![
        PolicyRow { property: "size", value: policy.size.to_string() },
        PolicyRow { property: "deprecated", value: policy.deprecated.to_string() },
        PolicyRow { property: "displayed as", value: policy.displayed_as.to_string() },
        PolicyRow { property: "max attributes", value: policy.max_attributes.to_string() },
        PolicyRow { property: "chart size", value: policy.chart_size.to_string() },
    ];
    println!("{}", Table::new(&rows).with(Style::rounded()));
    Ok(())
}
