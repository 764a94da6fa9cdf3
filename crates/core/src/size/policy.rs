use crate::diagnostics::DiagnosticsSink;

use super::types::CardSize;

/// Maximum number of attributes a value card can show at `size`.
///
/// Sizes without a budget keep `current`.
pub fn max_attribute_count(size: CardSize, current: usize) -> usize {
    match size {
        CardSize::Small => 1,
        CardSize::SmallWide => 2,
        CardSize::MediumThin | CardSize::Medium | CardSize::MediumWide => 3,
        CardSize::Large => 5,
        CardSize::LargeThin | CardSize::LargeWide => 7,
        _ => current,
    }
}

/// Promote sizes too small for a chart to render legibly.
pub fn ensure_chart_size(
    size: CardSize,
    card_name: &str,
    sink: &dyn DiagnosticsSink,
) -> CardSize {
    match size {
        CardSize::Small | CardSize::SmallWide => {
            sink.warn(&format!("{card_name} does not support card size {size}"));
            if size == CardSize::Small { CardSize::Medium } else { CardSize::MediumWide }
        }
        other => other,
    }
}

/// Decimal digits to display for `value` on a card of `size`.
///
/// `None` leaves the choice to the formatter's locale defaults.
pub fn determine_precision(
    size: CardSize,
    value: f64,
    precision: Option<u32>,
) -> Option<u32> {
    if is_integer(value) {
        return Some(0);
    }
    // No room for decimals on a small card.
    if size == CardSize::Small && precision.is_none() {
        return (value.abs() > 9.0).then_some(0);
    }
    precision
}

pub(crate) fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
