use crate::diagnostics::DiagnosticsSink;

use super::types::CardSize;

/// Map a deprecated size name onto its current equivalent.
pub fn migrate_legacy_size(size: CardSize, sink: &dyn DiagnosticsSink) -> CardSize {
    let replacement = match size {
        CardSize::XSmall => CardSize::Small,
        CardSize::XSmallWide => CardSize::SmallWide,
        CardSize::Wide => CardSize::MediumWide,
        CardSize::Tall => CardSize::LargeThin,
        CardSize::XLarge => CardSize::LargeWide,
        current => return current,
    };
    sink.warn(&format!(
        "You have set your card to a {size} size. This size name is deprecated. \
         The card will be displayed as a {replacement} size."
    ));
    replacement
}
