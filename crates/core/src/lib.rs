#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Utility layer behind dashboard cards: time ranges, size policies,
//! display number formatting and `{variable}` substitution.

pub mod config;
pub mod diagnostics;
pub mod fetch;
pub mod format;
pub mod range;
pub mod size;
pub mod vars;

pub use diagnostics::{DevWarnings, DiagnosticsSink, RecordingSink, Silent};
pub use format::{format_chart_value, format_magnitude, format_plain};
pub use range::{
    Grain, RangeDescriptor, RangeInterval, RangeKind, RangeToken, TimeWindow,
    compare_grains, resolve_range,
};
pub use size::{
    CardSize, determine_precision, ensure_chart_size, max_attribute_count,
    migrate_legacy_size,
};
pub use vars::{
    Card, CardValue, Mapping, NodeRef, RenderNode, VariableMap, VariableValue,
    discover_variables, discover_variables_deep, resolve_card_variables, substitute,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
