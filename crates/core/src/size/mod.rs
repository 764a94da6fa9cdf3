//! Card size classes and the layout budgets derived from them.

pub mod legacy;
pub mod policy;
pub mod types;

pub use legacy::migrate_legacy_size;
pub use policy::{determine_precision, ensure_chart_size, max_attribute_count};
pub use types::{CardSize, SizeParseError};
