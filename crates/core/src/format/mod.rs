//! Display formatting for card values.
//!
//! - [`format_magnitude`]: compact values with K/M/B/T suffixes
//! - [`format_plain`]: locale formatting only, for chart axes
//! - [`format_chart_value`]: size-aware precision plus an optional unit

pub mod locale;
pub mod number;

pub use locale::{Grouping, NumberLocale};
pub use number::{format_chart_value, format_magnitude, format_plain};
