//! Time ranges requested from a card's range picker.
//!
//! A symbolic token such as `last7Days` resolves to a [`RangeDescriptor`],
//! which a data-fetch collaborator turns into a query. Grains describe the
//! aggregation bucket size and are totally ordered by coarseness.

pub mod grain;
pub mod resolver;
pub mod window;

pub use grain::{Grain, GrainParseError, compare_grains};
pub use resolver::{RangeDescriptor, RangeInterval, RangeKind, RangeToken, resolve_range};
pub use window::TimeWindow;
