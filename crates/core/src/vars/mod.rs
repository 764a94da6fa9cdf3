//! `{variable}` placeholders in card configuration.
//!
//! Placeholders are discovered anywhere in a card's nested data and replaced
//! from a case-insensitive variable map:
//! - `{threshold}` as a whole string with a numeric value becomes a number
//! - callback values replace the whole string they are found in
//! - other values are spliced into the text
//!
//! Opaque render nodes are never entered.

pub mod card;
pub mod discovery;
pub mod substitute;
pub mod value;
pub mod variable;

pub use card::{CARD_VARIABLES_KEY, Card, CardError, resolve_card_variables};
pub use discovery::{discover_value_variables, discover_variables, discover_variables_deep};
pub use substitute::substitute;
pub use value::{CardValue, JsonNode, Mapping, NODE_TAG, NodeRef, RenderNode};
pub use variable::{VariableCallback, VariableMap, VariableValue, variables_from_json};
