//! Data model for batch material remapping.
//!
//! A [`RuleList`] is an ordered list of [`Rule`]s, each pairing an old
//! material name with the name that should replace it. Empty strings mark
//! unset labels; there is no `Option` at this level.

pub mod error;
pub mod list;
pub mod rule;

pub use error::{ModelError, Result};
pub use list::{DEFAULT_STARTER_ROWS, RuleList};
pub use rule::{Rule, RuleField};
