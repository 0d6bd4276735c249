//! Batch material remapping over a host scene.
//!
//! The pieces, leaf first:
//!
//! - [`normalize`] - clean material names to ASCII letters, disambiguated
//!   per pass
//! - [`merge`] - slot-fill merge of new entries into a [`RuleList`]
//! - [`apply`] - rewrite slot references from the complete rules
//! - [`resolve`] - label status and completion queries against the pool
//! - [`session`] - the user-facing commands over an owned rule list
//!
//! The host application is reached only through [`ResourceHost`]; [`Scene`]
//! is an in-memory implementation.
//!
//! [`RuleList`]: remap_model::RuleList

pub mod apply;
pub mod host;
pub mod merge;
pub mod normalize;
pub mod resolve;
pub mod scene;
pub mod selection;
pub mod session;

pub use apply::{ApplyOutcome, build_lookup};
pub use host::{ResourceHost, ResourceId, SlotAddress};
pub use merge::{MergeFields, MergeOutcome, MergeStrategy, trailing_empty_start};
pub use normalize::{NameRegistry, PLACEHOLDER_NAME, Rename, clean_name, clean_selected_names, normalize_batch};
pub use resolve::{LabelStatus, RuleStatus, Suggestion, resolve_rules, suggest_names};
pub use scene::{Material, ObjectKind, Scene, SceneObject};
pub use selection::collect_selected_names;
pub use session::{Report, ReportLevel, Session};
