//! Read-only queries of rule labels against the material pool.
//!
//! The rule list only stores strings. These helpers tell the caller which
//! labels point at real materials and offer completions for partially typed
//! labels.

use std::cmp::Ordering;

use rapidfuzz::distance::jaro_winkler;
use remap_model::{Rule, RuleList};

use crate::host::ResourceHost;

/// Minimum Jaro-Winkler similarity for a non-prefix suggestion.
const MIN_SIMILARITY: f64 = 0.7;

/// Whether a label names a material in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStatus {
    Blank,
    Resolved,
    Missing,
}

impl LabelStatus {
    pub fn of<H: ResourceHost>(label: &str, host: &H) -> Self {
        if label.is_empty() {
            Self::Blank
        } else if host.lookup(label).is_some() {
            Self::Resolved
        } else {
            Self::Missing
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Blank => " ",
            Self::Resolved => "●",
            Self::Missing => "?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleStatus {
    pub old: LabelStatus,
    pub new: LabelStatus,
}

impl RuleStatus {
    pub fn of<H: ResourceHost>(rule: &Rule, host: &H) -> Self {
        Self {
            old: LabelStatus::of(&rule.old, host),
            new: LabelStatus::of(&rule.new, host),
        }
    }
}

/// Status of both labels of every rule, in list order.
pub fn resolve_rules<H: ResourceHost>(rules: &RuleList, host: &H) -> Vec<RuleStatus> {
    rules.iter().map(|rule| RuleStatus::of(rule, host)).collect()
}

/// A completion candidate for a partially typed label.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub name: String,
    pub score: f64,
    pub prefix: bool,
}

/// Pool names that best match `query`, at most `limit` of them.
///
/// Case-insensitive prefix matches come first, then names whose Jaro-Winkler
/// similarity to the query reaches a fixed threshold. An empty query lists
/// pool names alphabetically.
pub fn suggest_names<H: ResourceHost>(host: &H, query: &str, limit: usize) -> Vec<Suggestion> {
    let query = query.trim().to_lowercase();
    let mut candidates: Vec<Suggestion> = host
        .resource_names()
        .into_iter()
        .filter_map(|name| {
            let lowered = name.to_lowercase();
            let prefix = lowered.starts_with(&query);
            let score = if query.is_empty() {
                1.0
            } else {
                jaro_winkler::similarity(query.chars(), lowered.chars())
            };
            (prefix || score >= MIN_SIMILARITY).then(|| Suggestion {
                name: name.to_string(),
                score,
                prefix,
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.prefix
            .cmp(&a.prefix)
            .then_with(|| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
            .then_with(|| a.name.cmp(&b.name))
    });
    candidates.truncate(limit);
    candidates
}
