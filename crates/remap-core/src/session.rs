//! Editing session: the rule list plus the user-facing commands.
//!
//! Every command runs to completion and returns a single [`Report`] line.
//! File import and export live in `remap-persistence`; this type only
//! accepts already-parsed entries through [`Session::merge_imported`].

use std::fmt;

use remap_model::{DEFAULT_STARTER_ROWS, Rule, RuleField, RuleList};

use crate::apply::apply;
use crate::host::ResourceHost;
use crate::merge::{MergeFields, MergeOutcome, merge};
use crate::normalize::clean_selected_names;
use crate::resolve::{RuleStatus, resolve_rules};
use crate::selection::collect_selected_names;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Warning,
}

/// Human-readable result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub level: ReportLevel,
    pub message: String,
}

impl Report {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Owns the rule list for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    rules: RuleList,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules(rules: RuleList) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleList {
        &self.rules
    }

    pub fn into_rules(self) -> RuleList {
        self.rules
    }

    /// Give a brand-new document its starter rows. Does nothing once the
    /// list has any rows.
    pub fn initialize(&mut self, starter_rows: usize) -> Report {
        match self.rules.initialize(starter_rows) {
            0 => Report::info("Material mapping already initialized"),
            added => Report::info(format!("Added {added} empty mapping rows")),
        }
    }

    pub fn initialize_default(&mut self) -> Report {
        self.initialize(DEFAULT_STARTER_ROWS)
    }

    pub fn add(&mut self) -> Report {
        self.rules.add();
        Report::info(format!("Added mapping row {}", self.rules.len() - 1))
    }

    /// Remove the row at `index`; out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Report {
        match self.rules.remove_at(index) {
            Some(_) => Report::info(format!("Removed mapping row {index}")),
            None => {
                tracing::debug!(index, len = self.rules.len(), "remove index out of range");
                Report::info("Nothing to remove")
            }
        }
    }

    pub fn remove_last(&mut self) -> Report {
        match self.rules.remove_last() {
            Some(_) => Report::info("Removed last mapping row"),
            None => Report::info("Nothing to remove"),
        }
    }

    pub fn swap_all(&mut self) -> Report {
        self.rules.swap_all();
        Report::info("Swapped old and new materials")
    }

    /// Edit one label; out-of-range indices are ignored.
    pub fn set_field(&mut self, index: usize, field: RuleField, value: &str) -> Report {
        if self.rules.set_field(index, field, value) {
            Report::info(format!("Set {field} material of row {index} to '{value}'"))
        } else {
            Report::info("Nothing to edit")
        }
    }

    pub fn apply<H: ResourceHost>(&self, host: &mut H) -> Report {
        let outcome = apply(&self.rules, host);
        let message = format!(
            "Replaced {} of {} material slots",
            outcome.replaced, outcome.examined
        );
        if outcome.missing_targets.is_empty() {
            Report::info(message)
        } else {
            let missing: Vec<&str> = outcome.missing_targets.iter().map(String::as_str).collect();
            Report::warning(format!(
                "{message}; missing materials: {}",
                missing.join(", ")
            ))
        }
    }

    pub fn clean_names<H: ResourceHost>(&self, host: &mut H) -> Report {
        let renames = clean_selected_names(host);
        Report::info(format!("Cleaned {} material names", renames.len()))
    }

    /// Merge the selection's material names into the old column.
    pub fn populate_from_selection<H: ResourceHost>(&mut self, host: &H) -> Report {
        let incoming: Vec<Rule> = collect_selected_names(host)
            .into_iter()
            .map(Rule::from_old)
            .collect();
        if incoming.is_empty() {
            return Report::warning("No materials found on the selected objects");
        }
        let outcome = merge(&mut self.rules, &incoming, MergeFields::Old);
        Report::info(format!(
            "Added {} selected materials to the mapping",
            outcome.total()
        ))
    }

    /// Merge parsed file entries, both labels included.
    pub fn merge_imported(&mut self, entries: &[Rule]) -> MergeOutcome {
        merge(&mut self.rules, entries, MergeFields::Both)
    }

    pub fn resolve<H: ResourceHost>(&self, host: &H) -> Vec<RuleStatus> {
        resolve_rules(&self.rules, host)
    }
}
