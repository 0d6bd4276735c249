//! Ordered, user-editable list of rules.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::rule::{Rule, RuleField};

/// Number of empty rows a fresh list starts with.
pub const DEFAULT_STARTER_ROWS: usize = 3;

/// Ordered sequence of [`Rule`]s.
///
/// Row order is significant: it is the display order and it decides where
/// merged names land. The list never shrinks except through the explicit
/// remove operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleList {
    rules: Vec<Rule>,
}

impl RuleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an empty list with `rows` empty rules.
    ///
    /// Returns the number of rows added, which is zero when the list already
    /// has content of any kind.
    pub fn initialize(&mut self, rows: usize) -> usize {
        if !self.rules.is_empty() {
            return 0;
        }
        self.rules.resize_with(rows, Rule::default);
        rows
    }

    /// Append one empty rule.
    pub fn add(&mut self) {
        self.rules.push(Rule::default());
    }

    /// Append a prepared rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Remove the rule at `index`. Out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<Rule> {
        (index < self.rules.len()).then(|| self.rules.remove(index))
    }

    pub fn remove_last(&mut self) -> Option<Rule> {
        self.rules.pop()
    }

    /// Exchange old and new labels on every rule, in place.
    pub fn swap_all(&mut self) {
        self.rules.iter_mut().for_each(Rule::swap);
    }

    /// Overwrite one label of the rule at `index`.
    ///
    /// Returns `false` without touching the list when `index` is out of range.
    pub fn set_field(&mut self, index: usize, field: RuleField, value: impl Into<String>) -> bool {
        match self.rules.get_mut(index) {
            Some(rule) => {
                rule.set_field(field, value);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Rule> {
        self.rules.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[Rule] {
        &self.rules
    }

    /// True when every rule is empty. Vacuously true for an empty list.
    pub fn all_empty(&self) -> bool {
        self.rules.iter().all(Rule::is_empty)
    }

    /// Rules with both labels set, in list order.
    pub fn complete(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|rule| rule.is_complete())
    }
}

impl Index<usize> for RuleList {
    type Output = Rule;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rules[index]
    }
}

impl From<Vec<Rule>> for RuleList {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<Rule> for RuleList {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleList {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
