//! A single old-name to new-name rule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One row of the mapping list.
///
/// Either label may be empty. Rules with exactly one label set are kept in
/// the list but never take part in an apply pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    /// Name of the material currently referenced by slots.
    #[serde(rename = "old_material", default)]
    pub old: String,
    /// Name of the material to put in its place.
    #[serde(rename = "new_material", default)]
    pub new: String,
}

impl Rule {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    /// A rule with only the old label filled in.
    pub fn from_old(old: impl Into<String>) -> Self {
        Self::new(old, String::new())
    }

    /// Both labels are empty.
    pub fn is_empty(&self) -> bool {
        self.old.is_empty() && self.new.is_empty()
    }

    /// Both labels are set.
    pub fn is_complete(&self) -> bool {
        !self.old.is_empty() && !self.new.is_empty()
    }

    /// Exchange the old and new labels.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.old, &mut self.new);
    }

    pub fn field(&self, field: RuleField) -> &str {
        match field {
            RuleField::Old => &self.old,
            RuleField::New => &self.new,
        }
    }

    pub fn set_field(&mut self, field: RuleField, value: impl Into<String>) {
        match field {
            RuleField::Old => self.old = value.into(),
            RuleField::New => self.new = value.into(),
        }
    }
}

/// Selects one of the two labels of a [`Rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleField {
    Old,
    New,
}

impl RuleField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }
}

impl fmt::Display for RuleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "old" | "old_material" => Ok(Self::Old),
            "new" | "new_material" => Ok(Self::New),
            other => Err(ModelError::UnknownField(other.to_string())),
        }
    }
}
