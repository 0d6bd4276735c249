//! On-disk record types.

use serde::{Deserialize, Serialize};

use remap_core::Scene;
use remap_model::{Rule, RuleList};

/// Current workspace document schema version.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// File extension of exported mappings.
pub const MAPPING_EXTENSION: &str = "json";

/// One exported rule. Field order is fixed so exports diff cleanly.
///
/// Missing fields read back as empty labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord {
    #[serde(default)]
    pub old_material: String,
    #[serde(default)]
    pub new_material: String,
}

impl From<&Rule> for MappingRecord {
    fn from(rule: &Rule) -> Self {
        Self {
            old_material: rule.old.clone(),
            new_material: rule.new.clone(),
        }
    }
}

impl From<MappingRecord> for Rule {
    fn from(record: MappingRecord) -> Self {
        Rule::new(record.old_material, record.new_material)
    }
}

/// Scene plus rule list, saved and loaded as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceDocument {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub scene: Scene,
    #[serde(default)]
    pub rules: RuleList,
}

fn default_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

impl WorkspaceDocument {
    pub fn new(scene: Scene, rules: RuleList) -> Self {
        Self {
            version: CURRENT_SCHEMA_VERSION,
            scene,
            rules,
        }
    }
}
