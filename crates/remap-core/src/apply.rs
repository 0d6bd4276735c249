//! Rewrite slot references according to the complete rules of a list.

use std::collections::{BTreeSet, HashMap};

use remap_model::RuleList;

use crate::host::ResourceHost;

/// Old-name to new-name lookup built from the complete rules.
///
/// Later rules win when the same old name appears more than once.
pub fn build_lookup(rules: &RuleList) -> HashMap<&str, &str> {
    rules
        .complete()
        .map(|rule| (rule.old.as_str(), rule.new.as_str()))
        .collect()
}

/// Result of an [`apply`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Slots visited.
    pub examined: usize,
    /// Slots now pointing at a different material.
    pub replaced: usize,
    /// Target names that matched a rule but are not in the pool.
    pub missing_targets: BTreeSet<String>,
}

/// Point every selected slot whose material name has a rule at the rule's
/// target material.
///
/// Targets are looked up in the pool when the slot is visited. A target that
/// does not exist leaves the slot as it is.
pub fn apply<H: ResourceHost>(rules: &RuleList, host: &mut H) -> ApplyOutcome {
    let lookup = build_lookup(rules);
    let mut outcome = ApplyOutcome::default();
    if lookup.is_empty() {
        tracing::info!("no complete rules to apply");
        return outcome;
    }

    for slot in host.selected_slots() {
        outcome.examined += 1;
        let Some(current) = host.slot_resource(slot) else {
            continue;
        };
        let Some(target_name) = host
            .resource_name(current)
            .and_then(|name| lookup.get(name).copied())
        else {
            continue;
        };

        match host.lookup(target_name) {
            Some(target) if target != current => {
                tracing::debug!(
                    object = slot.object,
                    slot = slot.slot,
                    material = target_name,
                    "replaced slot material"
                );
                host.assign(slot, target);
                outcome.replaced += 1;
            }
            Some(_) => {}
            None => {
                tracing::warn!(material = target_name, "target material not found, slot left unchanged");
                outcome.missing_targets.insert(target_name.to_string());
            }
        }
    }

    tracing::info!(
        examined = outcome.examined,
        replaced = outcome.replaced,
        "applied material mapping"
    );
    outcome
}
