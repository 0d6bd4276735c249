use std::collections::HashSet;

use crate::host::ResourceHost;

/// Distinct material names referenced by the selection, in slot traversal
/// order. Empty slots are skipped.
pub fn collect_selected_names<H: ResourceHost>(host: &H) -> Vec<String> {
    let mut seen = HashSet::new();
    host.selected_slots()
        .into_iter()
        .filter_map(|slot| host.slot_resource(slot))
        .filter_map(|id| host.resource_name(id))
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}
