//! Material name cleaning.
//!
//! Names are reduced to ASCII letters. Within one batch, repeated cleaned
//! names get a `_NNN` suffix so every output stays distinct.

use std::collections::{BTreeSet, HashMap};

use crate::host::{ResourceHost, ResourceId};

/// Name used when cleaning leaves nothing behind.
pub const PLACEHOLDER_NAME: &str = "Material";

const TEMPORARY_SUFFIX: &str = "cleaning";

/// Strip everything that is not an ASCII letter.
pub fn clean_name(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(char::is_ascii_alphabetic).collect();
    if cleaned.is_empty() {
        PLACEHOLDER_NAME.to_string()
    } else {
        cleaned
    }
}

/// Occurrence counter for one cleaning pass.
#[derive(Debug, Default)]
pub struct NameRegistry {
    seen: HashMap<String, u32>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clean `raw` and disambiguate it against earlier names in this pass.
    ///
    /// The first occurrence of a cleaned name is returned bare; later ones
    /// become `Name_001`, `Name_002`, and so on.
    pub fn assign(&mut self, raw: &str) -> String {
        let cleaned = clean_name(raw);
        match self.seen.get_mut(&cleaned) {
            Some(count) => {
                *count += 1;
                format!("{cleaned}_{count:03}")
            }
            None => {
                self.seen.insert(cleaned.clone(), 0);
                cleaned
            }
        }
    }
}

/// Clean an ordered batch of names with a fresh [`NameRegistry`].
pub fn normalize_batch<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut registry = NameRegistry::new();
    names.into_iter().map(|name| registry.assign(name)).collect()
}

/// A material renamed during [`clean_selected_names`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub id: ResourceId,
    pub from: String,
    pub to: String,
}

/// Clean the names of every material referenced by the selection.
///
/// Materials are visited in slot traversal order; a material shared by
/// several slots is cleaned once, at its first occurrence. All targets are
/// computed before anything is renamed, and renamed materials first move to
/// a temporary name, so a batch member never collides with the old name of
/// another member. Returns the materials whose name actually changed.
pub fn clean_selected_names<H: ResourceHost>(host: &mut H) -> Vec<Rename> {
    let mut visited = BTreeSet::new();
    let mut batch: Vec<(ResourceId, String)> = Vec::new();
    for slot in host.selected_slots() {
        let Some(id) = host.slot_resource(slot) else {
            continue;
        };
        if !visited.insert(id) {
            continue;
        }
        if let Some(name) = host.resource_name(id) {
            batch.push((id, name.to_string()));
        }
    }

    let mut registry = NameRegistry::new();
    let pending: Vec<(ResourceId, String, String)> = batch
        .into_iter()
        .filter_map(|(id, original)| {
            let target = registry.assign(&original);
            (target != original).then_some((id, original, target))
        })
        .collect();

    // Targets never contain a dot, so parked names cannot block them.
    for (id, _, target) in &pending {
        host.rename(*id, &format!("{target}.{TEMPORARY_SUFFIX}"));
    }

    let mut renames = Vec::with_capacity(pending.len());
    for (id, original, target) in pending {
        host.rename(id, &target);
        let applied = host.resource_name(id).unwrap_or(target.as_str()).to_string();
        tracing::debug!(%id, from = %original, to = %applied, "renamed material");
        renames.push(Rename {
            id,
            from: original,
            to: applied,
        });
    }

    tracing::info!(renamed = renames.len(), "cleaned material names");
    renames
}
