//! Services the remapper needs from the application that owns the scene.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable handle to a material in the host pool. Survives renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub u32);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position of a material slot: object index, then slot index on that object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotAddress {
    pub object: usize,
    pub slot: usize,
}

impl SlotAddress {
    pub fn new(object: usize, slot: usize) -> Self {
        Self { object, slot }
    }
}

/// Host-side scene access.
///
/// Implementations decide which objects count as selected and which object
/// kinds carry material slots; the remapper only walks what
/// [`selected_slots`](Self::selected_slots) returns.
pub trait ResourceHost {
    /// Slots of the selected objects that can hold materials, in object
    /// order and then slot order.
    fn selected_slots(&self) -> Vec<SlotAddress>;

    /// Material currently referenced by `slot`, if any.
    fn slot_resource(&self, slot: SlotAddress) -> Option<ResourceId>;

    fn resource_name(&self, id: ResourceId) -> Option<&str>;

    /// Find a material in the pool by exact name.
    fn lookup(&self, name: &str) -> Option<ResourceId>;

    /// Rename a material in place. The host resolves clashes with other
    /// materials in the pool however it sees fit.
    fn rename(&mut self, id: ResourceId, name: &str);

    /// Point `slot` at another material.
    fn assign(&mut self, slot: SlotAddress, id: ResourceId);

    /// Every material name in the pool, for autocomplete.
    fn resource_names(&self) -> Vec<&str>;
}
