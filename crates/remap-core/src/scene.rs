//! In-memory scene used by the command line tool and by tests.
//!
//! This is a small stand-in for a real host: a pool of named materials and a
//! list of objects whose slots reference materials by [`ResourceId`].

use serde::{Deserialize, Serialize};

use crate::host::{ResourceHost, ResourceId, SlotAddress};

/// Kind of scene object. Only meshes carry material slots that the remapper
/// touches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    #[default]
    Mesh,
    Curve,
    Light,
    Camera,
    Empty,
}

impl ObjectKind {
    pub fn has_material_slots(self) -> bool {
        matches!(self, Self::Mesh)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: ResourceId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    #[serde(default)]
    pub kind: ObjectKind,
    #[serde(default)]
    pub selected: bool,
    /// One entry per material slot; `None` is an empty slot.
    #[serde(default)]
    pub slots: Vec<Option<ResourceId>>,
}

impl SceneObject {
    pub fn mesh(name: impl Into<String>, slots: Vec<Option<ResourceId>>) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Mesh,
            selected: true,
            slots,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ObjectKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material to the pool. A clashing name gets a `.NNN` suffix.
    pub fn add_material(&mut self, name: &str) -> ResourceId {
        let id = ResourceId(
            self.materials
                .iter()
                .map(|m| m.id.0 + 1)
                .max()
                .unwrap_or_default(),
        );
        let name = self.unique_name(name, None);
        self.materials.push(Material { id, name });
        id
    }

    /// Add an object and return its index.
    pub fn add_object(&mut self, object: SceneObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn material(&self, id: ResourceId) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Name of the material in `slot`, if the slot exists and is filled.
    pub fn slot_material_name(&self, slot: SlotAddress) -> Option<&str> {
        self.slot_resource(slot)
            .and_then(|id| self.resource_name(id))
    }

    /// Selects exactly the objects whose names are listed.
    pub fn select_only(&mut self, names: &[&str]) {
        for object in &mut self.objects {
            object.selected = names.contains(&object.name.as_str());
        }
    }

    fn unique_name(&self, base: &str, owner: Option<ResourceId>) -> String {
        let taken = |candidate: &str| {
            self.materials
                .iter()
                .any(|m| Some(m.id) != owner && m.name == candidate)
        };
        if !taken(base) {
            return base.to_string();
        }
        (1u32..)
            .map(|n| format!("{base}.{n:03}"))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| base.to_string())
    }
}

impl ResourceHost for Scene {
    fn selected_slots(&self) -> Vec<SlotAddress> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, object)| object.selected && object.kind.has_material_slots())
            .flat_map(|(object_idx, object)| {
                (0..object.slots.len()).map(move |slot| SlotAddress::new(object_idx, slot))
            })
            .collect()
    }

    fn slot_resource(&self, slot: SlotAddress) -> Option<ResourceId> {
        self.objects
            .get(slot.object)
            .and_then(|object| object.slots.get(slot.slot))
            .copied()
            .flatten()
    }

    fn resource_name(&self, id: ResourceId) -> Option<&str> {
        self.material(id).map(|m| m.name.as_str())
    }

    fn lookup(&self, name: &str) -> Option<ResourceId> {
        self.materials.iter().find(|m| m.name == name).map(|m| m.id)
    }

    fn rename(&mut self, id: ResourceId, name: &str) {
        let name = self.unique_name(name, Some(id));
        if let Some(material) = self.materials.iter_mut().find(|m| m.id == id) {
            material.name = name;
        }
    }

    fn assign(&mut self, slot: SlotAddress, id: ResourceId) {
        if let Some(entry) = self
            .objects
            .get_mut(slot.object)
            .and_then(|object| object.slots.get_mut(slot.slot))
        {
            *entry = Some(id);
        }
    }

    fn resource_names(&self) -> Vec<&str> {
        self.materials.iter().map(|m| m.name.as_str()).collect()
    }
}
