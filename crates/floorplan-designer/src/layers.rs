//! Layer registry.
//!
//! Layers group shapes for visibility and locking. The registry is never
//! empty, and every non-label shape belongs to exactly one layer. Labels are
//! not members; they follow the flags of their owner.

use floorplan_core::EditError;
use serde::{Deserialize, Serialize};

use crate::model::ShapeId;
use crate::shape_store::ShapeStore;

pub type LayerId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    pub visible: bool,
    pub locked: bool,
    /// Member shapes, in insertion order
    #[serde(default)]
    pub shape_ids: Vec<ShapeId>,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            visible: true,
            locked: false,
            shape_ids: Vec::new(),
        }
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shape_ids.contains(&id)
    }
}

#[derive(Debug, Clone)]
pub struct LayerRegistry {
    layers: Vec<Layer>,
    active: LayerId,
}

impl LayerRegistry {
    /// Creates a registry holding a single active "Layer 1".
    pub fn new() -> Self {
        let first = Layer::new("Layer 1");
        let active = first.id.clone();
        Self {
            layers: vec![first],
            active,
        }
    }

    /// Rebuilds a registry from stored layers, rejecting an empty list or an
    /// active id that names no layer.
    pub fn from_parts(layers: Vec<Layer>, active: LayerId) -> Result<Self, EditError> {
        if layers.is_empty() {
            return Err(EditError::MalformedSnapshot {
                reason: "scene has no layers".to_string(),
            });
        }
        if !layers.iter().any(|l| l.id == active) {
            return Err(EditError::MalformedSnapshot {
                reason: format!("active layer {} does not exist", active),
            });
        }
        Ok(Self { layers, active })
    }

    /// Appends an auto-numbered layer and makes it active.
    pub fn add_layer(&mut self) -> &Layer {
        let layer = Layer::new(format!("Layer {}", self.layers.len() + 1));
        self.active = layer.id.clone();
        tracing::debug!("Added layer {} ({})", layer.name, layer.id);
        self.layers.push(layer);
        &self.layers[self.layers.len() - 1]
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Layer, EditError> {
        self.layers
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| EditError::LayerNotFound(id.to_string()))
    }

    pub fn active_id(&self) -> &str {
        &self.active
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.get(&self.active)
    }

    pub fn set_active(&mut self, id: &str) -> Result<(), EditError> {
        self.get_mut(id)?;
        self.active = id.to_string();
        Ok(())
    }

    pub fn rename(&mut self, id: &str, name: impl Into<String>) -> Result<(), EditError> {
        self.get_mut(id)?.name = name.into();
        Ok(())
    }

    /// Flips visibility and pushes it to every member. Returns the new flag.
    pub fn toggle_visibility(&mut self, id: &str, store: &mut ShapeStore) -> Result<bool, EditError> {
        let layer = self.get_mut(id)?;
        layer.visible = !layer.visible;
        let visible = layer.visible;
        self.apply_flags(id, store);
        Ok(visible)
    }

    /// Flips the lock and pushes it to every member. Returns the new flag.
    pub fn toggle_lock(&mut self, id: &str, store: &mut ShapeStore) -> Result<bool, EditError> {
        let layer = self.get_mut(id)?;
        layer.locked = !layer.locked;
        let locked = layer.locked;
        self.apply_flags(id, store);
        Ok(locked)
    }

    /// Copies the layer's flags onto its members and their labels.
    pub fn apply_flags(&self, id: &str, store: &mut ShapeStore) {
        let Some(layer) = self.get(id) else { return };
        for &shape_id in &layer.shape_ids {
            let label = match store.get_mut(shape_id) {
                Some(shape) => {
                    shape.visible = layer.visible;
                    shape.interactive = !layer.locked;
                    shape.label
                }
                None => continue,
            };
            if let Some(label) = label.and_then(|l| store.get_mut(l)) {
                label.visible = layer.visible;
            }
        }
    }

    /// Removes a layer and returns it. The caller removes its members from
    /// the scene. Deleting the only layer fails with `LastLayer`.
    pub fn delete_layer(&mut self, id: &str) -> Result<Layer, EditError> {
        if self.layers.len() <= 1 {
            return Err(EditError::LastLayer);
        }
        let index = self
            .layers
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| EditError::LayerNotFound(id.to_string()))?;
        let removed = self.layers.remove(index);
        if self.active == removed.id {
            self.active = self.layers[0].id.clone();
        }
        tracing::debug!("Deleted layer {} ({} shapes)", removed.name, removed.shape_ids.len());
        Ok(removed)
    }

    /// Adds a shape to a layer, moving it out of any other layer.
    pub fn assign(&mut self, shape_id: ShapeId, layer_id: &str) -> Result<(), EditError> {
        self.get_mut(layer_id)?;
        self.remove_shape(shape_id);
        let layer = self.get_mut(layer_id)?;
        layer.shape_ids.push(shape_id);
        Ok(())
    }

    pub fn assign_to_active(&mut self, shape_id: ShapeId) -> Result<(), EditError> {
        let active = self.active.clone();
        self.assign(shape_id, &active)
    }

    /// Drops a shape from whichever layer holds it. Returns that layer's id.
    pub fn remove_shape(&mut self, shape_id: ShapeId) -> Option<LayerId> {
        let layer = self.layers.iter_mut().find(|l| l.contains(shape_id))?;
        layer.shape_ids.retain(|&id| id != shape_id);
        Some(layer.id.clone())
    }

    pub fn layer_of(&self, shape_id: ShapeId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.contains(shape_id))
    }
}

impl Default for LayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
