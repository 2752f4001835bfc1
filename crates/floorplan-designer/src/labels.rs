//! Area label bindings.
//!
//! Each area-bearing shape owns at most one text label showing its current
//! area (and room type). The binding table maps owner id to label id. It is
//! the only place label listeners live: shape changes are dispatched to
//! [`LabelBindings::on_shape_changed`], and the table is rebuilt from the
//! store after every restore since a reload does not carry bindings.

use floorplan_core::constants::LABEL_FONT_SIZE;
use floorplan_core::{format_area, EditError, RoomType};
use std::collections::HashMap;

use crate::model::{FloorShape, ShapeId};
use crate::scale::ScaleModel;
use crate::shape_store::ShapeStore;

/// Text shown by an area label, e.g. `20m²` or `16m² (Bedroom)`.
pub fn label_text(area_m2: f64, room_type: Option<RoomType>) -> String {
    match room_type {
        Some(room) => format!("{} ({})", format_area(area_m2), room.name()),
        None => format_area(area_m2),
    }
}

/// Current area of a shape in m², from its scaled frame.
pub fn shape_area(shape: &FloorShape, scale: &ScaleModel) -> f64 {
    scale.pixels_to_area(shape.scaled_width(), shape.scaled_height())
}

#[derive(Debug, Clone, Default)]
pub struct LabelBindings {
    table: HashMap<ShapeId, ShapeId>,
}

impl LabelBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a centered label for `owner` and registers the binding.
    /// Returns the label id. An owner that is already bound keeps its label.
    pub fn attach(
        &mut self,
        store: &mut ShapeStore,
        scale: &ScaleModel,
        owner: ShapeId,
        color: &str,
    ) -> Result<ShapeId, EditError> {
        if let Some(&label_id) = self.table.get(&owner) {
            self.on_shape_changed(store, scale, owner);
            return Ok(label_id);
        }

        let owner_shape = store.get(owner).ok_or(EditError::ShapeNotFound(owner))?;
        let text = label_text(shape_area(owner_shape, scale), owner_shape.room_type);
        let center = owner_shape.center();
        let visible = owner_shape.visible;

        let label_id = store.generate_id();
        let mut label = FloorShape::text(label_id, text, LABEL_FONT_SIZE, color);
        label.name = format!("Label {}", owner);
        label.label_of = Some(owner);
        label.interactive = false;
        label.visible = visible;
        label.center_on(center);
        store.insert(label);

        if let Some(owner_shape) = store.get_mut(owner) {
            owner_shape.label = Some(label_id);
        }
        self.table.insert(owner, label_id);
        tracing::debug!("Attached label {} to shape {}", label_id, owner);
        Ok(label_id)
    }

    /// Removes the label of `owner` from the scene and releases the binding.
    pub fn detach(&mut self, store: &mut ShapeStore, owner: ShapeId) -> Option<FloorShape> {
        let label_id = self.table.remove(&owner)?;
        if let Some(owner_shape) = store.get_mut(owner) {
            owner_shape.label = None;
        }
        store.remove(label_id)
    }

    /// Re-centers and re-texts the label bound to `owner`.
    /// Returns the label id when one was updated.
    pub fn on_shape_changed(
        &self,
        store: &mut ShapeStore,
        scale: &ScaleModel,
        owner: ShapeId,
    ) -> Option<ShapeId> {
        let label_id = *self.table.get(&owner)?;
        let owner_shape = store.get(owner)?;
        let text = label_text(shape_area(owner_shape, scale), owner_shape.room_type);
        let center = owner_shape.center();
        let visible = owner_shape.visible;

        let label = store.get_mut(label_id)?;
        label.set_text(text);
        label.center_on(center);
        label.visible = visible;
        Some(label_id)
    }

    /// Re-syncs every bound label. Returns the updated label ids.
    pub fn sync_all(&self, store: &mut ShapeStore, scale: &ScaleModel) -> Vec<ShapeId> {
        let owners: Vec<ShapeId> = self.owners().collect();
        owners
            .into_iter()
            .filter_map(|owner| self.on_shape_changed(store, scale, owner))
            .collect()
    }

    /// Rebuilds the table from the owner/label references stored on shapes.
    ///
    /// Dangling references are cleared and labels without a live owner are
    /// removed from the store.
    pub fn rebuild(&mut self, store: &mut ShapeStore) {
        self.table.clear();

        let pairs: Vec<(ShapeId, Option<ShapeId>)> = store
            .iter()
            .filter(|s| !s.is_label())
            .map(|s| (s.id, s.label))
            .collect();

        for (owner, label) in pairs {
            let Some(label_id) = label else { continue };
            let valid = store
                .get(label_id)
                .is_some_and(|l| l.label_of == Some(owner));
            if valid {
                self.table.insert(owner, label_id);
            } else if let Some(owner_shape) = store.get_mut(owner) {
                owner_shape.label = None;
            }
        }

        let orphans: Vec<ShapeId> = store
            .iter()
            .filter(|s| match s.label_of {
                Some(owner) => self.table.get(&owner) != Some(&s.id),
                None => false,
            })
            .map(|s| s.id)
            .collect();
        for id in orphans {
            tracing::warn!("Dropping orphaned label {}", id);
            store.remove(id);
        }
        tracing::debug!("Rebuilt {} label bindings", self.table.len());
    }

    pub fn label_of(&self, owner: ShapeId) -> Option<ShapeId> {
        self.table.get(&owner).copied()
    }

    pub fn owners(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.table.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }
}
