//! Layer management.

use floorplan_core::EditError;

use super::SceneCoordinator;
use crate::layers::LayerId;
use crate::model::ShapeId;
use crate::surface::RenderSurface;

impl<S: RenderSurface> SceneCoordinator<S> {
    /// Adds an auto-numbered layer and makes it active. Returns its id.
    pub fn add_layer(&mut self) -> Result<LayerId, EditError> {
        let layer = self.context.layers.add_layer();
        let id = layer.id.clone();
        tracing::info!("Added {}", layer.name);
        self.commit("add layer")?;
        Ok(id)
    }

    /// Selects the layer new shapes go into.
    ///
    /// Not recorded in history. The active layer is still part of every
    /// snapshot, so a later undo or redo restores the layer that was active
    /// when that snapshot was committed.
    pub fn set_active_layer(&mut self, id: &str) -> Result<(), EditError> {
        self.context.layers.set_active(id)
    }

    pub fn rename_layer(&mut self, id: &str, name: &str) -> Result<(), EditError> {
        self.context.layers.rename(id, name)?;
        self.commit("rename layer")
    }

    /// Shows or hides every member of a layer. Returns the new visibility.
    pub fn toggle_layer_visibility(&mut self, id: &str) -> Result<bool, EditError> {
        let visible = self
            .context
            .layers
            .toggle_visibility(id, &mut self.context.store)?;
        self.publish_layer(id);
        self.commit("toggle layer visibility")?;
        Ok(visible)
    }

    /// Locks or unlocks every member of a layer. Returns the new lock state.
    pub fn toggle_layer_lock(&mut self, id: &str) -> Result<bool, EditError> {
        let locked = self
            .context
            .layers
            .toggle_lock(id, &mut self.context.store)?;
        self.publish_layer(id);
        self.commit("toggle layer lock")?;
        Ok(locked)
    }

    /// Deletes a layer with all of its shapes and their labels.
    ///
    /// The only remaining layer cannot be deleted. When the active layer is
    /// removed the first remaining layer becomes active. Returns the removed
    /// shape ids.
    pub fn delete_layer(&mut self, id: &str) -> Result<Vec<ShapeId>, EditError> {
        let layer = self.context.layers.delete_layer(id)?;
        let removed = self.remove_shapes(&layer.shape_ids);
        tracing::info!("Deleted {} with {} shapes", layer.name, removed.len());
        self.commit("delete layer")?;
        Ok(removed)
    }

    /// Pushes a layer's members and labels to the surface after a flag change.
    fn publish_layer(&mut self, id: &str) {
        let members: Vec<ShapeId> = self
            .context
            .layers
            .get(id)
            .map(|l| l.shape_ids.clone())
            .unwrap_or_default();
        for member in members {
            self.publish(member);
            if let Some(label) = self.context.bindings.label_of(member) {
                self.publish(label);
            }
        }
        self.selection.retain_existing(&self.context.store);
        self.surface.set_active_objects(self.selection.selected_ids());
        self.surface.request_render_all();
    }
}
