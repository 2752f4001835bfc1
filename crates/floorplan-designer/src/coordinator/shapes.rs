//! Shape creation, selection and deletion.

use floorplan_core::constants::{DEFAULT_STROKE_WIDTH, LINE_STROKE_WIDTH};
use floorplan_core::EditError;

use super::SceneCoordinator;
use crate::factory::ShapeFactory;
use crate::model::{FloorShape, Point, ShapeId, ShapeKind, Style};
use crate::selection_manager::DeleteOutcome;
use crate::surface::RenderSurface;

impl<S: RenderSurface> SceneCoordinator<S> {
    /// Adds a symbol of `kind` covering `target_area_m2` to the active layer.
    ///
    /// Area-bearing kinds get a bound area label. The new shape becomes the
    /// selection. Fails before any change when the area is not positive or
    /// exceeds the total floor area.
    pub fn add_shape(&mut self, kind: ShapeKind, target_area_m2: f64) -> Result<ShapeId, EditError> {
        if kind == ShapeKind::Text {
            return self.add_text();
        }
        let stroke_width = if kind == ShapeKind::Line {
            LINE_STROKE_WIDTH
        } else {
            DEFAULT_STROKE_WIDTH
        };
        let style = Style::new(
            self.palette.room_fill.clone(),
            self.palette.room_border.clone(),
            stroke_width,
        );

        let id = self.context.store.next_id();
        let shape = ShapeFactory::new(&self.context.scale).create(id, kind, target_area_m2, style)?;
        self.place_new(shape)?;
        tracing::info!("Added {} {} ({}m²)", kind, id, target_area_m2);
        Ok(id)
    }

    /// Adds a free caption at the default position.
    pub fn add_text(&mut self) -> Result<ShapeId, EditError> {
        let id = self.context.store.next_id();
        let text = ShapeFactory::new(&self.context.scale).create_text(id, &self.palette.text_color);
        self.place_new(text)?;
        tracing::info!("Added text {}", id);
        Ok(id)
    }

    fn place_new(&mut self, mut shape: FloorShape) -> Result<(), EditError> {
        let id = self.context.store.generate_id();
        shape.id = id;
        if let Some(layer) = self.context.layers.active_layer() {
            shape.visible = layer.visible;
            shape.interactive = !layer.locked;
        }
        let has_area = shape.has_area();
        self.context.store.insert(shape);
        self.context.layers.assign_to_active(id)?;
        if let Some(shape) = self.context.store.get(id) {
            self.surface.add_object(shape);
        }

        if has_area {
            let context = &mut self.context;
            let label = context.bindings.attach(
                &mut context.store,
                &context.scale,
                id,
                &self.palette.text_color,
            )?;
            if let Some(label) = self.context.store.get(label) {
                self.surface.add_object(label);
            }
        }

        self.select(&[id]);
        self.surface.request_render_all();
        self.commit("add shape")
    }

    /// Replaces the selection and syncs the palette from its primary object.
    pub fn select(&mut self, ids: &[ShapeId]) {
        self.selection.cancel_pending();
        self.selection.select(&self.context.store, ids);
        self.surface.set_active_objects(self.selection.selected_ids());
        self.selection_created();
    }

    /// Hit-tests at a screen position and updates the selection.
    pub fn select_at(&mut self, screen: &Point, multi: bool) -> Option<ShapeId> {
        let doc = self.viewport.screen_to_document(screen);
        self.selection.cancel_pending();
        let hit = self.selection.select_at(&self.context.store, &doc, multi);
        self.surface.set_active_objects(self.selection.selected_ids());
        if hit.is_some() {
            self.selection_created();
        }
        hit
    }

    pub fn select_all(&mut self) {
        self.selection.cancel_pending();
        self.selection.select_all(&self.context.store);
        self.surface.set_active_objects(self.selection.selected_ids());
        self.selection_created();
    }

    pub fn deselect_all(&mut self) {
        self.selection.cancel_pending();
        self.selection.deselect_all();
        self.surface.set_active_objects(&[]);
    }

    /// Copies the colors of the primary selected object into the palette.
    /// Text feeds the text color; other shapes feed fill and border.
    fn selection_created(&mut self) {
        let Some(shape) = self.selection.primary().and_then(|id| self.context.store.get(id)) else {
            return;
        };
        if shape.kind == ShapeKind::Text {
            self.palette.text_color = shape.style.fill.clone();
        } else {
            self.palette.room_fill = shape.style.fill.clone();
            self.palette.room_border = shape.style.stroke.clone();
        }
    }

    /// Deletes the selection.
    ///
    /// A single object is removed immediately with one snapshot. Several
    /// objects are staged and wait for [`confirm_deletion`] or
    /// [`cancel_deletion`].
    ///
    /// [`confirm_deletion`]: SceneCoordinator::confirm_deletion
    /// [`cancel_deletion`]: SceneCoordinator::cancel_deletion
    pub fn delete_selected(&mut self) -> Result<DeleteOutcome, EditError> {
        let ids = self.selection.selected_ids().to_vec();
        match ids.len() {
            0 => Ok(DeleteOutcome::Nothing),
            1 => {
                let removed = self.remove_shapes(&ids);
                self.commit("delete shape")?;
                tracing::info!("Deleted shape {}", ids[0]);
                Ok(DeleteOutcome::Deleted(removed))
            }
            count => {
                self.selection.stage_deletion();
                tracing::debug!("Staged {} shapes for deletion", count);
                Ok(DeleteOutcome::ConfirmationRequired(count))
            }
        }
    }

    /// Removes the staged shapes and their labels with a single snapshot.
    ///
    /// Staged shapes that are gone or no longer interactive are skipped. When
    /// none remain, nothing is committed.
    pub fn confirm_deletion(&mut self) -> Result<Vec<ShapeId>, EditError> {
        let pending = self
            .selection
            .take_pending()
            .ok_or(EditError::NoPendingDeletion)?;
        let store = &self.context.store;
        let ids: Vec<ShapeId> = pending
            .into_ids()
            .into_iter()
            .filter(|&id| store.get(id).is_some_and(|s| s.interactive && !s.is_label()))
            .collect();
        if ids.is_empty() {
            tracing::debug!("Staged deletion has no deletable shapes left");
            return Ok(Vec::new());
        }
        let removed = self.remove_shapes(&ids);
        self.commit("delete shapes")?;
        tracing::info!("Deleted {} shapes", removed.len());
        Ok(removed)
    }

    /// Drops the staged deletion without touching the scene or history.
    pub fn cancel_deletion(&mut self) -> bool {
        self.selection.cancel_pending()
    }

    pub fn pending_deletion(&self) -> Option<&[ShapeId]> {
        self.selection.pending().map(|p| p.shape_ids())
    }

    /// Deletes one shape (and its label) regardless of the selection.
    pub fn delete_shape(&mut self, id: ShapeId) -> Result<(), EditError> {
        let shape = self.context.store.get(id).ok_or(EditError::ShapeNotFound(id))?;
        if shape.is_label() {
            return Err(EditError::ShapeLocked(id));
        }
        self.remove_shapes(&[id]);
        self.commit("delete shape")
    }

    /// Removes shapes with their labels from the store, layers, selection
    /// and surface. Returns the ids of removed owners.
    pub(crate) fn remove_shapes(&mut self, ids: &[ShapeId]) -> Vec<ShapeId> {
        let mut removed = Vec::with_capacity(ids.len());
        for &id in ids {
            if let Some(label) = self.context.bindings.detach(&mut self.context.store, id) {
                self.surface.remove_object(label.id);
            }
            if self.context.store.remove(id).is_none() {
                continue;
            }
            self.context.layers.remove_shape(id);
            self.selection.remove(id);
            self.surface.remove_object(id);
            removed.push(id);
        }
        self.surface.set_active_objects(self.selection.selected_ids());
        self.surface.request_render_all();
        removed
    }
}
