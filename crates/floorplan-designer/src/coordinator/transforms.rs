//! Drag, on-canvas scaling, area and room-type edits.

use floorplan_core::{round2, EditError, RoomType};

use super::{DragState, SceneCoordinator};
use crate::labels::shape_area;
use crate::model::{FloorShape, Point, ShapeId};
use crate::surface::RenderSurface;

impl<S: RenderSurface> SceneCoordinator<S> {
    fn editable(&self, id: ShapeId) -> Result<&FloorShape, EditError> {
        let shape = self.context.store.get(id).ok_or(EditError::ShapeNotFound(id))?;
        if shape.is_label() || !shape.interactive {
            return Err(EditError::ShapeLocked(id));
        }
        Ok(shape)
    }

    /// Starts dragging a shape. Locked shapes and labels cannot be dragged.
    pub fn begin_drag(&mut self, id: ShapeId) -> Result<(), EditError> {
        let (origin_left, origin_top) = {
            let shape = self.editable(id)?;
            (shape.left, shape.top)
        };
        self.drag = Some(DragState {
            shape_id: id,
            origin_left,
            origin_top,
        });
        Ok(())
    }

    /// Moves the dragged shape so its top-left lands on the proposed
    /// position, rounded to the grid when snapping is on. The label follows.
    /// No snapshot is taken. Returns the applied position, or `None` when no
    /// drag is in progress.
    pub fn drag_to(&mut self, left: f64, top: f64) -> Option<Point> {
        let drag = self.drag?;
        let (left, top) = if self.snap_to_grid {
            (self.context.scale.snap(left), self.context.scale.snap(top))
        } else {
            (left, top)
        };
        let shape = self.context.store.get_mut(drag.shape_id)?;
        shape.left = left;
        shape.top = top;
        self.refresh_shape(drag.shape_id);
        Some(Point::new(left, top))
    }

    /// Finishes the drag. Commits a snapshot only when the shape actually
    /// moved; returns whether it did.
    pub fn end_drag(&mut self) -> Result<bool, EditError> {
        let Some(drag) = self.drag.take() else {
            return Ok(false);
        };
        let Some(shape) = self.context.store.get(drag.shape_id) else {
            return Ok(false);
        };
        let (left, top) = (shape.left, shape.top);
        let moved = left != drag.origin_left || top != drag.origin_top;
        if moved {
            self.commit("move")?;
            tracing::info!("Moved shape {} to ({}, {})", drag.shape_id, left, top);
        }
        Ok(moved)
    }

    /// Drag gesture in one call: begin, move to the position, end.
    pub fn move_shape(&mut self, id: ShapeId, left: f64, top: f64) -> Result<bool, EditError> {
        self.begin_drag(id)?;
        self.drag_to(left, top);
        self.end_drag()
    }

    /// Applies an on-canvas scale to a shape and commits it.
    ///
    /// A scale that would make the shape larger than the total floor area is
    /// rejected and the previous scale kept. Returns the new area.
    pub fn scale_shape(&mut self, id: ShapeId, scale_x: f64, scale_y: f64) -> Result<f64, EditError> {
        let shape = self.editable(id)?;
        let valid = scale_x > 0.0 && scale_y > 0.0 && scale_x.is_finite() && scale_y.is_finite();
        if !valid {
            return Err(EditError::InvalidArea(round2(
                shape.width * scale_x * shape.height * scale_y,
            )));
        }
        let has_area = shape.has_area();
        let grid = self.context.scale.grid_size();
        let new_area = (shape.width * scale_x / grid) * (shape.height * scale_y / grid);
        if has_area {
            self.context.scale.check_fits(new_area)?;
        }

        if let Some(shape) = self.context.store.get_mut(id) {
            shape.scale_x = scale_x;
            shape.scale_y = scale_y;
        }
        self.refresh_shape(id);
        self.commit("scale")?;
        Ok(round2(new_area))
    }

    /// Resizes a shape to `target_area_m2`, keeping its top-left corner.
    ///
    /// The uniform factor `sqrt(target / current)` is baked into the frame and
    /// geometry so both scale factors return to 1, then the label is re-synced.
    pub fn set_area(&mut self, id: ShapeId, target_area_m2: f64) -> Result<(), EditError> {
        let shape = self.editable(id)?;
        if !(target_area_m2 > 0.0) || !shape.has_area() {
            return Err(EditError::InvalidArea(target_area_m2));
        }
        self.context.scale.check_fits(target_area_m2)?;

        let grid = self.context.scale.grid_size();
        let current = (shape.scaled_width() / grid) * (shape.scaled_height() / grid);
        if !(current > 0.0) {
            return Err(EditError::InvalidArea(target_area_m2));
        }
        let factor = (target_area_m2 / current).sqrt();

        if let Some(shape) = self.context.store.get_mut(id) {
            shape.bake_scale(factor);
        }
        self.refresh_shape(id);
        self.commit("set area")?;
        tracing::info!("Set area of shape {} to {}m²", id, target_area_m2);
        Ok(())
    }

    /// Tags a room shape with a room type (or clears it). The label gains
    /// the room name.
    pub fn set_room_type(&mut self, id: ShapeId, room_type: Option<RoomType>) -> Result<(), EditError> {
        let shape = self.editable(id)?;
        if !shape.has_area() {
            return Err(EditError::InvalidArea(0.0));
        }
        if shape.room_type == room_type {
            return Ok(());
        }
        if let Some(shape) = self.context.store.get_mut(id) {
            shape.room_type = room_type;
        }
        self.refresh_shape(id);
        self.commit("set room type")
    }

    /// Resizes a tagged room to its type's recommended area. Returns false
    /// when the shape has no room type.
    pub fn apply_recommended_area(&mut self, id: ShapeId) -> Result<bool, EditError> {
        let shape = self.editable(id)?;
        let Some(room_type) = shape.room_type else {
            return Ok(false);
        };
        self.set_area(id, room_type.recommended_area())?;
        Ok(true)
    }

    /// Current area of a shape in m².
    pub fn area_of(&self, id: ShapeId) -> Option<f64> {
        self.context
            .store
            .get(id)
            .map(|s| shape_area(s, &self.context.scale))
    }
}
