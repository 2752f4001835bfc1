//! Colors, background, canvas size, total area and grid size.

use floorplan_core::constants::{CANVAS_SIZE_MAX, CANVAS_SIZE_MIN};
use floorplan_core::{BackgroundKind, EditError};

use super::SceneCoordinator;
use crate::labels::shape_area;
use crate::model::{ShapeId, ShapeKind};
use crate::surface::RenderSurface;

/// Which selection members a color edit applies to.
#[derive(Clone, Copy)]
enum ColorTarget {
    Fill,
    Stroke,
    Text,
}

impl<S: RenderSurface> SceneCoordinator<S> {
    /// Changes the total floor area.
    ///
    /// The canvas becomes a square of `ceil(sqrt(total)) * grid` pixels and
    /// every shape now larger than the total is shrunk to a quarter of it.
    /// Returns the ids of shrunk shapes.
    pub fn set_total_area(&mut self, total_area_m2: f64) -> Result<Vec<ShapeId>, EditError> {
        let mut scale = self.context.scale;
        scale.set_total_area(total_area_m2)?;
        self.context.scale = scale;
        let shrunk = self.rescale_to_fit();
        tracing::info!("Total area set to {}m²", total_area_m2);
        self.commit("set total area")?;
        Ok(shrunk)
    }

    /// Changes the grid resolution (pixels per meter). The nominal total area
    /// is kept and the canvas side re-derived from it.
    pub fn set_grid_size(&mut self, grid_size: f64) -> Result<Vec<ShapeId>, EditError> {
        let mut scale = self.context.scale;
        scale.set_grid_size(grid_size)?;
        self.context.scale = scale;
        let shrunk = self.rescale_to_fit();
        tracing::info!("Grid size set to {}px", grid_size);
        self.commit("set grid size")?;
        Ok(shrunk)
    }

    /// Squares the canvas to the scale model and shrinks oversized shapes.
    fn rescale_to_fit(&mut self) -> Vec<ShapeId> {
        let side = self.context.scale.canvas_side();
        self.context.canvas_width = side;
        self.context.canvas_height = side;
        self.viewport.set_size(side, side);
        self.surface.set_canvas_size(side, side);

        let oversized: Vec<(ShapeId, f64)> = self
            .context
            .area_shapes()
            .filter_map(|shape| {
                let area = shape_area(shape, &self.context.scale);
                self.context
                    .scale
                    .shrink_factor(area)
                    .map(|factor| (shape.id, factor))
            })
            .collect();

        for &(id, factor) in &oversized {
            if let Some(shape) = self.context.store.get_mut(id) {
                shape.scale_x *= factor;
                shape.scale_y *= factor;
            }
            tracing::warn!("Shrunk shape {} to fit the total area", id);
        }
        // Label text depends on the grid, so every label is refreshed.
        let owners: Vec<ShapeId> = self.context.bindings.owners().collect();
        for owner in owners {
            self.refresh_shape(owner);
        }
        self.regenerate_guides();
        self.surface.request_render_all();
        oversized.into_iter().map(|(id, _)| id).collect()
    }

    /// Sets the canvas pixel size directly, independently of the total area.
    pub fn resize_canvas(&mut self, width: f64, height: f64) -> Result<(), EditError> {
        let in_range = |v: f64| (CANVAS_SIZE_MIN..=CANVAS_SIZE_MAX).contains(&v);
        if !in_range(width) || !in_range(height) {
            return Err(EditError::InvalidCanvasSize {
                width,
                height,
                min: CANVAS_SIZE_MIN,
                max: CANVAS_SIZE_MAX,
            });
        }
        self.context.canvas_width = width;
        self.context.canvas_height = height;
        self.viewport.set_size(width, height);
        self.surface.set_canvas_size(width, height);
        self.regenerate_guides();
        self.surface.request_render_all();
        tracing::info!("Canvas resized to {}x{}", width, height);
        self.commit("resize canvas")
    }

    pub fn set_background(&mut self, kind: BackgroundKind) -> Result<(), EditError> {
        if self.context.background == kind {
            return Ok(());
        }
        self.context.background = kind;
        self.surface
            .set_background(kind, &self.context.background_color);
        self.commit("set background")
    }

    pub fn set_background_color(&mut self, color: &str) -> Result<(), EditError> {
        if self.context.background_color == color {
            return Ok(());
        }
        self.context.background_color = color.to_string();
        self.surface
            .set_background(self.context.background, &self.context.background_color);
        self.commit("set background color")
    }

    /// Sets the room fill color and applies it to selected shapes.
    /// Returns how many objects changed.
    pub fn set_fill_color(&mut self, color: &str) -> Result<usize, EditError> {
        self.palette.room_fill = color.to_string();
        self.recolor_selection(ColorTarget::Fill, color)
    }

    /// Sets the room border color and applies it to selected shapes.
    pub fn set_stroke_color(&mut self, color: &str) -> Result<usize, EditError> {
        self.palette.room_border = color.to_string();
        self.recolor_selection(ColorTarget::Stroke, color)
    }

    /// Sets the text color and applies it to selected text objects.
    pub fn set_text_color(&mut self, color: &str) -> Result<usize, EditError> {
        self.palette.text_color = color.to_string();
        self.recolor_selection(ColorTarget::Text, color)
    }

    fn recolor_selection(&mut self, target: ColorTarget, color: &str) -> Result<usize, EditError> {
        let ids = self.selection.selected_ids().to_vec();
        let mut changed = Vec::new();
        for id in ids {
            let Some(shape) = self.context.store.get_mut(id) else {
                continue;
            };
            let is_text = shape.kind == ShapeKind::Text;
            let slot = match (target, is_text) {
                (ColorTarget::Fill, false) => &mut shape.style.fill,
                (ColorTarget::Stroke, false) => &mut shape.style.stroke,
                (ColorTarget::Text, true) => &mut shape.style.fill,
                _ => continue,
            };
            if slot.as_str() != color {
                *slot = color.to_string();
                if is_text {
                    shape.style.stroke = color.to_string();
                }
                changed.push(id);
            }
        }
        for &id in &changed {
            self.publish(id);
        }
        if !changed.is_empty() {
            self.surface.request_render_all();
            self.commit("recolor")?;
        }
        Ok(changed.len())
    }

    /// Flips snap-to-grid. Returns the new state.
    pub fn toggle_snap_to_grid(&mut self) -> bool {
        self.snap_to_grid = !self.snap_to_grid;
        self.snap_to_grid
    }

    /// Flips guide visibility. Returns the new state.
    pub fn toggle_guides(&mut self) -> bool {
        self.show_guides = !self.show_guides;
        self.regenerate_guides();
        self.surface.request_render_all();
        self.show_guides
    }
}
