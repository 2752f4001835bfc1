//! Rendering collaborator interface.
//!
//! The editing engine never paints or hit-tests. It reports scene changes
//! to a [`RenderSurface`], which may be a widget toolkit canvas, a test
//! recorder, or nothing at all.

use floorplan_core::BackgroundKind;

use crate::guides::GuideLine;
use crate::model::{FloorShape, ShapeId};

pub trait RenderSurface {
    fn add_object(&mut self, shape: &FloorShape);

    /// Called after a shape (or label) changed position, size, text or style.
    fn update_object(&mut self, shape: &FloorShape);

    fn remove_object(&mut self, id: ShapeId);

    fn set_active_objects(&mut self, ids: &[ShapeId]);

    fn request_render_all(&mut self);

    /// Replaces every object with `shapes`, in draw order.
    fn load_scene(&mut self, shapes: &[&FloorShape]);

    fn set_canvas_size(&mut self, _width: f64, _height: f64) {}

    fn set_background(&mut self, _kind: BackgroundKind, _color: &str) {}

    /// Viewport affine transform `[a, b, c, d, e, f]`.
    fn set_viewport_transform(&mut self, _transform: [f64; 6]) {}

    fn set_guides(&mut self, _guides: &[GuideLine]) {}
}

/// Surface that ignores every call, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn add_object(&mut self, _shape: &FloorShape) {}

    fn update_object(&mut self, _shape: &FloorShape) {}

    fn remove_object(&mut self, _id: ShapeId) {}

    fn set_active_objects(&mut self, _ids: &[ShapeId]) {}

    fn request_render_all(&mut self) {}

    fn load_scene(&mut self, _shapes: &[&FloorShape]) {}
}
