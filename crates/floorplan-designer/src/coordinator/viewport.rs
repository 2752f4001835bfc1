//! Zoom, pan and guides. None of these touch history.

use super::SceneCoordinator;
use crate::model::Point;
use crate::surface::RenderSurface;

impl<S: RenderSurface> SceneCoordinator<S> {
    /// Zooms in by the button step around the viewport center.
    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
        self.viewport_changed();
    }

    /// Zooms out by the button step around the viewport center.
    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
        self.viewport_changed();
    }

    /// Wheel zoom around the pointer (screen pixels).
    pub fn zoom_wheel(&mut self, pointer: &Point, delta_y: f64) {
        self.viewport.zoom_wheel(pointer, delta_y);
        self.viewport_changed();
    }

    /// Restores zoom 1 and no pan.
    pub fn reset_zoom(&mut self) {
        self.viewport.reset();
        self.viewport_changed();
    }

    /// Pointer down. Panning starts only with the pan modifier held.
    pub fn begin_pan(&mut self, modifier_held: bool) -> bool {
        self.viewport.begin_pan(modifier_held)
    }

    /// Pointer move during a pan gesture.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> bool {
        let panned = self.viewport.pan_by(dx, dy);
        if panned {
            self.viewport_changed();
        }
        panned
    }

    /// Pointer up.
    pub fn end_pan(&mut self) {
        self.viewport.end_pan();
    }

    fn viewport_changed(&mut self) {
        self.surface.set_viewport_transform(self.viewport.transform());
        self.regenerate_guides();
        self.surface.request_render_all();
        tracing::debug!("Viewport {}", self.viewport);
    }
}
