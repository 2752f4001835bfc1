//! Viewport zoom and pan.
//!
//! Maps document pixels to screen pixels with a uniform zoom and a
//! translation: `screen = doc * zoom + pan`. The viewport is view state only;
//! it never enters history or exports.

use floorplan_core::constants::{BUTTON_ZOOM_STEP, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_STEP};
use floorplan_core::EditError;
use std::fmt;

use crate::model::Point;

#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    width: f64,
    height: f64,
    min_zoom: f64,
    max_zoom: f64,
    button_step: f64,
    wheel_step: f64,
    panning: bool,
}

impl Viewport {
    /// Creates an identity viewport over a `width × height` drawing area.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            width,
            height,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            button_step: BUTTON_ZOOM_STEP,
            wheel_step: WHEEL_ZOOM_STEP,
            panning: false,
        }
    }

    /// Replaces the zoom bounds. The current zoom is clamped into them.
    pub fn set_zoom_bounds(&mut self, min_zoom: f64, max_zoom: f64) -> Result<(), EditError> {
        if !(min_zoom > 0.0 && min_zoom <= 1.0 && max_zoom >= 1.0 && min_zoom < max_zoom) {
            return Err(EditError::InvalidZoomBounds {
                min: min_zoom,
                max: max_zoom,
            });
        }
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
        Ok(())
    }

    /// Sets the button and wheel zoom multipliers. Steps must exceed 1.
    pub fn set_zoom_steps(&mut self, button_step: f64, wheel_step: f64) {
        if button_step > 1.0 {
            self.button_step = button_step;
        }
        if wheel_step > 1.0 {
            self.wheel_step = wheel_step;
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Sets the drawing area size (follows canvas resizes).
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Viewport center in screen pixels.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn document_to_screen(&self, doc: &Point) -> Point {
        Point::new(doc.x * self.zoom + self.pan_x, doc.y * self.zoom + self.pan_y)
    }

    pub fn screen_to_document(&self, screen: &Point) -> Point {
        Point::new(
            (screen.x - self.pan_x) / self.zoom,
            (screen.y - self.pan_y) / self.zoom,
        )
    }

    /// Zooms so that the document point under `screen` stays under it.
    /// The zoom is clamped to the bounds.
    pub fn zoom_to_point(&mut self, screen: &Point, new_zoom: f64) {
        let new_zoom = new_zoom.clamp(self.min_zoom, self.max_zoom);
        let anchor = self.screen_to_document(screen);
        self.zoom = new_zoom;
        self.pan_x = screen.x - anchor.x * new_zoom;
        self.pan_y = screen.y - anchor.y * new_zoom;
    }

    /// Button zoom, anchored at the viewport center.
    pub fn zoom_in(&mut self) {
        let center = self.center();
        self.zoom_to_point(&center, self.zoom * self.button_step);
    }

    /// Button zoom, anchored at the viewport center.
    pub fn zoom_out(&mut self) {
        let center = self.center();
        self.zoom_to_point(&center, self.zoom / self.button_step);
    }

    /// Wheel zoom anchored at the pointer. Negative `delta_y` (wheel up)
    /// zooms in.
    pub fn zoom_wheel(&mut self, pointer: &Point, delta_y: f64) {
        if delta_y == 0.0 {
            return;
        }
        let new_zoom = if delta_y < 0.0 {
            self.zoom * self.wheel_step
        } else {
            self.zoom / self.wheel_step
        };
        self.zoom_to_point(pointer, new_zoom);
    }

    /// Restores the identity transform.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.panning = false;
    }

    /// Starts a pan gesture. Only a drag with the pan modifier held pans;
    /// returns whether panning started.
    pub fn begin_pan(&mut self, modifier_held: bool) -> bool {
        self.panning = modifier_held;
        self.panning
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Moves the view by a screen delta while a pan gesture is active.
    /// Returns whether the pan was applied.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> bool {
        if !self.panning {
            return false;
        }
        self.pan_x += dx;
        self.pan_y += dy;
        true
    }

    pub fn end_pan(&mut self) {
        self.panning = false;
    }

    /// Affine transform `[a, b, c, d, e, f]` for the rendering surface.
    pub fn transform(&self) -> [f64; 6] {
        [self.zoom, 0.0, 0.0, self.zoom, self.pan_x, self.pan_y]
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            floorplan_core::constants::DEFAULT_CANVAS_WIDTH,
            floorplan_core::constants::DEFAULT_CANVAS_HEIGHT,
        )
    }
}
