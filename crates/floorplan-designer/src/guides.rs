//! Grid guide lines.
//!
//! Guides are drawn every grid unit strictly inside the canvas and placed
//! in screen space, snapped to half pixels so that 1px strokes stay crisp
//! at any zoom and pan.

use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    pub orientation: Orientation,
    /// Document coordinate (x for vertical lines, y for horizontal ones)
    pub document: f64,
    /// Pixel-aligned screen coordinate
    pub screen: f64,
}

/// Screen coordinate of a document coordinate, aligned to a pixel center.
pub fn pixel_align(document: f64, zoom: f64, pan: f64) -> f64 {
    (document * zoom + pan).round() + 0.5
}

/// Vertical then horizontal guides for a `width × height` canvas.
pub fn generate_guides(width: f64, height: f64, grid_size: f64, viewport: &Viewport) -> Vec<GuideLine> {
    if !(grid_size > 0.0) {
        return Vec::new();
    }
    let mut guides = Vec::new();
    let mut x = grid_size;
    while x < width {
        guides.push(GuideLine {
            orientation: Orientation::Vertical,
            document: x,
            screen: pixel_align(x, viewport.zoom(), viewport.pan_x()),
        });
        x += grid_size;
    }
    let mut y = grid_size;
    while y < height {
        guides.push(GuideLine {
            orientation: Orientation::Horizontal,
            document: y,
            screen: pixel_align(y, viewport.zoom(), viewport.pan_y()),
        });
        y += grid_size;
    }
    guides
}
