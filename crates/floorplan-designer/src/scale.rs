//! Scale model: conversions between pixel space and real-world area.
//!
//! One grid unit is one meter, so `grid_size` is the number of pixels per
//! meter. Areas are expressed in m² and rounded to two decimals for display.

use floorplan_core::constants::SHRINK_TARGET_FRACTION;
use floorplan_core::{round2, EditError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleModel {
    grid_size: f64,
    total_area: f64,
}

impl ScaleModel {
    /// Creates a scale model, rejecting non-positive grid size or total area.
    pub fn new(grid_size: f64, total_area: f64) -> Result<Self, EditError> {
        validate_grid_size(grid_size)?;
        validate_total_area(total_area)?;
        Ok(Self {
            grid_size,
            total_area,
        })
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    pub fn total_area(&self) -> f64 {
        self.total_area
    }

    /// Area in m² covered by a `width_px × height_px` frame, rounded to 2 decimals.
    pub fn pixels_to_area(&self, width_px: f64, height_px: f64) -> f64 {
        round2((width_px / self.grid_size) * (height_px / self.grid_size))
    }

    /// Side length in pixels of a square covering `area_m2`.
    pub fn area_to_side_length(&self, area_m2: f64) -> f64 {
        area_m2.sqrt() * self.grid_size
    }

    pub fn pixels_to_meters(&self, px: f64) -> f64 {
        px / self.grid_size
    }

    /// Side of the square canvas holding the total area: `ceil(sqrt(total)) * grid`.
    pub fn canvas_side(&self) -> f64 {
        self.total_area.sqrt().ceil() * self.grid_size
    }

    pub fn set_total_area(&mut self, area_m2: f64) -> Result<(), EditError> {
        validate_total_area(area_m2)?;
        self.total_area = area_m2;
        Ok(())
    }

    /// Changes the pixels-per-meter resolution. The nominal total area is kept.
    pub fn set_grid_size(&mut self, grid_size: f64) -> Result<(), EditError> {
        validate_grid_size(grid_size)?;
        self.grid_size = grid_size;
        Ok(())
    }

    /// Rejects an area larger than the total floor area.
    pub fn check_fits(&self, area_m2: f64) -> Result<(), EditError> {
        if area_m2 > self.total_area {
            return Err(EditError::AreaExceedsCanvas {
                requested: round2(area_m2),
                total: self.total_area,
            });
        }
        Ok(())
    }

    /// Uniform scale factor bringing an oversized area down to a quarter of
    /// the total, or `None` when the area already fits.
    pub fn shrink_factor(&self, current_area: f64) -> Option<f64> {
        if current_area > self.total_area && current_area > 0.0 {
            Some((SHRINK_TARGET_FRACTION * self.total_area / current_area).sqrt())
        } else {
            None
        }
    }

    /// Rounds a coordinate to the nearest grid multiple.
    pub fn snap(&self, value: f64) -> f64 {
        (value / self.grid_size).round() * self.grid_size
    }
}

fn validate_grid_size(grid_size: f64) -> Result<(), EditError> {
    if !(grid_size > 0.0 && grid_size.is_finite()) {
        return Err(EditError::InvalidGridSize(grid_size));
    }
    Ok(())
}

fn validate_total_area(area_m2: f64) -> Result<(), EditError> {
    if !(area_m2 > 0.0 && area_m2.is_finite()) {
        return Err(EditError::InvalidTotalArea(area_m2));
    }
    Ok(())
}
