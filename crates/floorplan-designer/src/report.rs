//! Plain-text area report.

use floorplan_core::{format_area, round2};
use std::fmt;

use crate::context::SceneContext;
use crate::labels::shape_area;

#[derive(Debug, Clone, PartialEq)]
pub struct RoomArea {
    pub label: String,
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AreaReport {
    pub total_area: f64,
    pub rooms: Vec<RoomArea>,
}

impl AreaReport {
    /// Lists every area-bearing shape in draw order. A row is named after
    /// the shape's room type, or after the shape itself when untagged.
    pub fn from_context(context: &SceneContext) -> Self {
        let rooms = context
            .area_shapes()
            .map(|shape| RoomArea {
                label: shape
                    .room_type
                    .map(|room| room.name().to_string())
                    .unwrap_or_else(|| shape.name.clone()),
                area: shape_area(shape, context.scale()),
            })
            .collect();
        Self {
            total_area: context.scale().total_area(),
            rooms,
        }
    }

    pub fn used_area(&self) -> f64 {
        round2(self.rooms.iter().map(|r| r.area).sum())
    }

    /// Total minus used area. Negative when rooms overlap past the total.
    pub fn remaining_area(&self) -> f64 {
        round2(self.total_area - self.used_area())
    }
}

impl fmt::Display for AreaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Floor Plan Area Report")?;
        writeln!(f, "---------------------")?;
        writeln!(f, "Total Area: {}", format_area(self.total_area))?;
        writeln!(f)?;
        writeln!(f, "Room Details:")?;
        for room in &self.rooms {
            writeln!(f, "{}: {}", room.label, format_area(room.area))?;
        }
        writeln!(f)?;
        write!(f, "Remaining Area: {}", format_area(self.remaining_area()))
    }
}
