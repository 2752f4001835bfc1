//! Room-type catalog
//!
//! A fixed set of room types with the area range (m²) considered reasonable
//! for each. The catalog is informational: shapes may be tagged with a room
//! type regardless of their current area.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog entry for a room type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomTypeInfo {
    /// Display name.
    pub name: &'static str,
    /// Minimum reasonable area in m².
    pub min_area: f64,
    /// Maximum reasonable area in m².
    pub max_area: f64,
    /// Recommended area in m².
    pub recommended_area: f64,
}

/// Room types known to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    LivingRoom,
    Bedroom,
    Kitchen,
    Bathroom,
    DiningRoom,
}

const LIVING_ROOM: RoomTypeInfo = RoomTypeInfo {
    name: "Living Room",
    min_area: 20.0,
    max_area: 50.0,
    recommended_area: 30.0,
};

const BEDROOM: RoomTypeInfo = RoomTypeInfo {
    name: "Bedroom",
    min_area: 12.0,
    max_area: 30.0,
    recommended_area: 16.0,
};

const KITCHEN: RoomTypeInfo = RoomTypeInfo {
    name: "Kitchen",
    min_area: 8.0,
    max_area: 25.0,
    recommended_area: 15.0,
};

const BATHROOM: RoomTypeInfo = RoomTypeInfo {
    name: "Bathroom",
    min_area: 4.0,
    max_area: 12.0,
    recommended_area: 6.0,
};

const DINING_ROOM: RoomTypeInfo = RoomTypeInfo {
    name: "Dining Room",
    min_area: 10.0,
    max_area: 30.0,
    recommended_area: 20.0,
};

/// How an area compares with a room type's reasonable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaAssessment {
    BelowMinimum,
    WithinRange,
    AboveMaximum,
}

impl RoomType {
    /// All room types in catalog order.
    pub const ALL: [RoomType; 5] = [
        RoomType::LivingRoom,
        RoomType::Bedroom,
        RoomType::Kitchen,
        RoomType::Bathroom,
        RoomType::DiningRoom,
    ];

    /// Catalog entry for this room type.
    pub fn info(&self) -> &'static RoomTypeInfo {
        match self {
            RoomType::LivingRoom => &LIVING_ROOM,
            RoomType::Bedroom => &BEDROOM,
            RoomType::Kitchen => &KITCHEN,
            RoomType::Bathroom => &BATHROOM,
            RoomType::DiningRoom => &DINING_ROOM,
        }
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn recommended_area(&self) -> f64 {
        self.info().recommended_area
    }

    /// Compare an area (m²) with this room type's range. Bounds are inclusive.
    pub fn assess(&self, area_m2: f64) -> AreaAssessment {
        let info = self.info();
        if area_m2 < info.min_area {
            AreaAssessment::BelowMinimum
        } else if area_m2 > info.max_area {
            AreaAssessment::AboveMaximum
        } else {
            AreaAssessment::WithinRange
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RoomType {
    type Err = String;

    /// Accepts the display name ("Living Room") or the kebab-case key ("living-room").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        RoomType::ALL
            .iter()
            .copied()
            .find(|room| room.name().to_lowercase() == normalized)
            .ok_or_else(|| format!("Unknown room type: {}", s))
    }
}
