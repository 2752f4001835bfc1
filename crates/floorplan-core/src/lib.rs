//! # FloorPlan Core
//!
//! Core types and utilities shared by the floor-plan editor crates.
//! Provides the error taxonomy, configuration bounds, area/length unit
//! helpers, shared value types and the fixed room-type catalog.

pub mod constants;
pub mod data;
pub mod error;
pub mod types;
pub mod units;

pub use data::rooms::{AreaAssessment, RoomType, RoomTypeInfo};
pub use error::{EditError, Error, ExportError, Result};
pub use types::{parse_hex_color, BackgroundKind, Palette};
pub use units::{format_area, format_number, round2};
