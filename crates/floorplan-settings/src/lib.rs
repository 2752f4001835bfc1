//! FloorPlan Settings Crate
//!
//! Handles editor configuration, validation and settings persistence.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{CanvasSettings, Config, EditorSettings, ExportSettings, ViewportSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use floorplan_core::{BackgroundKind, Palette};
pub use persistence::SettingsPersistence;
