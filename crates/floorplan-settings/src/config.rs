//! Configuration and settings management for the floor-plan editor
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Editor settings (grid size, total area, snapping, history depth)
//! - Canvas settings (pixel dimensions, background)
//! - Viewport settings (zoom bounds and steps)
//! - Palette (default room and text colors)
//! - Export defaults (output directory, file stem)

use crate::error::{ConfigError, SettingsResult};
use floorplan_core::constants::*;
use floorplan_core::units::is_on_step;
use floorplan_core::{parse_hex_color, BackgroundKind, Palette};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum number of entries kept in the recent files list.
pub const RECENT_FILES_MAX: usize = 10;

/// Editor behaviour settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Pixels per meter
    pub grid_size: f64,
    /// Total floor area in m²
    pub total_area: f64,
    /// Round dragged positions to the grid
    pub snap_to_grid: bool,
    /// Draw guide lines every grid unit
    pub show_guides: bool,
    /// Maximum number of undo snapshots retained
    pub history_limit: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            total_area: DEFAULT_TOTAL_AREA,
            snap_to_grid: true,
            show_guides: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Background style
    pub background: BackgroundKind,
    /// Background color
    pub background_color: String,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            background: BackgroundKind::default(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

/// Viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom factor for toolbar buttons
    pub button_step: f64,
    /// Zoom factor per mouse wheel notch
    pub wheel_step: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            button_step: BUTTON_ZOOM_STEP,
            wheel_step: WHEEL_ZOOM_STEP,
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Default output directory
    pub output_directory: PathBuf,
    /// File name stem shared by all export files
    pub file_stem: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_directory: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            file_stem: DEFAULT_EXPORT_STEM.to_string(),
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub editor: EditorSettings,
    pub canvas: CanvasSettings,
    pub viewport: ViewportSettings,
    pub palette: Palette,
    pub export: ExportSettings,
    /// Recently opened scene files, most recent first
    pub recent_files: Vec<PathBuf>,
}

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

fn check_stepped(key: &str, value: f64, min: f64, max: f64, step: f64) -> Result<(), ConfigError> {
    if !(min..=max).contains(&value) {
        return Err(ConfigError::out_of_range(key, value));
    }
    if !is_on_step(value, min, max, step) {
        return Err(ConfigError::OffStep {
            key: key.to_string(),
            value: value.to_string(),
            step: step.to_string(),
        });
    }
    Ok(())
}

fn check_color(key: &str, value: &str) -> Result<(), ConfigError> {
    if parse_hex_color(value).is_none() {
        return Err(ConfigError::InvalidColor {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let editor = &self.editor;
        check_stepped(
            "editor.grid_size",
            editor.grid_size,
            GRID_SIZE_MIN,
            GRID_SIZE_MAX,
            GRID_SIZE_STEP,
        )?;
        check_stepped(
            "editor.total_area",
            editor.total_area,
            TOTAL_AREA_MIN,
            TOTAL_AREA_MAX,
            TOTAL_AREA_STEP,
        )?;
        // Undo needs the initial state plus at least one edit
        if editor.history_limit < 2 {
            return Err(ConfigError::out_of_range(
                "editor.history_limit",
                editor.history_limit,
            ));
        }

        let canvas = &self.canvas;
        check_stepped(
            "canvas.width",
            canvas.width,
            CANVAS_SIZE_MIN,
            CANVAS_SIZE_MAX,
            CANVAS_SIZE_STEP,
        )?;
        check_stepped(
            "canvas.height",
            canvas.height,
            CANVAS_SIZE_MIN,
            CANVAS_SIZE_MAX,
            CANVAS_SIZE_STEP,
        )?;
        check_color("canvas.background_color", &canvas.background_color)?;

        let viewport = &self.viewport;
        if viewport.min_zoom < MIN_ZOOM || viewport.min_zoom > viewport.max_zoom {
            return Err(ConfigError::out_of_range(
                "viewport.min_zoom",
                viewport.min_zoom,
            ));
        }
        if viewport.max_zoom > MAX_ZOOM {
            return Err(ConfigError::out_of_range(
                "viewport.max_zoom",
                viewport.max_zoom,
            ));
        }
        if viewport.button_step <= 1.0 {
            return Err(ConfigError::out_of_range(
                "viewport.button_step",
                viewport.button_step,
            ));
        }
        if viewport.wheel_step <= 1.0 {
            return Err(ConfigError::out_of_range(
                "viewport.wheel_step",
                viewport.wheel_step,
            ));
        }

        check_color("palette.room_fill", &self.palette.room_fill)?;
        check_color("palette.room_border", &self.palette.room_border)?;
        check_color("palette.text_color", &self.palette.text_color)?;

        if self.export.file_stem.trim().is_empty() {
            return Err(ConfigError::out_of_range("export.file_stem", "\"\""));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_files.retain(|f| f != &path);

        self.recent_files.insert(0, path);
        self.recent_files.truncate(RECENT_FILES_MAX);
    }
}
