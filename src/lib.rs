//! # FloorPlan
//!
//! A 2D floor-plan editor engine. Room symbols are sized from a target
//! floor area, every room carries a live area label, shapes are grouped into
//! layers and every committed edit can be undone.
//!
//! ## Architecture
//!
//! FloorPlan is organized as a workspace with multiple crates:
//!
//! 1. **floorplan-core** - Error taxonomy, constants, units, room-type catalog
//! 2. **floorplan-settings** - Configuration files and persistence
//! 3. **floorplan-designer** - Scale model, shapes, labels, layers, history, viewport
//! 4. **floorplan** - Command-line front end that integrates all crates

pub use floorplan_core as core;
pub use floorplan_designer as designer;
pub use floorplan_settings as settings;

pub use floorplan_core::{BackgroundKind, EditError, ExportError, Palette, RoomType};
pub use floorplan_designer::{
    AreaReport, EditorOptions, ExportPaths, FloorShape, SceneCoordinator, ShapeId, ShapeKind,
};
pub use floorplan_settings::{Config, SettingsPersistence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so that command output on stdout stays clean. The
/// `RUST_LOG` environment variable overrides the default `info` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Startup options for an editor session built from the user configuration.
pub fn editor_options(config: &Config) -> EditorOptions {
    EditorOptions {
        grid_size: config.editor.grid_size,
        total_area: config.editor.total_area,
        canvas_width: config.canvas.width,
        canvas_height: config.canvas.height,
        background: config.canvas.background,
        background_color: config.canvas.background_color.clone(),
        snap_to_grid: config.editor.snap_to_grid,
        show_guides: config.editor.show_guides,
        history_limit: config.editor.history_limit,
        min_zoom: config.viewport.min_zoom,
        max_zoom: config.viewport.max_zoom,
        button_zoom_step: config.viewport.button_step,
        wheel_zoom_step: config.viewport.wheel_step,
        palette: config.palette.clone(),
    }
}
