//! Editor-wide constants: configuration bounds, defaults and symbol proportions.

/// Grid size bounds in pixels per meter.
pub const GRID_SIZE_MIN: f64 = 5.0;
pub const GRID_SIZE_MAX: f64 = 100.0;
pub const GRID_SIZE_STEP: f64 = 5.0;
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Total floor area bounds in m².
pub const TOTAL_AREA_MIN: f64 = 10.0;
pub const TOTAL_AREA_MAX: f64 = 1000.0;
pub const TOTAL_AREA_STEP: f64 = 10.0;
pub const DEFAULT_TOTAL_AREA: f64 = 100.0;

/// Canvas pixel dimension bounds.
pub const CANVAS_SIZE_MIN: f64 = 200.0;
pub const CANVAS_SIZE_MAX: f64 = 2000.0;
pub const CANVAS_SIZE_STEP: f64 = 50.0;
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Zoom bounds and steps.
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;
pub const BUTTON_ZOOM_STEP: f64 = 1.2;
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Shapes exceeding a shrunk total area are scaled to this fraction of it.
pub const SHRINK_TARGET_FRACTION: f64 = 0.25;

/// Default shape placement (top-left, pixels).
pub const DEFAULT_SHAPE_LEFT: f64 = 100.0;
pub const DEFAULT_SHAPE_TOP: f64 = 100.0;

/// Symbol proportions.
pub const STAIR_STEPS: usize = 6;
pub const ENTRANCE_ARC_SAMPLES: usize = 33;
pub const TRAPEZOID_TOP_RATIO: f64 = 0.6;
pub const ELEVATOR_CABIN_WIDTH_RATIO: f64 = 0.8;
pub const ELEVATOR_JAMB_OFFSET_RATIO: f64 = 0.4;
pub const ELEVATOR_INDICATOR_RATIO: f64 = 0.1;

/// Outline widths (pixels).
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
pub const LINE_STROKE_WIDTH: f64 = 2.0;

/// Text metrics used for label frames when no rendering backend measures them.
pub const DEFAULT_TEXT_FONT_SIZE: f64 = 16.0;
pub const LABEL_FONT_SIZE: f64 = 14.0;
pub const TEXT_ADVANCE_RATIO: f64 = 0.6;
pub const TEXT_LINE_HEIGHT_RATIO: f64 = 1.2;
pub const DEFAULT_TEXT_CONTENT: &str = "Room Name";

/// Default palette.
pub const DEFAULT_ROOM_FILL: &str = "#ffffff";
pub const DEFAULT_ROOM_BORDER: &str = "#000000";
pub const DEFAULT_TEXT_COLOR: &str = "#000000";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#f0f0f0";
pub const GUIDE_COLOR: &str = "#2196f3";

/// Default undo depth.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Default export file stem.
pub const DEFAULT_EXPORT_STEM: &str = "floor-plan";
