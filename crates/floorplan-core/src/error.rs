//! Error handling for the floor-plan editor
//!
//! Provides error types for all layers of the editor:
//! - Edit errors (rejected scene mutations)
//! - Export errors (raster/vector/JSON output)
//!
//! All error types use `thiserror` for ergonomic error handling.
//! Every `EditError` is raised before the scene is touched, so a rejected
//! edit never leaves a half-applied mutation behind.

use thiserror::Error;

/// Scene edit error type
///
/// Represents a user edit that was rejected by the editing engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    /// Requested shape area (or resulting scaled area) exceeds the total floor area
    #[error("Area {requested}m² exceeds the total floor area of {total}m²")]
    AreaExceedsCanvas {
        /// The requested area in m².
        requested: f64,
        /// The configured total floor area in m².
        total: f64,
    },

    /// Attempt to delete the only remaining layer
    #[error("Cannot delete the last layer")]
    LastLayer,

    /// Undo or redo with nothing on the corresponding stack
    #[error("Nothing to {action}")]
    EmptyHistory {
        /// "undo" or "redo".
        action: &'static str,
    },

    /// A snapshot or imported scene could not be decoded
    #[error("Malformed scene snapshot: {reason}")]
    MalformedSnapshot {
        /// Decoder message.
        reason: String,
    },

    /// Grid size must be positive
    #[error("Invalid grid size {0}: must be greater than zero")]
    InvalidGridSize(f64),

    /// Total area must be positive
    #[error("Invalid total area {0}m²: must be greater than zero")]
    InvalidTotalArea(f64),

    /// Shape target area must be positive
    #[error("Invalid shape area {0}m²: must be greater than zero")]
    InvalidArea(f64),

    /// Canvas dimensions outside the accepted range
    #[error("Invalid canvas size {width}x{height}: each side must be within {min}..={max} px")]
    InvalidCanvasSize {
        /// Requested width in pixels.
        width: f64,
        /// Requested height in pixels.
        height: f64,
        /// Minimum side length.
        min: f64,
        /// Maximum side length.
        max: f64,
    },

    /// Zoom bounds are inverted or non-positive
    #[error("Invalid zoom bounds {min}..{max}")]
    InvalidZoomBounds {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Shape id does not exist in the scene
    #[error("Shape {0} not found")]
    ShapeNotFound(u64),

    /// Layer id does not exist in the registry
    #[error("Layer {0} not found")]
    LayerNotFound(String),

    /// Shape belongs to a locked layer and cannot be edited interactively
    #[error("Shape {0} is locked")]
    ShapeLocked(u64),

    /// Confirm/cancel called without a staged deletion
    #[error("No deletion is pending confirmation")]
    NoPendingDeletion,
}

impl EditError {
    /// Whether this rejection should be shown to the user as a blocking notice.
    ///
    /// Empty-history conditions are silently ignored by the editor.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, EditError::EmptyHistory { .. })
    }
}

/// Export error type
///
/// Represents failures while producing raster, vector or JSON output.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Raster surface could not be allocated
    #[error("Cannot allocate a {width}x{height} raster surface")]
    RasterAllocation {
        /// Surface width in pixels.
        width: u32,
        /// Surface height in pixels.
        height: u32,
    },

    /// Image encoding failed
    #[error("Image encoding failed: {reason}")]
    Encoding {
        /// Encoder message.
        reason: String,
    },

    /// Scene serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Main error type for the floor-plan editor
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Rejected edit
    #[error(transparent)]
    Edit(#[from] EditError),

    /// Export failure
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a rejected edit
    pub fn is_edit_error(&self) -> bool {
        matches!(self, Error::Edit(_))
    }

    /// Check if this is an export error
    pub fn is_export_error(&self) -> bool {
        matches!(self, Error::Export(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
