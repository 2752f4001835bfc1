//! Scene serialization.
//!
//! [`SceneData`] is the complete document state: canvas, background, scale,
//! layers and every object including labels. It is the payload of history
//! snapshots. [`SceneFile`] wraps it with a format version and metadata for
//! the JSON dump written to disk.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use floorplan_core::constants::{CANVAS_SIZE_MAX, CANVAS_SIZE_MIN, DEFAULT_BACKGROUND_COLOR};
use floorplan_core::{BackgroundKind, EditError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::labels::shape_area;
use crate::layers::{Layer, LayerId};
use crate::model::{FloorShape, ShapeId};
use crate::scale::ScaleModel;

/// Scene file format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneData {
    pub canvas_width: f64,
    pub canvas_height: f64,
    #[serde(default)]
    pub background: BackgroundKind,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    pub grid_size: f64,
    pub total_area: f64,
    pub layers: Vec<Layer>,
    pub active_layer: LayerId,
    /// Objects in draw order, labels included
    pub shapes: Vec<FloorShape>,
    #[serde(default)]
    pub next_id: ShapeId,
}

fn default_background_color() -> String {
    DEFAULT_BACKGROUND_COLOR.to_string()
}

fn malformed(reason: impl Into<String>) -> EditError {
    EditError::MalformedSnapshot {
        reason: reason.into(),
    }
}

impl SceneData {
    pub fn to_json(&self) -> Result<String, EditError> {
        serde_json::to_string(self).map_err(|e| malformed(e.to_string()))
    }

    /// Parses and validates a scene.
    pub fn from_json(json: &str) -> Result<Self, EditError> {
        let data: SceneData = serde_json::from_str(json).map_err(|e| malformed(e.to_string()))?;
        data.validate()?;
        Ok(data)
    }

    /// Checks structural consistency. Every failure is `MalformedSnapshot`.
    ///
    /// Besides well-formed numbers and ids this enforces the document
    /// invariants: no area-bearing shape exceeds the total area, every
    /// non-label object belongs to exactly one layer and labels to none.
    /// The canvas may not exceed the configured bounds, widened to the
    /// square derived from the total area.
    pub fn validate(&self) -> Result<(), EditError> {
        if !(self.grid_size > 0.0 && self.grid_size.is_finite()) {
            return Err(malformed(format!("invalid grid size {}", self.grid_size)));
        }
        if !(self.total_area > 0.0 && self.total_area.is_finite()) {
            return Err(malformed(format!("invalid total area {}", self.total_area)));
        }
        let scale = ScaleModel::new(self.grid_size, self.total_area)
            .map_err(|e| malformed(e.to_string()))?;

        let side = scale.canvas_side();
        let (min_size, max_size) = (CANVAS_SIZE_MIN.min(side), CANVAS_SIZE_MAX.max(side));
        let in_range = |v: f64| v.is_finite() && v >= min_size && v <= max_size;
        if !(in_range(self.canvas_width) && in_range(self.canvas_height)) {
            return Err(malformed(format!(
                "invalid canvas size {}x{} (allowed {}..={})",
                self.canvas_width, self.canvas_height, min_size, max_size
            )));
        }

        if self.layers.is_empty() {
            return Err(malformed("scene has no layers"));
        }
        if !self.layers.iter().any(|l| l.id == self.active_layer) {
            return Err(malformed(format!(
                "active layer {} does not exist",
                self.active_layer
            )));
        }

        let mut ids = HashSet::new();
        for shape in &self.shapes {
            if !ids.insert(shape.id) {
                return Err(malformed(format!("duplicate object id {}", shape.id)));
            }
            let scale_ok = shape.scale_x > 0.0
                && shape.scale_y > 0.0
                && shape.scale_x.is_finite()
                && shape.scale_y.is_finite();
            if !scale_ok {
                return Err(malformed(format!("object {} has an invalid scale", shape.id)));
            }
            if !(shape.width >= 0.0 && shape.height >= 0.0) {
                return Err(malformed(format!("object {} has an invalid size", shape.id)));
            }
            if shape.has_area() {
                // Displayed areas are rounded to hundredths.
                let area = shape_area(shape, &scale);
                if area > self.total_area + 0.005 {
                    return Err(malformed(format!(
                        "object {} covers {}m², more than the total {}m²",
                        shape.id, area, self.total_area
                    )));
                }
            }
        }

        let mut owner_layer: HashMap<ShapeId, &str> = HashMap::new();
        for layer in &self.layers {
            if let Some(missing) = layer.shape_ids.iter().find(|id| !ids.contains(id)) {
                return Err(malformed(format!(
                    "layer {} references unknown object {}",
                    layer.name, missing
                )));
            }
            for &id in &layer.shape_ids {
                if owner_layer.insert(id, &layer.name).is_some() {
                    return Err(malformed(format!(
                        "object {} belongs to more than one layer",
                        id
                    )));
                }
            }
        }
        for shape in &self.shapes {
            match (shape.is_label(), owner_layer.get(&shape.id)) {
                (true, Some(layer)) => {
                    return Err(malformed(format!(
                        "label {} is listed in layer {}",
                        shape.id, layer
                    )));
                }
                (false, None) => {
                    return Err(malformed(format!("object {} belongs to no layer", shape.id)));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Scene dump written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub version: String,
    pub metadata: SceneMetadata,
    #[serde(flatten)]
    pub scene: SceneData,
}

impl SceneFile {
    pub fn new(name: impl Into<String>, scene: SceneData) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: SceneMetadata {
                name: name.into(),
                created: now,
                modified: now,
            },
            scene,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize scene")
    }

    /// Save scene to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path.as_ref(), json).context("Failed to write scene file")?;
        Ok(())
    }

    /// Load scene from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read scene file")?;
        let mut file: SceneFile =
            serde_json::from_str(&content).context("Failed to parse scene file")?;
        file.scene.validate().context("Invalid scene file")?;
        file.metadata.modified = Utc::now();
        Ok(file)
    }
}

/// Reads a scene from either a scene file or a bare scene dump.
pub fn parse_scene(json: &str) -> Result<SceneData, EditError> {
    if let Ok(file) = serde_json::from_str::<SceneFile>(json) {
        file.scene.validate()?;
        return Ok(file.scene);
    }
    SceneData::from_json(json)
}
