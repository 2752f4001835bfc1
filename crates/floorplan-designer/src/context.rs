//! Scene context: the document state shared by every editing component.

use floorplan_core::constants::{
    BUTTON_ZOOM_STEP, DEFAULT_BACKGROUND_COLOR, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH,
    DEFAULT_GRID_SIZE, DEFAULT_HISTORY_LIMIT, DEFAULT_TEXT_COLOR, DEFAULT_TOTAL_AREA, MAX_ZOOM,
    MIN_ZOOM, WHEEL_ZOOM_STEP,
};
use floorplan_core::{BackgroundKind, EditError, Palette};

use crate::history::{Snapshot, Snapshottable};
use crate::labels::{shape_area, LabelBindings};
use crate::layers::LayerRegistry;
use crate::model::{FloorShape, ShapeId};
use crate::scale::ScaleModel;
use crate::serialization::SceneData;
use crate::shape_store::ShapeStore;

/// Startup options for an editor session.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOptions {
    pub grid_size: f64,
    pub total_area: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub background: BackgroundKind,
    pub background_color: String,
    pub snap_to_grid: bool,
    pub show_guides: bool,
    pub history_limit: usize,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub button_zoom_step: f64,
    pub wheel_zoom_step: f64,
    pub palette: Palette,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            total_area: DEFAULT_TOTAL_AREA,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            background: BackgroundKind::default(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            snap_to_grid: true,
            show_guides: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            button_zoom_step: BUTTON_ZOOM_STEP,
            wheel_zoom_step: WHEEL_ZOOM_STEP,
            palette: Palette::default(),
        }
    }
}

/// Document state: objects, scale, layers, label bindings and canvas.
///
/// Everything here is captured by history snapshots except the label
/// binding table, which is rebuilt from the objects on restore.
#[derive(Debug, Clone)]
pub struct SceneContext {
    pub(crate) store: ShapeStore,
    pub(crate) scale: ScaleModel,
    pub(crate) layers: LayerRegistry,
    pub(crate) bindings: LabelBindings,
    pub(crate) canvas_width: f64,
    pub(crate) canvas_height: f64,
    pub(crate) background: BackgroundKind,
    pub(crate) background_color: String,
}

impl SceneContext {
    pub fn new(options: &EditorOptions) -> Result<Self, EditError> {
        Ok(Self {
            store: ShapeStore::new(),
            scale: ScaleModel::new(options.grid_size, options.total_area)?,
            layers: LayerRegistry::new(),
            bindings: LabelBindings::new(),
            canvas_width: options.canvas_width,
            canvas_height: options.canvas_height,
            background: options.background,
            background_color: options.background_color.clone(),
        })
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn scale(&self) -> &ScaleModel {
        &self.scale
    }

    pub fn layers(&self) -> &LayerRegistry {
        &self.layers
    }

    pub fn bindings(&self) -> &LabelBindings {
        &self.bindings
    }

    pub fn canvas_size(&self) -> (f64, f64) {
        (self.canvas_width, self.canvas_height)
    }

    pub fn background(&self) -> BackgroundKind {
        self.background
    }

    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    pub fn shape(&self, id: ShapeId) -> Option<&FloorShape> {
        self.store.get(id)
    }

    /// Current area of a shape in m².
    pub fn area_of(&self, id: ShapeId) -> Option<f64> {
        self.store.get(id).map(|s| shape_area(s, &self.scale))
    }

    /// Area-bearing shapes in draw order, labels excluded.
    pub fn area_shapes(&self) -> impl Iterator<Item = &FloorShape> {
        self.store.iter().filter(|s| s.has_area())
    }

    /// Text of the label bound to `owner`.
    pub fn label_text_of(&self, owner: ShapeId) -> Option<&str> {
        let label = self.bindings.label_of(owner)?;
        self.store.get(label)?.geometry.text()
    }

    pub fn to_scene_data(&self) -> SceneData {
        SceneData {
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            background: self.background,
            background_color: self.background_color.clone(),
            grid_size: self.scale.grid_size(),
            total_area: self.scale.total_area(),
            layers: self.layers.layers().to_vec(),
            active_layer: self.layers.active_id().to_string(),
            shapes: self.store.iter().cloned().collect(),
            next_id: self.store.next_id(),
        }
    }

    /// Builds a context from a scene, rebinding labels.
    ///
    /// Area shapes that lost their label get a fresh one, and every label is
    /// re-synced so its text always reflects the current area.
    pub fn from_scene_data(data: SceneData) -> Result<Self, EditError> {
        data.validate()?;
        let scale = ScaleModel::new(data.grid_size, data.total_area).map_err(|e| {
            EditError::MalformedSnapshot {
                reason: e.to_string(),
            }
        })?;
        let layers = LayerRegistry::from_parts(data.layers, data.active_layer)?;

        let mut store = ShapeStore::new();
        for shape in data.shapes {
            store.insert(shape);
        }
        if data.next_id > store.next_id() {
            store.set_next_id(data.next_id);
        }

        let mut bindings = LabelBindings::new();
        bindings.rebuild(&mut store);
        let unlabeled: Vec<ShapeId> = store
            .iter()
            .filter(|s| s.has_area() && bindings.label_of(s.id).is_none())
            .map(|s| s.id)
            .collect();
        for owner in unlabeled {
            tracing::warn!("Restoring missing label of shape {}", owner);
            bindings.attach(&mut store, &scale, owner, DEFAULT_TEXT_COLOR)?;
        }
        bindings.sync_all(&mut store, &scale);

        Ok(Self {
            store,
            scale,
            layers,
            bindings,
            canvas_width: data.canvas_width,
            canvas_height: data.canvas_height,
            background: data.background,
            background_color: data.background_color,
        })
    }

    /// Releases label bindings and every object.
    pub fn dispose(&mut self) {
        self.bindings.clear();
        self.store.clear();
    }
}

impl Snapshottable for SceneContext {
    fn capture(&self) -> Result<Snapshot, EditError> {
        self.to_scene_data().to_json().map(Snapshot::new)
    }

    fn restore(&mut self, snapshot: &Snapshot) -> Result<(), EditError> {
        let data = SceneData::from_json(snapshot.as_str())?;
        *self = SceneContext::from_scene_data(data)?;
        Ok(())
    }
}
