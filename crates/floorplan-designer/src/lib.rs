//! # FloorPlan Designer
//!
//! The document and editing engine of the floor-plan editor. It maps real
//! floor area to pixel geometry, keeps area labels in sync with their
//! shapes, groups shapes into layers and records snapshot-based undo/redo.
//! Painting and hit-testing belong to an external [`RenderSurface`].
//!
//! ## Architecture
//!
//! ```text
//! SceneCoordinator (composition root)
//!   ├── SceneContext (snapshotted document state)
//!   │     ├── ShapeStore (objects, draw order)
//!   │     ├── ScaleModel (grid size, total area)
//!   │     ├── LayerRegistry (visibility, lock, membership)
//!   │     └── LabelBindings (owner -> area label)
//!   ├── HistoryStore (undo/redo snapshots)
//!   ├── Viewport + guides (view state)
//!   ├── SelectionManager (selection, staged deletion)
//!   └── RenderSurface (external collaborator)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use floorplan_designer::{SceneCoordinator, ShapeKind};
//!
//! let mut editor = SceneCoordinator::headless().unwrap();
//! let room = editor.add_shape(ShapeKind::Rectangle, 20.0).unwrap();
//! assert_eq!(editor.context().label_text_of(room), Some("20m²"));
//! ```

pub mod context;
pub mod coordinator;
pub mod factory;
pub mod font_manager;
pub mod guides;
pub mod history;
pub mod labels;
pub mod layers;
pub mod model;
pub mod renderer;
pub mod report;
pub mod scale;
pub mod selection_manager;
pub mod serialization;
pub mod shape_store;
pub mod surface;
pub mod svg_renderer;
pub mod viewport;

pub use context::{EditorOptions, SceneContext};
pub use coordinator::{DragState, ExportPaths, SceneCoordinator};
pub use factory::ShapeFactory;
pub use guides::{generate_guides, GuideLine, Orientation};
pub use history::{HistoryStore, Snapshot, Snapshottable};
pub use labels::{label_text, LabelBindings};
pub use layers::{Layer, LayerId, LayerRegistry};
pub use model::{FloorShape, Geometry, Point, ShapeId, ShapeKind, Style};
pub use report::{AreaReport, RoomArea};
pub use scale::ScaleModel;
pub use selection_manager::{DeleteOutcome, PendingDeletion, SelectionManager};
pub use serialization::{parse_scene, SceneData, SceneFile, SceneMetadata};
pub use shape_store::ShapeStore;
pub use surface::{NullSurface, RenderSurface};
pub use viewport::Viewport;
