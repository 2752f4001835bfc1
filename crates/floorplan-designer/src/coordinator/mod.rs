//! Scene coordinator: the composition root of an editing session.
//! Routes user actions to the scene components and commits history.
//!
//! This module is split into submodules:
//! - `shapes`: Shape creation, selection and deletion
//! - `transforms`: Drag, on-canvas scaling, area and room-type edits
//! - `properties`: Colors, background, canvas size, total area, grid size
//! - `layers`: Layer management
//! - `history`: Undo/redo
//! - `viewport`: Zoom, pan and guides
//! - `file_io`: Scene dumps, reports and exports

mod file_io;
mod history;
mod layers;
mod properties;
mod shapes;
mod transforms;
mod viewport;

pub use file_io::ExportPaths;

use floorplan_core::{EditError, Palette};
use std::path::PathBuf;

use crate::context::{EditorOptions, SceneContext};
use crate::guides::{generate_guides, GuideLine};
use crate::history::HistoryStore;
use crate::model::{FloorShape, ShapeId};
use crate::selection_manager::SelectionManager;
use crate::surface::{NullSurface, RenderSurface};
use crate::viewport::Viewport;

/// In-flight drag of one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub shape_id: ShapeId,
    pub origin_left: f64,
    pub origin_top: f64,
}

pub struct SceneCoordinator<S: RenderSurface = NullSurface> {
    pub(crate) context: SceneContext,
    pub(crate) history: HistoryStore,
    pub(crate) viewport: Viewport,
    pub(crate) selection: SelectionManager,
    pub(crate) palette: Palette,
    pub(crate) snap_to_grid: bool,
    pub(crate) show_guides: bool,
    pub(crate) guides: Vec<GuideLine>,
    pub(crate) drag: Option<DragState>,
    pub(crate) surface: S,
    pub design_name: String,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
}

impl SceneCoordinator<NullSurface> {
    /// Headless session with default options.
    pub fn headless() -> Result<Self, EditError> {
        Self::new(EditorOptions::default(), NullSurface)
    }
}

impl<S: RenderSurface> SceneCoordinator<S> {
    /// Creates a session and records the initial snapshot.
    pub fn new(options: EditorOptions, surface: S) -> Result<Self, EditError> {
        let context = SceneContext::new(&options)?;
        let mut viewport = Viewport::new(options.canvas_width, options.canvas_height);
        viewport.set_zoom_bounds(options.min_zoom, options.max_zoom)?;
        viewport.set_zoom_steps(options.button_zoom_step, options.wheel_zoom_step);

        let mut coordinator = Self {
            context,
            history: HistoryStore::new(options.history_limit),
            viewport,
            selection: SelectionManager::new(),
            palette: options.palette.clone(),
            snap_to_grid: options.snap_to_grid,
            show_guides: options.show_guides,
            guides: Vec::new(),
            drag: None,
            surface,
            design_name: "Untitled".to_string(),
            current_file_path: None,
            is_modified: false,
        };

        coordinator.reload_surface();
        coordinator.history.record(&coordinator.context)?;
        tracing::info!(
            "Editor ready: grid {}px/m, total area {}m², canvas {}x{}",
            options.grid_size,
            options.total_area,
            options.canvas_width,
            options.canvas_height
        );
        Ok(coordinator)
    }

    pub fn context(&self) -> &SceneContext {
        &self.context
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn guides(&self) -> &[GuideLine] {
        &self.guides
    }

    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    pub fn show_guides(&self) -> bool {
        self.show_guides
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn shape(&self, id: ShapeId) -> Option<&FloorShape> {
        self.context.store.get(id)
    }

    /// Records a snapshot of the live scene after a committed edit.
    /// Any staged deletion is dropped: it was confirmed against an older scene.
    pub(crate) fn commit(&mut self, action: &str) -> Result<(), EditError> {
        if self.selection.cancel_pending() {
            tracing::debug!("Dropped staged deletion before {}", action);
        }
        self.history.record(&self.context)?;
        self.is_modified = true;
        tracing::debug!("Committed {}", action);
        Ok(())
    }

    /// Pushes a shape to the surface after it changed.
    pub(crate) fn publish(&mut self, id: ShapeId) {
        if let Some(shape) = self.context.store.get(id) {
            self.surface.update_object(shape);
        }
    }

    /// Re-syncs the label of `owner` and publishes both.
    pub(crate) fn refresh_shape(&mut self, owner: ShapeId) {
        self.publish(owner);
        let context = &mut self.context;
        if let Some(label) = context
            .bindings
            .on_shape_changed(&mut context.store, &context.scale, owner)
        {
            self.publish(label);
        }
    }

    /// Replaces everything on the surface with the current scene.
    pub(crate) fn reload_surface(&mut self) {
        let shapes: Vec<&FloorShape> = self.context.store.iter().collect();
        self.surface.load_scene(&shapes);
        let (width, height) = self.context.canvas_size();
        self.surface.set_canvas_size(width, height);
        self.surface
            .set_background(self.context.background, &self.context.background_color);

        self.selection.retain_existing(&self.context.store);
        self.selection.cancel_pending();
        self.surface.set_active_objects(self.selection.selected_ids());
        self.viewport.set_size(width, height);
        self.regenerate_guides();
        self.surface.request_render_all();
    }

    /// Rebuilds the guide lines from the current grid, canvas and viewport.
    pub(crate) fn regenerate_guides(&mut self) {
        self.guides = if self.show_guides {
            let (width, height) = self.context.canvas_size();
            generate_guides(
                width,
                height,
                self.context.scale.grid_size(),
                &self.viewport,
            )
        } else {
            Vec::new()
        };
        self.surface.set_guides(&self.guides);
    }

    /// Tears the session down: releases label bindings and every object and
    /// clears both history stacks.
    pub fn dispose(&mut self) {
        self.context.dispose();
        self.history.clear();
        self.selection = SelectionManager::new();
        self.drag = None;
        self.guides.clear();
        self.surface.load_scene(&[]);
        self.surface.set_guides(&[]);
        tracing::info!("Editor session disposed");
    }
}
