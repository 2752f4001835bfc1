use floorplan_designer::{
    EditorOptions, FloorShape, GuideLine, NullSurface, RenderSurface, SceneCoordinator, ShapeId,
};

/// Surface that counts the calls it receives.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub objects: Vec<ShapeId>,
    pub added: usize,
    pub updated: usize,
    pub removed: usize,
    pub loads: usize,
    pub renders: usize,
    pub active: Vec<ShapeId>,
    pub guides: usize,
    pub transform: Option<[f64; 6]>,
}

impl RenderSurface for RecordingSurface {
    fn add_object(&mut self, shape: &FloorShape) {
        self.added += 1;
        self.objects.push(shape.id);
    }

    fn update_object(&mut self, _shape: &FloorShape) {
        self.updated += 1;
    }

    fn remove_object(&mut self, id: ShapeId) {
        self.removed += 1;
        self.objects.retain(|&other| other != id);
    }

    fn set_active_objects(&mut self, ids: &[ShapeId]) {
        self.active = ids.to_vec();
    }

    fn request_render_all(&mut self) {
        self.renders += 1;
    }

    fn load_scene(&mut self, shapes: &[&FloorShape]) {
        self.loads += 1;
        self.objects = shapes.iter().map(|s| s.id).collect();
    }

    fn set_viewport_transform(&mut self, transform: [f64; 6]) {
        self.transform = Some(transform);
    }

    fn set_guides(&mut self, guides: &[GuideLine]) {
        self.guides = guides.len();
    }
}

pub fn editor() -> SceneCoordinator<NullSurface> {
    SceneCoordinator::headless().unwrap()
}

pub fn recording_editor() -> SceneCoordinator<RecordingSurface> {
    SceneCoordinator::new(EditorOptions::default(), RecordingSurface::default()).unwrap()
}

pub fn editor_with(grid_size: f64, total_area: f64) -> SceneCoordinator<NullSurface> {
    let options = EditorOptions {
        grid_size,
        total_area,
        ..EditorOptions::default()
    };
    SceneCoordinator::new(options, NullSurface).unwrap()
}
