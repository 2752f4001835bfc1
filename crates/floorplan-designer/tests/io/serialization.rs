use floorplan_core::{EditError, RoomType};
use floorplan_designer::{parse_scene, SceneCoordinator, SceneData, SceneFile, ShapeKind};
use tempfile::TempDir;

fn populated() -> SceneCoordinator {
    let mut editor = SceneCoordinator::headless().unwrap();
    let room = editor.add_shape(ShapeKind::Rectangle, 16.0).unwrap();
    editor.set_room_type(room, Some(RoomType::Bedroom)).unwrap();
    editor.add_shape(ShapeKind::Entrance, 2.0).unwrap();
    editor.add_layer().unwrap();
    editor.add_text().unwrap();
    editor
}

#[test]
fn test_scene_json_round_trip() {
    let editor = populated();
    let json = editor.scene_json().unwrap();

    let mut other = SceneCoordinator::headless().unwrap();
    other.load_scene_json(&json).unwrap();

    assert_eq!(
        other.context().to_scene_data(),
        editor.context().to_scene_data()
    );
    assert_eq!(other.context().bindings().len(), 2);
    assert!(other.can_undo());
}

#[test]
fn test_bare_scene_accepted() {
    let editor = populated();
    let bare = editor.context().to_scene_data().to_json().unwrap();

    let data = parse_scene(&bare).unwrap();
    assert_eq!(data.shapes.len(), editor.context().store().len());
    assert_eq!(data.layers.len(), 2);
}

#[test]
fn test_malformed_json_rejected() {
    let mut editor = populated();
    let before = editor.context().to_scene_data();
    let depth = editor.history().undo_depth();

    for input in ["", "{", "[1, 2, 3]", "{\"canvas_width\": \"wide\"}"] {
        assert!(matches!(
            editor.load_scene_json(input),
            Err(EditError::MalformedSnapshot { .. })
        ));
    }
    assert_eq!(editor.context().to_scene_data(), before);
    assert_eq!(editor.history().undo_depth(), depth);
}

#[test]
fn test_inconsistent_scene_rejected() {
    let editor = populated();
    let valid = editor.context().to_scene_data();

    let mut no_layers = valid.clone();
    no_layers.layers.clear();
    assert!(no_layers.validate().is_err());

    let mut bad_active = valid.clone();
    bad_active.active_layer = "nowhere".to_string();
    assert!(bad_active.validate().is_err());

    let mut duplicate = valid.clone();
    let first = duplicate.shapes[0].clone();
    duplicate.shapes.push(first);
    assert!(duplicate.validate().is_err());

    let mut bad_scale = valid.clone();
    bad_scale.shapes[0].scale_x = 0.0;
    assert!(bad_scale.validate().is_err());

    let mut bad_grid = valid;
    bad_grid.grid_size = -1.0;
    let json = bad_grid.to_json().unwrap();
    assert!(SceneData::from_json(&json).is_err());
}

fn bedroom_id(data: &SceneData) -> u64 {
    data.shapes
        .iter()
        .find(|s| s.room_type == Some(RoomType::Bedroom))
        .map(|s| s.id)
        .unwrap()
}

fn assert_rejected(editor: &mut SceneCoordinator, data: &SceneData) {
    let before = editor.context().to_scene_data();
    let depth = editor.history().undo_depth();
    assert!(matches!(
        editor.load_scene_json(&data.to_json().unwrap()),
        Err(EditError::MalformedSnapshot { .. })
    ));
    assert_eq!(editor.context().to_scene_data(), before);
    assert_eq!(editor.history().undo_depth(), depth);
}

#[test]
fn test_import_resyncs_stale_label_text() {
    let editor = populated();
    let mut data = editor.context().to_scene_data();
    let room = bedroom_id(&data);
    for shape in data.shapes.iter_mut().filter(|s| s.label_of == Some(room)) {
        shape.set_text("999m²");
    }

    let mut other = SceneCoordinator::headless().unwrap();
    other.load_scene_json(&data.to_json().unwrap()).unwrap();
    assert_eq!(other.context().label_text_of(room), Some("16m² (Bedroom)"));
}

#[test]
fn test_import_restores_missing_label() {
    let editor = populated();
    let mut data = editor.context().to_scene_data();
    let room = bedroom_id(&data);
    data.shapes.retain(|s| s.label_of != Some(room));
    for shape in data.shapes.iter_mut().filter(|s| s.id == room) {
        shape.label = None;
    }

    let mut other = SceneCoordinator::headless().unwrap();
    other.load_scene_json(&data.to_json().unwrap()).unwrap();
    assert_eq!(other.context().bindings().len(), 2);
    assert_eq!(other.context().label_text_of(room), Some("16m² (Bedroom)"));

    let label = other.context().bindings().label_of(room).unwrap();
    assert!(other.context().layers().layer_of(label).is_none());
    assert!(other.context().to_scene_data().validate().is_ok());
}

#[test]
fn test_import_rejects_shape_larger_than_total() {
    let mut editor = populated();
    let mut data = editor.context().to_scene_data();
    let room = bedroom_id(&data);
    for shape in data.shapes.iter_mut().filter(|s| s.id == room) {
        shape.scale_x = 10.0;
        shape.scale_y = 10.0;
    }
    assert!(data.validate().is_err());
    assert_rejected(&mut editor, &data);
}

#[test]
fn test_import_requires_single_layer_membership() {
    let mut editor = populated();
    let valid = editor.context().to_scene_data();
    let room = bedroom_id(&valid);

    let mut orphan = valid.clone();
    orphan.layers[0].shape_ids.clear();
    assert_rejected(&mut editor, &orphan);

    let mut twice = valid.clone();
    twice.layers[1].shape_ids.push(room);
    assert_rejected(&mut editor, &twice);

    let mut label_member = valid.clone();
    let label = editor.context().bindings().label_of(room).unwrap();
    label_member.layers[0].shape_ids.push(label);
    assert_rejected(&mut editor, &label_member);
}

#[test]
fn test_import_bounds_canvas_size() {
    let mut editor = populated();
    let valid = editor.context().to_scene_data();

    let mut huge = valid.clone();
    huge.canvas_width = 1e10;
    assert_rejected(&mut editor, &huge);

    let mut not_a_number = valid;
    not_a_number.canvas_height = f64::NAN;
    assert!(not_a_number.validate().is_err());

    // A canvas squared to a large total area stays importable.
    let mut large = SceneCoordinator::headless().unwrap();
    large.set_grid_size(100.0).unwrap();
    large.set_total_area(1000.0).unwrap();
    assert_eq!(large.context().canvas_size(), (3200.0, 3200.0));
    let mut other = SceneCoordinator::headless().unwrap();
    other.load_scene_json(&large.scene_json().unwrap()).unwrap();
    assert_eq!(other.context().canvas_size(), (3200.0, 3200.0));
}

#[test]
fn test_save_and_load_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("plan.json");

    let mut editor = populated();
    editor.design_name = "Cottage".to_string();
    editor.save_to_file(&path).unwrap();
    assert!(!editor.is_modified);
    assert_eq!(editor.current_file_path.as_deref(), Some(path.as_path()));

    let file = SceneFile::load_from_file(&path).unwrap();
    assert_eq!(file.metadata.name, "Cottage");
    assert_eq!(file.version, "1.0");

    let mut loaded = SceneCoordinator::headless().unwrap();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.design_name, "Cottage");
    assert_eq!(
        loaded.context().to_scene_data(),
        editor.context().to_scene_data()
    );
}

#[test]
fn test_load_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let mut editor = SceneCoordinator::headless().unwrap();
    assert!(editor
        .load_from_file(temp_dir.path().join("missing.json"))
        .is_err());
    assert!(editor.current_file_path.is_none());
}
