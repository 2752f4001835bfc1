use floorplan_core::{BackgroundKind, RoomType};
use floorplan_designer::{AreaReport, SceneCoordinator, ShapeKind};
use tempfile::TempDir;

fn plan() -> SceneCoordinator {
    let mut editor = SceneCoordinator::headless().unwrap();
    let bedroom = editor.add_shape(ShapeKind::Rectangle, 16.0).unwrap();
    editor.set_room_type(bedroom, Some(RoomType::Bedroom)).unwrap();
    editor.add_shape(ShapeKind::Stairs, 4.0).unwrap();
    editor.add_shape(ShapeKind::Line, 4.0).unwrap();
    editor
}

#[test]
fn test_area_report_lists_rooms() {
    let editor = plan();
    let report = editor.area_report();

    assert_eq!(report.total_area, 100.0);
    assert_eq!(report.rooms.len(), 2);
    assert_eq!(report.rooms[0].label, "Bedroom");
    assert_eq!(report.rooms[0].area, 16.0);
    assert_eq!(report.used_area(), 20.0);
    assert_eq!(report.remaining_area(), 80.0);

    let text = report.to_string();
    assert!(text.starts_with("Floor Plan Area Report"));
    assert!(text.contains("Total Area: 100m²"));
    assert!(text.contains("Bedroom: 16m²"));
    assert!(text.ends_with("Remaining Area: 80m²"));
}

#[test]
fn test_empty_report() {
    let editor = SceneCoordinator::headless().unwrap();
    let report = AreaReport::from_context(editor.context());
    assert!(report.rooms.is_empty());
    assert_eq!(report.remaining_area(), 100.0);
}

#[test]
fn test_png_export_has_canvas_size() {
    let mut editor = plan();
    editor.set_background(BackgroundKind::Grid).unwrap();
    let png = editor.export_png().unwrap();

    let image = image::load_from_memory(&png).unwrap();
    assert_eq!(image.width(), 800);
    assert_eq!(image.height(), 600);
}

#[test]
fn test_svg_export_contains_shapes() {
    let editor = plan();
    let svg = editor.export_svg();

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("<svg xmlns"));
    assert!(svg.contains("width=\"800\""));
    assert!(svg.contains("16m² (Bedroom)"));
    assert_eq!(svg.matches("<text").count(), 2);
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_hidden_shapes_not_exported() {
    let mut editor = plan();
    let layer = editor.context().layers().active_id().to_string();
    editor.toggle_layer_visibility(&layer).unwrap();

    let svg = editor.export_svg();
    assert_eq!(svg.matches("<text").count(), 0);
    assert_eq!(svg.matches("<path").count(), 0);
}

#[test]
fn test_export_to_dir_writes_all_files() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("exports");
    let editor = plan();

    let paths = editor.export_to_dir(&out, "floor-plan").unwrap();
    for path in [&paths.png, &paths.svg, &paths.json, &paths.report] {
        assert!(path.exists(), "{} missing", path.display());
    }
    assert!(paths.report.ends_with("floor-plan-report.txt"));

    let report = std::fs::read_to_string(&paths.report).unwrap();
    assert_eq!(report, editor.area_report().to_string());

    let json = std::fs::read_to_string(&paths.json).unwrap();
    let mut reloaded = SceneCoordinator::headless().unwrap();
    reloaded.load_scene_json(&json).unwrap();
    assert_eq!(reloaded.context().store().len(), editor.context().store().len());
}
