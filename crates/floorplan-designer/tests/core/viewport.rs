use floorplan_designer::{Point, Viewport};

use crate::support::recording_editor;

#[test]
fn test_zoom_in_keeps_center_fixed() {
    let mut viewport = Viewport::new(800.0, 600.0);
    let center = viewport.center();
    let anchor = viewport.screen_to_document(&center);

    viewport.zoom_in();
    assert!((viewport.zoom() - 1.2).abs() < 0.01);
    let after = viewport.document_to_screen(&anchor);
    assert!((after.x - center.x).abs() < 0.01);
    assert!((after.y - center.y).abs() < 0.01);
}

#[test]
fn test_wheel_zoom_anchors_pointer() {
    let mut viewport = Viewport::new(800.0, 600.0);
    let pointer = Point::new(120.0, 450.0);
    let anchor = viewport.screen_to_document(&pointer);

    viewport.zoom_wheel(&pointer, -1.0);
    viewport.zoom_wheel(&pointer, -1.0);
    assert!((viewport.zoom() - 1.21).abs() < 0.01);
    let after = viewport.document_to_screen(&anchor);
    assert!((after.x - pointer.x).abs() < 0.01);
    assert!((after.y - pointer.y).abs() < 0.01);

    viewport.zoom_wheel(&pointer, 3.0);
    assert!((viewport.zoom() - 1.1).abs() < 0.01);
}

#[test]
fn test_zoom_is_clamped() {
    let mut viewport = Viewport::new(800.0, 600.0);
    for _ in 0..50 {
        viewport.zoom_in();
    }
    assert_eq!(viewport.zoom(), 10.0);
    for _ in 0..100 {
        viewport.zoom_out();
    }
    assert_eq!(viewport.zoom(), 0.1);

    assert!(viewport.set_zoom_bounds(2.0, 4.0).is_err());
    assert!(viewport.set_zoom_bounds(0.5, 0.4).is_err());
    viewport.set_zoom_bounds(0.5, 2.0).unwrap();
    assert_eq!(viewport.zoom(), 0.5);
}

#[test]
fn test_pan_requires_modifier() {
    let mut viewport = Viewport::new(800.0, 600.0);
    assert!(!viewport.begin_pan(false));
    assert!(!viewport.pan_by(30.0, 10.0));
    assert_eq!(viewport.pan_x(), 0.0);

    assert!(viewport.begin_pan(true));
    assert!(viewport.pan_by(30.0, 10.0));
    viewport.end_pan();
    assert!(!viewport.pan_by(30.0, 10.0));
    assert_eq!(viewport.transform(), [1.0, 0.0, 0.0, 1.0, 30.0, 10.0]);
    assert_eq!(viewport.to_string(), "Zoom: 1.00x | Pan: (30.0, 10.0)");

    viewport.reset();
    assert_eq!(viewport.transform(), [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
}

#[test]
fn test_viewport_changes_skip_history() {
    let mut editor = recording_editor();
    let depth = editor.history().undo_depth();

    editor.zoom_in();
    editor.zoom_wheel(&Point::new(10.0, 10.0), -1.0);
    editor.begin_pan(true);
    editor.pan_by(5.0, 5.0);
    editor.end_pan();

    assert_eq!(editor.history().undo_depth(), depth);
    assert!(editor.surface().transform.is_some());
    assert_eq!(editor.guides().len(), editor.surface().guides);
}

#[test]
fn test_guides_follow_grid_and_toggle() {
    let mut editor = recording_editor();
    // 800x600 canvas with a 20px grid
    assert_eq!(editor.guides().len(), 39 + 29);
    assert!(editor.guides().iter().all(|g| g.screen.fract() == 0.5));

    assert!(!editor.toggle_guides());
    assert!(editor.guides().is_empty());
    assert_eq!(editor.surface().guides, 0);

    assert!(editor.toggle_guides());
    editor.zoom_in();
    assert_eq!(editor.guides().len(), 68);
}

#[test]
fn test_select_at_uses_viewport() {
    let mut editor = recording_editor();
    let room = editor
        .add_shape(floorplan_designer::ShapeKind::Rectangle, 4.0)
        .unwrap();
    editor.deselect_all();

    // Room frame spans 100..140 in document space
    editor.begin_pan(true);
    editor.pan_by(50.0, 0.0);
    editor.end_pan();
    assert_eq!(editor.select_at(&Point::new(110.0, 110.0), false), None);
    assert_eq!(editor.select_at(&Point::new(170.0, 110.0), false), Some(room));
    assert_eq!(editor.surface().active, vec![room]);
}
