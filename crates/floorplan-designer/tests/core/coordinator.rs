use floorplan_core::{BackgroundKind, EditError, RoomType};
use floorplan_designer::{DeleteOutcome, ShapeKind};

use crate::support::{editor, editor_with, recording_editor};

#[test]
fn test_add_shape_reports_to_surface() {
    let mut editor = recording_editor();
    let room = editor.add_shape(ShapeKind::Rectangle, 20.0).unwrap();
    let label = editor.context().bindings().label_of(room).unwrap();

    assert_eq!(editor.surface().added, 2);
    assert_eq!(editor.surface().objects, vec![room, label]);
    assert_eq!(editor.surface().active, vec![room]);
    assert_eq!(editor.history().undo_depth(), 2);
    assert!(editor.is_modified);

    let updates = editor.surface().updated;
    editor.move_shape(room, 200.0, 200.0).unwrap();
    // Owner and label
    assert_eq!(editor.surface().updated, updates + 2);
}

#[test]
fn test_add_shape_rejects_before_mutation() {
    let mut editor = editor();
    assert_eq!(
        editor.add_shape(ShapeKind::Rectangle, -3.0),
        Err(EditError::InvalidArea(-3.0))
    );
    assert!(matches!(
        editor.add_shape(ShapeKind::Stairs, 120.0),
        Err(EditError::AreaExceedsCanvas { .. })
    ));
    assert!(editor.context().store().is_empty());
    assert_eq!(editor.history().undo_depth(), 1);
}

#[test]
fn test_grid_and_area_example() {
    let mut editor = editor();
    editor.set_grid_size(50.0).unwrap();
    assert_eq!(editor.context().canvas_size(), (500.0, 500.0));

    let room = editor.add_shape(ShapeKind::Rectangle, 20.0).unwrap();
    let shape = editor.shape(room).unwrap();
    assert!((shape.width - 223.6).abs() < 0.01);
    assert!((shape.height - 223.6).abs() < 0.01);
    assert_eq!(editor.context().label_text_of(room), Some("20m²"));
}

#[test]
fn test_drag_snaps_to_grid() {
    let mut editor = editor();
    let room = editor.add_shape(ShapeKind::Rectangle, 4.0).unwrap();

    assert!(editor.move_shape(room, 53.0, 77.0).unwrap());
    let shape = editor.shape(room).unwrap();
    assert_eq!((shape.left, shape.top), (60.0, 80.0));

    assert!(!editor.toggle_snap_to_grid());
    assert!(editor.move_shape(room, 53.0, 77.0).unwrap());
    let shape = editor.shape(room).unwrap();
    assert_eq!((shape.left, shape.top), (53.0, 77.0));
}

#[test]
fn test_set_area_rejects_oversize() {
    let mut editor = editor();
    let room = editor.add_shape(ShapeKind::Rectangle, 20.0).unwrap();
    let width = editor.shape(room).unwrap().width;
    let depth = editor.history().undo_depth();

    assert!(matches!(
        editor.set_area(room, 200.0),
        Err(EditError::AreaExceedsCanvas { .. })
    ));
    assert_eq!(editor.set_area(room, 0.0), Err(EditError::InvalidArea(0.0)));
    assert_eq!(editor.shape(room).unwrap().width, width);
    assert_eq!(editor.context().label_text_of(room), Some("20m²"));
    assert_eq!(editor.history().undo_depth(), depth);
}

#[test]
fn test_set_area_keeps_top_left() {
    let mut editor = editor();
    let room = editor.add_shape(ShapeKind::Triangle, 16.0).unwrap();
    editor.scale_shape(room, 2.0, 1.0).unwrap();

    editor.set_area(room, 8.0).unwrap();
    let shape = editor.shape(room).unwrap();
    assert_eq!((shape.left, shape.top), (100.0, 100.0));
    assert_eq!((shape.scale_x, shape.scale_y), (1.0, 1.0));
    assert!((editor.area_of(room).unwrap() - 8.0).abs() < 0.01);
    assert_eq!(editor.context().label_text_of(room), Some("8m²"));
}

#[test]
fn test_scale_beyond_total_area_rejected() {
    let mut editor = editor();
    let room = editor.add_shape(ShapeKind::Rectangle, 50.0).unwrap();

    assert!(editor.scale_shape(room, 1.5, 1.5).is_err());
    assert_eq!(editor.shape(room).unwrap().scale_x, 1.0);
    assert!(editor.scale_shape(room, 0.0, 1.0).is_err());
}

#[test]
fn test_total_area_shrinks_oversized_shapes() {
    let mut editor = editor();
    let big = editor.add_shape(ShapeKind::Rectangle, 80.0).unwrap();
    let small = editor.add_shape(ShapeKind::Rectangle, 10.0).unwrap();

    let shrunk = editor.set_total_area(40.0).unwrap();
    assert_eq!(shrunk, vec![big]);
    assert!(editor.area_of(big).unwrap() <= 10.0 + 0.01);
    assert!((editor.area_of(small).unwrap() - 10.0).abs() < 0.01);
    assert_eq!(editor.context().label_text_of(big), Some("10m²"));
    // ceil(sqrt(40)) * 20
    assert_eq!(editor.context().canvas_size(), (140.0, 140.0));

    assert!(editor.set_total_area(0.0).is_err());
    assert_eq!(editor.context().scale().total_area(), 40.0);
}

#[test]
fn test_grid_change_refreshes_labels() {
    let mut editor = editor_with(20.0, 100.0);
    let room = editor.add_shape(ShapeKind::Rectangle, 25.0).unwrap();

    editor.set_grid_size(10.0).unwrap();
    // The 100px frame now covers 10m x 10m
    assert_eq!(editor.shape(room).unwrap().scale_x, 1.0);
    assert_eq!(editor.context().label_text_of(room), Some("100m²"));

    editor.set_grid_size(5.0).unwrap();
    assert!(editor.area_of(room).unwrap() <= 25.0 + 0.01);
}

#[test]
fn test_delete_single_is_immediate() {
    let mut editor = editor();
    let room = editor.add_shape(ShapeKind::Rectangle, 9.0).unwrap();
    let depth = editor.history().undo_depth();

    assert_eq!(
        editor.delete_selected().unwrap(),
        DeleteOutcome::Deleted(vec![room])
    );
    assert!(editor.context().store().is_empty());
    assert_eq!(editor.history().undo_depth(), depth + 1);
    assert_eq!(editor.delete_selected().unwrap(), DeleteOutcome::Nothing);
}

#[test]
fn test_delete_many_requires_confirmation() {
    let mut editor = recording_editor();
    for kind in [ShapeKind::Rectangle, ShapeKind::Triangle, ShapeKind::Elevator] {
        editor.add_shape(kind, 9.0).unwrap();
    }
    assert_eq!(editor.context().store().len(), 6);
    editor.select_all();
    let depth = editor.history().undo_depth();

    assert_eq!(
        editor.delete_selected().unwrap(),
        DeleteOutcome::ConfirmationRequired(3)
    );
    assert_eq!(editor.pending_deletion().map(<[u64]>::len), Some(3));
    assert_eq!(editor.context().store().len(), 6);

    let removed = editor.confirm_deletion().unwrap();
    assert_eq!(removed.len(), 3);
    assert!(editor.context().store().is_empty());
    assert!(editor.surface().objects.is_empty());
    assert_eq!(editor.history().undo_depth(), depth + 1);
    assert_eq!(editor.confirm_deletion(), Err(EditError::NoPendingDeletion));

    let loads = editor.surface().loads;
    assert!(editor.undo().unwrap());
    assert_eq!(editor.context().store().len(), 6);
    assert_eq!(editor.surface().loads, loads + 1);
    assert_eq!(editor.surface().objects.len(), 6);
}

#[test]
fn test_cancel_deletion_leaves_scene() {
    let mut editor = editor();
    editor.add_shape(ShapeKind::Rectangle, 4.0).unwrap();
    editor.add_shape(ShapeKind::Rectangle, 4.0).unwrap();
    editor.select_all();
    let depth = editor.history().undo_depth();

    editor.delete_selected().unwrap();
    assert!(editor.cancel_deletion());
    assert!(editor.pending_deletion().is_none());
    assert_eq!(editor.context().store().len(), 4);
    assert_eq!(editor.history().undo_depth(), depth);
    assert!(!editor.cancel_deletion());
}

#[test]
fn test_staged_deletion_dropped_by_later_edit() {
    let mut editor = editor();
    let a = editor.add_shape(ShapeKind::Rectangle, 4.0).unwrap();
    let b = editor.add_shape(ShapeKind::Triangle, 4.0).unwrap();
    editor.select(&[a, b]);
    assert_eq!(
        editor.delete_selected().unwrap(),
        DeleteOutcome::ConfirmationRequired(2)
    );

    let layer = editor.context().layers().active_id().to_string();
    assert!(editor.toggle_layer_lock(&layer).unwrap());
    assert!(editor.pending_deletion().is_none());
    editor.add_shape(ShapeKind::Rectangle, 4.0).unwrap();

    assert_eq!(editor.confirm_deletion(), Err(EditError::NoPendingDeletion));
    assert!(editor.shape(a).is_some());
    assert!(editor.shape(b).is_some());
}

#[test]
fn test_staged_deletion_dropped_by_selection_change() {
    let mut editor = editor();
    let a = editor.add_shape(ShapeKind::Rectangle, 4.0).unwrap();
    let b = editor.add_shape(ShapeKind::Rectangle, 4.0).unwrap();
    editor.select_all();
    editor.delete_selected().unwrap();

    editor.select(&[a]);
    assert!(editor.pending_deletion().is_none());
    assert_eq!(editor.confirm_deletion(), Err(EditError::NoPendingDeletion));
    assert!(editor.shape(b).is_some());
}

#[test]
fn test_colors_apply_to_selection() {
    let mut editor = editor();
    let room = editor.add_shape(ShapeKind::Rectangle, 4.0).unwrap();
    let text = editor.add_text().unwrap();

    editor.select(&[room, text]);
    assert_eq!(editor.set_fill_color("#00ff00").unwrap(), 1);
    assert_eq!(editor.set_text_color("#0000ff").unwrap(), 1);
    assert_eq!(editor.set_stroke_color("#123456").unwrap(), 1);
    // Same color again is a no-op
    assert_eq!(editor.set_fill_color("#00ff00").unwrap(), 0);

    let room_shape = editor.shape(room).unwrap();
    assert_eq!(room_shape.style.fill, "#00ff00");
    assert_eq!(room_shape.style.stroke, "#123456");
    let text_shape = editor.shape(text).unwrap();
    assert_eq!(text_shape.style.fill, "#0000ff");
    assert_eq!(editor.palette().text_color, "#0000ff");

    // New shapes use the palette
    let next = editor.add_shape(ShapeKind::Triangle, 4.0).unwrap();
    assert_eq!(editor.shape(next).unwrap().style.fill, "#00ff00");
}

#[test]
fn test_selection_syncs_palette() {
    let mut editor = editor();
    let room = editor.add_shape(ShapeKind::Rectangle, 4.0).unwrap();
    editor.set_fill_color("#abcdef").unwrap();
    editor.deselect_all();
    editor.set_fill_color("#ffffff").unwrap();

    editor.select(&[room]);
    assert_eq!(editor.palette().room_fill, "#abcdef");
}

#[test]
fn test_canvas_and_background() {
    let mut editor = recording_editor();
    assert!(matches!(
        editor.resize_canvas(100.0, 600.0),
        Err(EditError::InvalidCanvasSize { .. })
    ));
    editor.resize_canvas(1000.0, 400.0).unwrap();
    assert_eq!(editor.context().canvas_size(), (1000.0, 400.0));
    assert_eq!(editor.viewport().width(), 1000.0);

    editor.set_background(BackgroundKind::Grid).unwrap();
    editor.set_background_color("#ffffff").unwrap();
    assert_eq!(editor.context().background(), BackgroundKind::Grid);
    assert_eq!(editor.context().background_color(), "#ffffff");

    assert!(editor.undo().unwrap());
    assert_eq!(editor.context().background_color(), "#f0f0f0");
}

#[test]
fn test_room_type_only_on_area_shapes() {
    let mut editor = editor();
    let line = editor.add_shape(ShapeKind::Line, 9.0).unwrap();
    let room = editor.add_shape(ShapeKind::Rectangle, 9.0).unwrap();

    assert!(editor.set_room_type(line, Some(RoomType::Bathroom)).is_err());
    assert!(!editor.apply_recommended_area(room).unwrap());

    editor.set_room_type(room, Some(RoomType::Bathroom)).unwrap();
    assert!(editor.apply_recommended_area(room).unwrap());
    assert_eq!(editor.context().label_text_of(room), Some("6m² (Bathroom)"));
    assert_eq!(editor.shape(line).unwrap().style.stroke_width, 2.0);
}
