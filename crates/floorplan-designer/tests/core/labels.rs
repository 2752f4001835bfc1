use floorplan_core::RoomType;
use floorplan_designer::{label_text, SceneCoordinator, ShapeKind};
use proptest::prelude::*;

use crate::support::editor;

fn assert_label_in_sync<S: floorplan_designer::RenderSurface>(
    editor: &SceneCoordinator<S>,
    owner: u64,
) {
    let context = editor.context();
    let shape = context.shape(owner).unwrap();
    let label_id = context.bindings().label_of(owner).unwrap();
    let label = context.shape(label_id).unwrap();

    let expected = label_text(context.area_of(owner).unwrap(), shape.room_type);
    assert_eq!(label.geometry.text(), Some(expected.as_str()));
    assert_eq!(label.label_of, Some(owner));
    assert_eq!(shape.label, Some(label_id));
    assert!((label.center().x - shape.center().x).abs() < 0.01);
    assert!((label.center().y - shape.center().y).abs() < 0.01);
    assert_eq!(label.visible, shape.visible);
    assert!(!label.interactive);
}

#[test]
fn test_label_text_format() {
    assert_eq!(label_text(20.0, None), "20m²");
    assert_eq!(label_text(12.5, None), "12.5m²");
    assert_eq!(label_text(16.0, Some(RoomType::Bedroom)), "16m² (Bedroom)");
    assert_eq!(label_text(3.14159, None), "3.14m²");
}

#[test]
fn test_add_shape_attaches_label() {
    let mut editor = editor();
    let room = editor.add_shape(ShapeKind::Rectangle, 20.0).unwrap();

    assert_eq!(editor.context().label_text_of(room), Some("20m²"));
    assert_eq!(editor.context().store().len(), 2);
    assert_label_in_sync(&editor, room);
}

#[test]
fn test_line_and_text_have_no_label() {
    let mut editor = editor();
    let line = editor.add_shape(ShapeKind::Line, 10.0).unwrap();
    let text = editor.add_text().unwrap();

    assert!(editor.context().bindings().label_of(line).is_none());
    assert!(editor.context().bindings().label_of(text).is_none());
    assert_eq!(editor.context().store().len(), 2);
}

#[test]
fn test_label_follows_drag() {
    let mut editor = editor();
    let room = editor.add_shape(ShapeKind::Triangle, 9.0).unwrap();

    editor.begin_drag(room).unwrap();
    editor.drag_to(300.0, 240.0).unwrap();
    assert_label_in_sync(&editor, room);
    assert!(editor.end_drag().unwrap());
    assert_label_in_sync(&editor, room);
}

#[test]
fn test_label_follows_scale_and_room_type() {
    let mut editor = editor();
    let room = editor.add_shape(ShapeKind::Rectangle, 16.0).unwrap();

    let area = editor.scale_shape(room, 1.5, 1.0).unwrap();
    assert_eq!(area, 24.0);
    assert_eq!(editor.context().label_text_of(room), Some("24m²"));

    editor.set_room_type(room, Some(RoomType::Kitchen)).unwrap();
    assert_eq!(editor.context().label_text_of(room), Some("24m² (Kitchen)"));

    assert!(editor.apply_recommended_area(room).unwrap());
    assert_eq!(editor.context().label_text_of(room), Some("15m² (Kitchen)"));
    assert_label_in_sync(&editor, room);
}

#[test]
fn test_labels_rebound_after_undo() {
    let mut editor = editor();
    let room = editor.add_shape(ShapeKind::Stairs, 12.0).unwrap();
    editor.move_shape(room, 200.0, 200.0).unwrap();

    assert!(editor.undo().unwrap());
    assert_label_in_sync(&editor, room);

    editor.move_shape(room, 40.0, 60.0).unwrap();
    assert_label_in_sync(&editor, room);
    assert_eq!(editor.context().bindings().len(), 1);
}

#[test]
fn test_label_cannot_be_deleted_directly() {
    let mut editor = editor();
    let room = editor.add_shape(ShapeKind::Rectangle, 4.0).unwrap();
    let label = editor.context().bindings().label_of(room).unwrap();

    assert!(editor.delete_shape(label).is_err());
    editor.delete_shape(room).unwrap();
    assert!(editor.context().store().is_empty());
    assert!(editor.context().bindings().is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_label_invariant_holds_across_edits(
        area in 1.0f64..90.0,
        left in 0.0f64..600.0,
        top in 0.0f64..400.0,
        factor in 0.5f64..1.0,
    ) {
        let mut editor = editor();
        let room = editor.add_shape(ShapeKind::Trapezoid, area).unwrap();
        editor.move_shape(room, left, top).unwrap();
        editor.scale_shape(room, factor, factor).unwrap();
        assert_label_in_sync(&editor, room);

        editor.undo().unwrap();
        assert_label_in_sync(&editor, room);
        editor.redo().unwrap();
        assert_label_in_sync(&editor, room);
    }
}
