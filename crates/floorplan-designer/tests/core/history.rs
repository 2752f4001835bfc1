use floorplan_core::EditError;
use floorplan_designer::{HistoryStore, ShapeKind, Snapshot, Snapshottable};

use crate::support::editor;

fn capture<T: Snapshottable>(target: &T) -> String {
    target.capture().unwrap().into_inner()
}

#[test]
fn test_history_store_bounds() {
    let mut history = HistoryStore::new(3);
    for i in 0..5 {
        history.append(Snapshot::new(format!("{}", i)));
    }
    assert_eq!(history.undo_depth(), 3);
    assert_eq!(history.current().map(Snapshot::as_str), Some("4"));
    assert!(!history.can_redo());
}

#[test]
fn test_initial_state_cannot_undo() {
    let mut editor = editor();
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
    assert_eq!(editor.undo(), Ok(false));
    assert_eq!(editor.redo(), Ok(false));
    assert_eq!(editor.history().undo_depth(), 1);
}

#[test]
fn test_undo_then_redo_is_identity() {
    let mut editor = editor();
    let room = editor.add_shape(ShapeKind::Rectangle, 20.0).unwrap();
    editor.move_shape(room, 240.0, 160.0).unwrap();
    editor.set_fill_color("#ffcc00").unwrap();

    let before = capture(editor.context());
    assert!(editor.undo().unwrap());
    assert_ne!(capture(editor.context()), before);
    assert!(editor.redo().unwrap());
    assert_eq!(capture(editor.context()), before);
}

#[test]
fn test_undo_restores_previous_scene() {
    let mut editor = editor();
    let empty = capture(editor.context());

    editor.add_shape(ShapeKind::Rectangle, 20.0).unwrap();
    assert!(editor.undo().unwrap());
    assert_eq!(capture(editor.context()), empty);
    assert!(editor.context().store().is_empty());
    assert!(editor.context().bindings().is_empty());
}

#[test]
fn test_new_edit_clears_redo() {
    let mut editor = editor();
    editor.add_shape(ShapeKind::Rectangle, 20.0).unwrap();
    editor.undo().unwrap();
    assert!(editor.can_redo());

    let b = editor.add_shape(ShapeKind::Triangle, 10.0).unwrap();
    assert!(!editor.can_redo());

    let before = capture(editor.context());
    assert_eq!(editor.redo(), Ok(false));
    assert_eq!(capture(editor.context()), before);
    assert_eq!(editor.shape(b).unwrap().kind, ShapeKind::Triangle);
    assert_eq!(editor.context().area_shapes().count(), 1);
}

#[test]
fn test_drag_without_movement_takes_no_snapshot() {
    let mut editor = editor();
    let room = editor.add_shape(ShapeKind::Rectangle, 4.0).unwrap();
    let depth = editor.history().undo_depth();

    editor.begin_drag(room).unwrap();
    editor.drag_to(300.0, 300.0);
    editor.drag_to(100.0, 100.0);
    assert_eq!(editor.end_drag(), Ok(false));
    assert_eq!(editor.history().undo_depth(), depth);

    assert_eq!(editor.move_shape(room, 300.0, 300.0), Ok(true));
    assert_eq!(editor.history().undo_depth(), depth + 1);
}

#[test]
fn test_malformed_snapshot_keeps_scene() {
    let mut editor = editor();
    editor.add_shape(ShapeKind::Rectangle, 4.0).unwrap();
    let before = capture(editor.context());

    let mut history = HistoryStore::new(10);
    history.append(Snapshot::new("{ not json"));
    history.append(Snapshot::new(before.clone()));

    let mut context = editor.context().clone();
    let result = history.undo(&mut context);
    assert!(matches!(result, Err(EditError::MalformedSnapshot { .. })));
    assert_eq!(capture(&context), before);
    assert_eq!(history.undo_depth(), 2);
    assert_eq!(history.redo_depth(), 0);
}

#[test]
fn test_dispose_clears_everything() {
    let mut editor = editor();
    editor.add_shape(ShapeKind::Rectangle, 4.0).unwrap();
    editor.add_shape(ShapeKind::Stairs, 6.0).unwrap();

    editor.dispose();
    assert!(editor.context().store().is_empty());
    assert!(editor.context().bindings().is_empty());
    assert!(!editor.can_undo());
    assert_eq!(editor.history().undo_depth(), 0);
}
