use floorplan_core::EditError;
use floorplan_designer::{Geometry, ScaleModel, ShapeFactory, ShapeKind, Style};

fn style() -> Style {
    Style::new("#ffffff", "#000000", 1.0)
}

#[test]
fn test_side_length_for_area() {
    let scale = ScaleModel::new(50.0, 100.0).unwrap();
    assert_eq!(scale.canvas_side(), 500.0);
    assert!((scale.area_to_side_length(20.0) - 223.6).abs() < 0.01);
    assert_eq!(scale.pixels_to_meters(150.0), 3.0);
}

#[test]
fn test_factory_frame_matches_area() {
    let scale = ScaleModel::new(20.0, 100.0).unwrap();
    let factory = ShapeFactory::new(&scale);

    for kind in ShapeKind::AREA_KINDS {
        let shape = factory.create(1, kind, 16.0, style()).unwrap();
        assert_eq!(shape.width, 80.0);
        assert_eq!(shape.height, 80.0);
        assert_eq!(scale.pixels_to_area(shape.scaled_width(), shape.scaled_height()), 16.0);
        assert_eq!(shape.left, 100.0);
        assert_eq!(shape.top, 100.0);
    }
}

#[test]
fn test_factory_rejects_bad_area() {
    let scale = ScaleModel::new(20.0, 100.0).unwrap();
    let factory = ShapeFactory::new(&scale);

    assert_eq!(
        factory.create(1, ShapeKind::Rectangle, 0.0, style()),
        Err(EditError::InvalidArea(0.0))
    );
    assert!(matches!(
        factory.create(1, ShapeKind::Triangle, 150.0, style()),
        Err(EditError::AreaExceedsCanvas { .. })
    ));
    // Exactly the total area fits
    assert!(factory.create(1, ShapeKind::Rectangle, 100.0, style()).is_ok());
}

#[test]
fn test_factory_line_has_no_height() {
    let scale = ScaleModel::new(20.0, 100.0).unwrap();
    let line = ShapeFactory::new(&scale)
        .create(1, ShapeKind::Line, 25.0, style())
        .unwrap();
    assert_eq!(line.height, 0.0);
    assert!(!line.has_area());
    assert!(matches!(line.geometry, Geometry::Line { .. }));
}

#[test]
fn test_factory_elevator_parts() {
    let scale = ScaleModel::new(20.0, 100.0).unwrap();
    let elevator = ShapeFactory::new(&scale)
        .create(1, ShapeKind::Elevator, 9.0, style())
        .unwrap();
    assert_eq!(elevator.geometry.part_count(), 4);
}

#[test]
fn test_factory_text_default_caption() {
    let scale = ScaleModel::new(20.0, 100.0).unwrap();
    let text = ShapeFactory::new(&scale).create_text(7, "#ff0000");
    assert_eq!(text.kind, ShapeKind::Text);
    assert_eq!(text.geometry.text(), Some("Room Name"));
    assert_eq!(text.style.fill, "#ff0000");
    assert!(!text.has_area());
}
