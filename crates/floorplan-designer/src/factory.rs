//! Shape factory: builds symbols sized from a target area.
//!
//! Every area-bearing symbol occupies a square frame of `side × side`
//! pixels where `side = sqrt(area) * grid_size`, so the area computed from
//! the frame equals the requested area. Local geometry is centered on the
//! frame.

use floorplan_core::constants::{
    DEFAULT_SHAPE_LEFT, DEFAULT_SHAPE_TOP, DEFAULT_TEXT_CONTENT, DEFAULT_TEXT_FONT_SIZE,
    ELEVATOR_CABIN_WIDTH_RATIO, ELEVATOR_INDICATOR_RATIO, ELEVATOR_JAMB_OFFSET_RATIO,
    ENTRANCE_ARC_SAMPLES, STAIR_STEPS, TRAPEZOID_TOP_RATIO,
};
use floorplan_core::EditError;

use crate::model::{FloorShape, Geometry, Point, ShapeId, ShapeKind, Style};
use crate::scale::ScaleModel;

pub struct ShapeFactory<'a> {
    scale: &'a ScaleModel,
}

impl<'a> ShapeFactory<'a> {
    pub fn new(scale: &'a ScaleModel) -> Self {
        Self { scale }
    }

    /// Builds a shape of `kind` covering `target_area_m2`.
    ///
    /// Fails with `InvalidArea` for a non-positive area and with
    /// `AreaExceedsCanvas` when the area is larger than the total floor area.
    /// Text ignores the area and gets the default caption.
    pub fn create(
        &self,
        id: ShapeId,
        kind: ShapeKind,
        target_area_m2: f64,
        style: Style,
    ) -> Result<FloorShape, EditError> {
        if kind == ShapeKind::Text {
            return Ok(self.create_text(id, &style.fill));
        }
        if !(target_area_m2 > 0.0) {
            return Err(EditError::InvalidArea(target_area_m2));
        }
        self.scale.check_fits(target_area_m2)?;

        let side = self.scale.area_to_side_length(target_area_m2);
        let (geometry, width, height) = match kind {
            ShapeKind::Rectangle => (Geometry::Rect, side, side),
            ShapeKind::Triangle => (triangle(side), side, side),
            ShapeKind::Trapezoid => (trapezoid(side), side, side),
            ShapeKind::Stairs => (stairs(side), side, side),
            ShapeKind::Elevator => (elevator(side), side, side),
            ShapeKind::Entrance => (entrance(side), side, side),
            ShapeKind::Line => (line(side), side, 0.0),
            ShapeKind::Text => return Ok(self.create_text(id, &style.fill)),
        };

        let mut shape = FloorShape::new(id, kind, geometry, width, height, style);
        shape.left = DEFAULT_SHAPE_LEFT;
        shape.top = DEFAULT_SHAPE_TOP;
        tracing::debug!(
            "Created {} {} with side {:.2}px for {}m²",
            kind,
            id,
            side,
            target_area_m2
        );
        Ok(shape)
    }

    /// Default caption at the default placement.
    pub fn create_text(&self, id: ShapeId, color: &str) -> FloorShape {
        let mut text = FloorShape::text(id, DEFAULT_TEXT_CONTENT, DEFAULT_TEXT_FONT_SIZE, color);
        text.left = DEFAULT_SHAPE_LEFT;
        text.top = DEFAULT_SHAPE_TOP;
        text
    }
}

/// Isosceles triangle, apex up.
fn triangle(side: f64) -> Geometry {
    let h = side / 2.0;
    Geometry::Polygon {
        points: vec![Point::new(0.0, -h), Point::new(h, h), Point::new(-h, h)],
    }
}

/// Top edge is a fraction of the bottom edge.
fn trapezoid(side: f64) -> Geometry {
    let h = side / 2.0;
    let top = side * TRAPEZOID_TOP_RATIO / 2.0;
    Geometry::Polygon {
        points: vec![
            Point::new(-top, -h),
            Point::new(top, -h),
            Point::new(h, h),
            Point::new(-h, h),
        ],
    }
}

/// Staircase silhouette rising left to right. Each step adds the left end
/// of its riser, the top of the riser and the right end of the tread.
fn stairs(side: f64) -> Geometry {
    let h = side / 2.0;
    let step = side / STAIR_STEPS as f64;
    let mut points = Vec::with_capacity(STAIR_STEPS * 3);
    for i in 0..STAIR_STEPS {
        let x = -h + i as f64 * step;
        let floor = h - i as f64 * step;
        let tread = floor - step;
        points.push(Point::new(x, floor));
        points.push(Point::new(x, tread));
        points.push(Point::new(x + step, tread));
    }
    Geometry::Polygon { points }
}

/// Cabin, two door jambs and a floor indicator, grouped.
fn elevator(side: f64) -> Geometry {
    let cabin_w = side * ELEVATOR_CABIN_WIDTH_RATIO;
    let (hw, hh) = (cabin_w / 2.0, side / 2.0);
    let jamb = cabin_w * ELEVATOR_JAMB_OFFSET_RATIO;
    let indicator = side * ELEVATOR_INDICATOR_RATIO;
    let half_ind = indicator / 2.0;

    Geometry::Group {
        parts: vec![
            Geometry::Polygon {
                points: vec![
                    Point::new(-hw, -hh),
                    Point::new(hw, -hh),
                    Point::new(hw, hh),
                    Point::new(-hw, hh),
                ],
            },
            Geometry::Line {
                start: Point::new(-jamb, -hh),
                end: Point::new(-jamb, hh),
            },
            Geometry::Line {
                start: Point::new(jamb, -hh),
                end: Point::new(jamb, hh),
            },
            Geometry::Polygon {
                points: vec![
                    Point::new(-half_ind, -hh),
                    Point::new(half_ind, -hh),
                    Point::new(half_ind, -hh + indicator),
                    Point::new(-half_ind, -hh + indicator),
                ],
            },
        ],
    }
}

/// Half disc with its diameter on the bottom edge of the frame.
fn entrance(side: f64) -> Geometry {
    let radius = side / 2.0;
    let base = side / 2.0;
    let last = (ENTRANCE_ARC_SAMPLES - 1) as f64;
    let points = (0..ENTRANCE_ARC_SAMPLES)
        .map(|i| {
            let theta = std::f64::consts::PI * i as f64 / last;
            Point::new(radius * theta.cos(), base - radius * theta.sin())
        })
        .collect();
    Geometry::Polygon { points }
}

fn line(side: f64) -> Geometry {
    let h = side / 2.0;
    Geometry::Line {
        start: Point::new(-h, 0.0),
        end: Point::new(h, 0.0),
    }
}
