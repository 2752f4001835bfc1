//! Scene object model.
//!
//! Every object on the floor plan, including area labels, is a [`FloorShape`]:
//! a tagged variant of kind and [`Geometry`] placed by a pixel frame
//! (`left`, `top`, `width`, `height`) and independent scale factors.

use floorplan_core::constants::{TEXT_ADVANCE_RATIO, TEXT_LINE_HEIGHT_RATIO};
use floorplan_core::RoomType;
use lyon::math::Transform;
use lyon::path::Path;
use serde::{Deserialize, Serialize};
use std::fmt;

mod geometry;

pub use geometry::Geometry;

/// Identifier of an object in the scene.
pub type ShapeId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Triangle,
    Trapezoid,
    Stairs,
    Elevator,
    Entrance,
    Line,
    Text,
}

impl ShapeKind {
    /// Kinds placed by target area.
    pub const AREA_KINDS: [ShapeKind; 7] = [
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Trapezoid,
        ShapeKind::Stairs,
        ShapeKind::Elevator,
        ShapeKind::Entrance,
        ShapeKind::Line,
    ];

    /// Whether shapes of this kind carry an area label.
    pub fn has_area(&self) -> bool {
        !matches!(self, ShapeKind::Line | ShapeKind::Text)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Trapezoid => "Trapezoid",
            ShapeKind::Stairs => "Stairs",
            ShapeKind::Elevator => "Elevator",
            ShapeKind::Entrance => "Entrance",
            ShapeKind::Line => "Line",
            ShapeKind::Text => "Text",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rectangle" | "rect" | "room" => Ok(ShapeKind::Rectangle),
            "triangle" => Ok(ShapeKind::Triangle),
            "trapezoid" => Ok(ShapeKind::Trapezoid),
            "stairs" => Ok(ShapeKind::Stairs),
            "elevator" => Ok(ShapeKind::Elevator),
            "entrance" => Ok(ShapeKind::Entrance),
            "line" => Ok(ShapeKind::Line),
            "text" => Ok(ShapeKind::Text),
            other => Err(format!("Unknown shape kind: {}", other)),
        }
    }
}

/// Paint attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Style {
    pub fn new(fill: impl Into<String>, stroke: impl Into<String>, stroke_width: f64) -> Self {
        Self {
            fill: fill.into(),
            stroke: stroke.into(),
            stroke_width,
        }
    }
}

/// An object placed in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorShape {
    pub id: ShapeId,
    pub name: String,
    pub kind: ShapeKind,
    pub geometry: Geometry,
    /// Frame origin (top-left) in document pixels
    pub left: f64,
    pub top: f64,
    /// Unscaled frame size in pixels
    pub width: f64,
    pub height: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub style: Style,
    #[serde(default)]
    pub room_type: Option<RoomType>,
    /// Area label owned by this shape
    #[serde(default)]
    pub label: Option<ShapeId>,
    /// Owner, when this object is an area label
    #[serde(default)]
    pub label_of: Option<ShapeId>,
    pub visible: bool,
    /// Whether the object responds to selection and dragging
    pub interactive: bool,
}

impl FloorShape {
    pub fn new(id: ShapeId, kind: ShapeKind, geometry: Geometry, width: f64, height: f64, style: Style) -> Self {
        Self {
            id,
            name: format!("{} {}", kind.display_name(), id),
            kind,
            geometry,
            left: 0.0,
            top: 0.0,
            width,
            height,
            scale_x: 1.0,
            scale_y: 1.0,
            style,
            room_type: None,
            label: None,
            label_of: None,
            visible: true,
            interactive: true,
        }
    }

    /// Creates a text object whose frame is estimated from its content.
    pub fn text(id: ShapeId, content: impl Into<String>, font_size: f64, color: &str) -> Self {
        let content = content.into();
        let (width, height) = text_frame(&content, font_size);
        let mut shape = Self::new(
            id,
            ShapeKind::Text,
            Geometry::Text { content, font_size },
            width,
            height,
            Style::new(color, color, 0.0),
        );
        shape.name = format!("Text {}", id);
        shape
    }

    pub fn scaled_width(&self) -> f64 {
        self.width * self.scale_x
    }

    pub fn scaled_height(&self) -> f64 {
        self.height * self.scale_y
    }

    /// Geometric center of the frame, in document pixels.
    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.scaled_width() / 2.0,
            self.top + self.scaled_height() / 2.0,
        )
    }

    /// Frame bounds as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.left,
            self.top,
            self.left + self.scaled_width(),
            self.top + self.scaled_height(),
        )
    }

    pub fn is_label(&self) -> bool {
        self.label_of.is_some()
    }

    /// Whether this shape carries an area label.
    pub fn has_area(&self) -> bool {
        self.kind.has_area() && !self.is_label()
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.left += dx;
        self.top += dy;
    }

    /// Places the frame so that its center lands on `center`.
    pub fn center_on(&mut self, center: Point) {
        self.left = center.x - self.scaled_width() / 2.0;
        self.top = center.y - self.scaled_height() / 2.0;
    }

    /// Folds the scale factors into the frame and geometry, resetting them to 1.
    pub fn bake_scale(&mut self, extra: f64) {
        let sx = self.scale_x * extra;
        let sy = self.scale_y * extra;
        self.width *= sx;
        self.height *= sy;
        self.geometry.scale(sx, sy);
        self.scale_x = 1.0;
        self.scale_y = 1.0;
    }

    /// Replaces the content of a text object and re-estimates its frame.
    pub fn set_text(&mut self, content: impl Into<String>) {
        if let Geometry::Text { content: text, font_size } = &mut self.geometry {
            *text = content.into();
            let (width, height) = text_frame(text, *font_size);
            self.width = width;
            self.height = height;
        }
    }

    /// Outline in document coordinates.
    pub fn outline(&self) -> Path {
        let center = self.center();
        let transform = Transform::scale(self.scale_x as f32, self.scale_y as f32)
            .then_translate(lyon::math::vector(center.x as f32, center.y as f32));
        self.geometry
            .local_path(self.width, self.height)
            .transformed(&transform)
    }
}

/// Estimated frame of single-line text.
pub fn text_frame(content: &str, font_size: f64) -> (f64, f64) {
    let chars = content.chars().count().max(1) as f64;
    (
        chars * font_size * TEXT_ADVANCE_RATIO,
        font_size * TEXT_LINE_HEIGHT_RATIO,
    )
}
