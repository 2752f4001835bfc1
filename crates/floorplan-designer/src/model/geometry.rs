use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};

use super::Point;

/// Local geometry of a shape, in unscaled pixels relative to the center of
/// the shape's frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Geometry {
    /// Axis-aligned rectangle filling the whole frame
    Rect,
    /// Closed polygon
    Polygon { points: Vec<Point> },
    /// Open straight segment
    Line { start: Point, end: Point },
    /// Several parts moved and scaled as one unit
    Group { parts: Vec<Geometry> },
    /// Single-line text
    Text { content: String, font_size: f64 },
}

impl Geometry {
    /// Builds the local outline. `width` and `height` are the unscaled frame
    /// dimensions, needed for [`Geometry::Rect`].
    pub fn local_path(&self, width: f64, height: f64) -> Path {
        let mut builder = Path::builder();
        self.append_to(&mut builder, width, height);
        builder.build()
    }

    fn append_to(&self, builder: &mut lyon::path::path::Builder, width: f64, height: f64) {
        match self {
            Geometry::Rect => {
                let (hw, hh) = ((width / 2.0) as f32, (height / 2.0) as f32);
                builder.begin(point(-hw, -hh));
                builder.line_to(point(hw, -hh));
                builder.line_to(point(hw, hh));
                builder.line_to(point(-hw, hh));
                builder.close();
            }
            Geometry::Polygon { points } => {
                let mut iter = points.iter();
                if let Some(first) = iter.next() {
                    builder.begin(point(first.x as f32, first.y as f32));
                    for p in iter {
                        builder.line_to(point(p.x as f32, p.y as f32));
                    }
                    builder.close();
                }
            }
            Geometry::Line { start, end } => {
                builder.begin(point(start.x as f32, start.y as f32));
                builder.line_to(point(end.x as f32, end.y as f32));
                builder.end(false);
            }
            Geometry::Group { parts } => {
                for part in parts {
                    part.append_to(builder, width, height);
                }
            }
            Geometry::Text { .. } => {}
        }
    }

    /// Multiplies every coordinate (and the font size of text) by the given factors.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        match self {
            Geometry::Rect => {}
            Geometry::Polygon { points } => {
                for p in points.iter_mut() {
                    p.x *= sx;
                    p.y *= sy;
                }
            }
            Geometry::Line { start, end } => {
                start.x *= sx;
                start.y *= sy;
                end.x *= sx;
                end.y *= sy;
            }
            Geometry::Group { parts } => {
                for part in parts.iter_mut() {
                    part.scale(sx, sy);
                }
            }
            Geometry::Text { font_size, .. } => {
                *font_size *= sx.min(sy);
            }
        }
    }

    /// Number of drawable parts (a group counts its members).
    pub fn part_count(&self) -> usize {
        match self {
            Geometry::Group { parts } => parts.iter().map(Geometry::part_count).sum(),
            Geometry::Text { .. } => 0,
            _ => 1,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Geometry::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}
