//! Vector export.
//!
//! Produces standalone SVG markup at document scale: background, optional
//! grid or ruled lines, every visible shape as a path, and text elements for
//! captions and area labels.

use floorplan_core::constants::GUIDE_COLOR;
use floorplan_core::BackgroundKind;

use crate::context::SceneContext;
use crate::model::{FloorShape, Geometry, ShapeKind};

/// SVG path data for a lyon path.
pub fn path_data(path: &lyon::path::Path) -> String {
    let mut data = String::new();
    for event in path.iter() {
        match event {
            lyon::path::Event::Begin { at } => data.push_str(&format!("M {} {} ", at.x, at.y)),
            lyon::path::Event::Line { to, .. } => data.push_str(&format!("L {} {} ", to.x, to.y)),
            lyon::path::Event::Quadratic { ctrl, to, .. } => {
                data.push_str(&format!("Q {} {} {} {} ", ctrl.x, ctrl.y, to.x, to.y))
            }
            lyon::path::Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => data.push_str(&format!(
                "C {} {} {} {} {} {} ",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            )),
            lyon::path::Event::End { close, .. } => {
                if close {
                    data.push_str("Z ");
                }
            }
        }
    }
    data.trim_end().to_string()
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Grid or ruled-line background as path data.
fn background_path(kind: BackgroundKind, width: f64, height: f64, grid: f64) -> String {
    let mut path = String::new();
    if kind == BackgroundKind::Plain || grid <= 0.0 {
        return path;
    }
    let mut y = grid;
    while y < height {
        path.push_str(&format!("M 0 {} L {} {} ", y, width, y));
        y += grid;
    }
    if kind == BackgroundKind::Grid {
        let mut x = grid;
        while x < width {
            path.push_str(&format!("M {} 0 L {} {} ", x, x, height));
            x += grid;
        }
    }
    path.trim_end().to_string()
}

fn shape_element(shape: &FloorShape) -> String {
    if let Geometry::Text { content, font_size } = &shape.geometry {
        return format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"{}\" fill=\"{}\" dominant-baseline=\"hanging\">{}</text>",
            shape.left,
            shape.top,
            font_size * shape.scale_y,
            shape.style.fill,
            escape_text(content)
        );
    }
    let fill = if shape.kind == ShapeKind::Line {
        "none"
    } else {
        shape.style.fill.as_str()
    };
    format!(
        "<path id=\"shape-{}\" d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
        shape.id,
        path_data(&shape.outline()),
        fill,
        shape.style.stroke,
        shape.style.stroke_width
    )
}

/// Renders the whole scene as an SVG document.
pub fn render_svg(context: &SceneContext) -> String {
    let (width, height) = context.canvas_size();
    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = width,
        h = height
    ));
    svg.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        width,
        height,
        context.background_color()
    ));

    let grid = background_path(
        context.background(),
        width,
        height,
        context.scale().grid_size(),
    );
    if !grid.is_empty() {
        svg.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"0.25\" stroke-width=\"1\"/>\n",
            grid, GUIDE_COLOR
        ));
    }

    for shape in context.store().iter().filter(|s| s.visible) {
        svg.push_str(&shape_element(shape));
        svg.push('\n');
    }
    svg.push_str("</svg>\n");
    svg
}
