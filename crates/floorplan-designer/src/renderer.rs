//! Raster export.
//!
//! Renders the scene at document scale (identity viewport) with tiny-skia
//! and converts the result to an `RgbImage`. Text is drawn with rusttype
//! when a system font is available.

use floorplan_core::constants::GUIDE_COLOR;
use floorplan_core::{parse_hex_color, BackgroundKind, ExportError};
use image::{Rgb, RgbImage};
use rusttype::{point as rt_point, Scale};
use std::io::Cursor;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::context::SceneContext;
use crate::font_manager;
use crate::model::{FloorShape, Geometry, ShapeKind};

const GRID_LINE_ALPHA: u8 = 64;

fn parse_color(hex: &str) -> Color {
    let (r, g, b) = parse_hex_color(hex).unwrap_or((0, 0, 0));
    Color::from_rgba8(r, g, b, 255)
}

/// Converts a lyon path to a tiny-skia path.
fn to_skia_path(path: &lyon::path::Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for event in path.iter() {
        match event {
            lyon::path::Event::Begin { at } => pb.move_to(at.x, at.y),
            lyon::path::Event::Line { to, .. } => pb.line_to(to.x, to.y),
            lyon::path::Event::Quadratic { ctrl, to, .. } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            lyon::path::Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y),
            lyon::path::Event::End { close, .. } => {
                if close {
                    pb.close();
                }
            }
        }
    }
    pb.finish()
}

/// Renders the scene to an RGB image the size of the canvas.
pub fn render_scene(context: &SceneContext) -> Result<RgbImage, ExportError> {
    let (canvas_width, canvas_height) = context.canvas_size();
    let width = canvas_width.round().max(0.0) as u32;
    let height = canvas_height.round().max(0.0) as u32;
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return Err(ExportError::RasterAllocation { width, height });
    };

    pixmap.fill(parse_color(context.background_color()));
    draw_background(&mut pixmap, context);

    for shape in context.store().iter().filter(|s| s.visible) {
        match &shape.geometry {
            Geometry::Text { content, font_size } => {
                draw_text(&mut pixmap, shape, content, *font_size);
            }
            _ => draw_shape(&mut pixmap, shape),
        }
    }

    let data = pixmap.data();
    Ok(RgbImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    }))
}

/// Renders the scene and encodes it as PNG.
pub fn render_png(context: &SceneContext) -> Result<Vec<u8>, ExportError> {
    let image = render_scene(context)?;
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| ExportError::Encoding {
            reason: e.to_string(),
        })?;
    Ok(bytes)
}

/// Grid or ruled-line backgrounds, one line per grid unit.
fn draw_background(pixmap: &mut Pixmap, context: &SceneContext) {
    let kind = context.background();
    if kind == BackgroundKind::Plain {
        return;
    }
    let grid = context.scale().grid_size() as f32;
    let (w, h) = (pixmap.width() as f32, pixmap.height() as f32);
    let mut pb = PathBuilder::new();

    let mut y = grid;
    while y < h {
        pb.move_to(0.0, y);
        pb.line_to(w, y);
        y += grid;
    }
    if kind == BackgroundKind::Grid {
        let mut x = grid;
        while x < w {
            pb.move_to(x, 0.0);
            pb.line_to(x, h);
            x += grid;
        }
    }

    let Some(path) = pb.finish() else { return };
    let mut paint = Paint::default();
    let (r, g, b) = parse_hex_color(GUIDE_COLOR).unwrap_or((0, 0, 0));
    paint.set_color(Color::from_rgba8(r, g, b, GRID_LINE_ALPHA));
    paint.anti_alias = false;
    let stroke = Stroke {
        width: 1.0,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

fn draw_shape(pixmap: &mut Pixmap, shape: &FloorShape) {
    let Some(path) = to_skia_path(&shape.outline()) else {
        return;
    };

    if shape.kind != ShapeKind::Line {
        let mut fill = Paint::default();
        fill.set_color(parse_color(&shape.style.fill));
        fill.anti_alias = true;
        pixmap.fill_path(&path, &fill, FillRule::Winding, Transform::identity(), None);
    }

    if shape.style.stroke_width > 0.0 {
        let mut paint = Paint::default();
        paint.set_color(parse_color(&shape.style.stroke));
        paint.anti_alias = true;
        let stroke = Stroke {
            width: shape.style.stroke_width as f32,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

fn draw_text(pixmap: &mut Pixmap, shape: &FloorShape, content: &str, font_size: f64) {
    let Some(font) = font_manager::get_font() else {
        return;
    };
    let (width, height) = (pixmap.width() as i32, pixmap.height() as i32);
    let (r, g, b) = parse_hex_color(&shape.style.fill).unwrap_or((0, 0, 0));

    let scale = Scale {
        x: (font_size * shape.scale_x) as f32,
        y: (font_size * shape.scale_y) as f32,
    };
    let v_metrics = font.v_metrics(scale);
    let start = rt_point(shape.left as f32, shape.top as f32 + v_metrics.ascent);

    let data = pixmap.data_mut();
    for glyph in font.layout(content, scale, start) {
        let Some(bounding_box) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, v| {
            let px = gx as i32 + bounding_box.min.x;
            let py = gy as i32 + bounding_box.min.y;
            if px < 0 || px >= width || py < 0 || py >= height || v <= 0.0 {
                return;
            }
            let idx = ((py * width + px) * 4) as usize;
            let pixel = &mut data[idx..idx + 4];
            // Coverage blend over an opaque background
            let a = v.min(1.0);
            pixel[0] = (r as f32 * a + pixel[0] as f32 * (1.0 - a)) as u8;
            pixel[1] = (g as f32 * a + pixel[1] as f32 * (1.0 - a)) as u8;
            pixel[2] = (b as f32 * a + pixel[2] as f32 * (1.0 - a)) as u8;
            pixel[3] = 255;
        });
    }
}
