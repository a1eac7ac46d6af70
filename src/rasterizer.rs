// src/rasterizer.rs

//! Software rasterizer for the canvas adapter.
//!
//! `PixmapSurface` executes `DrawCommand`s into a tiny-skia `Pixmap` and reads
//! the result back as PNG bytes, base64 or a `data:` URL. Arcs are flattened
//! into cubic Béziers of at most a quarter turn each, so output depends only
//! on the command stream and is identical run to run.

use crate::color::Rgba;
use crate::surface::{DrawCommand, ShapeTransform, Surface};
use anyhow::{Context, Result};
use base64::Engine;
use log::{debug, trace};
use std::f64::consts::{FRAC_PI_2, TAU};
use tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Raster drawing surface backed by a tiny-skia pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
    transform: Transform,
}

impl PixmapSurface {
    /// Allocates a transparent `width x height` surface.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .with_context(|| format!("Cannot allocate a {}x{} drawing surface", width, height))?;
        debug!("PixmapSurface allocated {}x{}", width, height);
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
        })
    }

    /// Allocates a square surface.
    pub fn square(side: u32) -> Result<Self> {
        Self::new(side, side)
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Raw premultiplied RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Reads one pixel back, demultiplied.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba::new(p.red(), p.green(), p.blue(), p.alpha()))
    }

    /// Encodes the surface as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap.encode_png().context("Failed to encode surface as PNG")
    }

    /// PNG bytes, base64 encoded.
    pub fn to_base64_png(&self) -> Result<String> {
        Ok(base64::engine::general_purpose::STANDARD.encode(self.encode_png()?))
    }

    /// `data:image/png;base64,...` URL of the surface.
    pub fn to_data_url(&self) -> Result<String> {
        Ok(format!("data:image/png;base64,{}", self.to_base64_png()?))
    }

    fn fill(&mut self, path: Option<Path>, color: Rgba) {
        let Some(path) = path else {
            trace!("PixmapSurface: skipping degenerate fill");
            return;
        };
        let paint = paint_for(color);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, self.transform, None);
    }
}

impl Surface for PixmapSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear { color } => {
                self.pixmap
                    .fill(Color::from_rgba8(color.r, color.g, color.b, color.a));
            }
            DrawCommand::SetTransform(placement) => {
                self.transform = to_skia_transform(placement);
            }
            DrawCommand::ResetTransform => {
                self.transform = Transform::identity();
            }
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                let path = Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32)
                    .map(PathBuilder::from_rect);
                self.fill(path, *color);
            }
            DrawCommand::FillCircle {
                cx,
                cy,
                radius,
                color,
            } => {
                let path = PathBuilder::from_circle(*cx as f32, *cy as f32, *radius as f32);
                self.fill(path, *color);
            }
            DrawCommand::FillPie {
                cx,
                cy,
                radius,
                start_angle,
                end_angle,
                color,
            } => {
                let mut pb = PathBuilder::new();
                pb.move_to(*cx as f32, *cy as f32);
                append_arc(&mut pb, *cx, *cy, *radius, *start_angle, *end_angle);
                pb.close();
                self.fill(pb.finish(), *color);
            }
            DrawCommand::FillPolygon { points, color } => {
                let mut pb = PathBuilder::new();
                let mut iter = points.iter();
                if let Some(&(x, y)) = iter.next() {
                    pb.move_to(x as f32, y as f32);
                    for &(x, y) in iter {
                        pb.line_to(x as f32, y as f32);
                    }
                    pb.close();
                }
                self.fill(pb.finish(), *color);
            }
            DrawCommand::StrokeCircle {
                cx,
                cy,
                radius,
                line_width,
                color,
            } => {
                let Some(path) = PathBuilder::from_circle(*cx as f32, *cy as f32, *radius as f32)
                else {
                    trace!("PixmapSurface: skipping degenerate ring");
                    return;
                };
                let stroke = Stroke {
                    width: *line_width as f32,
                    ..Stroke::default()
                };
                let paint = paint_for(*color);
                self.pixmap
                    .stroke_path(&path, &paint, &stroke, self.transform, None);
            }
        }
    }
}

fn paint_for(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

/// Local frame → canvas: translate, rotate, then flip horizontally.
fn to_skia_transform(placement: &ShapeTransform) -> Transform {
    let (cos, sin) = placement.cos_sin();
    let sx = placement.scale_x;
    Transform::from_row(
        (cos * sx) as f32,
        (sin * sx) as f32,
        (-sin) as f32,
        cos as f32,
        placement.tx as f32,
        placement.ty as f32,
    )
}

/// Appends a clockwise (screen space) arc from `start` to `end` radians,
/// starting with a line to the arc's first point.
fn append_arc(pb: &mut PathBuilder, cx: f64, cy: f64, r: f64, start: f64, end: f64) {
    let mut end = end;
    while end < start {
        end += TAU;
    }
    let sweep = (end - start).min(TAU);
    let segments = ((sweep / FRAC_PI_2).ceil() as usize).max(1);
    let step = sweep / segments as f64;
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    let point = |a: f64| (cx + r * a.cos(), cy + r * a.sin());
    let (x0, y0) = point(start);
    pb.line_to(x0 as f32, y0 as f32);

    for i in 0..segments {
        let a0 = start + step * i as f64;
        let a1 = a0 + step;
        let (px0, py0) = point(a0);
        let (px3, py3) = point(a1);
        let (c1x, c1y) = (px0 - k * r * a0.sin(), py0 + k * r * a0.cos());
        let (c2x, c2y) = (px3 + k * r * a1.sin(), py3 - k * r * a1.cos());
        pb.cubic_to(
            c1x as f32, c1y as f32, c2x as f32, c2y as f32, px3 as f32, py3 as f32,
        );
    }
}
