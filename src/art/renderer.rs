// src/art/renderer.rs

//! Translates a `Composition` into `DrawCommand`s on a `Surface`.

use crate::color::BACKGROUND;
use crate::config::RingStyle;
use crate::surface::{DrawCommand, ShapeTransform, Surface};
use log::{trace, warn};

use super::forms::Primitive;
use super::layout::{Composition, PlacedShape};

/// Clears the surface to the background and draws every placed shape.
pub fn draw_composition(surface: &mut dyn Surface, composition: &Composition, ring_style: RingStyle) {
    surface.draw(&DrawCommand::Clear {
        color: BACKGROUND.rgba,
    });
    for shape in &composition.shapes {
        draw_shape(surface, shape, ring_style);
    }
}

/// Draws one shape: base square in slot 0, then the form's primitives.
pub fn draw_shape(surface: &mut dyn Surface, shape: &PlacedShape, ring_style: RingStyle) {
    let w = shape.size;
    let Some(form) = shape.form_def() else {
        warn!(
            "Skipping shape at row {} col {}: no form {}",
            shape.row, shape.col, shape.form
        );
        return;
    };
    trace!(
        "Drawing form {} ({}) at row {} col {}",
        shape.form,
        form.name,
        shape.row,
        shape.col
    );

    surface.draw(&DrawCommand::SetTransform(ShapeTransform {
        tx: shape.center.0,
        ty: shape.center.1,
        quarter_turns: shape.quarter_turns,
        scale_x: shape.scale_x,
    }));
    surface.draw(&DrawCommand::FillRect {
        x: -w / 2.0,
        y: -w / 2.0,
        width: w,
        height: w,
        color: shape.color(0).rgba,
    });

    for primitive in form.primitives {
        let color = shape.color(primitive.slot()).rgba;
        let command = match *primitive {
            Primitive::Rect {
                x, y, width, height, ..
            } => DrawCommand::FillRect {
                x: x * w,
                y: y * w,
                width: width * w,
                height: height * w,
                color,
            },
            Primitive::Circle { cx, cy, r, .. } => DrawCommand::FillCircle {
                cx: cx * w,
                cy: cy * w,
                radius: r * w,
                color,
            },
            Primitive::Pie {
                cx, cy, r, start, end, ..
            } => DrawCommand::FillPie {
                cx: cx * w,
                cy: cy * w,
                radius: r * w,
                start_angle: start,
                end_angle: end,
                color,
            },
            Primitive::Polygon { points, .. } => DrawCommand::FillPolygon {
                points: points.iter().map(|[x, y]| (x * w, y * w)).collect(),
                color,
            },
            Primitive::Ring {
                cx, cy, r, width, ..
            } => match ring_style {
                RingStyle::Filled => DrawCommand::FillCircle {
                    cx: cx * w,
                    cy: cy * w,
                    radius: r * w,
                    color,
                },
                RingStyle::Stroked => DrawCommand::StrokeCircle {
                    cx: cx * w,
                    cy: cy * w,
                    radius: r * w,
                    line_width: width * w,
                    color,
                },
            },
        };
        surface.draw(&command);
    }

    surface.draw(&DrawCommand::ResetTransform);
}
