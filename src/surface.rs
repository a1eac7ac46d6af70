// src/surface.rs

//! Defines the `Surface` trait, the drawing target of the canvas adapter, and
//! the `DrawCommand` set the art renderer emits into it.
//!
//! ```text
//! Composition  →  [art::renderer]  →  DrawCommand[]  →  Surface
//!   (layout)                           (primitives)      PixmapSurface (pixels)
//!                                                        RecordingSurface (list)
//! ```
//!
//! Coordinates inside a shape are local: `SetTransform` places the origin at
//! the cell center, applies the quarter-turn rotation and then the horizontal
//! flip. `ResetTransform` returns to canvas pixels.

use crate::color::Rgba;

/// Placement of one shape's local frame on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeTransform {
    /// Canvas x of the local origin.
    pub tx: f64,
    /// Canvas y of the local origin.
    pub ty: f64,
    /// Rotation in quarter turns (0..=3), applied after the flip.
    pub quarter_turns: u8,
    /// `-1.0` mirrors the shape horizontally, `1.0` leaves it.
    pub scale_x: f64,
}

impl ShapeTransform {
    /// Exact `(cos, sin)` of the rotation.
    pub fn cos_sin(&self) -> (f64, f64) {
        match self.quarter_turns % 4 {
            0 => (1.0, 0.0),
            1 => (0.0, 1.0),
            2 => (-1.0, 0.0),
            _ => (0.0, -1.0),
        }
    }

    /// Maps a local point to canvas coordinates.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let (cos, sin) = self.cos_sin();
        let fx = x * self.scale_x;
        (cos * fx - sin * y + self.tx, sin * fx + cos * y + self.ty)
    }
}

/// Low-level drawing primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fills the whole surface, ignoring any transform.
    Clear { color: Rgba },
    /// Sets the local frame used by subsequent shape commands.
    SetTransform(ShapeTransform),
    /// Returns to canvas coordinates.
    ResetTransform,
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgba,
    },
    FillCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Rgba,
    },
    /// A filled circular sector from `start_angle` to `end_angle`, clockwise
    /// on screen (y grows downward).
    FillPie {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: Rgba,
    },
    FillPolygon { points: Vec<(f64, f64)>, color: Rgba },
    /// A circle outline of the given line width, centered on `radius`.
    StrokeCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        line_width: f64,
        color: Rgba,
    },
}

/// A square (or at least rectangular) 2D drawing target.
pub trait Surface {
    /// Returns `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Executes one drawing command.
    fn draw(&mut self, command: &DrawCommand);
}

/// Surface that records commands instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Surface for RecordingSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw(&mut self, command: &DrawCommand) {
        self.commands.push(command.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;
    use test_log::test;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn identity_transform_only_translates() {
        let t = ShapeTransform {
            tx: 10.0,
            ty: 20.0,
            quarter_turns: 0,
            scale_x: 1.0,
        };
        assert!(close(t.apply(3.0, 4.0), (13.0, 24.0)));
    }

    #[test]
    fn flip_happens_before_rotation() {
        // Flip (1, 0) to (-1, 0), then a quarter turn maps it to (0, -1).
        let t = ShapeTransform {
            tx: 0.0,
            ty: 0.0,
            quarter_turns: 1,
            scale_x: -1.0,
        };
        assert!(close(t.apply(1.0, 0.0), (0.0, -1.0)));
        assert!(close(t.apply(0.0, 1.0), (-1.0, 0.0)));
    }

    #[test]
    fn cos_sin_matches_angle() {
        for quarter_turns in 0..4u8 {
            let t = ShapeTransform {
                tx: 0.0,
                ty: 0.0,
                quarter_turns,
                scale_x: 1.0,
            };
            let angle = quarter_turns as f64 * FRAC_PI_2;
            let (cos, sin) = t.cos_sin();
            assert!((cos - angle.cos()).abs() < 1e-12);
            assert!((sin - angle.sin()).abs() < 1e-12);
        }
    }

    #[test]
    fn recording_surface_keeps_order() {
        let mut surface = RecordingSurface::new(4, 4);
        surface.draw(&DrawCommand::Clear {
            color: Rgba::opaque(1, 2, 3),
        });
        surface.draw(&DrawCommand::ResetTransform);
        assert_eq!(surface.dimensions(), (4, 4));
        assert_eq!(surface.commands().len(), 2);
        assert!(matches!(surface.commands()[0], DrawCommand::Clear { .. }));
        assert_eq!(surface.into_commands()[1], DrawCommand::ResetTransform);
    }
}
