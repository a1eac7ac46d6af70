// src/art/layout.rs

//! The layout engine: places forms on the 3x3 grid.
//!
//! One shared `SeededRandom` shuffles the form indices, then hands every placed
//! cell a shape seed. Each shape draws its flip, rotation and palette order
//! from its own sub-generator, so the shared trace is
//! `8 shuffle draws + 1 draw per placed cell`. An adapter that places fewer
//! cells therefore consumes a strict prefix of another adapter's trace.

use crate::color::{PaletteColor, PALETTE};
use crate::config::AdapterProfile;
use crate::random::{SeededRandom, MODULUS};
use log::{debug, trace, warn};
use serde::Serialize;

use super::forms::{self, Form, FORM_COUNT};

/// Rows and columns of the grid.
pub const GRID_DIM: usize = 3;

/// One form placed in a grid cell, with its per-shape random decisions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedShape {
    pub row: usize,
    pub col: usize,
    /// Index into `FORMS`.
    pub form: usize,
    /// Canvas coordinates of the cell center.
    pub center: (f64, f64),
    /// Edge length of the cell (`w`).
    pub size: f64,
    /// Seed of this shape's sub-generator.
    pub shape_seed: i64,
    /// `-1.0` for a horizontal flip, `1.0` otherwise.
    pub scale_x: f64,
    /// Rotation in quarter turns (0..=3).
    pub quarter_turns: u8,
    /// Shuffled palette; slot 0 is the base square.
    pub palette: Vec<PaletteColor>,
}

impl PlacedShape {
    pub fn form_def(&self) -> Option<&'static Form> {
        forms::form(self.form)
    }

    /// Color for a palette slot, falling back to the base color when absent.
    pub fn color(&self, slot: usize) -> PaletteColor {
        self.palette
            .get(slot)
            .or_else(|| self.palette.first())
            .copied()
            .unwrap_or(PALETTE[0])
    }
}

/// A full layout for one seed under one adapter profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Composition {
    pub seed: i64,
    /// Canvas edge length.
    pub side: f64,
    pub grid_area: f64,
    pub cell_size: f64,
    /// Permutation of form indices over the cells, row-major.
    pub order: Vec<usize>,
    pub shapes: Vec<PlacedShape>,
    /// Every value drawn from the shared generator, in order.
    pub trace: Vec<f64>,
}

impl Composition {
    /// Lays out `seed` on a `side x side` canvas.
    pub fn generate(seed: i64, side: f64, profile: &AdapterProfile) -> Self {
        let grid_area = side * profile.grid_fraction;
        let cell_size = grid_area / GRID_DIM as f64;
        let margin = (side - grid_area) / 2.0;

        let forms_placed = if profile.forms_placed > FORM_COUNT {
            warn!(
                "Profile asks for {} forms but the grid holds {}; clamping",
                profile.forms_placed, FORM_COUNT
            );
            FORM_COUNT
        } else {
            profile.forms_placed
        };

        let mut rng = SeededRandom::with_trace(seed);
        let indices: Vec<usize> = (0..FORM_COUNT).collect();
        let order = rng.shuffle(&indices);
        debug!("Seed {} form order {:?}", seed, order);

        let mut shapes = Vec::with_capacity(forms_placed);
        for row in 0..GRID_DIM {
            for col in 0..GRID_DIM {
                let index = row * GRID_DIM + col;
                if index >= forms_placed {
                    continue;
                }
                let center = (
                    col as f64 * cell_size + cell_size / 2.0 + margin,
                    row as f64 * cell_size + cell_size / 2.0 + margin,
                );
                let shape_seed = rng.next_int(MODULUS as i64);
                let shape = place_shape(row, col, order[index], center, cell_size, shape_seed);
                trace!("Placed {:?}", shape);
                shapes.push(shape);
            }
        }

        Composition {
            seed,
            side,
            grid_area,
            cell_size,
            order,
            shapes,
            trace: rng.into_trace(),
        }
    }

    /// The shape placed at `(row, col)`, if any.
    pub fn shape_at(&self, row: usize, col: usize) -> Option<&PlacedShape> {
        self.shapes.iter().find(|s| s.row == row && s.col == col)
    }
}

fn place_shape(
    row: usize,
    col: usize,
    form: usize,
    center: (f64, f64),
    size: f64,
    shape_seed: i64,
) -> PlacedShape {
    let mut sub = SeededRandom::new(shape_seed);
    let scale_x = if sub.next() < 0.5 { -1.0 } else { 1.0 };
    let quarter_turns = sub.next_int(4).rem_euclid(4) as u8;
    let palette = sub.shuffle(&PALETTE);
    PlacedShape {
        row,
        col,
        form,
        center,
        size,
        shape_seed,
        scale_x,
        quarter_turns,
        palette,
    }
}
