// src/art/forms.rs

//! The form geometry table.
//!
//! Each of the nine forms is a fixed list of primitives in a cell-local frame:
//! the origin is the cell center, the cell spans `[-0.5, 0.5]` on both axes and
//! every length is a fraction of the cell edge `w`. Angles are radians in
//! screen convention (y grows downward, so positive sweeps run clockwise).
//! `slot` indexes the shape's shuffled palette; slot 0 is reserved for the
//! base square that is painted under every form.
//!
//! The raster renderer interprets this table directly and the HTML adapter
//! embeds it as JSON for its script, so both adapters draw from one source.

use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

const THIRD: f64 = 1.0 / 3.0;
const SIXTH: f64 = 1.0 / 6.0;
const THREE_HALVES_PI: f64 = 3.0 * FRAC_PI_2;

/// Number of forms in the table.
pub const FORM_COUNT: usize = 9;

/// Index of the "Sun Pattern" form, whose rings differ per adapter.
pub const SUN_PATTERN: usize = 7;

/// One drawing primitive of a form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        slot: usize,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        slot: usize,
    },
    Pie {
        cx: f64,
        cy: f64,
        r: f64,
        start: f64,
        end: f64,
        slot: usize,
    },
    Polygon {
        points: &'static [[f64; 2]],
        slot: usize,
    },
    /// Filled disc or outline ring depending on the adapter's `RingStyle`.
    Ring {
        cx: f64,
        cy: f64,
        r: f64,
        width: f64,
        slot: usize,
    },
}

impl Primitive {
    /// Palette slot this primitive is painted with.
    pub fn slot(&self) -> usize {
        match *self {
            Primitive::Rect { slot, .. }
            | Primitive::Circle { slot, .. }
            | Primitive::Pie { slot, .. }
            | Primitive::Polygon { slot, .. }
            | Primitive::Ring { slot, .. } => slot,
        }
    }
}

/// A named composition of primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Form {
    pub name: &'static str,
    pub primitives: &'static [Primitive],
}

/// All forms, indexed by form number.
pub static FORMS: [Form; FORM_COUNT] = [
    Form {
        name: "Quarter Circle",
        primitives: &[
            Primitive::Pie { cx: -0.5, cy: -0.5, r: 1.0, start: 0.0, end: FRAC_PI_2, slot: 1 },
            Primitive::Circle { cx: 0.25, cy: 0.25, r: 0.12, slot: 2 },
        ],
    },
    Form {
        name: "Half Circles",
        primitives: &[
            Primitive::Pie { cx: 0.0, cy: -0.5, r: 0.5, start: 0.0, end: PI, slot: 1 },
            Primitive::Pie { cx: 0.0, cy: 0.5, r: 0.5, start: PI, end: TAU, slot: 2 },
        ],
    },
    Form {
        name: "Triangle",
        primitives: &[
            Primitive::Polygon { points: &[[-0.5, -0.5], [0.5, -0.5], [-0.5, 0.5]], slot: 1 },
            Primitive::Circle { cx: 0.22, cy: 0.22, r: 0.14, slot: 2 },
        ],
    },
    Form {
        name: "Bullseye",
        primitives: &[
            Primitive::Circle { cx: 0.0, cy: 0.0, r: 0.45, slot: 1 },
            Primitive::Circle { cx: 0.0, cy: 0.0, r: 0.3, slot: 2 },
            Primitive::Circle { cx: 0.0, cy: 0.0, r: 0.15, slot: 3 },
        ],
    },
    Form {
        name: "Diamond",
        primitives: &[
            Primitive::Polygon { points: &[[0.0, -0.5], [0.5, 0.0], [0.0, 0.5], [-0.5, 0.0]], slot: 1 },
            Primitive::Rect { x: -SIXTH, y: -SIXTH, width: THIRD, height: THIRD, slot: 2 },
        ],
    },
    Form {
        name: "Stripes",
        primitives: &[
            Primitive::Rect { x: -0.5, y: -0.5, width: 1.0, height: SIXTH, slot: 1 },
            Primitive::Rect { x: -0.5, y: -SIXTH, width: 1.0, height: SIXTH, slot: 2 },
            Primitive::Rect { x: -0.5, y: SIXTH, width: 1.0, height: SIXTH, slot: 1 },
            Primitive::Circle { cx: 0.25, cy: 0.0, r: 0.1, slot: 3 },
        ],
    },
    Form {
        name: "Leaf",
        primitives: &[
            Primitive::Pie { cx: -0.5, cy: 0.5, r: 1.0, start: THREE_HALVES_PI, end: TAU, slot: 1 },
            Primitive::Pie { cx: 0.5, cy: -0.5, r: 1.0, start: FRAC_PI_2, end: PI, slot: 2 },
        ],
    },
    Form {
        name: "Sun Pattern",
        primitives: &[
            Primitive::Ring { cx: 0.0, cy: 0.0, r: 0.42, width: 0.05, slot: 2 },
            Primitive::Ring { cx: 0.0, cy: 0.0, r: 0.32, width: 0.05, slot: 3 },
            Primitive::Ring { cx: 0.0, cy: 0.0, r: 0.22, width: 0.05, slot: 2 },
            Primitive::Circle { cx: 0.0, cy: 0.0, r: 0.12, slot: 1 },
        ],
    },
    Form {
        name: "Arches",
        primitives: &[
            Primitive::Rect { x: -0.5, y: 0.0, width: 1.0, height: 0.5, slot: 1 },
            Primitive::Pie { cx: 0.0, cy: 0.0, r: 0.5, start: PI, end: TAU, slot: 2 },
            Primitive::Pie { cx: 0.0, cy: 0.0, r: 0.25, start: PI, end: TAU, slot: 3 },
        ],
    },
];

/// Looks a form up by index.
pub fn form(index: usize) -> Option<&'static Form> {
    FORMS.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;
    use test_log::test;

    #[test]
    fn every_form_has_primitives_and_a_unique_name() {
        let mut names: Vec<_> = FORMS.iter().map(|f| f.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), FORM_COUNT);
        assert!(FORMS.iter().all(|f| !f.primitives.is_empty()));
    }

    #[test]
    fn slots_stay_inside_palette_and_above_base() {
        for form in FORMS.iter() {
            for primitive in form.primitives {
                let slot = primitive.slot();
                assert!(slot >= 1 && slot < PALETTE.len(), "{}: slot {}", form.name, slot);
            }
        }
    }

    #[test]
    fn only_sun_pattern_has_rings() {
        for (index, form) in FORMS.iter().enumerate() {
            let has_ring = form
                .primitives
                .iter()
                .any(|p| matches!(p, Primitive::Ring { .. }));
            assert_eq!(has_ring, index == SUN_PATTERN, "form {}", form.name);
        }
        assert_eq!(FORMS[SUN_PATTERN].name, "Sun Pattern");
    }

    #[test]
    fn primitives_serialize_with_op_tag() {
        let json = serde_json::to_value(FORMS[2]).unwrap();
        assert_eq!(json["name"], "Triangle");
        assert_eq!(json["primitives"][0]["op"], "polygon");
        assert_eq!(json["primitives"][0]["points"][1][0], 0.5);
        assert_eq!(json["primitives"][1]["op"], "circle");
        assert_eq!(json["primitives"][1]["slot"], 2);
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        assert!(form(FORM_COUNT).is_none());
        assert_eq!(form(0).map(|f| f.name), Some("Quarter Circle"));
    }
}
