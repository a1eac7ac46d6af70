// src/color.rs

//! Defines the color types (`Rgba`, `PaletteColor`) and the fixed art palette.
//!
//! The palette is hard-coded and never mutated. Both the raster surface and
//! the embeddable HTML document read from the same table, so a palette entry
//! carries its hex spelling (for the document) next to its decoded channels
//! (for the rasterizer).

use anyhow::{bail, Context, Result};
use serde::{Serialize, Serializer};

/// RGBA color in 32-bit format (8 bits per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses a `#RRGGBB` or `#RRGGBBAA` hex string.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .with_context(|| format!("Color '{}' is missing the leading '#'", hex))?;
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            bail!("Color '{}' must have 6 or 8 hex digits", hex);
        }
        let channel = |i: usize| -> Result<u8> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .with_context(|| format!("Invalid hex channel in color '{}'", hex))
        };
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

/// One entry of the art palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteColor {
    /// Spelling used verbatim by the embedded document.
    pub hex: &'static str,
    /// Decoded channels used by the rasterizer.
    pub rgba: Rgba,
}

impl PaletteColor {
    pub const fn new(hex: &'static str, rgba: Rgba) -> Self {
        Self { hex, rgba }
    }
}

// Serialized as the bare hex string, which is what the embedded script consumes.
impl Serialize for PaletteColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex)
    }
}

/// Canvas background, painted before any shape.
pub const BACKGROUND: PaletteColor = PaletteColor::new("#E3E3E3", Rgba::opaque(0xE3, 0xE3, 0xE3));

/// The six form colors, in their canonical (pre-shuffle) order.
pub const PALETTE: [PaletteColor; 6] = [
    PaletteColor::new("#E63946", Rgba::opaque(0xE6, 0x39, 0x46)), // Red
    PaletteColor::new("#F1C40F", Rgba::opaque(0xF1, 0xC4, 0x0F)), // Yellow
    PaletteColor::new("#1D3557", Rgba::opaque(0x1D, 0x35, 0x57)), // Navy
    PaletteColor::new("#2A9D8F", Rgba::opaque(0x2A, 0x9D, 0x8F)), // Teal
    PaletteColor::new("#F4A261", Rgba::opaque(0xF4, 0xA2, 0x61)), // Orange
    PaletteColor::new("#111111", Rgba::opaque(0x11, 0x11, 0x11)), // Ink
];
