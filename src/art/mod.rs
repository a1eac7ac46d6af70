// src/art/mod.rs

//! The art generator: seed → layout → shapes on a surface.
//!
//! `generate_art` is the canvas adapter. It draws into any `Surface` the
//! caller owns; `render_pixmap` and `render_png` wrap it around a freshly
//! allocated raster surface.

pub mod forms;
pub mod layout;
pub mod renderer;


use crate::config::AdapterProfile;
use crate::rasterizer::PixmapSurface;
use crate::seed::parse_seed;
use crate::surface::Surface;
use anyhow::Result;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub use layout::{Composition, PlacedShape};

/// Input of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ArtConfig {
    /// Token id; parsed as the generation seed. Equal to the FID in practice.
    pub token_id: String,
    /// Carried for callers that send it; generation always seeds from `token_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl ArtConfig {
    pub fn new(token_id: impl Into<String>) -> Self {
        Self {
            token_id: token_id.into(),
            seed: None,
        }
    }

    /// The seed generation actually uses.
    pub fn resolved_seed(&self) -> i64 {
        parse_seed(&self.token_id)
    }
}

/// Lays out `config` for a square canvas of edge `side`.
pub fn compose(config: &ArtConfig, profile: &AdapterProfile, side: u32) -> Composition {
    Composition::generate(config.resolved_seed(), side as f64, profile)
}

/// Draws the art for `config` into `surface` and returns the layout it used.
pub fn generate_art(
    surface: &mut dyn Surface,
    config: &ArtConfig,
    profile: &AdapterProfile,
) -> Composition {
    let (width, height) = surface.dimensions();
    if width != height {
        warn!(
            "Surface is {}x{}; art assumes a square and uses the width",
            width, height
        );
    }
    let composition = compose(config, profile, width);
    debug!(
        "Generating art for tokenId '{}' (seed {}) with {} shapes",
        config.token_id,
        composition.seed,
        composition.shapes.len()
    );
    renderer::draw_composition(surface, &composition, profile.ring_style);
    composition
}

/// Renders onto a new `side x side` raster surface.
pub fn render_pixmap(
    config: &ArtConfig,
    profile: &AdapterProfile,
    side: u32,
) -> Result<PixmapSurface> {
    let mut surface = PixmapSurface::square(side)?;
    generate_art(&mut surface, config, profile);
    Ok(surface)
}

/// Renders and encodes as PNG.
pub fn render_png(config: &ArtConfig, profile: &AdapterProfile, side: u32) -> Result<Vec<u8>> {
    render_pixmap(config, profile, side)?.encode_png()
}
