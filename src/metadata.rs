// src/metadata.rs

//! Builds the ERC-721 metadata document for a token.
//!
//! `image` is the raster adapter's PNG as a data URL and `animation_url` is
//! the HTML adapter's document as a data URL. Uploading or pinning the
//! document is left to the caller.

use crate::art::{self, ArtConfig, Composition};
use crate::config::{Config, HtmlConfig, MetadataConfig};
use crate::html;
use crate::rasterizer::PixmapSurface;
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One `attributes[]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: Value,
}

impl Attribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// ERC-721 metadata JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_url: Option<String>,
    pub attributes: Vec<Attribute>,
}

impl TokenMetadata {
    /// Looks an attribute up by trait type.
    pub fn attribute(&self, trait_type: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|a| a.trait_type == trait_type)
            .map(|a| &a.value)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds the metadata document for `config`.
pub fn build_metadata(config: &ArtConfig, settings: &Config) -> Result<TokenMetadata> {
    let meta: &MetadataConfig = &settings.metadata;
    let profile = &settings.canvas.profile;

    let mut surface = PixmapSurface::square(meta.image_size.side())?;
    let composition = art::generate_art(&mut surface, config, profile);
    let image = surface.to_data_url()?;

    let animation_url = if meta.include_animation {
        let html_settings = HtmlConfig {
            size: meta.animation_size,
            ..settings.html.clone()
        };
        Some(html::html_data_url(config, &html_settings)?)
    } else {
        None
    };

    let attributes = attributes_for(config, &composition);

    info!(
        "Built metadata for tokenId '{}' ({} attributes)",
        config.token_id,
        attributes.len()
    );
    Ok(TokenMetadata {
        name: format!("{} #{}", meta.name_prefix, config.token_id),
        description: meta.description.clone(),
        image,
        animation_url,
        attributes,
    })
}

fn attributes_for(config: &ArtConfig, composition: &Composition) -> Vec<Attribute> {
    let mut attributes = vec![
        Attribute::new("FID", config.token_id.clone()),
        Attribute::new("Seed", composition.seed),
    ];
    for shape in &composition.shapes {
        attributes.push(Attribute::new(
            format!("Form {},{}", shape.row, shape.col),
            shape.form_def().map_or("Unknown", |form| form.name),
        ));
    }
    attributes
}
