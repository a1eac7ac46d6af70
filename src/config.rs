// src/config.rs

//! Defines the configuration structures for `fidart`.
//!
//! The structs deserialize from a JSON file and every field has a default, so
//! a partial file only overrides what it names. The defaults reproduce the
//! settings used for already-minted art: the canvas adapter draws 8 forms on a
//! 0.75 grid with filled sun rings, the HTML adapter draws 9 forms on a 0.55
//! grid with stroked rings. Those two profiles differ on purpose and must not
//! be merged.

use anyhow::{Context, Result};
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "FIDART_CONFIG";

/// Process-wide configuration, loaded on first use.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Raster (canvas adapter) settings.
    pub canvas: CanvasConfig,
    /// Embeddable HTML document settings.
    pub html: HtmlConfig,
    /// Token metadata settings.
    pub metadata: MetadataConfig,
}

impl Config {
    /// Parses a JSON document into a `Config`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse fidart config JSON")
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Loads from `$FIDART_CONFIG` if set, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(Path::new(&path)) {
            Ok(config) => {
                info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(e) => {
                warn!("{:#}. Using default configuration.", e);
                Self::default()
            }
        }
    }
}

// --- Adapter Profiles ---

/// How the rings of the "Sun Pattern" form are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RingStyle {
    /// Solid discs.
    Filled,
    /// Outlines only.
    Stroked,
}

/// Adapter-specific layout constants.
///
/// Fields missing from a config file default to the canvas profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterProfile {
    /// Share of the canvas edge covered by the 3x3 grid.
    pub grid_fraction: f64,
    /// Number of row-major cells that receive a form (at most 9).
    pub forms_placed: usize,
    /// Rendering of form 7's rings.
    pub ring_style: RingStyle,
}

impl AdapterProfile {
    /// Profile of the canvas (raster) adapter.
    pub const CANVAS: AdapterProfile = AdapterProfile {
        grid_fraction: 0.75,
        forms_placed: 8,
        ring_style: RingStyle::Filled,
    };

    /// Profile of the embeddable HTML adapter.
    pub const HTML: AdapterProfile = AdapterProfile {
        grid_fraction: 0.55,
        forms_placed: 9,
        ring_style: RingStyle::Stroked,
    };
}

impl Default for AdapterProfile {
    fn default() -> Self {
        AdapterProfile::CANVAS
    }
}

// --- Canvas Sizes ---

/// Edge length of the square drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CanvasSize {
    /// 600x600, the primary size.
    #[default]
    Standard,
    /// 450x450, for on-chain storage economy.
    Compact,
    /// 200x200, smallest on-chain variant.
    Thumbnail,
    /// Any other edge length in pixels.
    Custom(u32),
}

impl CanvasSize {
    /// Edge length in pixels.
    pub fn side(&self) -> u32 {
        match self {
            CanvasSize::Standard => 600,
            CanvasSize::Compact => 450,
            CanvasSize::Thumbnail => 200,
            CanvasSize::Custom(side) => *side,
        }
    }

    /// Maps a pixel edge back to a named size where one exists.
    pub fn from_side(side: u32) -> Self {
        match side {
            600 => CanvasSize::Standard,
            450 => CanvasSize::Compact,
            200 => CanvasSize::Thumbnail,
            other => CanvasSize::Custom(other),
        }
    }
}

// --- Adapter Configuration ---

/// Settings for the raster adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub size: CanvasSize,
    pub profile: AdapterProfile,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            size: CanvasSize::Standard,
            profile: AdapterProfile::CANVAS,
        }
    }
}

/// Settings for the embeddable HTML document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    pub size: CanvasSize,
    pub profile: AdapterProfile,
    /// Prefix of the document `<title>`; the token id is appended.
    pub title_prefix: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        HtmlConfig {
            size: CanvasSize::Standard,
            profile: AdapterProfile::HTML,
            title_prefix: "FID Art".to_string(),
        }
    }
}

// --- Metadata Configuration ---

/// Settings for the ERC-721 metadata document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Token name prefix; the token id is appended.
    pub name_prefix: String,
    pub description: String,
    /// Size of the PNG embedded as `image`.
    pub image_size: CanvasSize,
    /// Size of the HTML document embedded as `animation_url`.
    pub animation_size: CanvasSize,
    /// If false, `animation_url` is omitted.
    pub include_animation: bool,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        MetadataConfig {
            name_prefix: "FID Art".to_string(),
            description: "Generative art derived deterministically from a Farcaster ID.".to_string(),
            image_size: CanvasSize::Compact,
            animation_size: CanvasSize::Compact,
            include_animation: true,
        }
    }
}
