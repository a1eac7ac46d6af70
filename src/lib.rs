// src/lib.rs

//! `fidart` generates a deterministic piece of art for a Farcaster ID.
//!
//! The seed is the `tokenId` parsed as an integer. From it a linear
//! congruential generator lays nine hand-drawn forms out on a 3x3 grid. The
//! result is available as a raster image (`art`, `rasterizer`), as a
//! self-contained HTML document that redraws it client side (`html`), or
//! wrapped in ERC-721 metadata (`metadata`).

pub mod art;
pub mod color;
pub mod config;
pub mod html;
pub mod metadata;
pub mod random;
pub mod rasterizer;
pub mod seed;
pub mod surface;

pub use art::{generate_art, ArtConfig, Composition};
pub use config::{AdapterProfile, Config, CONFIG};
pub use html::{generate_html_canvas, generate_html_canvas_base64};
pub use random::SeededRandom;
