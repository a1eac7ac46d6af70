// src/html.rs

//! The embeddable HTML adapter.
//!
//! Produces a self-contained document that redraws the art client side when
//! opened. The inline script carries its own copy of the generator recurrence,
//! shuffle and layout, and reads everything else (palette, profile constants
//! and the form geometry table) from a JSON scene block serialized from the
//! same Rust tables the raster adapter draws with. The document loads no
//! external resources.

use crate::art::forms::{Form, FORMS};
use crate::art::ArtConfig;
use crate::color::{PaletteColor, BACKGROUND, PALETTE};
use crate::config::{AdapterProfile, HtmlConfig};
use anyhow::{Context, Result};
use base64::Engine;
use log::debug;
use serde::Serialize;

#[cfg(test)]
mod tests;

const TEMPLATE: &str = include_str!("html/template.html");

/// Everything the inline script needs, embedded as JSON.
#[derive(Debug, Serialize)]
struct Scene<'a> {
    seed: i64,
    side: u32,
    background: PaletteColor,
    palette: &'a [PaletteColor],
    profile: &'a AdapterProfile,
    forms: &'a [Form],
}

/// Returns the HTML document for `config`.
pub fn generate_html_canvas(config: &ArtConfig, settings: &HtmlConfig) -> Result<String> {
    let side = settings.size.side();
    let scene = Scene {
        seed: config.resolved_seed(),
        side,
        background: BACKGROUND,
        palette: &PALETTE,
        profile: &settings.profile,
        forms: &FORMS,
    };
    let scene_json = serde_json::to_string(&scene)
        .context("Failed to serialize scene for HTML document")?
        // Keep the JSON from closing its <script> element early.
        .replace("</", "<\\/");

    let title = format!("{} · #{}", settings.title_prefix, config.token_id);

    // Title goes last so user text is never re-scanned for placeholders.
    let html = TEMPLATE
        .replace("{{SCENE_JSON}}", &scene_json)
        .replace("{{SIDE}}", &side.to_string())
        .replace("{{BACKGROUND}}", BACKGROUND.hex)
        .replace("{{TITLE}}", &escape_html(&title));

    debug!(
        "Generated HTML document for tokenId '{}' ({} bytes, {}x{})",
        config.token_id,
        html.len(),
        side,
        side
    );
    Ok(html)
}

/// Returns the HTML document, base64 encoded.
pub fn generate_html_canvas_base64(config: &ArtConfig, settings: &HtmlConfig) -> Result<String> {
    let html = generate_html_canvas(config, settings)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(html.as_bytes()))
}

/// Returns `data:text/html;base64,...` for the document.
pub fn html_data_url(config: &ArtConfig, settings: &HtmlConfig) -> Result<String> {
    Ok(format!(
        "data:text/html;base64,{}",
        generate_html_canvas_base64(config, settings)?
    ))
}

/// Decodes a base64 HTML payload back to text.
pub fn decode_html_base64(encoded: &str) -> Result<String> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .context("HTML payload is not valid base64")?;
    String::from_utf8(bytes).context("HTML payload is not valid UTF-8")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
