// src/html/tests.rs

use super::*;
use crate::art::compose;
use crate::config::{CanvasSize, RingStyle};
use crate::random::{INCREMENT, MODULUS, MULTIPLIER};
use boa_engine::{Context, Source};
use serde_json::Value;
use std::f64::consts::FRAC_PI_2;
use test_log::test;

/// Minimal DOM and 2D context for the inline script. Each `save`/`restore`
/// pair is one placed cell; the first `fillRect` inside it is the base square.
const RECORDING_CONTEXT: &str = r#"
var cells = [];
var current = null;
var ctx = {
  fillStyle: null, strokeStyle: null, lineWidth: 1,
  save: function () { current = { tx: null, ty: null, angle: 0, scaleX: 1, base: null }; },
  restore: function () { cells.push(current); current = null; },
  translate: function (x, y) { current.tx = x; current.ty = y; },
  rotate: function (a) { current.angle = a; },
  scale: function (sx, sy) { current.scaleX = sx; },
  fillRect: function () {
    if (current !== null && current.base === null) { current.base = this.fillStyle; }
  },
  beginPath: function () {}, moveTo: function () {}, lineTo: function () {},
  arc: function () {}, closePath: function () {}, fill: function () {}, stroke: function () {}
};
var document = {
  getElementById: function (id) {
    if (id === "scene") { return { textContent: SCENE_TEXT }; }
    return { getContext: function () { return ctx; } };
  }
};
"#;

fn scene_of(html: &str) -> Value {
    let open = r#"<script type="application/json" id="scene">"#;
    let start = html.find(open).expect("scene block") + open.len();
    let len = html[start..].find("</script>").expect("scene end");
    serde_json::from_str(&html[start..start + len]).expect("scene JSON")
}

/// Runs the document's inline script and returns one record per drawn cell.
fn run_inline_script(html: &str) -> Vec<Value> {
    let open = r#"<script type="application/json" id="scene">"#;
    let start = html.find(open).expect("scene block") + open.len();
    let len = html[start..].find("</script>").expect("scene end");
    let scene_text = serde_json::to_string(&html[start..start + len]).unwrap();

    let script_start = html.rfind("<script>").expect("inline script") + "<script>".len();
    let script_len = html[script_start..].find("</script>").expect("script end");
    let script = &html[script_start..script_start + script_len];

    let code = format!(
        "{}\nvar SCENE_TEXT = {};\n{}\nJSON.stringify(cells);",
        RECORDING_CONTEXT, scene_text, script
    );
    let mut context = Context::default();
    let result = context
        .eval(Source::from_bytes(&code))
        .expect("inline script runs");
    let json = result
        .to_string(&mut context)
        .expect("recorded cells as string")
        .to_std_string_escaped();
    serde_json::from_str(&json).expect("recorded cells JSON")
}

#[test]
fn document_is_self_contained() {
    let html = generate_html_canvas(&ArtConfig::new("196328"), &HtmlConfig::default()).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<canvas id="art" width="600" height="600">"#));
    assert!(!html.contains("http://"));
    assert!(!html.contains("https://"));
    assert!(!html.contains(" src="));
    assert!(!html.contains("{{"));
}

#[test]
fn scene_carries_seed_profile_and_tables() {
    let html = generate_html_canvas(&ArtConfig::new("196328"), &HtmlConfig::default()).unwrap();
    let scene = scene_of(&html);
    assert_eq!(scene["seed"], 196_328);
    assert_eq!(scene["side"], 600);
    assert_eq!(scene["background"], BACKGROUND.hex);
    assert_eq!(scene["profile"]["grid_fraction"], 0.55);
    assert_eq!(scene["profile"]["forms_placed"], 9);
    assert_eq!(scene["profile"]["ring_style"], "stroked");
    assert_eq!(scene["palette"], serde_json::to_value(PALETTE).unwrap());
    assert_eq!(scene["forms"], serde_json::to_value(FORMS).unwrap());
}

#[test]
fn script_uses_the_same_recurrence() {
    let html = generate_html_canvas(&ArtConfig::new("1"), &HtmlConfig::default()).unwrap();
    let step = format!(
        "(this.state * {} + {}) % {}",
        MULTIPLIER as i64, INCREMENT as i64, MODULUS as i64
    );
    assert!(html.contains(&step), "script recurrence drifted from SeededRandom");
    assert!(html.contains(&format!("rng.nextInt({})", MODULUS as i64)));
}

#[test]
fn inline_script_places_the_same_shapes_as_compose() {
    let capped = HtmlConfig {
        size: CanvasSize::Compact,
        profile: AdapterProfile::CANVAS,
        ..HtmlConfig::default()
    };
    for settings in [HtmlConfig::default(), capped] {
        for token_id in ["0", "1", "42", "196328", "-100"] {
            let config = ArtConfig::new(token_id);
            let html = generate_html_canvas(&config, &settings).unwrap();
            let cells = run_inline_script(&html);
            let composition = compose(&config, &settings.profile, settings.size.side());

            assert_eq!(cells.len(), composition.shapes.len(), "tokenId {}", token_id);
            for (cell, shape) in cells.iter().zip(&composition.shapes) {
                let at = format!("tokenId {} cell ({}, {})", token_id, shape.row, shape.col);
                let tx = cell["tx"].as_f64().unwrap();
                let ty = cell["ty"].as_f64().unwrap();
                assert!((tx - shape.center.0).abs() < 1e-9, "{}: x {}", at, tx);
                assert!((ty - shape.center.1).abs() < 1e-9, "{}: y {}", at, ty);
                let turns = (cell["angle"].as_f64().unwrap() / FRAC_PI_2).round();
                assert_eq!(turns, shape.quarter_turns as f64, "{}", at);
                assert_eq!(cell["scaleX"].as_f64(), Some(shape.scale_x), "{}", at);
                assert_eq!(cell["base"], shape.palette[0].hex, "{}", at);
            }
        }
    }
}

#[test]
fn oversized_token_id_seeds_zero_in_scene() {
    let html = generate_html_canvas(
        &ArtConfig::new("99999999999999999999999"),
        &HtmlConfig::default(),
    )
    .unwrap();
    assert_eq!(scene_of(&html)["seed"], 0);
}

#[test]
fn token_zero_and_garbage_seed_zero() {
    for token_id in ["0", "abc"] {
        let html = generate_html_canvas(&ArtConfig::new(token_id), &HtmlConfig::default()).unwrap();
        assert_eq!(scene_of(&html)["seed"], 0);
    }
}

#[test]
fn base64_round_trip_is_lossless() {
    let settings = HtmlConfig {
        title_prefix: "Kunstwerk ✦ 芸術".to_string(),
        ..HtmlConfig::default()
    };
    let config = ArtConfig::new("42");
    let html = generate_html_canvas(&config, &settings).unwrap();
    assert!(html.contains("芸術"));
    let encoded = generate_html_canvas_base64(&config, &settings).unwrap();
    assert_eq!(decode_html_base64(&encoded).unwrap(), html);
}

#[test]
fn data_url_wraps_base64() {
    let config = ArtConfig::new("7");
    let url = html_data_url(&config, &HtmlConfig::default()).unwrap();
    let payload = url.strip_prefix("data:text/html;base64,").unwrap();
    assert_eq!(
        decode_html_base64(payload).unwrap(),
        generate_html_canvas(&config, &HtmlConfig::default()).unwrap()
    );
}

#[test]
fn token_id_is_escaped_in_title() {
    let html =
        generate_html_canvas(&ArtConfig::new("<script>alert(1)</script>"), &HtmlConfig::default())
            .unwrap();
    assert!(html.contains("<title>FID Art · #&lt;script&gt;alert(1)&lt;/script&gt;</title>"));
    assert!(!html.contains("alert(1)</script>"));
}

#[test]
fn placeholder_text_in_token_id_is_not_expanded() {
    let html = generate_html_canvas(&ArtConfig::new("{{SIDE}}"), &HtmlConfig::default()).unwrap();
    assert!(html.contains("<title>FID Art · #{{SIDE}}</title>"));
}

#[test]
fn size_and_profile_follow_settings() {
    let settings = HtmlConfig {
        size: CanvasSize::Compact,
        profile: AdapterProfile {
            ring_style: RingStyle::Filled,
            ..AdapterProfile::HTML
        },
        ..HtmlConfig::default()
    };
    let html = generate_html_canvas(&ArtConfig::new("3"), &settings).unwrap();
    assert!(html.contains(r#"width="450" height="450""#));
    let scene = scene_of(&html);
    assert_eq!(scene["side"], 450);
    assert_eq!(scene["profile"]["ring_style"], "filled");
}

#[test]
fn invalid_base64_is_an_error() {
    assert!(decode_html_base64("***").is_err());
}
