// src/main.rs

use fidart::art::{self, ArtConfig};
use fidart::config::{AdapterProfile, CanvasSize, Config, CONFIG};
use fidart::{html, metadata};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fidart")]
#[command(about = "Deterministic generative art keyed by Farcaster ID")]
struct Args {
    /// JSON config file (defaults to $FIDART_CONFIG, then built-in defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the art as PNG
    Png {
        #[arg(short, long)]
        token_id: String,
        /// Edge length in pixels (defaults to the configured size of the profile)
        #[arg(short, long)]
        size: Option<u32>,
        #[arg(short, long, value_enum, default_value = "canvas")]
        profile: ProfileArg,
        /// Print a data URL instead of writing PNG bytes
        #[arg(long)]
        data_url: bool,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Emit the self-contained HTML document
    Html {
        #[arg(short, long)]
        token_id: String,
        #[arg(short, long)]
        size: Option<u32>,
        /// Emit base64 instead of markup
        #[arg(long)]
        base64: bool,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the layout (forms, flips, rotations, RNG trace) as JSON
    Layout {
        #[arg(short, long)]
        token_id: String,
        #[arg(short, long)]
        size: Option<u32>,
        #[arg(short, long, value_enum, default_value = "canvas")]
        profile: ProfileArg,
    },
    /// Print ERC-721 metadata JSON
    Metadata {
        #[arg(short, long)]
        token_id: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ProfileArg {
    Canvas,
    Html,
}

impl ProfileArg {
    fn resolve(self, config: &Config) -> AdapterProfile {
        match self {
            ProfileArg::Canvas => config.canvas.profile,
            ProfileArg::Html => config.html.profile,
        }
    }

    /// Edge length used when `--size` is omitted.
    fn default_side(self, config: &Config) -> u32 {
        match self {
            ProfileArg::Canvas => config.canvas.size.side(),
            ProfileArg::Html => config.html.size.side(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => CONFIG.clone(),
    };

    match args.command {
        Command::Png {
            token_id,
            size,
            profile,
            data_url,
            output,
        } => {
            let side = size.unwrap_or_else(|| profile.default_side(&config));
            let profile = profile.resolve(&config);
            let surface = art::render_pixmap(&ArtConfig::new(token_id), &profile, side)?;
            let bytes = if data_url {
                surface.to_data_url()?.into_bytes()
            } else {
                surface.encode_png()?
            };
            emit(output.as_deref(), &bytes)?;
        }
        Command::Html {
            token_id,
            size,
            base64,
            output,
        } => {
            let mut settings = config.html.clone();
            if let Some(side) = size {
                settings.size = CanvasSize::from_side(side);
            }
            let art_config = ArtConfig::new(token_id);
            let text = if base64 {
                html::generate_html_canvas_base64(&art_config, &settings)?
            } else {
                html::generate_html_canvas(&art_config, &settings)?
            };
            emit(output.as_deref(), text.as_bytes())?;
        }
        Command::Layout {
            token_id,
            size,
            profile,
        } => {
            let side = size.unwrap_or_else(|| profile.default_side(&config));
            let composition = art::compose(&ArtConfig::new(token_id), &profile.resolve(&config), side);
            let json = serde_json::to_string_pretty(&composition)
                .context("Failed to serialize layout")?;
            emit(None, json.as_bytes())?;
        }
        Command::Metadata { token_id } => {
            let document = metadata::build_metadata(&ArtConfig::new(token_id), &config)?;
            emit(None, document.to_json_pretty()?.as_bytes())?;
        }
    }

    Ok(())
}

fn emit(output: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}
