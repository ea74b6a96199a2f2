//! Aurora map renderer.
//!
//! Reads an OVATION aurora activity feed (file or URL), renders it onto a
//! 1024x512 world base map and writes a PNG:
//! - Continuous green-to-red ramp or banded palette
//! - Optional legend image
//! - Optional JSON render summary on stdout

mod config;
mod feed;

use std::path::PathBuf;

use anyhow::{Context, Result};
use aurora_common::utc_date_string;
use chrono::Utc;
use clap::Parser;
use renderer::legend::render_legend;
use renderer::{FileBaseImageLoader, FilePngWriter, ImageWriter, MapRenderer, MappingMode, RenderSummary};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use config::MapConfig;
use feed::FeedSource;

const LEGEND_WIDTH: u32 = 256;
const LEGEND_HEIGHT: u32 = 16;

#[derive(Parser, Debug)]
#[command(name = "aurora-map", version)]
#[command(about = "Render an aurora activity feed onto a world base map")]
struct Args {
    /// Activity feed file or http(s) URL
    #[arg(short, long)]
    feed: Option<String>,

    /// Base map image (1024x512)
    #[arg(short, long)]
    basemap: Option<PathBuf>,

    /// Output PNG path (default: <output_dir>/aurora-map-<timestamp>.png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Color mapping mode: continuous or banded
    #[arg(short, long)]
    mode: Option<MappingMode>,

    /// YAML configuration file
    #[arg(short, long, env = "AURORA_CONFIG")]
    config: Option<PathBuf>,

    /// Also write a legend PNG for the selected mode
    #[arg(long)]
    legend: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "AURORA_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Print a JSON render summary to stdout
    #[arg(long)]
    summary: bool,
}

/// Printed with `--summary`.
#[derive(Debug, Serialize)]
struct RenderReport {
    output: PathBuf,
    rendered_at: String,
    renderer_version: &'static str,
    #[serde(flatten)]
    summary: RenderSummary,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.json_logs)?;

    let config = load_config(&args)?;
    config.validate().context("Invalid configuration")?;

    let feed = config
        .feed
        .as_deref()
        .context("No activity feed given, pass --feed or set AURORA_FEED")?;
    let source = FeedSource::parse(feed);
    info!(source = %source, mode = %config.mode, "Starting aurora map render");

    let raw = feed::read_feed(&source, config.fetch_timeout()).await?;

    let rendered_at = Utc::now();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.output_path(&rendered_at));

    let renderer = MapRenderer::new(config.mode);
    let loader = FileBaseImageLoader::new(&config.basemap);
    let mut writer = FilePngWriter::new(&output);
    let rendered = tokio::task::spawn_blocking(move || renderer.render(&raw, &loader, &mut writer))
        .await
        .context("Render task failed")?
        .with_context(|| format!("Failed to render map to {}", output.display()))?;

    info!(
        output = %rendered.handle.display(),
        rendered_at = %utc_date_string(&rendered_at),
        "Map written"
    );

    if let Some(legend_path) = &args.legend {
        let legend = render_legend(config.mode, LEGEND_WIDTH, LEGEND_HEIGHT);
        FilePngWriter::new(legend_path)
            .write(&legend)
            .with_context(|| format!("Failed to write legend to {}", legend_path.display()))?;
        info!(path = %legend_path.display(), "Legend written");
    }

    if args.summary {
        let report = RenderReport {
            output: rendered.handle,
            rendered_at: utc_date_string(&rendered_at),
            renderer_version: renderer::VERSION,
            summary: rendered.summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let builder = fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), log_level))
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result
        .map_err(anyhow::Error::msg)
        .context("Failed to initialize logging")
}

/// `RUST_LOG` directives win over `--log-level` when they parse.
fn log_filter(rust_log: Option<&str>, log_level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(log_level))
}

/// Defaults, then config file, then environment, then flags.
fn load_config(args: &Args) -> Result<MapConfig> {
    let config = match &args.config {
        Some(path) => MapConfig::from_file(path)?,
        None => MapConfig::default(),
    };

    Ok(apply_flags(config.apply_env(), args))
}

fn apply_flags(mut config: MapConfig, args: &Args) -> MapConfig {
    if let Some(feed) = &args.feed {
        config.feed = Some(feed.clone());
    }
    if let Some(basemap) = &args.basemap {
        config.basemap = basemap.clone();
    }
    if let Some(mode) = args.mode {
        config.mode = mode;
    }

    config
}
