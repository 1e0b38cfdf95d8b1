//! Temperature heatmap chart generator.
//!
//! Fetches the monthly global land-surface temperature dataset (one JSON
//! document) and renders it as an SVG heatmap with axes, legend, and hover
//! tooltips. Optionally rasterizes the chart to PNG.

mod fetch;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use heatmap_common::Dataset;
use renderer::{rasterize, render_chart, ChartLayout};

use fetch::{DatasetFetcher, FetchConfig};

const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Parser, Debug)]
#[command(name = "chartgen")]
#[command(about = "Render the global temperature heatmap chart")]
struct Args {
    /// Dataset URL
    #[arg(long, env = "DATASET_URL", default_value = DEFAULT_DATASET_URL)]
    url: String,

    /// Read the dataset from a local JSON file instead of fetching
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "heatmap.svg")]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Chart width in pixels
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Chart height in pixels
    #[arg(long, default_value = "720")]
    height: u32,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Maximum fetch retry attempts
    #[arg(long, default_value = "3")]
    max_retries: u32,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Svg,
    Png,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let dataset = load_dataset(&args).await?;
    info!(
        readings = dataset.len(),
        base_temperature = dataset.base_temperature,
        "dataset loaded"
    );

    let layout = ChartLayout::new(f64::from(args.width), f64::from(args.height));
    let svg = render_chart(&dataset, &layout).context("failed to render chart")?;

    match args.format {
        OutputFormat::Svg => {
            std::fs::write(&args.output, svg.as_bytes())
                .with_context(|| format!("failed to write {}", args.output.display()))?;
        }
        OutputFormat::Png => {
            let png =
                rasterize(&svg, args.width, args.height).context("failed to rasterize chart")?;
            std::fs::write(&args.output, &png)
                .with_context(|| format!("failed to write {}", args.output.display()))?;
        }
    }

    info!(output = %args.output.display(), "chart written");
    Ok(())
}

async fn load_dataset(args: &Args) -> Result<Dataset> {
    match &args.input {
        Some(path) => Dataset::from_file(path)
            .with_context(|| format!("failed to load dataset from {}", path.display())),
        None => {
            let config = FetchConfig {
                request_timeout: Duration::from_secs(args.timeout_secs),
                max_retries: args.max_retries,
                ..FetchConfig::default()
            };
            let fetcher = DatasetFetcher::new(config)?;
            fetcher
                .fetch(&args.url)
                .await
                .context("failed to fetch dataset")
        }
    }
}
