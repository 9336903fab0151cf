use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{error, info};
use std::path::PathBuf;
use vgsales_treemap::{
    async_api, Canvas, ChartState, RenderConfig, SourceConfig, DATASET_URL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Complete page with heading and chart
    Html,
    /// Bare `<svg>` element, or the placeholder paragraph when loading failed
    Svg,
}

/// Render the video game sales treemap.
#[derive(Debug, Parser)]
#[command(name = "vgsales-treemap", version, about)]
struct Args {
    /// Dataset location (http(s) URL, file:// URL or local path)
    #[arg(long, default_value = DATASET_URL)]
    url: String,

    /// Write output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    #[arg(long, default_value_t = Canvas::default().width)]
    width: u32,

    #[arg(long, default_value_t = Canvas::default().height)]
    height: u32,

    /// Request timeout; the transport default applies when omitted
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Start tooltip breadcrumbs with the dataset's root name
    #[arg(long)]
    breadcrumb_root: bool,

    /// Print the SHA-256 of the rendered SVG to stderr
    #[arg(long)]
    digest: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let render = RenderConfig {
        canvas: Canvas {
            width: args.width,
            height: args.height,
        },
        breadcrumb_root: args.breadcrumb_root,
        ..Default::default()
    };
    render.validate()?;
    let source = SourceConfig {
        timeout_ms: args.timeout_ms,
        ..Default::default()
    };

    let chart = async_api::load_chart(args.url.clone(), source, render).await;

    let output = match args.format {
        Format::Html => chart.to_html(),
        Format::Svg => chart.to_fragment(),
    };

    if args.digest {
        if let ChartState::Ready(scene) = chart.state() {
            eprintln!("sha256 {}", scene.fingerprint());
        }
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {} bytes to {}", output.len(), path.display());
        }
        None => print!("{}", output),
    }

    if let ChartState::Failed(err) = chart.state() {
        error!("failed to load {}: {}", args.url, err);
        std::process::exit(1);
    }
    Ok(())
}
