mod cli;
mod fetch;
mod renderer;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tempgrid_core::Chart;
use tempgrid_core::svg::render_svg;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, load_config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(args.config.as_deref())?;

    let loaded = match &args.input {
        Some(path) => fetch::load_file(path),
        None => fetch::load(&args.url).await,
    };
    let dataset = match loaded {
        Ok(dataset) => dataset,
        Err(e) => {
            // A failed load is terminal: nothing is drawn.
            tracing::error!(error = %e, "failed to load dataset");
            std::process::exit(1);
        }
    };

    let chart = Chart::new(dataset, config)?;
    tracing::info!(records = chart.dataset().len(), "chart ready");

    if let Some(path) = &args.svg {
        let config = chart.config();
        let svg = render_svg(
            &chart.render(),
            config.canvas_width(),
            config.canvas_height(),
            !args.light,
        );
        std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote SVG");
        return Ok(());
    }

    if args.json {
        let json = serde_json::to_string(&chart.render())?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        return Ok(());
    }

    renderer::render_tui(&chart, !args.light)
}
