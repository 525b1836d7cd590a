use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tempgrid_core::ChartConfig;

use crate::fetch::DEFAULT_URL;

#[derive(Debug, Parser)]
#[command(name = "tempgrid", version, about = "Monthly global temperature anomaly heatmap")]
pub struct CliArgs {
    /// Dataset URL
    #[arg(long, default_value = DEFAULT_URL, value_name = "URL")]
    pub url: String,

    /// Read the dataset from a local file instead of fetching it
    #[arg(long, value_name = "PATH", conflicts_with = "url")]
    pub input: Option<PathBuf>,

    /// Write the chart as SVG and exit
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,

    /// Print render commands as JSON and exit
    #[arg(long, conflicts_with = "svg")]
    pub json: bool,

    /// Chart layout overrides (JSON)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use the light palette
    #[arg(long)]
    pub light: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl CliArgs {
    pub fn log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

/// Chart layout from `path`, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<ChartConfig> {
    let Some(path) = path else {
        return Ok(ChartConfig::default());
    };
    let data = std::fs::read(path)
        .with_context(|| format!("reading chart config {}", path.display()))?;
    let config: ChartConfig = serde_json::from_slice(&data)
        .with_context(|| format!("parsing chart config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
