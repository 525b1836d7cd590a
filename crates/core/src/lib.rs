//! Dataset model, scales, and chart views for a monthly temperature
//! anomaly heatmap.
//!
//! The pipeline is `parsers::parse_dataset` → `scales::build_scales` →
//! `views::render`, producing [`tempgrid_protocol::RenderCommand`]s that
//! any surface can draw. [`views::Chart`] bundles the three for surfaces
//! that also need hit testing and hover handling.

pub mod config;
pub mod model;
pub mod palette;
pub mod parsers;
pub mod scales;
pub mod svg;
pub mod views;

pub use config::{ChartConfig, ConfigError};
pub use model::{MonthlyRecord, TemperatureDataset};
pub use parsers::{MalformedDatasetError, parse_dataset};
pub use scales::{Scales, build_scales};
pub use views::{Chart, HoverEffect, TooltipContent};
