use serde::{Deserialize, Serialize};
use tempgrid_protocol::Point;
use thiserror::Error;

pub const DEFAULT_TITLE: &str = "Monthly Global Land-Surface Temperature";

/// Space below the legend strip reserved for its tick labels.
const LEGEND_AXIS_SPACE: f64 = 40.0;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("`{field}` must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("`tooltip_offset` must be finite")]
    NonFiniteOffset,
}

/// Layout of the chart in abstract pixels.
///
/// Every field has a default, so a partial JSON document only overrides
/// what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Width of the cell grid.
    pub width: f64,
    /// Height of the cell grid.
    pub height: f64,
    /// Margin around the grid; axes and titles live inside it.
    pub padding: f64,
    pub legend_width: f64,
    pub legend_height: f64,
    /// Distance from the bottom of the grid to the top of the legend.
    pub legend_gap: f64,
    /// Tooltip anchor offset from the pointer.
    pub tooltip_offset: Point,
    pub title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 400.0,
            padding: 60.0,
            legend_width: 400.0,
            legend_height: 20.0,
            legend_gap: 50.0,
            tooltip_offset: Point::new(10.0, -28.0),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("padding", self.padding),
            ("legend_width", self.legend_width),
            ("legend_height", self.legend_height),
            ("legend_gap", self.legend_gap),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if !self.tooltip_offset.x.is_finite() || !self.tooltip_offset.y.is_finite() {
            return Err(ConfigError::NonFiniteOffset);
        }
        Ok(())
    }

    /// Top-left corner of the cell grid on the canvas.
    pub fn plot_origin(&self) -> Point {
        Point::new(self.padding, self.padding)
    }

    /// Full canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.width + self.padding * 2.0
    }

    /// Full canvas height, including the legend block below the grid.
    pub fn canvas_height(&self) -> f64 {
        self.height + self.padding * 2.0 + self.legend_gap + self.legend_height + LEGEND_AXIS_SPACE
    }
}
