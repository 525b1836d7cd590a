use std::collections::HashMap;

use tempgrid_protocol::{Point, RenderCommand};

use crate::config::{ChartConfig, ConfigError};
use crate::model::{MonthlyRecord, TemperatureDataset};
use crate::scales::{Scales, build_scales};
use crate::views::axis::{render_month_axis, render_year_axis};
use crate::views::cells::render_cells;
use crate::views::header::{ChartHeader, chart_header, render_header};
use crate::views::hover::{HoverEffect, on_hover, on_leave};
use crate::views::legend::render_legend;

/// Render the complete chart: header, cell grid, both axes and the legend.
///
/// Header commands use canvas coordinates; everything else is emitted
/// inside a transform that moves the plot origin to `(padding, padding)`.
pub fn render(
    dataset: &TemperatureDataset,
    scales: &Scales,
    config: &ChartConfig,
) -> Vec<RenderCommand> {
    let header = chart_header(dataset, config);
    let mut commands = render_header(&header, config);

    commands.push(RenderCommand::PushTransform {
        translate: config.plot_origin(),
    });
    commands.extend(render_cells(dataset, scales));
    commands.extend(render_year_axis(scales));
    commands.extend(render_month_axis(scales));
    commands.extend(render_legend(scales, dataset.base_temperature, config));
    commands.push(RenderCommand::PopTransform);

    commands
}

/// A loaded dataset together with its scales and layout.
///
/// Owns everything a surface needs to draw once and then answer pointer
/// queries; nothing in here changes after construction.
#[derive(Debug, Clone)]
pub struct Chart {
    dataset: TemperatureDataset,
    scales: Scales,
    config: ChartConfig,
    /// (year, month) -> record index.
    cells: HashMap<(i32, u8), usize>,
}

impl Chart {
    pub fn new(dataset: TemperatureDataset, config: ChartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let scales = build_scales(&dataset, &config);
        let cells = dataset
            .monthly_variance
            .iter()
            .enumerate()
            .map(|(i, r)| ((r.year, r.month), i))
            .collect();
        Ok(Self {
            dataset,
            scales,
            config,
            cells,
        })
    }

    pub fn dataset(&self) -> &TemperatureDataset {
        &self.dataset
    }

    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn record(&self, index: usize) -> Option<&MonthlyRecord> {
        self.dataset.monthly_variance.get(index)
    }

    pub fn header(&self) -> ChartHeader {
        chart_header(&self.dataset, &self.config)
    }

    pub fn render(&self) -> Vec<RenderCommand> {
        render(&self.dataset, &self.scales, &self.config)
    }

    /// Record index under a canvas-space point, if any.
    pub fn cell_at(&self, point: Point) -> Option<usize> {
        let origin = self.config.plot_origin();
        let year = *self.scales.years.invert(point.x - origin.x)?;
        let month_name = *self.scales.months.invert(point.y - origin.y)?;
        let month = self.scales.months.index_of(&month_name)? as u8 + 1;
        self.cells.get(&(year, month)).copied()
    }

    /// Hover effect for the pointer at a canvas-space point: a tooltip over
    /// a cell, or [`HoverEffect::Hide`] over empty space.
    pub fn hover_at(&self, pointer: Point) -> HoverEffect {
        let Some(index) = self.cell_at(pointer) else {
            return on_leave();
        };
        let Some(record) = self.record(index) else {
            return on_leave();
        };
        on_hover(
            record,
            index,
            self.dataset.base_temperature,
            &self.scales,
            &self.config,
            pointer,
        )
    }
}
