use tempgrid_protocol::{CellMeta, Fill, Rect, RenderCommand, ThemeToken};

use crate::model::TemperatureDataset;
use crate::scales::Scales;
use crate::views::hover::tooltip_content;

/// One rectangle per record, in plot-local coordinates, drawn over a
/// themed background spanning the whole grid.
///
/// Every rect carries its tooltip text as `label` and a [`CellMeta`], so
/// surfaces can hit-test and expose year/month/temperature without
/// recomputing anything from coordinates.
pub fn render_cells(dataset: &TemperatureDataset, scales: &Scales) -> Vec<RenderCommand> {
    let w = scales.years.bandwidth();
    let h = scales.months.bandwidth();
    let mut commands = Vec::with_capacity(dataset.len() + 3);

    commands.push(RenderCommand::BeginGroup {
        id: "cells".to_string(),
        label: None,
    });
    // Missing months show through as plot background.
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(0.0, 0.0, scales.years.extent(), scales.months.extent()),
        fill: Fill::Theme(ThemeToken::PlotBackground),
        border_color: None,
        label: None,
        cell: None,
    });

    for (index, record) in dataset.monthly_variance.iter().enumerate() {
        let (Some(x), Some(y)) = (scales.x(record.year), scales.y(record.month)) else {
            continue;
        };
        let temperature = record.temperature(dataset.base_temperature);
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(x, y, w, h),
            fill: Fill::Rgb(scales.colors.color(record.variance)),
            border_color: None,
            label: Some(tooltip_content(record, dataset.base_temperature).to_string()),
            cell: Some(CellMeta {
                index,
                year: record.year,
                month_index: record.month - 1,
                temperature,
            }),
        });
    }

    commands.push(RenderCommand::EndGroup);
    commands
}
