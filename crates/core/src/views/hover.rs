use std::fmt;

use serde::Serialize;
use tempgrid_protocol::{Point, Rect};

use crate::config::ChartConfig;
use crate::model::MonthlyRecord;
use crate::scales::Scales;

/// Text shown in the tooltip for one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipContent {
    /// `"<year> - <month name>"`.
    pub heading: String,
    /// Absolute temperature, two decimals.
    pub temperature: String,
    /// Signed deviation from the base temperature, two decimals.
    pub variance: String,
}

impl fmt::Display for TooltipContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.heading, self.temperature, self.variance)
    }
}

/// Visual update a surface applies in response to pointer movement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HoverEffect {
    /// Outline `highlight` (canvas coordinates) at full opacity and show
    /// `tooltip` with its top-left corner at `anchor`.
    Show {
        index: usize,
        highlight: Rect,
        tooltip: TooltipContent,
        anchor: Point,
    },
    /// Clear any highlight and hide the tooltip.
    Hide,
}

/// Tooltip text for a record. Pure.
pub fn tooltip_content(record: &MonthlyRecord, base_temperature: f64) -> TooltipContent {
    let month = record.month_name().unwrap_or("?");
    let sign = if record.variance >= 0.0 { "+" } else { "-" };
    TooltipContent {
        heading: format!("{} - {}", record.year, month),
        temperature: format!("{:.2}℃", record.temperature(base_temperature)),
        variance: format!("{sign}{:.2}℃", record.variance.abs()),
    }
}

/// Pointer entered the cell of `record` (dataset index `index`).
///
/// `pointer` is in canvas coordinates; the tooltip is anchored at a fixed
/// offset from it so it never sits under the pointer. A record outside the
/// scales' domain cannot have a cell and yields [`HoverEffect::Hide`].
pub fn on_hover(
    record: &MonthlyRecord,
    index: usize,
    base_temperature: f64,
    scales: &Scales,
    config: &ChartConfig,
    pointer: Point,
) -> HoverEffect {
    let (Some(x), Some(y)) = (scales.x(record.year), scales.y(record.month)) else {
        return HoverEffect::Hide;
    };
    let highlight = Rect::new(x, y, scales.years.bandwidth(), scales.months.bandwidth())
        .translate(config.plot_origin());
    HoverEffect::Show {
        index,
        highlight,
        tooltip: tooltip_content(record, base_temperature),
        anchor: pointer.offset(config.tooltip_offset),
    }
}

/// Pointer left the cell grid.
pub fn on_leave() -> HoverEffect {
    HoverEffect::Hide
}
