//! Browser bridge: the host page fetches the dataset, hands the bytes to
//! [`load_dataset`], writes [`chart_header`] into its title/subtitle mount
//! points, draws [`render_chart`] (or inserts [`render_chart_svg`]) into its
//! container, and forwards pointer events to [`hover_at`] / [`leave`].

use std::sync::Mutex;

use tempgrid_core::svg::render_svg;
use tempgrid_core::views::on_leave;
use tempgrid_core::{Chart, ChartConfig, parse_dataset};
use tempgrid_protocol::Point;
use wasm_bindgen::prelude::*;

static CHART: Mutex<Option<Chart>> = Mutex::new(None);

fn build_chart(data: &[u8]) -> Result<Chart, String> {
    let dataset = parse_dataset(data).map_err(|e| format!("malformed dataset: {e}"))?;
    Chart::new(dataset, ChartConfig::default()).map_err(|e| e.to_string())
}

fn header_json(chart: &Chart) -> Result<String, String> {
    serde_json::to_string(&chart.header()).map_err(|e| e.to_string())
}

fn commands_json(chart: &Chart) -> Result<String, String> {
    serde_json::to_string(&chart.render()).map_err(|e| e.to_string())
}

fn svg(chart: &Chart, dark: bool) -> String {
    let config = chart.config();
    render_svg(
        &chart.render(),
        config.canvas_width(),
        config.canvas_height(),
        dark,
    )
}

fn hover_json(chart: &Chart, x: f64, y: f64) -> Result<String, String> {
    serde_json::to_string(&chart.hover_at(Point::new(x, y))).map_err(|e| e.to_string())
}

fn with_chart<T>(f: impl FnOnce(&Chart) -> Result<T, String>) -> Result<T, JsError> {
    let guard = CHART
        .lock()
        .map_err(|_| JsError::new("chart state poisoned"))?;
    let chart = guard
        .as_ref()
        .ok_or_else(|| JsError::new("no dataset loaded"))?;
    f(chart).map_err(|e| JsError::new(&e))
}

/// Parse the dataset JSON and build the chart. Replaces any previous chart.
#[wasm_bindgen]
pub fn load_dataset(data: &[u8]) -> Result<(), JsError> {
    let chart = build_chart(data).map_err(|e| JsError::new(&e))?;
    let mut guard = CHART
        .lock()
        .map_err(|_| JsError::new("chart state poisoned"))?;
    *guard = Some(chart);
    Ok(())
}

/// `{ "title": ..., "subtitle": ... }`
#[wasm_bindgen]
pub fn chart_header() -> Result<String, JsError> {
    with_chart(header_json)
}

/// Render commands for the whole chart as JSON.
#[wasm_bindgen]
pub fn render_chart() -> Result<String, JsError> {
    with_chart(commands_json)
}

/// The chart as a standalone SVG document.
#[wasm_bindgen]
pub fn render_chart_svg(dark: bool) -> Result<String, JsError> {
    with_chart(|chart| Ok(svg(chart, dark)))
}

/// Hover effect for the pointer at canvas coordinates `(x, y)`, as JSON
/// tagged by `"kind"` (`"show"` or `"hide"`).
#[wasm_bindgen]
pub fn hover_at(x: f64, y: f64) -> Result<String, JsError> {
    with_chart(|chart| hover_json(chart, x, y))
}

/// Hover effect for the pointer leaving the chart.
#[wasm_bindgen]
pub fn leave() -> Result<String, JsError> {
    serde_json::to_string(&on_leave()).map_err(|e| JsError::new(&e.to_string()))
}

/// Number of cells in the loaded chart.
#[wasm_bindgen]
pub fn cell_count() -> Result<usize, JsError> {
    with_chart(|chart| Ok(chart.dataset().len()))
}
