use tempgrid_protocol::{Fill, Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::config::ChartConfig;
use crate::scales::Scales;

const TICK_SIZE: f64 = 6.0;
const FONT_SIZE: f64 = 10.0;

/// Absolute temperatures at the legend ticks: the domain ends plus every
/// quantize threshold, shifted by the base temperature.
pub fn legend_ticks(scales: &Scales, base_temperature: f64) -> Vec<f64> {
    let (min, max) = scales.colors.domain();
    std::iter::once(min)
        .chain(scales.colors.thresholds().iter().copied())
        .chain(std::iter::once(max))
        .map(|v| v + base_temperature)
        .collect()
}

/// Color swatch strip under the grid with a temperature axis below it.
/// Plot-local coordinates; the strip starts at the grid's left edge.
pub fn render_legend(scales: &Scales, base_temperature: f64, config: &ChartConfig) -> Vec<RenderCommand> {
    let colors = scales.colors.colors();
    let ticks = legend_ticks(scales, base_temperature);
    let top = config.height + config.legend_gap;
    let bottom = top + config.legend_height;
    let swatch_w = config.legend_width / colors.len().max(1) as f64;
    let mut commands = Vec::with_capacity(colors.len() + ticks.len() * 2 + 3);

    commands.push(RenderCommand::BeginGroup {
        id: "legend".to_string(),
        label: Some("Temperature (℃)".to_string()),
    });

    for (i, color) in colors.iter().enumerate() {
        let label = match (ticks.get(i), ticks.get(i + 1)) {
            (Some(from), Some(to)) => Some(format!("{from:.1}℃ – {to:.1}℃")),
            _ => None,
        };
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(i as f64 * swatch_w, top, swatch_w, config.legend_height),
            fill: Fill::Rgb(*color),
            border_color: Some(ThemeToken::LegendBorder),
            label,
            cell: None,
        });
    }

    commands.push(RenderCommand::DrawLine {
        from: Point::new(0.0, bottom),
        to: Point::new(config.legend_width, bottom),
        color: ThemeToken::AxisLine,
        width: 1.0,
    });

    for (k, value) in ticks.iter().enumerate() {
        let x = k as f64 * swatch_w;
        commands.push(RenderCommand::DrawLine {
            from: Point::new(x, bottom),
            to: Point::new(x, bottom + TICK_SIZE),
            color: ThemeToken::AxisTick,
            width: 1.0,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(x, bottom + TICK_SIZE + FONT_SIZE + 2.0),
            text: format!("{value:.1}"),
            color: ThemeToken::AxisText,
            font_size: FONT_SIZE,
            align: TextAlign::Center,
        });
    }

    commands.push(RenderCommand::EndGroup);
    commands
}
