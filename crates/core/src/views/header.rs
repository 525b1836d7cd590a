use serde::Serialize;
use tempgrid_protocol::{Point, RenderCommand, TextAlign, ThemeToken};

use crate::config::ChartConfig;
use crate::model::TemperatureDataset;

const TITLE_FONT_SIZE: f64 = 18.0;
const SUBTITLE_FONT_SIZE: f64 = 12.0;

/// Title and subtitle text. Hosts with their own `title`/`subtitle` mount
/// points write these directly instead of drawing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartHeader {
    pub title: String,
    pub subtitle: String,
}

pub fn chart_header(dataset: &TemperatureDataset, config: &ChartConfig) -> ChartHeader {
    let years = match dataset.year_range() {
        Some((first, last)) => format!("{first} - {last}"),
        None => "no data".to_string(),
    };
    ChartHeader {
        title: config.title.clone(),
        subtitle: format!(
            "{years}: base temperature {}℃",
            dataset.base_temperature
        ),
    }
}

/// Header text centered over the canvas, in canvas coordinates.
pub fn render_header(header: &ChartHeader, config: &ChartConfig) -> Vec<RenderCommand> {
    let cx = config.canvas_width() / 2.0;
    vec![
        RenderCommand::DrawText {
            position: Point::new(cx, config.padding * 0.35),
            text: header.title.clone(),
            color: ThemeToken::TitleText,
            font_size: TITLE_FONT_SIZE,
            align: TextAlign::Center,
        },
        RenderCommand::DrawText {
            position: Point::new(cx, config.padding * 0.35 + TITLE_FONT_SIZE + 2.0),
            text: header.subtitle.clone(),
            color: ThemeToken::SubtitleText,
            font_size: SUBTITLE_FONT_SIZE,
            align: TextAlign::Center,
        },
    ]
}
