use tempgrid_protocol::{Point, RenderCommand, TextAlign, ThemeToken};

use crate::scales::Scales;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const FONT_SIZE: f64 = 10.0;
const TITLE_FONT_SIZE: f64 = 12.0;
const YEAR_TICK_EVERY: i32 = 10;

/// Years that get a labelled tick on the bottom axis: those divisible by ten.
pub fn year_ticks(scales: &Scales) -> Vec<i32> {
    scales
        .years
        .domain()
        .iter()
        .copied()
        .filter(|y| y % YEAR_TICK_EVERY == 0)
        .collect()
}

/// Bottom axis along the grid's lower edge, plot-local coordinates.
pub fn render_year_axis(scales: &Scales) -> Vec<RenderCommand> {
    let width = scales.years.extent();
    let y0 = scales.months.extent();
    let ticks = year_ticks(scales);
    let mut commands = Vec::with_capacity(ticks.len() * 2 + 4);

    commands.push(RenderCommand::BeginGroup {
        id: "x-axis".to_string(),
        label: Some("Years".to_string()),
    });

    commands.push(RenderCommand::DrawLine {
        from: Point::new(0.0, y0),
        to: Point::new(width, y0),
        color: ThemeToken::AxisLine,
        width: 1.0,
    });

    for year in ticks {
        let Some(x) = scales.years.center(&year) else {
            continue;
        };
        commands.push(RenderCommand::DrawLine {
            from: Point::new(x, y0),
            to: Point::new(x, y0 + TICK_SIZE),
            color: ThemeToken::AxisTick,
            width: 1.0,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(x, y0 + TICK_SIZE + TICK_PADDING + FONT_SIZE),
            text: year.to_string(),
            color: ThemeToken::AxisText,
            font_size: FONT_SIZE,
            align: TextAlign::Center,
        });
    }

    commands.push(RenderCommand::DrawText {
        position: Point::new(width / 2.0, y0 + TICK_SIZE + TICK_PADDING + FONT_SIZE * 3.0),
        text: "Years".to_string(),
        color: ThemeToken::AxisTitle,
        font_size: TITLE_FONT_SIZE,
        align: TextAlign::Center,
    });

    commands.push(RenderCommand::EndGroup);
    commands
}

/// Left axis with all twelve month names, plot-local coordinates.
pub fn render_month_axis(scales: &Scales) -> Vec<RenderCommand> {
    let height = scales.months.extent();
    let mut commands = Vec::with_capacity(scales.months.domain().len() * 2 + 4);

    commands.push(RenderCommand::BeginGroup {
        id: "y-axis".to_string(),
        label: Some("Months".to_string()),
    });

    commands.push(RenderCommand::DrawLine {
        from: Point::new(0.0, 0.0),
        to: Point::new(0.0, height),
        color: ThemeToken::AxisLine,
        width: 1.0,
    });

    for month in scales.months.domain() {
        let Some(y) = scales.months.center(month) else {
            continue;
        };
        commands.push(RenderCommand::DrawLine {
            from: Point::new(-TICK_SIZE, y),
            to: Point::new(0.0, y),
            color: ThemeToken::AxisTick,
            width: 1.0,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(-(TICK_SIZE + TICK_PADDING), y),
            text: (*month).to_string(),
            color: ThemeToken::AxisText,
            font_size: FONT_SIZE,
            align: TextAlign::Right,
        });
    }

    commands.push(RenderCommand::DrawText {
        position: Point::new(-(TICK_SIZE + TICK_PADDING), -FONT_SIZE),
        text: "Months".to_string(),
        color: ThemeToken::AxisTitle,
        font_size: TITLE_FONT_SIZE,
        align: TextAlign::Right,
    });

    commands.push(RenderCommand::EndGroup);
    commands
}
