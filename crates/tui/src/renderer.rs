use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use tempgrid_core::{Chart, HoverEffect, views::on_leave};
use tempgrid_protocol::{Fill, Point, RenderCommand, TextAlign, ThemeToken};

fn theme_to_color(token: ThemeToken, dark: bool) -> Color {
    match (token, dark) {
        (ThemeToken::Background, true) => Color::Black,
        (ThemeToken::Background, false) => Color::White,
        (ThemeToken::PlotBackground, true) => Color::Rgb(34, 34, 34),
        (ThemeToken::PlotBackground, false) => Color::Rgb(241, 243, 245),
        (ThemeToken::TitleText | ThemeToken::AxisTitle, true) => Color::White,
        (ThemeToken::TitleText | ThemeToken::AxisTitle, false) => Color::Black,
        (ThemeToken::SubtitleText | ThemeToken::AxisText, true) => Color::Gray,
        (ThemeToken::SubtitleText | ThemeToken::AxisText, false) => Color::DarkGray,
        (ThemeToken::AxisLine | ThemeToken::AxisTick | ThemeToken::LegendBorder, _) => {
            Color::DarkGray
        }
        (ThemeToken::HoverHighlight, true) => Color::White,
        (ThemeToken::HoverHighlight, false) => Color::Black,
        (ThemeToken::TooltipBackground, true) => Color::Rgb(38, 38, 38),
        (ThemeToken::TooltipBackground, false) => Color::Rgb(255, 251, 230),
        (ThemeToken::TooltipBorder, _) => Color::Gray,
        (ThemeToken::TooltipText, true) => Color::White,
        (ThemeToken::TooltipText, false) => Color::Black,
    }
}

fn fill_to_color(fill: Fill, dark: bool) -> Color {
    match fill {
        Fill::Rgb(c) => Color::Rgb(c.r, c.g, c.b),
        Fill::Theme(token) => theme_to_color(token, dark),
    }
}

/// Linear mapping between chart canvas coordinates and terminal cells.
#[derive(Debug, Clone, Copy)]
struct CanvasMap {
    area: Rect,
    sx: f64,
    sy: f64,
}

impl CanvasMap {
    fn new(area: Rect, canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            area,
            sx: f64::from(area.width) / canvas_width,
            sy: f64::from(area.height) / canvas_height,
        }
    }

    /// Column offset (relative to the area) for a canvas x.
    fn col(&self, x: f64) -> i32 {
        (x * self.sx).floor() as i32
    }

    fn row(&self, y: f64) -> i32 {
        (y * self.sy).floor() as i32
    }

    /// Canvas point at the center of the terminal cell `(x, y)`, or `None`
    /// outside the mapped area.
    fn to_canvas(&self, x: u16, y: u16) -> Option<Point> {
        let inside = x >= self.area.x
            && x < self.area.x + self.area.width
            && y >= self.area.y
            && y < self.area.y + self.area.height;
        inside.then(|| {
            Point::new(
                (f64::from(x - self.area.x) + 0.5) / self.sx,
                (f64::from(y - self.area.y) + 0.5) / self.sy,
            )
        })
    }

    /// Absolute buffer position for area-relative `(col, row)`, if visible.
    fn cell(&self, col: i32, row: i32) -> Option<(u16, u16)> {
        let col = u16::try_from(col).ok()?;
        let row = u16::try_from(row).ok()?;
        (col < self.area.width && row < self.area.height)
            .then(|| (self.area.x + col, self.area.y + row))
    }

    /// Cells covered by a canvas rect; at least one cell per axis.
    fn span(&self, rect: tempgrid_protocol::Rect) -> (i32, i32, i32, i32) {
        let c0 = self.col(rect.x);
        let r0 = self.row(rect.y);
        let c1 = self.col(rect.x + rect.w).max(c0 + 1);
        let r1 = self.row(rect.y + rect.h).max(r0 + 1);
        (c0, r0, c1, r1)
    }
}

/// Paint a command list into `buf`, followed by the hover highlight.
fn paint(buf: &mut Buffer, map: &CanvasMap, commands: &[RenderCommand], hover: &HoverEffect, dark: bool) {
    let bg = theme_to_color(ThemeToken::Background, dark);
    for y in map.area.top()..map.area.bottom() {
        for x in map.area.left()..map.area.right() {
            buf[(x, y)].set_char(' ').set_bg(bg);
        }
    }

    let mut offsets: Vec<Point> = vec![Point::new(0.0, 0.0)];
    for cmd in commands {
        let offset = offsets.last().copied().unwrap_or(Point::new(0.0, 0.0));
        match cmd {
            RenderCommand::DrawRect { rect, fill, .. } => {
                let color = fill_to_color(*fill, dark);
                let (c0, r0, c1, r1) = map.span(rect.translate(offset));
                for row in r0..r1 {
                    for col in c0..c1 {
                        if let Some(pos) = map.cell(col, row) {
                            buf[pos].set_char(' ').set_bg(color);
                        }
                    }
                }
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                align,
                ..
            } => {
                let p = position.offset(offset);
                let len = text.chars().count() as i32;
                let col = match align {
                    TextAlign::Left => map.col(p.x),
                    TextAlign::Center => map.col(p.x) - len / 2,
                    TextAlign::Right => map.col(p.x) - len,
                };
                let row = map.row(p.y);
                let fg = theme_to_color(*color, dark);
                for (i, ch) in text.chars().enumerate() {
                    if let Some(pos) = map.cell(col + i as i32, row) {
                        buf[pos].set_char(ch).set_fg(fg);
                    }
                }
            }
            RenderCommand::DrawLine {
                from, to, color, ..
            } => {
                let (a, b) = (from.offset(offset), to.offset(offset));
                let fg = theme_to_color(*color, dark);
                if (a.y - b.y).abs() < f64::EPSILON {
                    let row = map.row(a.y);
                    for col in map.col(a.x.min(b.x))..=map.col(a.x.max(b.x)) {
                        if let Some(pos) = map.cell(col, row) {
                            buf[pos].set_char('─').set_fg(fg);
                        }
                    }
                } else if (a.x - b.x).abs() < f64::EPSILON {
                    let col = map.col(a.x);
                    let (r0, r1) = (map.row(a.y.min(b.y)), map.row(a.y.max(b.y)));
                    for row in r0..r1.max(r0 + 1) {
                        if let Some(pos) = map.cell(col, row) {
                            buf[pos].set_char('│').set_fg(fg);
                        }
                    }
                }
            }
            RenderCommand::PushTransform { translate } => {
                offsets.push(offset.offset(*translate));
            }
            RenderCommand::PopTransform => {
                if offsets.len() > 1 {
                    offsets.pop();
                }
            }
            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {}
        }
    }

    if let HoverEffect::Show { highlight, .. } = hover {
        let fg = theme_to_color(ThemeToken::HoverHighlight, dark);
        let (c0, r0, c1, r1) = map.span(*highlight);
        for row in r0..r1 {
            for col in c0..c1 {
                if let Some(pos) = map.cell(col, row) {
                    buf[pos].set_char('▒').set_fg(fg);
                }
            }
        }
    }
}

/// Start of a `len`-long run inside `lo..hi`, at `preferred` when it fits.
/// Otherwise the run flips to the opposite side of `pointer`, and is only
/// clamped when neither side has room.
fn place_span(preferred: i32, pointer: i32, len: i32, lo: i32, hi: i32) -> i32 {
    let fits = |start: i32| start >= lo && start + len <= hi;
    if fits(preferred) {
        return preferred;
    }
    let flipped = if preferred > pointer {
        pointer - len
    } else {
        pointer + 1
    };
    if fits(flipped) {
        flipped
    } else {
        preferred.clamp(lo, (hi - len).max(lo))
    }
}

/// Area for the tooltip box anchored at a canvas point, kept inside
/// `bounds` and off the pointer cell.
fn tooltip_area(
    map: &CanvasMap,
    pointer: (u16, u16),
    anchor: Point,
    lines: &[&str],
    bounds: Rect,
) -> Rect {
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 2;
    let height = lines.len() as u16 + 2;
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    let (w, h) = (i32::from(width), i32::from(height));
    let (px, py) = (i32::from(pointer.0), i32::from(pointer.1));

    let col = i32::from(map.area.x) + map.col(anchor.x);
    let row = i32::from(map.area.y) + map.row(anchor.y);

    let preferred_x = if (col..col + w).contains(&px) { px + 1 } else { col };
    let x = place_span(
        preferred_x,
        px,
        w,
        i32::from(bounds.left()),
        i32::from(bounds.right()),
    );
    // The box may share the pointer's row only while it is clear of its column.
    let preferred_y = if (x..x + w).contains(&px) && (row..row + h).contains(&py) {
        py - h
    } else {
        row
    };
    let y = place_span(
        preferred_y,
        py,
        h,
        i32::from(bounds.top()),
        i32::from(bounds.bottom()),
    );
    Rect::new(x as u16, y as u16, width, height)
}

pub fn render_tui(chart: &Chart, dark: bool) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let commands = chart.render();
    let header = chart.header();
    let config = chart.config();
    let mut hover = on_leave();
    let mut pointer = (0, 0);
    let mut map = CanvasMap::new(Rect::default(), config.canvas_width(), config.canvas_height());

    loop {
        terminal.draw(|frame| {
            let area = frame.area();

            // Header
            let header_area = Rect::new(0, 0, area.width, 1);
            let title = Block::default()
                .title(format!(" {} — {} | q quit ", header.title, header.subtitle))
                .style(Style::default().fg(Color::White).bg(Color::DarkGray));
            frame.render_widget(title, header_area);

            let content_area = Rect::new(0, 1, area.width, area.height.saturating_sub(1));
            map = CanvasMap::new(content_area, config.canvas_width(), config.canvas_height());
            paint(frame.buffer_mut(), &map, &commands, &hover, dark);

            if let HoverEffect::Show {
                tooltip, anchor, ..
            } = &hover
            {
                let lines = [
                    tooltip.heading.as_str(),
                    tooltip.temperature.as_str(),
                    tooltip.variance.as_str(),
                ];
                let popup = tooltip_area(&map, pointer, *anchor, &lines, content_area);
                let bg = theme_to_color(ThemeToken::TooltipBackground, dark);
                Clear.render(popup, frame.buffer_mut());
                let paragraph = Paragraph::new(lines.map(Line::from).to_vec())
                    .style(
                        Style::default()
                            .fg(theme_to_color(ThemeToken::TooltipText, dark))
                            .bg(bg),
                    )
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(
                                Style::default()
                                    .fg(theme_to_color(ThemeToken::TooltipBorder, dark))
                                    .bg(bg),
                            ),
                    );
                frame.render_widget(paragraph, popup);
            }
        })?;

        // Handle input
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Moved => {
                pointer = (mouse.column, mouse.row);
                hover = match map.to_canvas(mouse.column, mouse.row) {
                    Some(point) => chart.hover_at(point),
                    None => on_leave(),
                };
            }
            _ => {}
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempgrid_core::{ChartConfig, MonthlyRecord, TemperatureDataset};

    fn chart() -> Chart {
        let dataset = TemperatureDataset {
            base_temperature: 8.0,
            monthly_variance: vec![
                MonthlyRecord { year: 1800, month: 1, variance: -2.0 },
                MonthlyRecord { year: 1801, month: 1, variance: 2.0 },
            ],
        };
        Chart::new(dataset, ChartConfig::default()).expect("valid chart")
    }

    #[test]
    fn canvas_map_round_trips_cell_centers() {
        // 1120 x 690 canvas onto 112 x 69 cells: ten canvas units per cell.
        let map = CanvasMap::new(Rect::new(0, 1, 112, 69), 1120.0, 690.0);
        assert_eq!(map.col(65.0), 6);
        assert_eq!(map.row(65.0), 6);
        assert_eq!(map.to_canvas(6, 7), Some(Point::new(65.0, 65.0)));
        assert_eq!(map.to_canvas(6, 0), None);
        assert_eq!(map.cell(-1, 0), None);
        assert_eq!(map.cell(3, 2), Some((3, 3)));
    }

    #[test]
    fn paints_cells_and_highlight() {
        let chart = chart();
        let config = chart.config();
        let area = Rect::new(0, 0, 112, 69);
        let map = CanvasMap::new(area, config.canvas_width(), config.canvas_height());
        let mut buf = Buffer::empty(area);

        paint(&mut buf, &map, &chart.render(), &on_leave(), true);
        // Plot origin is (60, 60) → cell (6, 6); the 1800 column is coldest.
        assert_eq!(buf[(7, 7)].bg, Color::Rgb(0x31, 0x36, 0x95));
        // Right half of the grid is the warm 1801 column.
        assert_eq!(buf[(100, 7)].bg, Color::Rgb(0xa5, 0x00, 0x26));

        let hover = chart.hover_at(Point::new(65.0, 65.0));
        assert!(matches!(hover, HoverEffect::Show { index: 0, .. }));
        paint(&mut buf, &map, &chart.render(), &hover, true);
        assert_eq!(buf[(7, 7)].symbol(), "▒");
        assert_ne!(buf[(100, 7)].symbol(), "▒");
    }

    #[test]
    fn tooltip_flips_away_from_edges() {
        let area = Rect::new(0, 1, 40, 20);
        let map = CanvasMap::new(area, 400.0, 200.0);
        let lines = ["1800 - January", "6.00℃", "-2.00℃"];
        // Anchor past the right edge and above the top: the box moves left
        // of the pointer and below it.
        let popup = tooltip_area(&map, (38, 1), Point::new(390.0, -20.0), &lines, area);
        assert_eq!(popup, Rect::new(22, 2, 16, 5));
    }

    #[test]
    fn tooltip_never_covers_pointer_in_rightmost_columns() {
        let dataset = TemperatureDataset {
            base_temperature: 8.66,
            monthly_variance: (1753..=2015)
                .map(|year| MonthlyRecord { year, month: 1, variance: 0.1 })
                .collect(),
        };
        let chart = Chart::new(dataset, ChartConfig::default()).expect("valid chart");
        let config = chart.config();
        let area = Rect::new(0, 1, 112, 63);
        let map = CanvasMap::new(area, config.canvas_width(), config.canvas_height());

        for col in 100..112 {
            let pointer = (col, 8);
            let point = map.to_canvas(col, 8).expect("inside the area");
            let HoverEffect::Show { tooltip, anchor, .. } = chart.hover_at(point) else {
                continue;
            };
            let lines = [
                tooltip.heading.as_str(),
                tooltip.temperature.as_str(),
                tooltip.variance.as_str(),
            ];
            let popup = tooltip_area(&map, pointer, anchor, &lines, area);
            let covers = (popup.left()..popup.right()).contains(&col)
                && (popup.top()..popup.bottom()).contains(&8);
            assert!(!covers, "tooltip {popup:?} covers pointer at column {col}");
            assert!(popup.right() <= area.right());
        }

        let point = map.to_canvas(104, 8).expect("inside the area");
        let HoverEffect::Show { tooltip, anchor, .. } = chart.hover_at(point) else {
            panic!("expected a tooltip over 2012 - January");
        };
        assert_eq!(tooltip.heading, "2012 - January");
        let lines = [
            tooltip.heading.as_str(),
            tooltip.temperature.as_str(),
            tooltip.variance.as_str(),
        ];
        assert_eq!(
            tooltip_area(&map, (104, 8), anchor, &lines, area),
            Rect::new(88, 5, 16, 5)
        );
    }
}
