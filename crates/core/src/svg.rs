//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use tempgrid_protocol::{Fill, RenderCommand, TextAlign, ThemeToken};

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the SVG viewBox dimensions.
/// `dark` selects the color palette.
///
/// Heatmap cells become `<rect class="cell">` elements carrying
/// `data-year`, `data-month` (zero-based) and `data-temp`, with the tooltip
/// text as a `<title>` child. Hovering a cell outlines it via CSS.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 200);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif;font-size:11px">"#,
    ));

    let highlight = resolve_color(ThemeToken::HoverHighlight, dark);
    svg.push_str(&format!(
        "<style>.cell{{stroke:{highlight};stroke-opacity:0}}.cell:hover{{stroke-opacity:1}}</style>",
    ));

    let bg = resolve_color(ThemeToken::Background, dark);
    svg.push_str(&format!(
        r#"<rect width="{width}" height="{height}" fill="{bg}"/>"#,
    ));

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                fill,
                border_color,
                label,
                cell,
            } => {
                let fill = resolve_fill(*fill, dark);
                svg.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}""#,
                    rect.x, rect.y, rect.w, rect.h,
                ));
                if let Some(meta) = cell {
                    svg.push_str(&format!(
                        r#" class="cell" data-year="{}" data-month="{}" data-temp="{}""#,
                        meta.year,
                        meta.month_index,
                        round_temp(meta.temperature),
                    ));
                }
                if let Some(border) = border_color {
                    svg.push_str(&format!(
                        r#" stroke="{}" stroke-width="0.5""#,
                        resolve_color(*border, dark),
                    ));
                }
                svg.push('>');
                if let Some(label) = label {
                    svg.push_str(&format!("<title>{}</title>", escape_xml(label)));
                }
                svg.push_str("</rect>");
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
            } => {
                let stroke = resolve_color(*color, dark);
                svg.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{line_width}"/>"#,
                    from.x, from.y, to.x, to.y,
                ));
            }
            RenderCommand::DrawText {
                text,
                position,
                color,
                font_size,
                align,
            } => {
                let fill = resolve_color(*color, dark);
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                svg.push_str(&format!(
                    r#"<text x="{}" y="{}" fill="{fill}" font-size="{font_size}" text-anchor="{anchor}" dominant-baseline="middle">{}</text>"#,
                    position.x,
                    position.y,
                    escape_xml(text),
                ));
            }
            RenderCommand::PushTransform { translate } => {
                svg.push_str(&format!(
                    r#"<g transform="translate({},{})">"#,
                    translate.x, translate.y,
                ));
            }
            RenderCommand::PopTransform => svg.push_str("</g>"),
            RenderCommand::BeginGroup { id, .. } => {
                svg.push_str(&format!(r#"<g id="{}">"#, escape_xml(id)));
            }
            RenderCommand::EndGroup => svg.push_str("</g>"),
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Temperatures are `base + variance` sums; keep three decimals so the
/// attribute reads like the source data instead of the float sum.
fn round_temp(t: f64) -> f64 {
    (t * 1000.0).round() / 1000.0
}

fn resolve_fill(fill: Fill, dark: bool) -> String {
    match fill {
        Fill::Rgb(color) => color.to_hex(),
        Fill::Theme(token) => resolve_color(token, dark).to_string(),
    }
}

fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    if dark {
        match token {
            ThemeToken::Background => "#181818",
            ThemeToken::PlotBackground => "#222222",
            ThemeToken::TitleText | ThemeToken::AxisTitle => "#ececec",
            ThemeToken::SubtitleText | ThemeToken::AxisText => "#bdbdbd",
            ThemeToken::AxisLine | ThemeToken::AxisTick => "#9e9e9e",
            ThemeToken::LegendBorder | ThemeToken::TooltipBorder => "#303030",
            ThemeToken::HoverHighlight => "#ffffff",
            ThemeToken::TooltipBackground => "#262626",
            ThemeToken::TooltipText => "#ececec",
        }
    } else {
        match token {
            ThemeToken::Background => "#ffffff",
            ThemeToken::PlotBackground => "#f1f3f5",
            ThemeToken::TitleText | ThemeToken::AxisTitle => "#1a1a2e",
            ThemeToken::SubtitleText | ThemeToken::AxisText => "#444455",
            ThemeToken::AxisLine | ThemeToken::AxisTick => "#333333",
            ThemeToken::LegendBorder | ThemeToken::TooltipBorder => "#dee2e6",
            ThemeToken::HoverHighlight => "#000000",
            ThemeToken::TooltipBackground => "#fffbe6",
            ThemeToken::TooltipText => "#1a1a2e",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempgrid_protocol::{CellMeta, Color, Point, Rect};

    #[test]
    fn cell_rect_carries_data_attributes() {
        let commands = vec![RenderCommand::DrawRect {
            rect: Rect::new(10.0, 20.0, 4.0, 33.0),
            fill: Fill::Rgb(Color::rgb(0xa5, 0x00, 0x26)),
            border_color: None,
            label: Some("1753 - January\n7.29℃\n-1.37℃".into()),
            cell: Some(CellMeta {
                index: 0,
                year: 1753,
                month_index: 0,
                temperature: 8.66 + -1.366,
            }),
        }];
        let svg = render_svg(&commands, 800.0, 400.0, false);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"class="cell" data-year="1753" data-month="0" data-temp="7.294""#));
        assert!(svg.contains("#a50026"));
        assert!(svg.contains("<title>1753 - January"));
    }

    #[test]
    fn transforms_become_groups() {
        let commands = vec![
            RenderCommand::PushTransform {
                translate: Point::new(60.0, 60.0),
            },
            RenderCommand::DrawText {
                position: Point::new(0.0, 0.0),
                text: "Years".into(),
                color: ThemeToken::AxisTitle,
                font_size: 12.0,
                align: TextAlign::Center,
            },
            RenderCommand::PopTransform,
        ];
        let svg = render_svg(&commands, 100.0, 100.0, true);
        assert!(svg.contains(r#"<g transform="translate(60,60)">"#));
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains("</text></g></svg>"));
    }

    #[test]
    fn escapes_xml_entities() {
        let commands = vec![RenderCommand::DrawText {
            position: Point::new(0.0, 0.0),
            text: "<b>&'\"".into(),
            color: ThemeToken::TitleText,
            font_size: 18.0,
            align: TextAlign::Left,
        }];
        let svg = render_svg(&commands, 400.0, 100.0, false);
        assert!(svg.contains("&lt;b&gt;&amp;&apos;&quot;"));
    }
}
