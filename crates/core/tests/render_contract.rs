//! Integration test: parse a dataset fixture, render the full chart, and
//! check the visual output contract through commands and SVG.

use tempgrid_core::palette::PALETTE_SIZE;
use tempgrid_core::svg::render_svg;
use tempgrid_core::views::axis::year_ticks;
use tempgrid_core::{Chart, ChartConfig, HoverEffect, parse_dataset};
use tempgrid_protocol::{CellMeta, Fill, Point, Rect, RenderCommand};

const FIXTURE: &[u8] = include_bytes!("fixtures/global-temperature-sample.json");

fn chart() -> Chart {
    let dataset = parse_dataset(FIXTURE).expect("fixture should parse");
    Chart::new(dataset, ChartConfig::default()).expect("default config is valid")
}

fn cells(cmds: &[RenderCommand]) -> Vec<(Rect, CellMeta)> {
    cmds.iter()
        .filter_map(|c| match c {
            RenderCommand::DrawRect {
                rect,
                cell: Some(meta),
                ..
            } => Some((*rect, *meta)),
            _ => None,
        })
        .collect()
}

#[test]
fn one_cell_per_record_at_band_positions() {
    let chart = chart();
    let cmds = chart.render();
    let cells = cells(&cmds);
    assert_eq!(cells.len(), chart.dataset().len());

    let years = chart.dataset().years();
    let bw = chart.scales().years.bandwidth();
    let bh = chart.scales().months.bandwidth();
    for (rect, meta) in &cells {
        let year_index = years.iter().position(|y| *y == meta.year).expect("year in domain");
        assert_eq!(rect.x, year_index as f64 * bw);
        assert_eq!(rect.y, f64::from(meta.month_index) * bh);
        assert_eq!((rect.w, rect.h), (bw, bh));

        let record = chart.record(meta.index).expect("index points at a record");
        assert_eq!(record.month, meta.month_index + 1);
        assert!((meta.temperature - (8.66 + record.variance)).abs() < 1e-9);
    }
}

#[test]
fn january_is_the_first_row_everywhere() {
    let chart = chart();
    let first = chart.record(0).expect("fixture has records");
    assert_eq!((first.year, first.month), (1753, 1));

    // Top-left cell of the grid, in canvas coordinates.
    let origin = chart.config().plot_origin();
    match chart.hover_at(Point::new(origin.x + 1.0, origin.y + 1.0)) {
        HoverEffect::Show { index, tooltip, .. } => {
            assert_eq!(index, 0);
            assert_eq!(tooltip.heading, "1753 - January");
        }
        HoverEffect::Hide => panic!("expected a tooltip over the first cell"),
    }

    let first_month_label = chart.render().into_iter().find_map(|c| match c {
        RenderCommand::DrawText { text, .. } if text.ends_with("uary") => Some(text),
        _ => None,
    });
    assert_eq!(first_month_label.as_deref(), Some("January"));
}

#[test]
fn bottom_axis_labels_only_decades() {
    let chart = chart();
    assert_eq!(year_ticks(chart.scales()), vec![1760]);
}

#[test]
fn legend_has_one_swatch_per_palette_color() {
    let cmds = chart().render();
    let swatches = cmds
        .iter()
        .filter(|c| {
            matches!(
                c,
                RenderCommand::DrawRect { cell: None, fill: Fill::Rgb(_), .. }
            )
        })
        .count();
    assert_eq!(swatches, PALETTE_SIZE);
}

#[test]
fn svg_exposes_cell_metadata() {
    let chart = chart();
    let config = chart.config();
    let svg = render_svg(
        &chart.render(),
        config.canvas_width(),
        config.canvas_height(),
        false,
    );
    assert_eq!(svg.matches(r#"class="cell""#).count(), chart.dataset().len());
    assert!(svg.contains(r#"data-year="1753" data-month="0""#));
    assert!(svg.contains("Monthly Global Land-Surface Temperature"));
    assert!(svg.contains("1753 - 1762: base temperature 8.66℃"));
}

#[test]
fn rendering_is_deterministic() {
    let a = serde_json::to_string(&chart().render()).expect("commands serialize");
    let b = serde_json::to_string(&chart().render()).expect("commands serialize");
    assert_eq!(a, b);
}
