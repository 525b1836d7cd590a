use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::{Color, Point, Rect};

/// Fill for a rectangle: either a theme token or a concrete data color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    Theme(ThemeToken),
    Rgb(Color),
}

/// Metadata attached to a heatmap cell so surfaces can expose it
/// (SVG `data-*` attributes, hover lookup) without reading coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellMeta {
    /// Index of the record in the dataset.
    pub index: usize,
    pub year: i32,
    /// Zero-based month (January = 0).
    pub month_index: u8,
    /// Absolute temperature in ℃ (base + variance).
    pub temperature: f64,
}

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` for the whole chart. Renderers
/// consume this list sequentially — each command carries all the data it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle, optionally with a tooltip-style label and
    /// cell metadata (for hit-testing and data attributes).
    DrawRect {
        rect: Rect,
        fill: Fill,
        border_color: Option<ThemeToken>,
        label: Option<String>,
        cell: Option<CellMeta>,
    },

    /// Draw a text string at a position.
    DrawText {
        position: Point,
        text: String,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
    },

    /// Push a translation (applied to all subsequent commands until the
    /// matching `PopTransform`).
    PushTransform { translate: Point },

    /// Pop the most recent transform.
    PopTransform,

    /// Begin a logical group (plot, axis, legend). Renderers may use this
    /// for layer separation or accessibility.
    BeginGroup { id: String, label: Option<String> },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_serialize_with_cell_metadata() {
        let cmd = RenderCommand::DrawRect {
            rect: Rect::new(0.0, 0.0, 3.8, 33.3),
            fill: Fill::Rgb(Color::rgb(0x31, 0x36, 0x95)),
            border_color: None,
            label: None,
            cell: Some(CellMeta {
                index: 0,
                year: 1753,
                month_index: 0,
                temperature: 7.34,
            }),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"year\":1753"));
        assert!(json.contains("\"month_index\":0"));
        let back: Result<RenderCommand, _> = serde_json::from_str(&json);
        assert!(matches!(
            back,
            Ok(RenderCommand::DrawRect { cell: Some(CellMeta { year: 1753, .. }), .. })
        ));
    }
}
