use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
///
/// Data colors (heatmap cells, legend swatches) are not tokens: they are
/// carried as concrete [`Color`](crate::Color)s through [`Fill::Rgb`](crate::Fill).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    PlotBackground,

    TitleText,
    SubtitleText,

    AxisLine,
    AxisTick,
    AxisText,
    AxisTitle,

    LegendBorder,

    HoverHighlight,
    TooltipBackground,
    TooltipBorder,
    TooltipText,
}
