pub mod axis;
pub mod cells;
pub mod chart;
pub mod header;
pub mod hover;
pub mod legend;

pub use chart::{Chart, render};
pub use header::ChartHeader;
pub use hover::{HoverEffect, TooltipContent, on_hover, on_leave, tooltip_content};
