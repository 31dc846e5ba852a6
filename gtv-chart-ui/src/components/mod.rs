//! Dioxus RSX components for the heatmap app.

mod axis_group;
mod chart_container;
mod chart_placeholder;
mod heatmap;
mod legend_group;
mod tooltip_overlay;

pub use axis_group::AxisGroup;
pub use chart_container::ChartContainer;
pub use chart_placeholder::ChartPlaceholder;
pub use heatmap::Heatmap;
pub use legend_group::LegendGroup;
pub use tooltip_overlay::TooltipOverlay;
