//! Chart model for the monthly temperature variance heatmap.
//!
//! Everything here is pure computation: `HeatmapChart::build` turns a
//! `Dataset` into a fully positioned scene (cells, axes, legend, captions)
//! that the static writer in `svg` and the Dioxus components both draw.

pub mod axis;
pub mod chart;
pub mod config;
pub mod format;
pub mod geometry;
pub mod legend;
pub mod scale;
pub mod svg;
pub mod tooltip;

pub use chart::{Cell, ChartError, HeatmapChart, TextLabel};
pub use config::ChartConfig;
pub use geometry::Geometry;
