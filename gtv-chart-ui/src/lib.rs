//! Shared Dioxus components for the temperature variance heatmap.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components that draw a built `HeatmapChart` as SVG
//!   and the hover tooltip overlay

pub mod components;
pub mod state;
