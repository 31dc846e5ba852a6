//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use gtv_chart::tooltip::TooltipState;
use gtv_chart::ChartConfig;
use gtv_data::Dataset;

/// Shared state for the heatmap app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Dataset (None until the fetch completes)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the fetch is still in flight
    pub loading: Signal<bool>,
    /// Layout and palette settings
    pub config: Signal<ChartConfig>,
    /// Hover tooltip, driven by the cell mouse handlers
    pub tooltip: Signal<TooltipState>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        let config = ChartConfig::default();
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            tooltip: Signal::new(TooltipState::new(config.tooltip.clone())),
            config: Signal::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
