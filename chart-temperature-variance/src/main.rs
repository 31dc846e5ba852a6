//! Monthly Global Land Temperature heatmap (1753-2015).
//!
//! Data flow:
//! 1. On mount: fetch the published JSON dataset once.
//! 2. When the dataset arrives: build the positioned `HeatmapChart` scene.
//! 3. Render the scene as SVG inside `#chart`; cell hover handlers drive the
//!    shared tooltip overlay.
//!
//! A failed fetch is logged and nothing is rendered.

use dioxus::prelude::*;
use gtv_chart::HeatmapChart;
use gtv_chart_ui::components::{ChartPlaceholder, Heatmap, TooltipOverlay};
use gtv_chart_ui::state::AppState;
use gtv_data::fetch::fetch_dataset;
use gtv_data::DATASET_URL;
use log::{error, info};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("chart"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Load: fetch the dataset once on mount ───
    use_future(move || async move {
        match fetch_dataset(DATASET_URL).await {
            Ok(dataset) => state.dataset.set(Some(dataset)),
            Err(e) => error!("Failed to load temperature dataset: {}", e),
        }
        state.loading.set(false);
    });

    // ─── Layout: rebuild the scene whenever the dataset or config changes ───
    let chart = use_memo(move || {
        let dataset = state.dataset.read();
        let dataset = dataset.as_ref()?;
        let config = state.config.read();
        match HeatmapChart::build(dataset, &config) {
            Ok(chart) => {
                info!("Rendering {} cells", chart.cells.len());
                Some(chart)
            }
            Err(e) => {
                error!("Cannot lay out heatmap: {}", e);
                None
            }
        }
    });

    // ─── Render ───
    rsx! {
        div {
            style: "font-family: system-ui, -apple-system, sans-serif;",

            if *state.loading.read() {
                ChartPlaceholder {
                    title: state.config.read().title.clone(),
                    height: state.config.read().height,
                }
            } else if let Some(chart) = chart() {
                Heatmap { chart }
                TooltipOverlay {}
            }
        }
    }
}
