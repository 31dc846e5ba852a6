//! Placeholder shown in `#chart` until the dataset has loaded.

use dioxus::prelude::*;

/// Reserves the chart's height so the page does not jump once cells render.
#[component]
pub fn ChartPlaceholder(title: String, height: f64) -> Element {
    rsx! {
        div {
            class: "chart-placeholder",
            style: "{placeholder_style(height)}",
            h2 { style: "margin: 0; font-size: 16px; color: #333;", "{title}" }
            span { "Loading monthly variance..." }
        }
    }
}

fn placeholder_style(height: f64) -> String {
    format!(
        "display: flex; flex-direction: column; justify-content: center; align-items: center; \
         gap: 8px; min-height: {}px; color: #666;",
        height.max(0.0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_reserves_chart_height() {
        assert!(placeholder_style(600.0).contains("min-height: 600px;"));
        assert!(placeholder_style(-10.0).contains("min-height: 0px;"));
    }
}
