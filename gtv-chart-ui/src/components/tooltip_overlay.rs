//! Floating tooltip that follows the pointer over heatmap cells.

use crate::state::AppState;
use dioxus::prelude::*;

/// Renders the shared `TooltipState`; fades are CSS opacity transitions.
#[component]
pub fn TooltipOverlay() -> Element {
    let state = use_context::<AppState>();
    let tooltip = state.tooltip.read();

    let visibility = if tooltip.is_visible() { "visible" } else { "hidden" };
    let fade = tooltip.fade_ms();
    let style = format!(
        "position: absolute; pointer-events: none; left: {}px; top: {}px; \
         opacity: {}; visibility: {}; transition: opacity {}ms, visibility {}ms; \
         padding: 6px 8px; background: rgba(0, 0, 0, 0.8); color: #fff; \
         border-radius: 4px; font-size: 12px; line-height: 1.4; text-align: center;",
        tooltip.left,
        tooltip.top,
        tooltip.opacity(),
        visibility,
        fade,
        fade
    );
    let lines: Vec<String> = tooltip
        .text
        .as_ref()
        .map(|text| text.lines().iter().map(|l| l.to_string()).collect())
        .unwrap_or_default();

    rsx! {
        div {
            class: "tooltip",
            style: "{style}",
            for (i, line) in lines.into_iter().enumerate() {
                if i > 0 {
                    br {}
                }
                "{line}"
            }
        }
    }
}
