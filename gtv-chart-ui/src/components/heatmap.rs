//! The heatmap SVG: captions, axes, legend and one rect per monthly record.
//!
//! Each cell drives the shared tooltip through the enter / move / leave
//! transitions of `TooltipState`.

use crate::components::{AxisGroup, ChartContainer, LegendGroup};
use crate::state::AppState;
use dioxus::prelude::*;
use gtv_chart::{HeatmapChart, TextLabel};

#[derive(Props, Clone, PartialEq)]
pub struct HeatmapProps {
    pub chart: HeatmapChart,
}

#[component]
pub fn Heatmap(props: HeatmapProps) -> Element {
    let state = use_context::<AppState>();
    let chart = &props.chart;
    let g = chart.geometry;

    let cells = chart.cells.iter().map(|cell| {
        let mut tooltip = state.tooltip;
        let text = cell.tooltip.clone();
        rsx! {
            rect {
                x: cell.x,
                y: cell.y,
                width: cell.width,
                height: cell.height,
                fill: cell.fill.clone(),
                onmouseenter: move |_| {
                    tooltip.write().enter();
                },
                onmousemove: move |evt: MouseEvent| {
                    let point = evt.page_coordinates();
                    tooltip.write().track(text.clone(), point.x, point.y);
                },
                onmouseleave: move |_| {
                    tooltip.write().leave();
                },
            }
        }
    });

    rsx! {
        ChartContainer {
            width: g.width,
            height: g.height,
            svg {
                width: g.width,
                height: g.height,
                AxisGroup { axis: chart.x_axis.clone() }
                ChartText { label: chart.x_caption.clone() }
                AxisGroup { axis: chart.y_axis.clone() }
                ChartText { label: chart.y_caption.clone() }
                ChartText { label: chart.title.clone() }
                ChartText { label: chart.subtitle.clone() }
                LegendGroup { legend: chart.legend.clone() }
                g {
                    class: "bins",
                    {cells}
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ChartTextProps {
    label: TextLabel,
}

/// Centered text placed by transform (title, subtitle, axis captions).
#[component]
fn ChartText(props: ChartTextProps) -> Element {
    let label = &props.label;
    rsx! {
        text {
            text_anchor: "middle",
            transform: label.transform(),
            font_size: label.font_size,
            "{label.text}"
        }
    }
}
