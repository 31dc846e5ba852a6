//! Color legend: swatches with bucket boundary labels underneath.

use dioxus::prelude::*;
use gtv_chart::legend::Legend;

#[derive(Props, Clone, PartialEq)]
pub struct LegendGroupProps {
    pub legend: Legend,
}

#[component]
pub fn LegendGroup(props: LegendGroupProps) -> Element {
    let legend = &props.legend;
    let font_size = legend.font_size;

    rsx! {
        g {
            class: "legend",
            transform: legend.transform(),
            for swatch in legend.swatches.iter() {
                rect {
                    x: swatch.x,
                    y: swatch.y,
                    width: swatch.size,
                    height: swatch.size,
                    fill: swatch.color.clone(),
                }
            }
            for label in legend.labels.iter() {
                text {
                    x: label.x,
                    y: label.y,
                    fill: "black",
                    font_size: font_size,
                    text_anchor: "middle",
                    "{label.text}"
                }
            }
        }
    }
}
