//! Fixed-size wrapper around the chart SVG.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Chart width in pixels
    pub width: f64,
    /// Chart height in pixels
    pub height: f64,
    pub children: Element,
}

/// A `div.chart` sized to the computed chart geometry.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "width: {}px; height: {}px; margin: 0 auto;",
        props.width, props.height
    );

    rsx! {
        div {
            class: "chart",
            style: "{style}",
            {props.children}
        }
    }
}
