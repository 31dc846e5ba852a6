//! One chart axis: domain line, tick marks and labels.

use dioxus::prelude::*;
use gtv_chart::axis::Axis;

#[derive(Props, Clone, PartialEq)]
pub struct AxisGroupProps {
    pub axis: Axis,
}

#[component]
pub fn AxisGroup(props: AxisGroupProps) -> Element {
    let axis = &props.axis;
    let (x2, y2) = axis.tick_line_end();
    let (label_x, label_y) = axis.label_position();
    let dy = axis.label_dy();

    rsx! {
        g {
            class: axis.class,
            transform: axis.transform(),
            fill: "none",
            font_size: "10",
            font_family: "sans-serif",
            text_anchor: axis.label_anchor(),
            path {
                class: "domain",
                stroke: "currentColor",
                d: axis.domain_path(),
            }
            for tick in axis.ticks.iter() {
                g {
                    class: "tick",
                    transform: axis.tick_transform(tick),
                    line {
                        stroke: "currentColor",
                        x2: x2,
                        y2: y2,
                    }
                    text {
                        fill: "currentColor",
                        x: label_x,
                        y: label_y,
                        dy: dy,
                        "{tick.label}"
                    }
                }
            }
        }
    }
}
