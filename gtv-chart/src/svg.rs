//! Static SVG and HTML output for a built `HeatmapChart`.
//!
//! `render_svg` produces a standalone image where each cell carries a native
//! `<title>` tooltip. `render_page` produces an HTML page with the chart
//! mounted in `#chart`, a `.tooltip` overlay, and the hover script from
//! `assets/js/tooltip.js`.

use std::fmt::{self, Write};

use crate::axis::Axis;
use crate::chart::{HeatmapChart, TextLabel};

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");

/// DOM id of the element the chart is mounted in.
pub const CONTAINER_ID: &str = "chart";

const PAGE_STYLE: &str = "\
body { font-family: system-ui, -apple-system, sans-serif; margin: 0; padding: 8px; }
#chart .chart { margin: 0 auto; }
#chart .tooltip { position: absolute; pointer-events: none; padding: 6px 8px; \
background: rgba(0, 0, 0, 0.8); color: #fff; border-radius: 4px; font-size: 12px; \
line-height: 1.4; text-align: center; }
#chart .x-axis text, #chart .y-axis text { font-size: 10px; }
#chart .y-axis path { stroke: none; }";

/// How cells expose their tooltip text.
#[derive(Clone, Copy, PartialEq, Eq)]
enum CellTooltip {
    /// Native `<title>` child, for standalone SVG files.
    Title,
    /// `data-tooltip` attribute read by the page script.
    DataAttribute,
}

/// Standalone SVG document.
pub fn render_svg(chart: &HeatmapChart) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_svg(&mut out, chart, CellTooltip::Title)?;
    Ok(out)
}

/// Self-contained HTML page with the interactive tooltip.
pub fn render_page(chart: &HeatmapChart) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_page(&mut out, chart)?;
    Ok(out)
}

fn write_page(out: &mut String, chart: &HeatmapChart) -> fmt::Result {
    let g = &chart.geometry;
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{}</title>", escape(&chart.title.text))?;
    writeln!(out, "<style>\n{}\n</style>", PAGE_STYLE)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<div id=\"{}\">", CONTAINER_ID)?;
    writeln!(
        out,
        "<div class=\"chart\" style=\"width: {}px; height: {}px;\">",
        g.width, g.height
    )?;
    write_svg(out, chart, CellTooltip::DataAttribute)?;
    writeln!(out, "</div>")?;
    writeln!(
        out,
        "<div class=\"tooltip\" style=\"display: none; opacity: 0;\" data-offset-x=\"{}\" data-offset-y=\"{}\" data-fade-ms=\"{}\"></div>",
        chart.tooltip.offset_x, chart.tooltip.offset_y, chart.tooltip.fade_ms
    )?;
    writeln!(out, "</div>")?;
    writeln!(out, "<script>\n{}</script>", TOOLTIP_JS)?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_svg(out: &mut String, chart: &HeatmapChart, tooltip: CellTooltip) -> fmt::Result {
    let g = &chart.geometry;
    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        g.width, g.height, g.width, g.height
    )?;

    write_axis(out, &chart.x_axis)?;
    write_label(out, &chart.x_caption)?;
    write_axis(out, &chart.y_axis)?;
    write_label(out, &chart.y_caption)?;
    write_label(out, &chart.title)?;
    write_label(out, &chart.subtitle)?;

    let legend = &chart.legend;
    writeln!(
        out,
        "  <g class=\"legend\" transform=\"{}\">",
        legend.transform()
    )?;
    for swatch in &legend.swatches {
        writeln!(
            out,
            "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            swatch.x,
            swatch.y,
            swatch.size,
            swatch.size,
            escape(&swatch.color)
        )?;
    }
    for label in &legend.labels {
        writeln!(
            out,
            "    <text x=\"{}\" y=\"{}\" fill=\"black\" font-size=\"{}\" text-anchor=\"middle\">{}</text>",
            label.x,
            label.y,
            legend.font_size,
            escape(&label.text)
        )?;
    }
    writeln!(out, "  </g>")?;

    writeln!(out, "  <g class=\"bins\">")?;
    for cell in &chart.cells {
        let rect = format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"",
            cell.x,
            cell.y,
            cell.width,
            cell.height,
            escape(&cell.fill)
        );
        match tooltip {
            CellTooltip::Title => writeln!(
                out,
                "    {}><title>{}</title></rect>",
                rect,
                escape(&cell.tooltip.to_string())
            )?,
            CellTooltip::DataAttribute => writeln!(
                out,
                "    {} data-tooltip=\"{}\"/>",
                rect,
                escape(&cell.tooltip.to_string())
            )?,
        }
    }
    writeln!(out, "  </g>")?;

    writeln!(out, "</svg>")
}

fn write_axis(out: &mut String, axis: &Axis) -> fmt::Result {
    writeln!(
        out,
        "  <g class=\"{}\" transform=\"{}\" fill=\"none\" font-size=\"10\" font-family=\"sans-serif\" text-anchor=\"{}\">",
        axis.class,
        axis.transform(),
        axis.label_anchor()
    )?;
    writeln!(
        out,
        "    <path class=\"domain\" stroke=\"currentColor\" d=\"{}\"/>",
        axis.domain_path()
    )?;
    let (x2, y2) = axis.tick_line_end();
    let (lx, ly) = axis.label_position();
    for tick in &axis.ticks {
        writeln!(
            out,
            "    <g class=\"tick\" transform=\"{}\"><line stroke=\"currentColor\" x2=\"{}\" y2=\"{}\"/><text fill=\"currentColor\" x=\"{}\" y=\"{}\" dy=\"{}\">{}</text></g>",
            axis.tick_transform(tick),
            x2,
            y2,
            lx,
            ly,
            axis.label_dy(),
            escape(&tick.label)
        )?;
    }
    writeln!(out, "  </g>")
}

fn write_label(out: &mut String, label: &TextLabel) -> fmt::Result {
    write!(
        out,
        "  <text text-anchor=\"middle\" transform=\"{}\"",
        label.transform()
    )?;
    if let Some(size) = label.font_size {
        write!(out, " font-size=\"{}\"", size)?;
    }
    writeln!(out, ">{}</text>", escape(&label.text))
}

/// Escape text for use in element content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '\n' => escaped.push_str("&#10;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
