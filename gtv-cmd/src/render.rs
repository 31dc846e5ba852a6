//! Render the heatmap to a file.

use gtv_chart::svg;
use log::info;

use crate::load::load_chart;
use crate::{Format, Source};

pub async fn run_render(source: &Source, output: &str, format: Format) -> anyhow::Result<()> {
    let (_dataset, chart) = load_chart(source).await?;

    let document = match format {
        Format::Html => svg::render_page(&chart)?,
        Format::Svg => svg::render_svg(&chart)?,
    };
    std::fs::write(output, &document)?;

    info!(
        "Wrote {} cells ({:.0}x{:.0}) to {}",
        chart.cells.len(),
        chart.geometry.width,
        chart.geometry.height,
        output
    );
    Ok(())
}
