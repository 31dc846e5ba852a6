//! CSV export of the heatmap cells.
//!
//! Output columns: `year,month,variance,temperature,bucket,color`, one row
//! per monthly record in dataset order.

use gtv_chart::format::to_fixed;
use gtv_chart::HeatmapChart;
use log::info;

use crate::load::load_chart;
use crate::Source;

pub async fn run_export(source: &Source, output: &str) -> anyhow::Result<()> {
    let (_dataset, chart) = load_chart(source).await?;
    let writer = csv::Writer::from_path(output)?;
    let rows = write_cells(&chart, writer)?;
    info!("Exported {} cells to {}", rows, output);
    Ok(())
}

/// Write every cell to `writer`, returning the number of data rows.
pub fn write_cells<W: std::io::Write>(
    chart: &HeatmapChart,
    mut writer: csv::Writer<W>,
) -> anyhow::Result<usize> {
    writer.write_record(["year", "month", "variance", "temperature", "bucket", "color"])?;
    for cell in &chart.cells {
        let record = &cell.record;
        writer.write_record([
            record.year.to_string(),
            record.month.to_string(),
            record.variance.to_string(),
            to_fixed(record.temperature(chart.base_temperature), 3),
            cell.bucket.map(|b| b.to_string()).unwrap_or_default(),
            cell.fill.clone(),
        ])?;
    }
    writer.flush()?;
    Ok(chart.cells.len())
}
