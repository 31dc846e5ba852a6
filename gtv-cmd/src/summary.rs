//! Dataset extents and legend boundaries.

use gtv_chart::format::to_fixed;
use gtv_chart::legend::boundary_label;
use gtv_chart::HeatmapChart;
use gtv_data::Dataset;
use log::info;

use crate::load::load_chart;
use crate::Source;

pub async fn run_summary(source: &Source) -> anyhow::Result<()> {
    let (dataset, chart) = load_chart(source).await?;
    for line in summarize(&dataset, &chart) {
        info!("{}", line);
    }
    Ok(())
}

pub fn summarize(dataset: &Dataset, chart: &HeatmapChart) -> Vec<String> {
    let g = &chart.geometry;
    let (lo, hi) = chart.color_scale.domain();
    let boundaries: Vec<String> = (0..=chart.color_scale.range().len())
        .map(|k| boundary_label(&chart.color_scale, k))
        .collect();

    vec![
        format!("Records: {}", dataset.len()),
        format!("Years: {}-{}", g.min_year, g.max_year - 1),
        format!("Base temperature: {}°C", dataset.base_temperature),
        format!("Variance: {} to {}°C", to_fixed(lo, 3), to_fixed(hi, 3)),
        format!("Legend: {}", boundaries.join(" ")),
        format!("Chart size: {:.0}x{:.0}", g.width, g.height),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtv_chart::ChartConfig;
    use gtv_data::MonthlyRecord;

    #[test]
    fn test_summarize() {
        let dataset = Dataset {
            base_temperature: 8.66,
            monthly_variance: vec![
                MonthlyRecord {
                    year: 1753,
                    month: 1,
                    variance: -4.5,
                },
                MonthlyRecord {
                    year: 2015,
                    month: 12,
                    variance: 4.5,
                },
            ],
        };
        let chart = HeatmapChart::build(&dataset, &ChartConfig::default()).unwrap();
        let lines = summarize(&dataset, &chart);
        assert_eq!(lines[0], "Records: 2");
        assert_eq!(lines[1], "Years: 1753-2015");
        assert_eq!(lines[3], "Variance: -4.500 to 4.500°C");
        assert_eq!(
            lines[4],
            "Legend: -4.5 -3.5 -2.5 -1.5 -0.5 0.5 1.5 2.5 3.5 4.5"
        );
        assert_eq!(lines[5], "Chart size: 949x600");
    }
}
