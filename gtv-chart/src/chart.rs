//! The positioned heatmap scene.

use std::fmt;

use gtv_data::{Dataset, MonthlyRecord};
use log::{debug, info};

use crate::axis::Axis;
use crate::config::{ChartConfig, TooltipConfig};
use crate::geometry::Geometry;
use crate::legend::Legend;
use crate::scale::QuantizeScale;
use crate::tooltip::TooltipText;

#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// No records, so there is no year span to lay out.
    EmptyDataset,
    /// The palette has no colors to quantize onto.
    EmptyPalette,
    MonthOutOfRange { year: i32, month: u32 },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::EmptyDataset => write!(f, "dataset has no monthly records"),
            ChartError::EmptyPalette => write!(f, "chart palette has no colors"),
            ChartError::MonthOutOfRange { year, month } => {
                write!(f, "record {} has month {} outside 1-12", year, month)
            }
        }
    }
}

impl std::error::Error for ChartError {}

/// A free-standing text element (title, subtitle, axis captions).
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: Option<f64>,
    /// Rotation in degrees applied after the translation.
    pub rotate: Option<f64>,
}

impl TextLabel {
    fn at(text: impl Into<String>, x: f64, y: f64) -> TextLabel {
        TextLabel {
            text: text.into(),
            x,
            y,
            font_size: None,
            rotate: None,
        }
    }

    fn sized(mut self, font_size: f64) -> TextLabel {
        self.font_size = Some(font_size);
        self
    }

    fn rotated(mut self, degrees: f64) -> TextLabel {
        self.rotate = Some(degrees);
        self
    }

    pub fn transform(&self) -> String {
        match self.rotate {
            Some(deg) => format!("translate({},{})rotate({})", self.x, self.y, deg),
            None => format!("translate({},{})", self.x, self.y),
        }
    }
}

/// One colored rectangle for a (year, month) record.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub record: MonthlyRecord,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Palette index, `None` if the variance could not be bucketed.
    pub bucket: Option<usize>,
    pub fill: String,
    pub tooltip: TooltipText,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapChart {
    pub geometry: Geometry,
    pub base_temperature: f64,
    pub title: TextLabel,
    pub subtitle: TextLabel,
    pub x_caption: TextLabel,
    pub y_caption: TextLabel,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub color_scale: QuantizeScale<String>,
    pub legend: Legend,
    pub cells: Vec<Cell>,
    pub tooltip: TooltipConfig,
}

impl HeatmapChart {
    /// Lay out the full chart for `dataset`.
    pub fn build(dataset: &Dataset, config: &ChartConfig) -> Result<HeatmapChart, ChartError> {
        if config.palette.is_empty() {
            return Err(ChartError::EmptyPalette);
        }
        if let Some(bad) = dataset
            .monthly_variance
            .iter()
            .find(|r| !(1..=12).contains(&r.month))
        {
            return Err(ChartError::MonthOutOfRange {
                year: bad.year,
                month: bad.month,
            });
        }
        let (min_year, max_year) = dataset.year_span().ok_or(ChartError::EmptyDataset)?;
        let (min_var, max_var) = dataset
            .variance_range()
            .ok_or(ChartError::EmptyDataset)?;

        let geometry = Geometry::new(min_year, max_year, config);
        debug!(
            "Geometry {}x{} for {}-{}, bins {:.3}x{:.3}",
            geometry.width,
            geometry.height,
            min_year,
            max_year,
            geometry.bin_width,
            geometry.bin_height
        );

        let color_scale = QuantizeScale::new((min_var, max_var), config.palette.clone());
        if color_scale.bucket_width() == 0.0 {
            info!("All variances equal {}; every cell gets one color", min_var);
        }

        let x_scale = geometry.x_scale();
        let y_scale = geometry.y_scale();
        let base = dataset.base_temperature;

        let cells: Vec<Cell> = dataset
            .monthly_variance
            .iter()
            .map(|record| {
                let bucket = color_scale.bucket(record.variance);
                let fill = bucket
                    .and_then(|i| color_scale.range().get(i))
                    .cloned()
                    .unwrap_or_else(|| "none".to_string());
                Cell {
                    record: *record,
                    x: x_scale.apply(record.year as f64),
                    y: y_scale.apply((record.month - 1) as f64),
                    width: geometry.bin_width,
                    height: geometry.bin_height,
                    bucket,
                    fill,
                    tooltip: TooltipText::new(record, base),
                }
            })
            .collect();

        let padding = geometry.padding;
        let (width, height) = (geometry.width, geometry.height);

        let title = TextLabel::at(
            format!("{} ({}-{})", config.title, min_year, max_year - 1),
            width / 2.0,
            padding,
        )
        .sized(20.0);
        let subtitle = TextLabel::at(
            format!(
                "Relative to {} Average of {}°C",
                config.baseline_period, base
            ),
            width / 2.0,
            padding + 20.0,
        )
        .sized(15.0);
        let x_caption = TextLabel::at(
            "Year",
            (width - padding * 3.0) / 2.0 + padding * 2.0 - 1.0,
            height - padding,
        );
        let y_caption = TextLabel::at("Month", padding, height / 2.0).rotated(-90.0);

        let legend = Legend::new(&color_scale, &geometry, config.legend_swatch);

        info!(
            "Built heatmap: {} cells, {} years, variance {:.3}..{:.3}",
            cells.len(),
            geometry.year_count(),
            min_var,
            max_var
        );

        Ok(HeatmapChart {
            x_axis: Axis::years(&geometry, config.year_ticks),
            y_axis: Axis::months(&geometry),
            geometry,
            base_temperature: base,
            title,
            subtitle,
            x_caption,
            y_caption,
            color_scale,
            legend,
            cells,
            tooltip: config.tooltip.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(records: Vec<(i32, u32, f64)>) -> Dataset {
        Dataset {
            base_temperature: 8.66,
            monthly_variance: records
                .into_iter()
                .map(|(year, month, variance)| MonthlyRecord {
                    year,
                    month,
                    variance,
                })
                .collect(),
        }
    }

    #[test]
    fn test_single_record() {
        let chart = HeatmapChart::build(&dataset(vec![(1900, 1, 0.0)]), &ChartConfig::default())
            .unwrap();
        let g = chart.geometry;
        assert_eq!((g.min_year, g.max_year), (1900, 1901));
        assert_eq!(chart.cells.len(), 1);

        let cell = &chart.cells[0];
        assert_eq!(cell.x, g.x_scale().apply(1900.0));
        assert_eq!(cell.y, g.y_scale().apply(0.0));
        assert_eq!(cell.x, 80.0);
        assert_eq!(cell.y, 80.0);
        assert_eq!(cell.tooltip.to_string(), "1900 JAN\n8.660°C\n+0°C");
    }

    #[test]
    fn test_single_value_dataset_uses_one_color() {
        let chart = HeatmapChart::build(
            &dataset(vec![(1900, 1, 0.3), (1900, 2, 0.3), (1901, 1, 0.3)]),
            &ChartConfig::default(),
        )
        .unwrap();
        let fills: Vec<&str> = chart.cells.iter().map(|c| c.fill.as_str()).collect();
        assert!(fills.iter().all(|f| *f == "#BD0026"));
        assert!(chart.legend.labels.iter().all(|l| l.text == "0.3"));
    }

    #[test]
    fn test_cells_stay_inside_the_plot() {
        let chart = HeatmapChart::build(
            &dataset(vec![
                (1753, 1, -6.976),
                (1800, 6, 0.0),
                (2015, 12, 5.228),
            ]),
            &ChartConfig::default(),
        )
        .unwrap();
        let g = chart.geometry;
        for cell in &chart.cells {
            assert!(g.min_year <= cell.record.year && cell.record.year < g.max_year);
            assert!(cell.x >= g.padding * 2.0);
            assert!(cell.x + cell.width <= g.width - g.padding + 1e-9);
            assert!(cell.y >= g.padding * 2.0);
            assert!(cell.y + cell.height <= g.height - g.padding * 2.0 + 1e-9);
        }
        assert_eq!(chart.cells[0].bucket, Some(0));
        assert_eq!(chart.cells[2].bucket, Some(8));
    }

    #[test]
    fn test_titles() {
        let chart = HeatmapChart::build(
            &dataset(vec![(1753, 1, -1.0), (2015, 9, 1.0)]),
            &ChartConfig::default(),
        )
        .unwrap();
        assert_eq!(
            chart.title.text,
            "Monthly Global Land Temperature in Celsius (1753-2015)"
        );
        assert_eq!(
            chart.subtitle.text,
            "Relative to January 1951-December 1980 Average of 8.66°C"
        );
        assert_eq!(chart.y_caption.transform(), "translate(40,300)rotate(-90)");
        assert_eq!(chart.x_caption.y, 560.0);
    }

    #[test]
    fn test_rejects_empty_and_bad_months() {
        let config = ChartConfig::default();
        assert_eq!(
            HeatmapChart::build(&dataset(vec![]), &config),
            Err(ChartError::EmptyDataset)
        );
        assert_eq!(
            HeatmapChart::build(&dataset(vec![(1900, 13, 0.1)]), &config),
            Err(ChartError::MonthOutOfRange {
                year: 1900,
                month: 13
            })
        );
    }
}
