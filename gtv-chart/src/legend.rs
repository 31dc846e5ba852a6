//! Color legend: one swatch per bucket, labelled with bucket boundaries.

use crate::format::to_fixed;
use crate::geometry::Geometry;
use crate::scale::QuantizeScale;

const SWATCH_Y: f64 = 25.0;
const LABEL_Y: f64 = 65.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub translate: (f64, f64),
    pub font_size: f64,
    pub swatches: Vec<Swatch>,
    /// `swatches.len() + 1` labels; the last marks the top of the domain.
    pub labels: Vec<LegendLabel>,
}

impl Legend {
    pub fn new(scale: &QuantizeScale<String>, geometry: &Geometry, swatch: f64) -> Legend {
        let colors = scale.range();
        let swatches = colors
            .iter()
            .enumerate()
            .map(|(i, color)| Swatch {
                x: i as f64 * swatch,
                y: SWATCH_Y,
                size: swatch,
                color: color.clone(),
            })
            .collect();

        let labels = (0..=colors.len())
            .map(|k| LegendLabel {
                x: k as f64 * swatch,
                y: LABEL_Y,
                text: boundary_label(scale, k),
            })
            .collect();

        // Right-aligned with room for one swatch on either side of the row.
        let slots = (colors.len() + 2) as f64;
        Legend {
            translate: (
                geometry.width - swatch * slots,
                geometry.height - geometry.padding * 2.0,
            ),
            font_size: 10.0,
            swatches,
            labels,
        }
    }

    pub fn transform(&self) -> String {
        format!("translate({},{})", self.translate.0, self.translate.1)
    }
}

/// Lower boundary of bucket `k`, one decimal place.
pub fn boundary_label<T>(scale: &QuantizeScale<T>, k: usize) -> String {
    to_fixed(scale.boundary(k), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;

    fn palette() -> Vec<String> {
        ChartConfig::default().palette
    }

    #[test]
    fn test_labels_follow_bucket_boundaries() {
        let (lo, hi) = (-6.976, 5.228);
        let scale = QuantizeScale::new((lo, hi), palette());
        let g = Geometry::new(1753, 2016, &ChartConfig::default());
        let legend = Legend::new(&scale, &g, 30.0);

        assert_eq!(legend.swatches.len(), 9);
        assert_eq!(legend.labels.len(), 10);
        for (k, label) in legend.labels.iter().enumerate() {
            let expected = lo + k as f64 * (hi - lo) / 9.0;
            assert_eq!(label.text, to_fixed(expected, 1));
        }
        assert_eq!(legend.labels[0].text, "-7.0");
        assert_eq!(legend.labels[9].text, "5.2");
    }

    #[test]
    fn test_layout() {
        let scale = QuantizeScale::new((0.0, 9.0), palette());
        let g = Geometry::new(1753, 2016, &ChartConfig::default());
        let legend = Legend::new(&scale, &g, 30.0);

        assert_eq!(legend.translate, (g.width - 330.0, 520.0));
        assert_eq!(legend.swatches[3].x, 90.0);
        assert_eq!(legend.swatches[3].y, 25.0);
        assert_eq!(legend.swatches[3].color, "#A1DAB4");
        assert_eq!(legend.labels[9].x, 270.0);
        assert_eq!(legend.labels[9].y, 65.0);
    }

    #[test]
    fn test_label_on_exact_tie_rounds_up() {
        let scale = QuantizeScale::new((0.0, 2.25), palette());
        // Boundary 1 is exactly 0.25.
        assert_eq!(boundary_label(&scale, 1), "0.3");
        assert_eq!(boundary_label(&scale, 9), "2.3");
    }
}
