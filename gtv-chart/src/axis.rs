//! Year and month axes.

use gtv_data::month;

use crate::geometry::Geometry;

/// Which side of the plot the axis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// Gap between a tick line's end and its label.
const LABEL_GAP: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Position along the axis, in range coordinates.
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    pub class: &'static str,
    /// Translation of the axis group.
    pub translate: (f64, f64),
    /// Range the domain line spans.
    pub range: (f64, f64),
    pub tick_size: f64,
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Bottom axis of years, integer labels, no outer ticks.
    pub fn years(geometry: &Geometry, tick_count: usize) -> Axis {
        let scale = geometry.x_scale();
        let ticks = scale
            .ticks(tick_count)
            .into_iter()
            .map(|year| Tick {
                offset: scale.apply(year),
                label: format!("{}", year.round() as i64),
            })
            .collect();

        Axis {
            orient: AxisOrient::Bottom,
            class: "x-axis",
            translate: (0.0, geometry.height - geometry.padding * 2.0),
            range: scale.range(),
            tick_size: 6.0,
            ticks,
        }
    }

    /// Left axis of month abbreviations, shifted half a row down so labels
    /// sit in the middle of their row.
    pub fn months(geometry: &Geometry) -> Axis {
        let scale = geometry.y_scale();
        let ticks = scale
            .ticks(10)
            .into_iter()
            .filter_map(|index| {
                let label = month::abbreviation_for_index(index as usize)?;
                Some(Tick {
                    offset: scale.apply(index),
                    label: label.to_string(),
                })
            })
            .collect();

        Axis {
            orient: AxisOrient::Left,
            class: "y-axis",
            translate: (geometry.padding * 2.0 - 1.0, geometry.bin_height / 2.0),
            range: scale.range(),
            tick_size: 0.0,
            ticks,
        }
    }

    pub fn transform(&self) -> String {
        format!("translate({},{})", self.translate.0, self.translate.1)
    }

    /// Path data for the axis line.
    pub fn domain_path(&self) -> String {
        let (r0, r1) = self.range;
        match self.orient {
            AxisOrient::Bottom => format!("M{},0H{}", r0, r1),
            AxisOrient::Left => format!("M0,{}V{}", r0, r1),
        }
    }

    pub fn tick_transform(&self, tick: &Tick) -> String {
        match self.orient {
            AxisOrient::Bottom => format!("translate({},0)", tick.offset),
            AxisOrient::Left => format!("translate(0,{})", tick.offset),
        }
    }

    /// End point of a tick line, relative to the tick's origin.
    pub fn tick_line_end(&self) -> (f64, f64) {
        match self.orient {
            AxisOrient::Bottom => (0.0, self.tick_size),
            AxisOrient::Left => (-self.tick_size, 0.0),
        }
    }

    /// Label anchor point relative to the tick's origin.
    pub fn label_position(&self) -> (f64, f64) {
        let reach = self.tick_size + LABEL_GAP;
        match self.orient {
            AxisOrient::Bottom => (0.0, reach),
            AxisOrient::Left => (-reach, 0.0),
        }
    }

    pub fn label_anchor(&self) -> &'static str {
        match self.orient {
            AxisOrient::Bottom => "middle",
            AxisOrient::Left => "end",
        }
    }

    /// Baseline shift so labels hang below (bottom) or center on (left) the tick.
    pub fn label_dy(&self) -> &'static str {
        match self.orient {
            AxisOrient::Bottom => "0.71em",
            AxisOrient::Left => "0.32em",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;

    fn geometry() -> Geometry {
        Geometry::new(1753, 2016, &ChartConfig::default())
    }

    #[test]
    fn test_year_axis() {
        let g = geometry();
        let axis = Axis::years(&g, 10);
        assert_eq!(axis.translate, (0.0, 520.0));
        assert_eq!(axis.ticks.first().map(|t| t.label.as_str()), Some("1760"));
        assert_eq!(axis.ticks.last().map(|t| t.label.as_str()), Some("2000"));
        assert_eq!(axis.domain_path(), format!("M80,0H{}", g.width - 40.0));
        assert_eq!(axis.label_position(), (0.0, 9.0));
    }

    #[test]
    fn test_month_axis_labels() {
        let g = geometry();
        let axis = Axis::months(&g);
        let labels: Vec<&str> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
        // Ticks run in domain order, 12 down to 0; index 12 carries no label.
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], "DEC");
        assert_eq!(labels[11], "JAN");
        assert_eq!(axis.translate, (79.0, g.bin_height / 2.0));
        assert_eq!(axis.tick_line_end(), (0.0, 0.0));
    }

    #[test]
    fn test_january_label_centered_on_first_row() {
        let g = geometry();
        let axis = Axis::months(&g);
        let jan = axis.ticks.iter().find(|t| t.label == "JAN").unwrap();
        let center = jan.offset + axis.translate.1;
        assert!((center - (g.padding * 2.0 + g.bin_height / 2.0)).abs() < 1e-9);
    }
}
