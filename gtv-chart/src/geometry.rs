//! Layout geometry derived from the dataset's year span.

use crate::config::ChartConfig;
use crate::scale::LinearScale;

/// One row per calendar month.
pub const MONTH_ROWS: usize = 12;

/// Fixed layout values computed once per render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub padding: f64,
    pub width: f64,
    pub height: f64,
    pub bin_width: f64,
    pub bin_height: f64,
    /// First year on the x axis (`minDate`).
    pub min_year: i32,
    /// One past the last year (`maxDate`).
    pub max_year: i32,
}

impl Geometry {
    /// `max_year` is exclusive: the final data year still gets a full column.
    pub fn new(min_year: i32, max_year: i32, config: &ChartConfig) -> Geometry {
        let padding = config.padding;
        let years = (max_year - min_year) as f64;
        let width = padding * 4.0 + years * config.px_per_year;
        let height = config.height;

        Geometry {
            padding,
            width,
            height,
            bin_width: (width - padding * 3.0) / years,
            bin_height: (height - padding * 4.0) / MONTH_ROWS as f64,
            min_year,
            max_year,
        }
    }

    pub fn year_count(&self) -> i32 {
        self.max_year - self.min_year
    }

    /// Years onto `[padding*2, width-padding]`.
    pub fn x_scale(&self) -> LinearScale {
        LinearScale::new(
            (self.min_year as f64, self.max_year as f64),
            (self.padding * 2.0, self.width - self.padding),
        )
    }

    /// 0-based month index onto rows; index 0 (January) is at the top.
    pub fn y_scale(&self) -> LinearScale {
        LinearScale::new(
            (MONTH_ROWS as f64, 0.0),
            (self.height - self.padding * 2.0, self.padding * 2.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_span() -> Geometry {
        Geometry::new(1753, 2016, &ChartConfig::default())
    }

    #[test]
    fn test_dimensions() {
        let g = full_span();
        assert_eq!(g.year_count(), 263);
        assert_eq!(g.width, 160.0 + 263.0 * 3.0);
        assert_eq!(g.height, 600.0);
        assert!((g.bin_width - (949.0 - 120.0) / 263.0).abs() < 1e-12);
        assert!((g.bin_height - 440.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_x_scale_ends() {
        let g = full_span();
        let x = g.x_scale();
        assert_eq!(x.apply(1753.0), g.padding * 2.0);
        assert_eq!(x.apply(2016.0), g.width - g.padding);
    }

    #[test]
    fn test_columns_tile_the_x_range() {
        let g = full_span();
        let x = g.x_scale();
        let step = x.apply(1754.0) - x.apply(1753.0);
        assert!((step - g.bin_width).abs() < 1e-9);
    }

    #[test]
    fn test_y_scale_rows() {
        let g = full_span();
        let y = g.y_scale();
        assert_eq!(y.apply(0.0), 80.0);
        assert_eq!(y.apply(12.0), 520.0);
        let row = y.apply(1.0) - y.apply(0.0);
        assert!((row - g.bin_height).abs() < 1e-9);
    }
}
