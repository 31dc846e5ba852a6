//! Linear and quantize scales.

/// Continuous mapping from a numeric domain onto a pixel range.
///
/// Interpolates as `r0 * (1 - t) + r1 * t`, so both domain ends map exactly
/// onto the range ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            // Collapsed domain: everything lands mid-range.
            return r0 * 0.5 + r1 * 0.5;
        }
        let t = (value - d0) / (d1 - d0);
        r0 * (1.0 - t) + r1 * t
    }

    /// Round tick values covering the domain, roughly `count` of them.
    ///
    /// Steps are 1, 2 or 5 times a power of ten. Ticks come back in domain
    /// order, so a reversed domain yields descending ticks.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if count == 0 || start.is_nan() || stop.is_nan() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }
        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }

        let step = tick_increment(start, stop, count);
        if step == 0.0 || !step.is_finite() {
            return Vec::new();
        }

        let mut ticks: Vec<f64> = if step > 0.0 {
            let i0 = (start / step).ceil() as i64;
            let i1 = (stop / step).floor() as i64;
            (i0..=i1).map(|i| i as f64 * step).collect()
        } else {
            let inv = -step;
            let i0 = (start * inv).ceil() as i64;
            let i1 = (stop * inv).floor() as i64;
            (i0..=i1).map(|i| i as f64 / inv).collect()
        };

        if reverse {
            ticks.reverse();
        }
        ticks
    }
}

/// Tick spacing for `count` ticks over `[start, stop]`.
///
/// Positive results are the step itself; negative results encode the
/// inverse of a fractional step (`-10` means a step of `0.1`) so tick values
/// can be produced by division without accumulating error.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Maps a continuous domain onto `range.len()` equal-width buckets.
///
/// Bucket `k` covers `[boundary(k), boundary(k + 1))`; the top boundary is
/// inclusive for the last bucket and values outside the domain clamp to the
/// first or last bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizeScale<T> {
    domain: (f64, f64),
    range: Vec<T>,
}

impl<T> QuantizeScale<T> {
    pub fn new(domain: (f64, f64), range: Vec<T>) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> &[T] {
        &self.range
    }

    /// Width of one bucket. Zero when the domain is collapsed.
    pub fn bucket_width(&self) -> f64 {
        let (x0, x1) = self.domain;
        (x1 - x0) / self.range.len() as f64
    }

    /// Lower edge of bucket `k`; `boundary(range.len())` is the domain's top.
    pub fn boundary(&self, k: usize) -> f64 {
        self.domain.0 + k as f64 * self.bucket_width()
    }

    /// The `range.len() - 1` interior thresholds.
    pub fn thresholds(&self) -> Vec<f64> {
        (1..self.range.len()).map(|k| self.boundary(k)).collect()
    }

    /// Index of the bucket holding `value`, `None` for NaN or an empty range.
    ///
    /// A value sitting on a threshold belongs to the bucket above it. With a
    /// collapsed domain every threshold equals the single value, so all
    /// values land in the last bucket.
    pub fn bucket(&self, value: f64) -> Option<usize> {
        if value.is_nan() || self.range.is_empty() {
            return None;
        }
        let thresholds = self.thresholds();
        Some(thresholds.partition_point(|t| *t <= value))
    }

    pub fn apply(&self, value: f64) -> Option<&T> {
        self.bucket(value).and_then(|i| self.range.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_boundaries_are_exact() {
        let scale = LinearScale::new((1753.0, 2016.0), (80.0, 869.0));
        assert_eq!(scale.apply(1753.0), 80.0);
        assert_eq!(scale.apply(2016.0), 869.0);
    }

    #[test]
    fn test_linear_inverted_domain() {
        let scale = LinearScale::new((12.0, 0.0), (520.0, 80.0));
        assert_eq!(scale.apply(0.0), 80.0);
        assert_eq!(scale.apply(12.0), 520.0);
        assert!((scale.apply(6.0) - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_collapsed_domain() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.apply(5.0), 50.0);
    }

    #[test]
    fn test_ticks_year_domain() {
        let scale = LinearScale::new((1753.0, 2016.0), (80.0, 869.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks.first(), Some(&1760.0));
        assert_eq!(ticks.last(), Some(&2000.0));
        assert_eq!(ticks.len(), 13);
        assert!(ticks.windows(2).all(|w| w[1] - w[0] == 20.0));
    }

    #[test]
    fn test_ticks_reversed_domain() {
        let scale = LinearScale::new((12.0, 0.0), (520.0, 80.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks.len(), 13);
        assert_eq!(ticks[0], 12.0);
        assert_eq!(ticks[12], 0.0);
    }

    #[test]
    fn test_ticks_fractional_step() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0));
        let ticks = scale.ticks(5);
        assert_eq!(ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_quantize_boundaries() {
        let scale = QuantizeScale::new((-9.0, 9.0), (0..9).collect::<Vec<usize>>());
        for k in 0..=9 {
            assert_eq!(scale.boundary(k), -9.0 + k as f64 * 2.0);
        }
        assert_eq!(scale.thresholds().len(), 8);
    }

    #[test]
    fn test_quantize_bucket_edges() {
        let scale = QuantizeScale::new((0.0, 9.0), (0..9).collect::<Vec<usize>>());
        assert_eq!(scale.bucket(0.0), Some(0));
        assert_eq!(scale.bucket(0.999), Some(0));
        assert_eq!(scale.bucket(1.0), Some(1));
        assert_eq!(scale.bucket(9.0), Some(8));
        // Clamped outside the domain.
        assert_eq!(scale.bucket(-100.0), Some(0));
        assert_eq!(scale.bucket(100.0), Some(8));
        assert_eq!(scale.bucket(f64::NAN), None);
    }

    #[test]
    fn test_quantize_is_monotonic() {
        let scale = QuantizeScale::new((-6.976, 5.228), (0..9).collect::<Vec<usize>>());
        let mut previous = 0;
        let mut v = -7.5;
        while v < 6.0 {
            let bucket = scale.bucket(v).unwrap();
            assert!(bucket >= previous);
            previous = bucket;
            v += 0.01;
        }
        assert_eq!(previous, 8);
    }

    #[test]
    fn test_quantize_collapsed_domain_uses_one_color() {
        let scale = QuantizeScale::new((0.0, 0.0), vec!["a", "b", "c"]);
        assert_eq!(scale.bucket_width(), 0.0);
        assert_eq!(scale.apply(0.0), Some(&"c"));
    }
}
