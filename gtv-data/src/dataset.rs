use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::DataError;

/// One month of land temperature, as a deviation from the dataset baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub year: i32,
    /// Calendar month, 1 = January.
    pub month: u32,
    /// Deviation in °C from `Dataset::base_temperature`.
    pub variance: f64,
}

impl MonthlyRecord {
    /// Absolute temperature for this month given the baseline.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

/// The published temperature dataset.
///
/// Mirrors the JSON document `{ baseTemperature, monthlyVariance: [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyRecord>,
}

impl Dataset {
    /// Parse a dataset from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Dataset, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a dataset stored on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Dataset, DataError> {
        let text = std::fs::read_to_string(path)?;
        Dataset::from_json_str(&text)
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// `(minDate, maxDate)` where `maxDate` is one past the last year,
    /// so the final year still gets a full column.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let min = self.monthly_variance.iter().map(|r| r.year).min()?;
        let max = self.monthly_variance.iter().map(|r| r.year).max()?;
        Some((min, max + 1))
    }

    /// Smallest and largest variance across all records.
    pub fn variance_range(&self) -> Option<(f64, f64)> {
        let mut values = self
            .monthly_variance
            .iter()
            .map(|r| r.variance)
            .filter(|v| !v.is_nan());
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [
            { "year": 1753, "month": 1, "variance": -1.366 },
            { "year": 1753, "month": 2, "variance": -2.223 },
            { "year": 1900, "month": 7, "variance": 0.5 },
            { "year": 2015, "month": 9, "variance": 1.189 }
        ]
    }"#;

    #[test]
    fn test_from_json_str() {
        let dataset = Dataset::from_json_str(SAMPLE).unwrap();
        assert_eq!(dataset.base_temperature, 8.66);
        assert_eq!(dataset.len(), 4);
        assert_eq!(
            dataset.monthly_variance[0],
            MonthlyRecord {
                year: 1753,
                month: 1,
                variance: -1.366
            }
        );
    }

    #[test]
    fn test_year_span_reserves_final_column() {
        let dataset = Dataset::from_json_str(SAMPLE).unwrap();
        assert_eq!(dataset.year_span(), Some((1753, 2016)));
        for record in &dataset.monthly_variance {
            assert!((1753..2016).contains(&record.year));
            assert!((1..=12).contains(&record.month));
        }
    }

    #[test]
    fn test_variance_range() {
        let dataset = Dataset::from_json_str(SAMPLE).unwrap();
        assert_eq!(dataset.variance_range(), Some((-2.223, 1.189)));
    }

    #[test]
    fn test_empty_dataset_has_no_extents() {
        let dataset = Dataset {
            base_temperature: 8.66,
            monthly_variance: Vec::new(),
        };
        assert!(dataset.is_empty());
        assert_eq!(dataset.year_span(), None);
        assert_eq!(dataset.variance_range(), None);
    }

    #[test]
    fn test_malformed_document() {
        let err = Dataset::from_json_str(r#"{"baseTemperature": 8.66}"#).unwrap_err();
        assert!(matches!(err, DataError::Decode(_)));
    }

    #[test]
    fn test_temperature() {
        let record = MonthlyRecord {
            year: 1900,
            month: 1,
            variance: 1.234,
        };
        assert!((record.temperature(8.66) - 9.894).abs() < 1e-9);
    }
}
