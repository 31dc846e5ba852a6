//! Chart configuration.
//!
//! All fields have defaults matching the published chart, so a config file
//! only needs the keys it wants to change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Sequential palette from coldest (index 0) to hottest.
pub const DEFAULT_PALETTE: [&str; 9] = [
    "#253494", "#2C7FB8", "#41B6C4", "#A1DAB4", "#FFFFCC", "#FECC5C", "#fd8d3c", "#F03B20",
    "#BD0026",
];

/// Tooltip placement and fade timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipConfig {
    /// Horizontal offset from the pointer, in px.
    pub offset_x: f64,
    /// Vertical offset from the pointer, in px.
    pub offset_y: f64,
    /// Fade in/out duration in milliseconds.
    pub fade_ms: u32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_x: -85.0,
            offset_y: -35.0,
            fade_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    pub padding: f64,
    pub height: f64,
    /// Horizontal budget per year before the padding is added.
    pub px_per_year: f64,
    /// Side length of a legend swatch.
    pub legend_swatch: f64,
    /// Number of ticks requested from the year axis.
    pub year_ticks: usize,
    pub palette: Vec<String>,
    /// Title text; the year span is appended in parentheses.
    pub title: String,
    /// Reference period the baseline temperature was averaged over.
    pub baseline_period: String,
    pub tooltip: TooltipConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            padding: 40.0,
            height: 600.0,
            px_per_year: 3.0,
            legend_swatch: 30.0,
            year_ticks: 10,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            title: "Monthly Global Land Temperature in Celsius".to_string(),
            baseline_period: "January 1951-December 1980".to_string(),
            tooltip: TooltipConfig::default(),
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(json: &str) -> serde_json::Result<ChartConfig> {
        serde_json::from_str(json)
    }

    /// Load a JSON config file. Missing keys keep their defaults.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ChartConfig, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(ChartConfig::from_json_str(&text)?)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "could not read chart config: {}", e),
            ConfigError::Parse(e) => write!(f, "invalid chart config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
