//! Core types and loader for the monthly global land temperature dataset.
//!
//! - `dataset`: the `Dataset` / `MonthlyRecord` schema and its extents
//! - `month`: fixed month abbreviation table
//! - `error`: loader errors
//! - `fetch`: HTTP fetch of the published JSON document (feature `api`)

pub mod dataset;
pub mod error;
#[cfg(feature = "api")]
pub mod fetch;
pub mod month;

pub use dataset::{Dataset, MonthlyRecord};
pub use error::DataError;

/// Published location of the global land temperature dataset.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/FreeCodeCamp/ProjectReferenceData/master/global-temperature.json";
