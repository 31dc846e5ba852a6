//! HTTP loader for the published dataset.
//!
//! Works on native targets (inside a tokio runtime) and on `wasm32`, where
//! `reqwest` goes through the browser's fetch.

use log::{error, info};

use crate::dataset::Dataset;
use crate::error::DataError;

/// Fetch and decode the dataset at `url`.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, DataError> {
    info!("Fetching dataset from {}", url);

    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        let status = response.status();
        error!("Bad response for {}: {}", url, status);
        return Err(DataError::Status(status.as_u16()));
    }

    // Decode from text so schema errors surface as `DataError::Decode`.
    let body = response.text().await?;
    let dataset = Dataset::from_json_str(&body)?;

    info!(
        "Fetched {} monthly records (base {}°C)",
        dataset.len(),
        dataset.base_temperature
    );
    Ok(dataset)
}
