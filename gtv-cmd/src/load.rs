//! Dataset and config loading shared by all subcommands.

use anyhow::Context;
use gtv_chart::{ChartConfig, HeatmapChart};
use gtv_data::fetch::fetch_dataset;
use gtv_data::Dataset;
use log::{error, info};

use crate::Source;

/// Load the dataset from the local file if given, otherwise fetch it.
///
/// Failures are logged before being returned; nothing is rendered.
pub async fn load_dataset(source: &Source) -> anyhow::Result<Dataset> {
    let result = match &source.input {
        Some(path) => {
            info!("Reading dataset from {}", path);
            Dataset::from_path(path)
        }
        None => fetch_dataset(&source.url).await,
    };

    match result {
        Ok(dataset) => Ok(dataset),
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            Err(e.into())
        }
    }
}

pub fn load_config(source: &Source) -> anyhow::Result<ChartConfig> {
    match &source.config {
        Some(path) => {
            info!("Using chart config {}", path);
            ChartConfig::from_path(path).with_context(|| format!("loading {}", path))
        }
        None => Ok(ChartConfig::default()),
    }
}

/// Load everything and lay out the chart.
pub async fn load_chart(source: &Source) -> anyhow::Result<(Dataset, HeatmapChart)> {
    let config = load_config(source)?;
    let dataset = load_dataset(source).await?;
    let chart = HeatmapChart::build(&dataset, &config)?;
    Ok((dataset, chart))
}
