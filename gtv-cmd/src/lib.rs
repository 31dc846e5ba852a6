//! Command implementations for the temperature variance CLI.
//!
//! Provides subcommands that load the dataset (over HTTP or from a local
//! file) and render, export or summarize the heatmap.

use clap::{Args, Subcommand, ValueEnum};
use gtv_data::DATASET_URL;

pub mod export;
pub mod load;
pub mod render;
pub mod summary;

/// Where to read the dataset from.
#[derive(Args, Debug, Clone)]
pub struct Source {
    /// URL of the dataset JSON document
    #[arg(long, default_value = DATASET_URL)]
    pub url: String,

    /// Read the dataset from a local JSON file instead of fetching it
    #[arg(short = 'i', long)]
    pub input: Option<String>,

    /// Chart config JSON file (missing keys keep their defaults)
    #[arg(short = 'c', long)]
    pub config: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// HTML page with the interactive tooltip
    Html,
    /// Standalone SVG image
    Svg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the heatmap to an HTML page or SVG file
    Render {
        #[command(flatten)]
        source: Source,

        /// Output path
        #[arg(short = 'o', long)]
        output: String,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },

    /// Export one CSV row per heatmap cell
    Export {
        #[command(flatten)]
        source: Source,

        /// Output path for the cells CSV
        #[arg(short = 'o', long)]
        output: String,
    },

    /// Log dataset extents and legend boundaries
    Summary {
        #[command(flatten)]
        source: Source,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            source,
            output,
            format,
        } => render::run_render(&source, &output, format).await,
        Command::Export { source, output } => export::run_export(&source, &output).await,
        Command::Summary { source } => summary::run_summary(&source).await,
    }
}
