//! GTV CLI - render the monthly global land temperature heatmap to a file.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gtv-cli",
    version,
    about = "Global land temperature variance heatmap toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gtv_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    gtv_cmd::run(cli.command).await
}
