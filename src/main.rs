use anyhow::Result;
use clap::Parser;
use glbar::cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting glbar");
    cli.execute().await?;

    Ok(())
}
