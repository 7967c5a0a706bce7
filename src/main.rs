use anyhow::Result;
use clap::Parser;
use forecast_charts::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    forecast_charts::run(&cli)
}
