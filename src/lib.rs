pub mod chart;
pub mod cli;
pub mod data;
pub mod domain;
pub mod render;

use anyhow::{Context, Result};

use cli::{Cli, FormatArg};

pub fn run(cli: &Cli) -> Result<()> {
    println!("{}", render_chart(cli)?);
    Ok(())
}

/// Loads the payload, assembles the requested chart, and serializes it in
/// the selected format. A day with no data still renders: the placeholder
/// output is a valid document, not an error.
pub fn render_chart(cli: &Cli) -> Result<String> {
    let samples = data::input::load_samples(&cli.input)
        .with_context(|| format!("cannot load forecast from {}", cli.input.display()))?;

    let request = cli.request();
    let output = chart::assemble(&request, &samples);

    match cli.format {
        FormatArg::Json => {
            serde_json::to_string_pretty(&output).context("failed to serialize chart output")
        }
        FormatArg::Svg => Ok(render::svg_document(&request, &output)),
    }
}
