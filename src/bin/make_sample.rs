//! Write the first rows of the metadata CSV to a smaller file for testing.

use anyhow::{Context, Result};
use clap::Parser;
use cord19_explorer::config::{DEFAULT_INPUT, DEFAULT_SAMPLE_OUTPUT, DEFAULT_SAMPLE_ROWS};
use cord19_explorer::sample::write_sample;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Copy the header and first rows of a CSV into a sample file")]
struct Cli {
    /// Source CSV
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Sample file to (over)write
    #[arg(short, long, default_value = DEFAULT_SAMPLE_OUTPUT)]
    output: PathBuf,

    /// Data rows to keep
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_ROWS)]
    rows: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let summary = write_sample(&cli.input, &cli.output, cli.rows)
        .with_context(|| format!("Failed to sample {}", cli.input.display()))?;

    println!(
        "Sample file created: {} ({} rows)",
        cli.output.display(),
        summary.rows
    );
    Ok(())
}
