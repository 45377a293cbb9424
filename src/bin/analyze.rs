//! Batch analysis: describe, clean and count the metadata CSV, then save the
//! charts as PNG files.

use anyhow::{Context, Result};
use clap::Parser;
use cord19_explorer::charts::StaticChartRenderer;
use cord19_explorer::config::{
    ExplorerConfig, DEFAULT_INPUT, DEFAULT_JOURNAL_CHART, DEFAULT_YEAR_CHART,
};
use cord19_explorer::data::{DataCleaner, DataLoader};
use cord19_explorer::stats::{Exploration, WordCount};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Clean CORD-19 metadata and save summary charts")]
struct Cli {
    /// Metadata CSV to analyse
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output path of the publications-by-year chart
    #[arg(long, default_value = DEFAULT_YEAR_CHART)]
    year_chart: PathBuf,

    /// Output path of the top-journals chart
    #[arg(long, default_value = DEFAULT_JOURNAL_CHART)]
    journal_chart: PathBuf,

    /// Also write every aggregate as JSON to this path
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

fn format_words(words: &[WordCount]) -> String {
    let pairs: Vec<String> = words
        .iter()
        .map(|w| format!("('{}', {})", w.word, w.count))
        .collect();
    format!("[{}]", pairs.join(", "))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ExplorerConfig {
        year_chart_path: cli.year_chart,
        journal_chart_path: cli.journal_chart,
        ..ExplorerConfig::with_input(cli.input)
    };

    let mut loader = DataLoader::new();
    loader
        .load_csv(&config.input_path)
        .with_context(|| format!("Failed to load {}", config.input_path.display()))?;
    print!("{}", loader.describe()?);

    let dataset = DataCleaner::clean(loader.raw_table()?);
    info!(
        "{} of {} rows kept after cleaning",
        dataset.len(),
        loader.get_row_count()
    );
    let exploration = Exploration::unfiltered(&dataset, &config);
    let aggregates = &exploration.aggregates;

    StaticChartRenderer::render_year_counts(&aggregates.year_counts, &config.year_chart_path)?;
    StaticChartRenderer::render_top_journals(&aggregates.top_journals, &config.journal_chart_path)?;

    println!("Most common words in titles: {}", format_words(&aggregates.top_words));
    if let Some(stats) = &aggregates.abstract_stats {
        println!(
            "Abstract word count: mean {:.1}, median {:.1}, std {:.1}, min {}, max {}",
            stats.mean, stats.median, stats.std_dev, stats.min, stats.max
        );
    }

    if let Some(path) = &cli.summary_json {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), aggregates)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote summary to {}", path.display());
    }

    println!("Data cleaning and basic analysis complete. Charts saved as PNG files.");
    Ok(())
}
