//! CORD-19 Explorer - interactive dashboard
//!
//! Loads and cleans the metadata CSV once, then shows charts for a
//! user-selected year range.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use cord19_explorer::config::{ExplorerConfig, DEFAULT_INPUT};
use cord19_explorer::data::load_dataset;
use cord19_explorer::gui::ExplorerApp;
use eframe::egui;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive explorer for CORD-19 paper metadata")]
struct Cli {
    /// Metadata CSV to explore
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ExplorerConfig::with_input(cli.input);

    let dataset = load_dataset(&config.input_path)
        .with_context(|| format!("Failed to load {}", config.input_path.display()))?;

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1300.0, 850.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("CORD-19 Data Explorer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "CORD-19 Data Explorer",
        options,
        Box::new(move |cc| Ok(Box::new(ExplorerApp::new(cc, dataset, config)))),
    )
    .map_err(|e| anyhow!("Dashboard exited with an error: {e}"))
}
