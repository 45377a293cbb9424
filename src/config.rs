//! Explorer Configuration
//! Conventional file names and limits shared by all binaries.

use std::path::PathBuf;

/// Source dataset, looked up in the working directory.
pub const DEFAULT_INPUT: &str = "metadata.csv";
pub const DEFAULT_YEAR_CHART: &str = "publications_by_year.png";
pub const DEFAULT_JOURNAL_CHART: &str = "top_journals.png";
pub const DEFAULT_SAMPLE_OUTPUT: &str = "metadata_sample.csv";

/// Rows kept by the sampler.
pub const DEFAULT_SAMPLE_ROWS: usize = 10_000;

/// Entries kept in top-N category tables (journals, sources).
pub const TOP_CATEGORIES: usize = 10;

/// Entries kept in the title word-frequency list.
pub const TOP_WORDS: usize = 20;

/// Rows shown in the dashboard's data sample table.
pub const SAMPLE_TABLE_ROWS: usize = 10;

/// Words drawn in the dashboard word cloud.
pub const WORD_CLOUD_WORDS: usize = 100;

/// Paths and limits for one run.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub input_path: PathBuf,
    pub year_chart_path: PathBuf,
    pub journal_chart_path: PathBuf,
    pub top_categories: usize,
    pub top_words: usize,
    pub sample_table_rows: usize,
    pub word_cloud_words: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            year_chart_path: PathBuf::from(DEFAULT_YEAR_CHART),
            journal_chart_path: PathBuf::from(DEFAULT_JOURNAL_CHART),
            top_categories: TOP_CATEGORIES,
            top_words: TOP_WORDS,
            sample_table_rows: SAMPLE_TABLE_ROWS,
            word_cloud_words: WORD_CLOUD_WORDS,
        }
    }
}

impl ExplorerConfig {
    /// Default configuration reading from `input_path`.
    pub fn with_input(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Self::default()
        }
    }
}
