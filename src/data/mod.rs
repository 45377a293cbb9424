//! Data module - CSV loading, cleaning and filtering

mod cleaner;
mod filter;
mod loader;
mod model;

pub use cleaner::{parse_publish_time, word_count, DataCleaner};
pub use filter::{all_papers, filter_by_year};
pub use loader::{DataLoader, LoaderError, TableSummary};
pub use model::{
    Dataset, Paper, RawRecord, RawTable, YearRange, ABSTRACT_COL, JOURNAL_COL, PUBLISH_TIME_COL,
    REQUIRED_COLUMNS, SOURCE_COL, TITLE_COL, UNKNOWN,
};

use std::path::Path;

/// Load and clean a CSV in one step.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoaderError> {
    let mut loader = DataLoader::new();
    loader.load_csv(path)?;
    let raw = loader.raw_table()?;
    Ok(DataCleaner::clean(raw))
}
