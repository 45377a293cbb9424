//! CSV Data Loader Module
//! Handles CSV file loading and raw record extraction using Polars.

use super::model::{
    RawRecord, RawTable, ABSTRACT_COL, JOURNAL_COL, PUBLISH_TIME_COL, REQUIRED_COLUMNS,
    SOURCE_COL, TITLE_COL,
};
use polars::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Zero rows of type inference: every column is read as text, so a late
/// cell of another type can never be nulled by a guessed schema.
const INFER_SCHEMA_ROWS: usize = 0;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse CSV: {0}")]
    Parse(#[from] PolarsError),
    #[error("Input is missing required column '{0}'")]
    MissingColumn(String),
    #[error("No data loaded")]
    NoData,
}

/// Shape and missing-value overview of the raw table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    pub rows: usize,
    pub columns: usize,
    /// Null count per column, in file order.
    pub null_counts: Vec<(String, usize)>,
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data shape: ({}, {})", self.rows, self.columns)?;
        writeln!(f, "Missing values per column:")?;
        let width = self
            .null_counts
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);
        for (name, nulls) in &self.null_counts {
            writeln!(f, "  {name:<width$}  {nulls}")?;
        }
        Ok(())
    }
}

/// Handles CSV file loading with Polars.
pub struct DataLoader {
    df: Option<DataFrame>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self { df: None }
    }

    /// Load a CSV file using Polars.
    ///
    /// Columns are kept as text, so mixed-type columns load without loss.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<&DataFrame, LoaderError> {
        // Polars reports a missing file as a generic error, check it up front
        std::fs::File::open(file_path).map_err(|source| LoaderError::Io {
            path: file_path.to_path_buf(),
            source,
        })?;

        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
            .finish()?
            .collect()?;

        log::info!(
            "Loaded {} rows x {} columns from {}",
            df.height(),
            df.width(),
            file_path.display()
        );

        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Get list of column names from loaded DataFrame.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether the loaded table has a column with this name.
    pub fn has_column(&self, name: &str) -> bool {
        self.get_columns().iter().any(|c| c == name)
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Row count, column count and nulls per column.
    pub fn describe(&self) -> Result<TableSummary, LoaderError> {
        let df = self.df.as_ref().ok_or(LoaderError::NoData)?;
        let null_counts = df
            .get_columns()
            .iter()
            .map(|col| (col.name().to_string(), col.null_count()))
            .collect();

        Ok(TableSummary {
            rows: df.height(),
            columns: df.width(),
            null_counts,
        })
    }

    /// Extract the columns the cleaner works on as raw text records.
    pub fn raw_table(&self) -> Result<RawTable, LoaderError> {
        let df = self.df.as_ref().ok_or(LoaderError::NoData)?;

        for required in REQUIRED_COLUMNS {
            if !self.has_column(required) {
                return Err(LoaderError::MissingColumn(required.to_string()));
            }
        }
        let has_source = self.has_column(SOURCE_COL);

        let titles = text_column(df, TITLE_COL)?;
        let publish_times = text_column(df, PUBLISH_TIME_COL)?;
        let abstracts = text_column(df, ABSTRACT_COL)?;
        let journals = text_column(df, JOURNAL_COL)?;
        let sources = if has_source {
            text_column(df, SOURCE_COL)?
        } else {
            vec![None; df.height()]
        };

        let records = titles
            .into_iter()
            .zip(publish_times)
            .zip(abstracts)
            .zip(journals)
            .zip(sources)
            .map(
                |((((title, publish_time), abstract_text), journal), source_x)| RawRecord {
                    title,
                    publish_time,
                    abstract_text,
                    journal,
                    source_x,
                },
            )
            .collect();

        Ok(RawTable {
            records,
            has_source,
        })
    }
}

/// Read a column as optional strings, whatever type Polars inferred for it.
fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, LoaderError> {
    let column = df.column(name)?.cast(&DataType::String)?;
    let values = column
        .str()?
        .into_iter()
        .map(|v| v.filter(|s| !s.is_empty()).map(str::to_string))
        .collect();
    Ok(values)
}
