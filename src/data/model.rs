//! Record types flowing through the pipeline.

use chrono::NaiveDate;
use serde::Serialize;

/// Placeholder for missing categorical values.
pub const UNKNOWN: &str = "Unknown";

// Column names in the source CSV
pub const TITLE_COL: &str = "title";
pub const PUBLISH_TIME_COL: &str = "publish_time";
pub const ABSTRACT_COL: &str = "abstract";
pub const JOURNAL_COL: &str = "journal";
pub const SOURCE_COL: &str = "source_x";

/// Columns that must exist in every input file.
pub const REQUIRED_COLUMNS: [&str; 4] = [TITLE_COL, PUBLISH_TIME_COL, ABSTRACT_COL, JOURNAL_COL];

/// One row of the source table, before cleaning. `None` means the cell was empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub title: Option<String>,
    pub publish_time: Option<String>,
    pub abstract_text: Option<String>,
    pub journal: Option<String>,
    pub source_x: Option<String>,
}

/// Raw rows plus what the input schema offers.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub records: Vec<RawRecord>,
    /// Whether the input had a `source_x` column.
    pub has_source: bool,
}

/// A cleaned paper record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paper {
    pub title: String,
    pub publish_time: NaiveDate,
    pub abstract_text: String,
    pub journal: String,
    /// Always `Some` when the dataset has a source column.
    pub source_x: Option<String>,
    pub year: i32,
    pub abstract_word_count: usize,
}

/// The cleaned record set.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub papers: Vec<Paper>,
    pub has_source: bool,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Smallest and largest `year` present, `None` for an empty dataset.
    pub fn year_bounds(&self) -> Option<YearRange> {
        let min = self.papers.iter().map(|p| p.year).min()?;
        let max = self.papers.iter().map(|p| p.year).max()?;
        Some(YearRange::new(min, max))
    }
}

/// Inclusive year interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    /// Bounds are swapped if given out of order.
    pub fn new(start: i32, end: i32) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }
}
