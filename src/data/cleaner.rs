//! Data Cleaner Module
//! Turns raw rows into cleaned `Paper` records.

use super::model::{Dataset, Paper, RawRecord, RawTable, UNKNOWN};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Full-date layouts tried in order.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%Y %b %d",
    "%d %B %Y",
    "%B %d, %Y",
];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Stateless cleaning operations.
pub struct DataCleaner;

impl DataCleaner {
    /// Clean a raw table.
    ///
    /// Rows without a parsable `publish_time` or a title are dropped; the
    /// survivors get `year`, `abstract_word_count` and sentinel-filled
    /// `journal` / `source_x`.
    pub fn clean(raw: RawTable) -> Dataset {
        let total = raw.records.len();
        let has_source = raw.has_source;

        let papers: Vec<Paper> = raw
            .records
            .into_iter()
            .filter_map(|record| Self::clean_record(record, has_source))
            .collect();

        let dropped = total - papers.len();
        if dropped > 0 {
            log::warn!("Dropped {dropped} of {total} rows missing a title or publish date");
        }
        log::info!("Cleaned dataset has {} papers", papers.len());

        Dataset { papers, has_source }
    }

    fn clean_record(record: RawRecord, has_source: bool) -> Option<Paper> {
        let publish_time = record.publish_time.as_deref().and_then(parse_publish_time)?;
        let title = record.title?;

        let abstract_text = record.abstract_text.unwrap_or_default();
        let abstract_word_count = word_count(&abstract_text);
        let journal = record.journal.unwrap_or_else(|| UNKNOWN.to_string());
        let source_x = if has_source {
            Some(record.source_x.unwrap_or_else(|| UNKNOWN.to_string()))
        } else {
            None
        };

        Some(Paper {
            title,
            year: publish_time.year(),
            publish_time,
            abstract_text,
            journal,
            source_x,
            abstract_word_count,
        })
    }
}

/// Parse a free-form publication date. Unrecognised input yields `None`.
///
/// Partial dates fall back to the first day of the month or year.
pub fn parse_publish_time(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }

    // Year-month forms: "2020-03", "2020 Mar"
    for format in ["%Y-%m-%d", "%Y %b %d"] {
        let padded = if format.contains('-') {
            format!("{value}-01")
        } else {
            format!("{value} 01")
        };
        if let Ok(date) = NaiveDate::parse_from_str(&padded, format) {
            return Some(date);
        }
    }

    // Bare year, possibly read as a float ("2020.0")
    let year_text = value.strip_suffix(".0").unwrap_or(value);
    if year_text.len() == 4 && year_text.bytes().all(|b| b.is_ascii_digit()) {
        let year: i32 = year_text.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    None
}

/// Number of whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
