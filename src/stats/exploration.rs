//! Year-filtered view of a dataset.

use super::aggregator::{Aggregates, Aggregator, WordCount};
use crate::config::ExplorerConfig;
use crate::data::{all_papers, filter_by_year, Dataset, Paper, YearRange};
use log::debug;

/// Aggregates and sample rows for one year range.
#[derive(Debug, Clone, PartialEq)]
pub struct Exploration {
    /// `None` when computed over the whole dataset.
    pub range: Option<YearRange>,
    pub aggregates: Aggregates,
    pub cloud_words: Vec<WordCount>,
    /// First rows of the filtered set, in dataset order.
    pub sample: Vec<Paper>,
}

impl Exploration {
    /// Aggregate the papers whose year lies in `range` (inclusive).
    pub fn for_range(dataset: &Dataset, range: YearRange, config: &ExplorerConfig) -> Self {
        let papers = filter_by_year(dataset, range);
        debug!(
            "Recomputed aggregates for {}-{}: {} papers",
            range.start,
            range.end,
            papers.len()
        );
        Self::from_papers(&papers, dataset.has_source, Some(range), config)
    }

    /// Aggregate the whole dataset.
    pub fn unfiltered(dataset: &Dataset, config: &ExplorerConfig) -> Self {
        let papers = all_papers(dataset);
        Self::from_papers(&papers, dataset.has_source, None, config)
    }

    fn from_papers(
        papers: &[&Paper],
        has_source: bool,
        range: Option<YearRange>,
        config: &ExplorerConfig,
    ) -> Self {
        Self {
            range,
            aggregates: Aggregator::compute(
                papers,
                has_source,
                config.top_categories,
                config.top_words,
            ),
            cloud_words: Aggregator::cloud_words(papers, config.word_cloud_words),
            sample: papers
                .iter()
                .take(config.sample_table_rows)
                .map(|&p| p.clone())
                .collect(),
        }
    }
}
