use super::model::{Dataset, Paper, YearRange};

// ---------------------------------------------------------------------------
// Year-range filter
// ---------------------------------------------------------------------------

/// Papers whose `year` lies in `range` (both bounds inclusive), in dataset order.
pub fn filter_by_year(dataset: &Dataset, range: YearRange) -> Vec<&Paper> {
    dataset
        .papers
        .iter()
        .filter(|paper| range.contains(paper.year))
        .collect()
}

/// Every paper, in dataset order. Used where no year filter applies.
pub fn all_papers(dataset: &Dataset) -> Vec<&Paper> {
    dataset.papers.iter().collect()
}
