//! Aggregation Module
//! Grouped counts, top-N tables and title word frequencies over a record set.

use crate::data::Paper;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use statrs::statistics::{Data, Distribution, Median};
use std::collections::{BTreeMap, HashMap};

lazy_static! {
    // Same token definition as Python's `\w+`: Unicode letters, digits and underscore
    static ref WORD_RE: Regex = Regex::new(r"\w+").unwrap();
}

/// Words left out of the word cloud.
const STOPWORDS: [&str; 48] = [
    "a", "about", "after", "against", "among", "an", "and", "are", "as", "at", "based", "be",
    "between", "by", "can", "during", "for", "from", "has", "have", "how", "in", "into", "is",
    "it", "its", "new", "non", "not", "of", "on", "or", "our", "over", "than", "that", "the",
    "their", "this", "to", "under", "using", "via", "was", "what", "with", "within", "without",
];

/// Number of papers published in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Number of papers carrying one category value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Occurrences of one title token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Categorical field that can be ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Journal,
    Source,
}

impl CategoryField {
    fn value<'a>(&self, paper: &'a Paper) -> Option<&'a str> {
        match self {
            CategoryField::Journal => Some(paper.journal.as_str()),
            CategoryField::Source => paper.source_x.as_deref(),
        }
    }
}

/// Summary of `abstract_word_count`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbstractStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: usize,
    pub max: usize,
}

/// Every aggregate the presenters show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregates {
    pub paper_count: usize,
    pub year_counts: Vec<YearCount>,
    pub top_journals: Vec<CategoryCount>,
    /// `None` when the input had no `source_x` column.
    pub top_sources: Option<Vec<CategoryCount>>,
    pub top_words: Vec<WordCount>,
    pub abstract_stats: Option<AbstractStats>,
}

/// Stateless aggregate computations.
pub struct Aggregator;

impl Aggregator {
    /// Papers per year, ascending by year.
    pub fn year_counts(papers: &[&Paper]) -> Vec<YearCount> {
        let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
        for paper in papers {
            *counts.entry(paper.year).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect()
    }

    /// The `n` most frequent values of `field`, by descending count.
    ///
    /// Equal counts keep the order in which the values first appear.
    pub fn top_categories(papers: &[&Paper], field: CategoryField, n: usize) -> Vec<CategoryCount> {
        rank_by_count(papers.iter().filter_map(|p| field.value(p)), n)
            .into_iter()
            .map(|(label, count)| CategoryCount { label, count })
            .collect()
    }

    /// Lower-cased word tokens of a title, in order.
    pub fn title_tokens(title: &str) -> Vec<String> {
        let lowered = title.to_lowercase();
        WORD_RE
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// The `n` most frequent title tokens, ties in first-seen order.
    pub fn word_frequencies(papers: &[&Paper], n: usize) -> Vec<WordCount> {
        let tokens = papers.iter().flat_map(|p| Self::title_tokens(&p.title));
        rank_by_count(tokens, n)
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect()
    }

    /// Title tokens for the word cloud: stop words, single characters and
    /// numbers are skipped.
    pub fn cloud_words(papers: &[&Paper], n: usize) -> Vec<WordCount> {
        let tokens = papers
            .iter()
            .flat_map(|p| Self::title_tokens(&p.title))
            .filter(|t| t.chars().count() > 1)
            .filter(|t| !t.chars().all(|c| c.is_numeric()))
            .filter(|t| !STOPWORDS.contains(&t.as_str()));
        rank_by_count(tokens, n)
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect()
    }

    /// Descriptive statistics of abstract lengths, `None` without papers.
    pub fn abstract_stats(papers: &[&Paper]) -> Option<AbstractStats> {
        if papers.is_empty() {
            return None;
        }
        let lengths: Vec<usize> = papers.iter().map(|p| p.abstract_word_count).collect();
        let min = lengths.iter().copied().min().unwrap_or(0);
        let max = lengths.iter().copied().max().unwrap_or(0);

        let data = Data::new(lengths.iter().map(|&l| l as f64).collect::<Vec<f64>>());
        let mean = data.mean().unwrap_or(0.0);
        let std_dev = data.std_dev().filter(|s| s.is_finite()).unwrap_or(0.0);
        let median = data.median();

        Some(AbstractStats {
            count: lengths.len(),
            mean,
            median,
            std_dev,
            min,
            max,
        })
    }

    /// Compute every aggregate for one record set.
    pub fn compute(
        papers: &[&Paper],
        has_source: bool,
        top_categories: usize,
        top_words: usize,
    ) -> Aggregates {
        let top_sources = has_source
            .then(|| Self::top_categories(papers, CategoryField::Source, top_categories));

        Aggregates {
            paper_count: papers.len(),
            year_counts: Self::year_counts(papers),
            top_journals: Self::top_categories(papers, CategoryField::Journal, top_categories),
            top_sources,
            top_words: Self::word_frequencies(papers, top_words),
            abstract_stats: Self::abstract_stats(papers),
        }
    }
}

/// Count items and keep the `n` most frequent, ties in first-seen order.
fn rank_by_count<I, S>(items: I, n: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for item in items {
        let item = item.as_ref();
        match positions.get(item) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(item.to_string(), counts.len());
                counts.push((item.to_string(), 1));
            }
        }
    }

    // Stable sort keeps insertion order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn paper(title: &str, year: i32, journal: &str, source: Option<&str>, words: usize) -> Paper {
        Paper {
            title: title.to_string(),
            publish_time: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            abstract_text: String::new(),
            journal: journal.to_string(),
            source_x: source.map(str::to_string),
            year,
            abstract_word_count: words,
        }
    }

    fn sample() -> Vec<Paper> {
        vec![
            paper("Covid Study A", 2020, "Nature", Some("PMC"), 10),
            paper("Flu Research", 2019, "Unknown", Some("WHO"), 0),
            paper("COVID-19 transmission study", 2020, "Cell", Some("PMC"), 20),
            paper("Covid vaccines", 2021, "Nature", Some("Medline"), 30),
        ]
    }

    #[test]
    fn test_year_counts_sorted_by_year() {
        let papers = sample();
        let refs: Vec<&Paper> = papers.iter().collect();
        assert_eq!(
            Aggregator::year_counts(&refs),
            vec![
                YearCount { year: 2019, count: 1 },
                YearCount { year: 2020, count: 2 },
                YearCount { year: 2021, count: 1 },
            ]
        );
    }

    #[test]
    fn test_top_categories_orders_by_count_then_first_seen() {
        let papers = sample();
        let refs: Vec<&Paper> = papers.iter().collect();
        let journals = Aggregator::top_categories(&refs, CategoryField::Journal, 10);
        let labels: Vec<&str> = journals.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Nature", "Unknown", "Cell"]);
        assert_eq!(journals[0].count, 2);
    }

    #[test]
    fn test_top_categories_truncates_to_n() {
        let papers: Vec<Paper> = (0..15)
            .map(|i| paper("t", 2020, &format!("J{i}"), None, 0))
            .collect();
        let refs: Vec<&Paper> = papers.iter().collect();
        let top = Aggregator::top_categories(&refs, CategoryField::Journal, 10);
        assert_eq!(top.len(), 10);
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_title_tokens_match_word_regex() {
        assert_eq!(
            Aggregator::title_tokens("COVID-19: A Study_of SARS-CoV-2!"),
            vec!["covid", "19", "a", "study_of", "sars", "cov", "2"]
        );
        assert_eq!(Aggregator::title_tokens("Épidémie à Wuhan"), vec!["épidémie", "à", "wuhan"]);
        assert!(Aggregator::title_tokens("?!").is_empty());
    }

    #[test]
    fn test_word_frequencies_ties_follow_first_occurrence() {
        let papers = sample();
        let refs: Vec<&Paper> = papers.iter().collect();
        let words = Aggregator::word_frequencies(&refs, 20);

        assert_eq!(words[0], WordCount { word: "covid".into(), count: 3 });
        assert_eq!(words[1], WordCount { word: "study".into(), count: 2 });
        // Remaining words all occur once, in title order
        let rest: Vec<&str> = words[2..].iter().map(|w| w.word.as_str()).collect();
        assert_eq!(rest, vec!["a", "flu", "research", "19", "transmission", "vaccines"]);
    }

    #[test]
    fn test_word_frequencies_limited_and_non_increasing() {
        let titles: Vec<String> = (0..40).map(|i| format!("word{i} common")).collect();
        let papers: Vec<Paper> = titles.iter().map(|t| paper(t, 2020, "J", None, 0)).collect();
        let refs: Vec<&Paper> = papers.iter().collect();
        let words = Aggregator::word_frequencies(&refs, 20);

        assert_eq!(words.len(), 20);
        assert_eq!(words[0].word, "common");
        assert_eq!(words[1].word, "word0");
        assert!(words.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_cloud_words_skip_stopwords_and_numbers() {
        let papers = sample();
        let refs: Vec<&Paper> = papers.iter().collect();
        let cloud = Aggregator::cloud_words(&refs, 100);
        let words: Vec<&str> = cloud.iter().map(|w| w.word.as_str()).collect();
        assert!(!words.contains(&"a"));
        assert!(!words.contains(&"19"));
        assert_eq!(words[0], "covid");
    }

    #[test]
    fn test_abstract_stats() {
        let papers = sample();
        let refs: Vec<&Paper> = papers.iter().collect();
        let stats = Aggregator::abstract_stats(&refs).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.min, 0);
        assert_eq!(stats.max, 30);
        assert!((stats.mean - 15.0).abs() < 1e-9);
        assert!((stats.median - 15.0).abs() < 1e-9);
        assert!(Aggregator::abstract_stats(&[]).is_none());
    }

    #[test]
    fn test_compute_is_idempotent_and_respects_source_capability() {
        let papers = sample();
        let refs: Vec<&Paper> = papers.iter().collect();

        let first = Aggregator::compute(&refs, true, 10, 20);
        let second = Aggregator::compute(&refs, true, 10, 20);
        assert_eq!(first, second);
        let sources = first.top_sources.unwrap();
        assert_eq!(sources[0], CategoryCount { label: "PMC".into(), count: 2 });

        let without = Aggregator::compute(&refs, false, 10, 20);
        assert!(without.top_sources.is_none());
    }

    #[test]
    fn test_empty_record_set() {
        let aggregates = Aggregator::compute(&[], true, 10, 20);
        assert_eq!(aggregates.paper_count, 0);
        assert!(aggregates.year_counts.is_empty());
        assert!(aggregates.top_journals.is_empty());
        assert_eq!(aggregates.top_sources, Some(Vec::new()));
        assert!(aggregates.top_words.is_empty());
    }
}
