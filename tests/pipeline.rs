/// End-to-end pipeline tests.
///
/// These run the real Polars loader against CSV files written to a temporary
/// directory, then clean and aggregate the result the same way the binaries do.
use cord19_explorer::config::ExplorerConfig;
use cord19_explorer::data::{load_dataset, DataLoader, LoaderError, YearRange, UNKNOWN};
use cord19_explorer::sample::{write_sample, SampleError};
use cord19_explorer::stats::{Exploration, YearCount};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

const METADATA: &str = "\
cord_uid,title,publish_time,abstract,journal,source_x
a1,Covid Study A,2020-03-01,Coronavirus spread in Wuhan,Nature,PMC
a2,Flu Research,2019-11-01,,,WHO
a3,,2021-01-01,Missing title,Cell,PMC
a4,\"Covid vaccines, a review\",2021,\"Multi-line
abstract text\",Nature,
a5,Undated work,not a date,Nothing,Lancet,PMC
";

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn years(counts: &[YearCount]) -> Vec<(i32, usize)> {
    counts.iter().map(|c| (c.year, c.count)).collect()
}

// ── Loader + cleaner ────────────────────────────────────────────────────────

#[test]
fn cleaning_drops_rows_without_title_or_date() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "metadata.csv", METADATA);

    let dataset = load_dataset(&path).unwrap();
    let titles: Vec<&str> = dataset.papers.iter().map(|p| p.title.as_str()).collect();

    assert_eq!(titles, vec!["Covid Study A", "Flu Research", "Covid vaccines, a review"]);
    assert!(dataset.has_source);
}

#[test]
fn cleaning_fills_sentinels_and_derives_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "metadata.csv", METADATA);
    let dataset = load_dataset(&path).unwrap();

    let flu = &dataset.papers[1];
    assert_eq!(flu.journal, UNKNOWN);
    assert_eq!(flu.abstract_word_count, 0);
    assert_eq!(flu.year, 2019);

    let review = &dataset.papers[2];
    assert_eq!(review.year, 2021);
    assert_eq!(review.source_x.as_deref(), Some(UNKNOWN));
    assert_eq!(review.abstract_word_count, 3);
}

#[test]
fn end_to_end_year_counts() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "metadata.csv",
        "title,publish_time,abstract,journal\n\
         Covid Study A,2020-03-01,,Nature\n\
         Flu Research,2019-11-01,,\n\
         ,2021-01-01,,Cell\n",
    );

    let dataset = load_dataset(&path).unwrap();
    assert_eq!(dataset.len(), 2);
    assert!(!dataset.has_source);
    assert_eq!(dataset.papers[1].journal, UNKNOWN);

    let view = Exploration::unfiltered(&dataset, &ExplorerConfig::default());
    assert_eq!(years(&view.aggregates.year_counts), vec![(2019, 1), (2020, 1)]);
    assert!(view.aggregates.top_sources.is_none());
}

#[test]
fn year_only_publish_times_are_accepted() {
    // An all-integer column is inferred as numeric; it must still parse
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "metadata.csv",
        "title,publish_time,abstract,journal\nA,2019,,J\nB,2020,,J\nC,2020,,J\n",
    );

    let dataset = load_dataset(&path).unwrap();
    let view = Exploration::unfiltered(&dataset, &ExplorerConfig::default());
    assert_eq!(years(&view.aggregates.year_counts), vec![(2019, 1), (2020, 2)]);
}

#[test]
fn late_dates_after_a_run_of_bare_years_are_kept() {
    let dir = TempDir::new().unwrap();
    let mut body = String::from("title,publish_time,abstract,journal\n");
    for i in 0..10_000 {
        body.push_str(&format!("Early {i},2020,,J\n"));
    }
    for i in 0..50 {
        body.push_str(&format!("Late {i},2021-05-01,,J\n"));
    }
    let path = write_csv(&dir, "metadata.csv", &body);

    let mut loader = DataLoader::new();
    loader.load_csv(&path).unwrap();
    let publish_nulls = loader
        .describe()
        .unwrap()
        .null_counts
        .into_iter()
        .find(|(name, _)| name == "publish_time")
        .map(|(_, n)| n);
    assert_eq!(publish_nulls, Some(0));

    let dataset = load_dataset(&path).unwrap();
    assert_eq!(dataset.len(), 10_050);
    let view = Exploration::unfiltered(&dataset, &ExplorerConfig::default());
    assert_eq!(years(&view.aggregates.year_counts), vec![(2020, 10_000), (2021, 50)]);
}

#[test]
fn text_titles_after_a_run_of_numeric_titles_are_kept() {
    let dir = TempDir::new().unwrap();
    let mut body = String::from("title,publish_time,abstract,journal\n");
    for i in 0..10_000 {
        body.push_str(&format!("{i},2020-01-01,,J\n"));
    }
    for i in 0..10 {
        body.push_str(&format!("Covid paper {i},2020-01-01,,J\n"));
    }
    let path = write_csv(&dir, "metadata.csv", &body);

    let dataset = load_dataset(&path).unwrap();
    assert_eq!(dataset.len(), 10_010);
    assert_eq!(dataset.papers[0].title, "0");
    assert_eq!(dataset.papers[10_009].title, "Covid paper 9");
}

#[test]
fn empty_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "metadata.csv", "");

    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, LoaderError::Parse(_)), "unexpected error: {err}");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_dataset(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, LoaderError::Io { .. }), "unexpected error: {err}");
}

#[test]
fn missing_required_column_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "metadata.csv", "title,abstract,journal\nA,,J\n");

    let err = load_dataset(&path).unwrap_err();
    match err {
        LoaderError::MissingColumn(col) => assert_eq!(col, "publish_time"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn describe_reports_shape_and_nulls() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "metadata.csv", METADATA);

    let mut loader = DataLoader::new();
    loader.load_csv(&path).unwrap();
    let summary = loader.describe().unwrap();

    assert_eq!(summary.rows, 5);
    assert_eq!(summary.columns, 6);
    let title_nulls = summary
        .null_counts
        .iter()
        .find(|(name, _)| name == "title")
        .map(|(_, n)| *n);
    assert_eq!(title_nulls, Some(1));
    assert!(summary.to_string().starts_with("Data shape: (5, 6)"));
}

// ── Filtered exploration ────────────────────────────────────────────────────

#[test]
fn year_filter_includes_both_bounds() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "metadata.csv", METADATA);
    let dataset = load_dataset(&path).unwrap();
    let config = ExplorerConfig::default();

    let only_2019 = Exploration::for_range(&dataset, YearRange::new(2019, 2019), &config);
    assert_eq!(only_2019.aggregates.paper_count, 1);
    assert_eq!(only_2019.sample[0].title, "Flu Research");

    let to_2021 = Exploration::for_range(&dataset, YearRange::new(2020, 2021), &config);
    assert_eq!(to_2021.aggregates.paper_count, 2);
    assert_eq!(to_2021.aggregates.top_journals[0].label, "Nature");
    assert_eq!(to_2021.aggregates.top_words[0].word, "covid");
}

// ── Sampler ─────────────────────────────────────────────────────────────────

fn header_line(path: &Path) -> String {
    let text = fs::read_to_string(path).unwrap();
    text.lines().next().unwrap_or_default().to_string()
}

#[test]
fn sample_keeps_header_and_first_rows() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "metadata.csv", METADATA);
    let output = dir.path().join("metadata_sample.csv");

    let summary = write_sample(&input, &output, 4).unwrap();
    assert_eq!(summary.rows, 4);
    assert_eq!(header_line(&output), header_line(&input));

    let written = fs::read_to_string(&output).unwrap();
    assert!(METADATA.starts_with(&written));
    assert!(written.ends_with("abstract text\",Nature,\n"));

    // The sample itself loads as a normal metadata file
    let dataset = load_dataset(&output).unwrap();
    assert_eq!(dataset.len(), 3);
}

#[test]
fn sample_with_large_limit_copies_everything() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "metadata.csv", METADATA);
    let output = dir.path().join("metadata_sample.csv");

    let summary = write_sample(&input, &output, 10_000).unwrap();
    assert_eq!(summary.rows, 5);
    assert_eq!(fs::read(&output).unwrap(), METADATA.as_bytes());
}

#[test]
fn sample_overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "metadata.csv", METADATA);
    let output = write_csv(&dir, "metadata_sample.csv", "stale contents that are long\n".repeat(50).as_str());

    write_sample(&input, &output, 1).unwrap();
    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 2);
    assert!(!written.contains("stale"));
}

#[test]
fn sample_of_missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = write_sample(
        &dir.path().join("nope.csv"),
        &dir.path().join("out.csv"),
        10,
    )
    .unwrap_err();
    assert!(matches!(err, SampleError::Io { .. }));
}
