//! Static Chart Renderer
//! Writes the batch report charts as PNG files with plotters.
//!
//! Charts:
//! 1. Publications by Year: vertical bars, one per year, ascending
//! 2. Top Journals: horizontal bars, highest count on top

use crate::stats::{CategoryCount, YearCount};
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use std::error::Error as StdError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Output size in pixels (8x4 inches at 100 DPI).
pub const CHART_SIZE: (u32, u32) = (800, 400);

const BAR_COLOR: RGBColor = RGBColor(135, 206, 235); // Sky blue
const JOURNAL_COLOR: RGBColor = RGBColor(59, 82, 139); // Viridis blue
const MAX_LABEL_CHARS: usize = 32;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to render chart {path}: {message}")]
    Draw { path: PathBuf, message: String },
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Bar chart of papers per year, overwriting `path`.
    pub fn render_year_counts(counts: &[YearCount], path: &Path) -> Result<(), RenderError> {
        Self::draw_year_counts(counts, path).map_err(|e| RenderError::Draw {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        log::info!("Saved {}", path.display());
        Ok(())
    }

    /// Horizontal bar chart of the top journals, overwriting `path`.
    pub fn render_top_journals(journals: &[CategoryCount], path: &Path) -> Result<(), RenderError> {
        Self::draw_top_categories(journals, "Top 10 Journals", path).map_err(|e| {
            RenderError::Draw {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        log::info!("Saved {}", path.display());
        Ok(())
    }

    fn draw_year_counts(counts: &[YearCount], path: &Path) -> Result<(), Box<dyn StdError>> {
        let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let (first, last) = match (counts.first(), counts.last()) {
            (Some(f), Some(l)) => (f.year, l.year),
            _ => (0, 0),
        };
        let y_max = Self::axis_max(counts.iter().map(|c| c.count));

        let mut chart = ChartBuilder::on(&root)
            .caption("Publications by Year", ("sans-serif", 22))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d((first..last + 1).into_segmented(), 0usize..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Year")
            .y_desc("Number of Papers")
            .x_label_formatter(&|v| match v {
                SegmentValue::Exact(year) | SegmentValue::CenterOf(year) => year.to_string(),
                SegmentValue::Last => String::new(),
            })
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.filled())
                .margin(4)
                .data(counts.iter().map(|c| (c.year, c.count))),
        )?;

        root.present()?;
        Ok(())
    }

    fn draw_top_categories(
        categories: &[CategoryCount],
        title: &str,
        path: &Path,
    ) -> Result<(), Box<dyn StdError>> {
        let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let rows = categories.len().max(1);
        let labels: Vec<String> = categories
            .iter()
            .map(|c| Self::short_label(&c.label))
            .collect();
        let x_max = Self::axis_max(categories.iter().map(|c| c.count));

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 22))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(230)
            .build_cartesian_2d(0usize..x_max, (0usize..rows).into_segmented())?;

        // Row 0 sits at the bottom, so the highest count gets the last row
        let label_formatter = |v: &SegmentValue<usize>| match v {
            SegmentValue::Exact(row) | SegmentValue::CenterOf(row) => rows
                .checked_sub(row + 1)
                .and_then(|rank| labels.get(rank))
                .cloned()
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        };

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc("Number of Papers")
            .y_labels(rows)
            .y_label_formatter(&label_formatter)
            .draw()?;

        chart.draw_series(
            Histogram::horizontal(&chart)
                .style(JOURNAL_COLOR.filled())
                .margin(4)
                .data(
                    categories
                        .iter()
                        .enumerate()
                        .map(|(rank, c)| (rows - 1 - rank, c.count)),
                ),
        )?;

        root.present()?;
        Ok(())
    }

    /// Upper bound for a count axis: 10% headroom, never empty.
    fn axis_max(counts: impl Iterator<Item = usize>) -> usize {
        let max = counts.max().unwrap_or(0);
        max + max / 10 + 1
    }

    fn short_label(label: &str) -> String {
        if label.chars().count() <= MAX_LABEL_CHARS {
            label.to_string()
        } else {
            let truncated: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
            format!("{truncated}…")
        }
    }
}
