//! Chart Viewer Widget
//! Central scrollable panel showing every chart for the selected years.

use crate::charts::{draw_word_cloud, ChartPlotter};
use crate::stats::Exploration;
use egui::{RichText, ScrollArea};

const SECTION_SPACING: f32 = 15.0;

/// Scrollable dashboard body.
pub struct ChartViewer {
    pub exploration: Exploration,
}

impl ChartViewer {
    pub fn new(exploration: Exploration) -> Self {
        Self { exploration }
    }

    pub fn set_exploration(&mut self, exploration: Exploration) {
        self.exploration = exploration;
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let view = &self.exploration;
        let aggregates = &view.aggregates;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(RichText::new("CORD-19 Data Explorer").size(24.0));
                ui.label("Exploring COVID-19 research papers dataset (metadata.csv)");
                ui.add_space(SECTION_SPACING);

                let heading = match view.range {
                    Some(range) => format!(
                        "Papers from {} to {}: {}",
                        range.start, range.end, aggregates.paper_count
                    ),
                    None => format!("Papers: {}", aggregates.paper_count),
                };
                ui.label(RichText::new(heading).size(16.0).strong());
                ChartPlotter::draw_abstract_stats(ui, aggregates.abstract_stats.as_ref());
                ui.add_space(SECTION_SPACING);

                Self::section(ui, "Publications by Year");
                ChartPlotter::draw_year_chart(ui, &aggregates.year_counts);
                ui.add_space(SECTION_SPACING);

                Self::section(ui, "Top 10 Journals Publishing COVID-19 Research");
                ChartPlotter::draw_category_bars(ui, &aggregates.top_journals);
                ui.add_space(SECTION_SPACING);

                Self::section(ui, "Most Frequent Words in Titles (Top 20)");
                ChartPlotter::draw_word_table(ui, &aggregates.top_words);
                ui.add_space(SECTION_SPACING);

                Self::section(ui, "Word Cloud of Paper Titles");
                draw_word_cloud(ui, &view.cloud_words);
                ui.add_space(SECTION_SPACING);

                if let Some(sources) = &aggregates.top_sources {
                    Self::section(ui, "Distribution of Papers by Source");
                    ChartPlotter::draw_category_bars(ui, sources);
                    ui.add_space(SECTION_SPACING);
                }

                Self::section(ui, "Sample of Filtered Data");
                ChartPlotter::draw_sample_table(ui, &view.sample);
                ui.add_space(SECTION_SPACING);
            });
    }

    fn section(ui: &mut egui::Ui, title: &str) {
        ui.separator();
        ui.label(RichText::new(title).size(18.0).strong());
        ui.add_space(6.0);
    }
}
