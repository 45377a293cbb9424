//! Chart Plotter Module
//! Interactive dashboard charts and tables drawn with egui and egui_plot.

use crate::data::Paper;
use crate::stats::{AbstractStats, CategoryCount, WordCount, YearCount};
use egui::{Color32, Rect, RichText, Vec2};
use egui_plot::{Bar, BarChart, Plot};

pub const YEAR_COLOR: Color32 = Color32::from_rgb(135, 206, 235); // Sky blue

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

/// Longest abstract excerpt shown in the sample table.
const ABSTRACT_PREVIEW_CHARS: usize = 160;

/// Draws the dashboard sections.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Bar chart of papers per year.
    pub fn draw_year_chart(ui: &mut egui::Ui, counts: &[YearCount]) {
        let bars: Vec<Bar> = counts
            .iter()
            .map(|c| {
                Bar::new(c.year as f64, c.count as f64)
                    .width(0.8)
                    .name(c.year.to_string())
            })
            .collect();

        Plot::new("publications_by_year")
            .height(260.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Year")
            .y_axis_label("Number of Papers")
            .x_axis_formatter(|mark, _range| {
                // Only whole years get a label
                if (mark.value - mark.value.round()).abs() < 1e-6 {
                    format!("{}", mark.value.round() as i64)
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(YEAR_COLOR).name("Papers"));
            });
    }

    /// Ranked categories as labelled horizontal bars.
    pub fn draw_category_bars(ui: &mut egui::Ui, categories: &[CategoryCount]) {
        if categories.is_empty() {
            ui.label(RichText::new("No papers in range").italics());
            return;
        }

        let color_normal = ui.visuals().text_color();
        let bar_track_bg = ui.visuals().extreme_bg_color;
        let max_count = categories.iter().map(|c| c.count).max().unwrap_or(1).max(1);

        for (i, category) in categories.iter().enumerate() {
            let color = PALETTE[i % PALETTE.len()];

            ui.horizontal(|ui| {
                ui.label(RichText::new(&category.label).color(color_normal).size(12.0));
                ui.label(
                    RichText::new(category.count.to_string())
                        .color(ui.visuals().weak_text_color())
                        .size(11.0),
                );
            });

            let bar_width = ui.available_width() - 16.0;
            let bar_height = 8.0;
            let (bar_rect, _) =
                ui.allocate_exact_size(Vec2::new(bar_width, bar_height), egui::Sense::hover());
            let painter = ui.painter_at(bar_rect);
            painter.rect_filled(bar_rect, 2.0, bar_track_bg);

            let fill_w = bar_width * (category.count as f32 / max_count as f32).clamp(0.0, 1.0);
            if fill_w > 0.5 {
                let fill_rect = Rect::from_min_size(bar_rect.min, Vec2::new(fill_w, bar_height));
                painter.rect_filled(fill_rect, 2.0, color);
            }

            ui.add_space(2.0);
        }
    }

    /// Top title words with their counts.
    pub fn draw_word_table(ui: &mut egui::Ui, words: &[WordCount]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("top_words_table")
                    .striped(true)
                    .min_col_width(40.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("#").strong().size(11.0));
                        ui.label(RichText::new("Word").strong().size(11.0));
                        ui.label(RichText::new("Count").strong().size(11.0));
                        ui.end_row();

                        for (rank, w) in words.iter().enumerate() {
                            ui.label(RichText::new((rank + 1).to_string()).size(11.0));
                            ui.label(RichText::new(&w.word).size(11.0));
                            ui.label(RichText::new(w.count.to_string()).size(11.0));
                            ui.end_row();
                        }
                    });
            });
    }

    /// One-line summary of abstract lengths.
    pub fn draw_abstract_stats(ui: &mut egui::Ui, stats: Option<&AbstractStats>) {
        let text = match stats {
            Some(s) => format!(
                "Abstract length (words): mean {:.1}, median {:.1}, std {:.1}, min {}, max {}",
                s.mean, s.median, s.std_dev, s.min, s.max
            ),
            None => "Abstract length: no papers in range".to_string(),
        };
        ui.label(RichText::new(text).size(12.0));
    }

    /// Title, journal, year and abstract of the sample rows.
    pub fn draw_sample_table(ui: &mut egui::Ui, papers: &[Paper]) {
        if papers.is_empty() {
            ui.label(RichText::new("No papers in range").italics());
            return;
        }

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("sample_table")
                    .striped(true)
                    .num_columns(4)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Title").strong().size(11.0));
                        ui.label(RichText::new("Journal").strong().size(11.0));
                        ui.label(RichText::new("Year").strong().size(11.0));
                        ui.label(RichText::new("Abstract").strong().size(11.0));
                        ui.end_row();

                        for paper in papers {
                            ui.label(RichText::new(&paper.title).size(11.0));
                            ui.label(RichText::new(&paper.journal).size(11.0));
                            ui.label(RichText::new(paper.year.to_string()).size(11.0));
                            ui.label(
                                RichText::new(abstract_preview(&paper.abstract_text)).size(11.0),
                            );
                            ui.end_row();
                        }
                    });
            });
    }
}

/// First characters of an abstract, ellipsised when cut.
pub fn abstract_preview(text: &str) -> String {
    if text.chars().count() <= ABSTRACT_PREVIEW_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(ABSTRACT_PREVIEW_CHARS).collect();
        format!("{}…", head.trim_end())
    }
}
