//! Control Panel Widget
//! Left sidebar holding the year-range filter.

use crate::data::YearRange;
use egui::{Color32, RichText};

/// What changed in the panel during this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    RangeChanged(YearRange),
}

/// Sidebar with an inclusive year range bounded by the data's years.
pub struct ControlPanel {
    /// Smallest and largest year in the cleaned data; `None` when it is empty.
    pub bounds: Option<YearRange>,
    pub range: Option<YearRange>,
    pub total_papers: usize,
    pub status: String,
}

impl ControlPanel {
    /// Start with the full span of the data selected.
    pub fn new(bounds: Option<YearRange>, total_papers: usize) -> Self {
        Self {
            bounds,
            range: bounds,
            total_papers,
            status: "Ready".to_string(),
        }
    }

    /// Move the lower bound, clamped to the data and pulling the upper bound along.
    pub fn set_start(&mut self, start: i32) -> Option<YearRange> {
        let (bounds, range) = (self.bounds?, self.range?);
        let start = start.clamp(bounds.start, bounds.end);
        let updated = YearRange {
            start,
            end: range.end.max(start),
        };
        self.range = Some(updated);
        Some(updated)
    }

    /// Move the upper bound, clamped to the data and pushing the lower bound back.
    pub fn set_end(&mut self, end: i32) -> Option<YearRange> {
        let (bounds, range) = (self.bounds?, self.range?);
        let end = end.clamp(bounds.start, bounds.end);
        let updated = YearRange {
            start: range.start.min(end),
            end,
        };
        self.range = Some(updated);
        Some(updated)
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("CORD-19 Data Explorer")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("COVID-19 research paper metadata")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(RichText::new("Select year range").size(14.0).strong());
        ui.add_space(5.0);

        let (Some(bounds), Some(range)) = (self.bounds, self.range) else {
            ui.label(
                RichText::new("No papers with a usable publish date.")
                    .color(Color32::from_rgb(220, 53, 69)),
            );
            return action;
        };

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let mut start = range.start;
                let mut end = range.end;

                let start_changed = ui
                    .add(egui::Slider::new(&mut start, bounds.start..=bounds.end).text("From"))
                    .changed();
                let end_changed = ui
                    .add(egui::Slider::new(&mut end, bounds.start..=bounds.end).text("To"))
                    .changed();

                let updated = if start_changed {
                    self.set_start(start)
                } else if end_changed {
                    self.set_end(end)
                } else {
                    None
                };
                if let Some(updated) = updated.filter(|u| *u != range) {
                    action = ControlPanelAction::RangeChanged(updated);
                }
            });

        ui.add_space(10.0);
        ui.separator();
        ui.label(
            RichText::new(format!("{} papers after cleaning", self.total_papers))
                .size(12.0)
                .color(Color32::GRAY),
        );
        ui.label(RichText::new(&self.status).size(12.0).color(Color32::GRAY));

        action
    }
}
