//! CORD-19 Explorer Main Application
//! Main window with the year filter sidebar and the chart viewer.

use crate::config::ExplorerConfig;
use crate::data::{Dataset, YearRange};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::stats::Exploration;
use egui::SidePanel;

/// Main application window.
///
/// Owns the cleaned dataset for the whole session; aggregates are recomputed
/// synchronously whenever the year range changes.
pub struct ExplorerApp {
    config: ExplorerConfig,
    dataset: Dataset,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl ExplorerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, dataset: Dataset, config: ExplorerConfig) -> Self {
        let bounds = dataset.year_bounds();
        let exploration = match bounds {
            Some(range) => Exploration::for_range(&dataset, range, &config),
            None => Exploration::unfiltered(&dataset, &config),
        };

        Self {
            control_panel: ControlPanel::new(bounds, dataset.len()),
            chart_viewer: ChartViewer::new(exploration),
            config,
            dataset,
        }
    }

    /// Recompute every aggregate for the new range
    fn handle_range_changed(&mut self, range: YearRange) {
        let exploration = Exploration::for_range(&self.dataset, range, &self.config);
        self.control_panel.set_status(&format!(
            "{} papers in {}-{}",
            exploration.aggregates.paper_count, range.start, range.end
        ));
        self.chart_viewer.set_exploration(exploration);
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                let action = self.control_panel.show(ui);

                match action {
                    ControlPanelAction::RangeChanged(range) => self.handle_range_changed(range),
                    ControlPanelAction::None => {}
                }
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
