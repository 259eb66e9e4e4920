//! Benchmark Viewer Main Application
//! One native window hosting the four figure windows.

use crate::config::AppConfig;
use crate::gui::FigureViewer;
use crate::report::BenchmarkReport;
use log::info;

/// Main application window.
pub struct BenchmarkApp {
    figure_viewer: FigureViewer,
    closing: bool,
}

impl BenchmarkApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, report: BenchmarkReport, config: &AppConfig) -> Self {
        let figure_viewer = FigureViewer::new(report.figures, config);
        info!("Showing figures: {}", figure_viewer.titles().join(", "));

        Self {
            figure_viewer,
            closing: false,
        }
    }
}

impl eframe::App for BenchmarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.figure_viewer.show(ctx, ui);
        });

        // Closing the last figure ends the run
        if !self.closing && self.figure_viewer.open_count() == 0 {
            self.closing = true;
            info!("All figures closed");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
