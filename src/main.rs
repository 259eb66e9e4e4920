//! Benchmark Viewer - serial vs. parallel timing analysis & interactive charts

use anyhow::{anyhow, Result};
use bench_viewer::config::AppConfig;
use bench_viewer::gui::BenchmarkApp;
use bench_viewer::report::BenchmarkReport;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::default();
    let report = BenchmarkReport::load(&config)?;

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("Benchmark Viewer"),
        ..Default::default()
    };

    // Blocks until the viewer is closed
    eframe::run_native(
        "Benchmark Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(BenchmarkApp::new(cc, report, &config)))),
    )
    .map_err(|e| anyhow!("chart viewer failed: {e}"))
}
