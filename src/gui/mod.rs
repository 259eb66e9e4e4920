//! GUI module - figure windows

mod app;
mod figure_viewer;

pub use app::BenchmarkApp;
pub use figure_viewer::FigureViewer;
