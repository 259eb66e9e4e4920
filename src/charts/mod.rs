//! Charts module - figure models and rendering

mod figure;
mod plotter;

pub use figure::{ErrorPoint, Figure, Mark, Series, PARALLEL_LABEL, SERIAL_LABEL};
pub use plotter::ChartPlotter;
