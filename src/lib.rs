//! Benchmark Viewer - serial vs. parallel timing analysis & interactive charts
//!
//! Reads `serialvsparallel.csv` and `speedup.csv` from the working directory,
//! summarises the timings and shows average, absolute, speedup and efficiency
//! figures.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod report;
pub mod stats;
