//! Benchmark report: load both tables, summarise the timings, build the figures.

use crate::charts::Figure;
use crate::config::AppConfig;
use crate::data::{SpeedupTable, TimingTable};
use crate::stats::TimingSummary;
use anyhow::{Context, Result};
use log::{info, warn};

/// Everything the viewer shows, computed once up front.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub timing: TimingTable,
    pub speedup: SpeedupTable,
    pub summary: TimingSummary,
    /// Average, absolute, speedup and efficiency figures, in that order
    pub figures: Vec<Figure>,
}

impl BenchmarkReport {
    pub fn load(config: &AppConfig) -> Result<Self> {
        let timing = TimingTable::load(&config.serial_csv)
            .with_context(|| format!("reading timings from {}", config.serial_csv.display()))?;
        let speedup = SpeedupTable::load(&config.speedup_csv)
            .with_context(|| format!("reading speedup from {}", config.speedup_csv.display()))?;

        Ok(Self::build(timing, speedup, config))
    }

    pub fn build(timing: TimingTable, speedup: SpeedupTable, config: &AppConfig) -> Self {
        if timing.is_empty() {
            warn!("Timing table has no samples; averages will be NaN");
        }
        if speedup.is_empty() {
            warn!("Speedup table has no core configurations");
        }

        let summary = TimingSummary::from_table(&timing);
        info!(
            "Serial: mean {:.6} s, std {:.6} s over {} samples",
            summary.serial.mean, summary.serial.std_dev, summary.serial.count
        );
        info!(
            "Parallel: mean {:.6} s, std {:.6} s over {} samples",
            summary.parallel.mean, summary.parallel.std_dev, summary.parallel.count
        );
        info!("Observed speedup: {:.3}", summary.observed_speedup());
        info!("Speedup table: {} core configurations", speedup.len());

        let figures = vec![
            Figure::average_time(&summary, config.narrow_figure),
            Figure::absolute_time(&timing, config.wide_figure),
            Figure::speedup(&speedup, config.wide_figure),
            Figure::efficiency(&speedup, config.wide_figure),
        ];

        Self {
            timing,
            speedup,
            summary,
            figures,
        }
    }
}
