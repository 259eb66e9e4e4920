//! Statistics Calculator Module
//! Descriptive statistics over the timing columns.

use crate::data::TimingTable;
use statrs::statistics::Statistics;

/// Mean and spread of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation (divisor N)
    pub std_dev: f64,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            std_dev: f64::NAN,
        }
    }
}

/// Serial and parallel summaries of a timing table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSummary {
    pub serial: Summary,
    pub parallel: Summary,
}

impl TimingSummary {
    pub fn from_table(table: &TimingTable) -> Self {
        Self {
            serial: StatsCalculator::summarize(&table.serial),
            parallel: StatsCalculator::summarize(&table.parallel),
        }
    }

    /// Mean serial time over mean parallel time.
    pub fn observed_speedup(&self) -> f64 {
        self.serial.mean / self.parallel.mean
    }
}

pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute mean and population standard deviation.
    ///
    /// Divisor is N, never N-1.
    pub fn summarize(values: &[f64]) -> Summary {
        if values.is_empty() {
            return Summary::default();
        }

        Summary {
            count: values.len(),
            mean: values.iter().mean(),
            std_dev: values.iter().population_std_dev(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_two_sample_table() {
        let table = TimingTable {
            measurement: vec![1.0, 2.0],
            serial: vec![2.0, 4.0],
            parallel: vec![1.0, 2.0],
        };

        let summary = TimingSummary::from_table(&table);
        assert_eq!(summary.serial.count, 2);
        assert_abs_diff_eq!(summary.serial.mean, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(summary.serial.std_dev, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(summary.parallel.mean, 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(summary.parallel.std_dev, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(summary.observed_speedup(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_population_not_sample_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let summary = StatsCalculator::summarize(&values);

        assert_abs_diff_eq!(summary.mean, 5.0, epsilon = 1e-12);
        // sqrt(32 / 8); the sample estimator would give sqrt(32 / 7)
        assert_abs_diff_eq!(summary.std_dev, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_value_has_zero_spread() {
        let summary = StatsCalculator::summarize(&[1.25]);
        assert_eq!(summary.count, 1);
        assert_abs_diff_eq!(summary.mean, 1.25, epsilon = 1e-12);
        assert_abs_diff_eq!(summary.std_dev, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_is_nan() {
        let summary = StatsCalculator::summarize(&[]);
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
        assert!(summary.std_dev.is_nan());
    }

    #[test]
    fn test_summarize_is_deterministic() {
        let values = [0.913, 0.887, 0.902, 0.951, 0.874];
        assert_eq!(
            StatsCalculator::summarize(&values),
            StatsCalculator::summarize(&values)
        );
    }
}
