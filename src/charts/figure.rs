//! Figure Model
//! Plain-data description of the four benchmark figures. The plotter turns
//! these into egui_plot items; keeping them GUI-free makes the plotted
//! coordinates checkable in tests.

use crate::config::FigureSize;
use crate::data::{SpeedupTable, TimingTable};
use crate::stats::TimingSummary;

pub const SERIAL_LABEL: &str = "Serial time";
pub const PARALLEL_LABEL: &str = "Parallel time";

/// Nominal x-position of the average-time marks.
pub const AVERAGE_X: f64 = 1.0;

/// One plotted point; `err` is the error bar half-length (0 for plain lines).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorPoint {
    pub x: f64,
    pub y: f64,
    pub err: f64,
}

impl ErrorPoint {
    pub fn new(x: f64, y: f64, err: f64) -> Self {
        Self { x, y, err }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Polyline through the points
    Line,
    /// Polyline with an error bar at every point
    LineWithErrors,
    /// Dash marker with an error bar, no connecting line
    PointWithError,
}

impl Mark {
    pub fn has_error_bars(self) -> bool {
        matches!(self, Mark::LineWithErrors | Mark::PointWithError)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub mark: Mark,
    pub points: Vec<ErrorPoint>,
}

impl Series {
    /// Plain line from paired x/y columns.
    pub fn line(name: &str, xs: &[f64], ys: &[f64]) -> Self {
        Self {
            name: name.to_string(),
            mark: Mark::Line,
            points: xs
                .iter()
                .zip(ys)
                .map(|(&x, &y)| ErrorPoint::new(x, y, 0.0))
                .collect(),
        }
    }

    /// Line with error bars from paired x/y/error columns.
    pub fn line_with_errors(name: &str, xs: &[f64], ys: &[f64], errs: &[f64]) -> Self {
        Self {
            name: name.to_string(),
            mark: Mark::LineWithErrors,
            points: xs
                .iter()
                .zip(ys)
                .zip(errs)
                .map(|((&x, &y), &err)| ErrorPoint::new(x, y, err))
                .collect(),
        }
    }

    pub fn point_with_error(name: &str, point: ErrorPoint) -> Self {
        Self {
            name: name.to_string(),
            mark: Mark::PointWithError,
            points: vec![point],
        }
    }
}

/// A single chart: one window in the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub size: FigureSize,
    pub series: Vec<Series>,
    /// Extra x values the axis must include
    pub include_x: Vec<f64>,
}

impl Figure {
    fn new(title: &str, x_label: &str, y_label: &str, size: FigureSize) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            size,
            series: Vec::new(),
            include_x: Vec::new(),
        }
    }

    /// Serial and parallel mean, each with a one standard deviation bar.
    pub fn average_time(summary: &TimingSummary, size: FigureSize) -> Self {
        let mut figure = Self::new("AVG data", "Number of samples", "Time (s)", size);
        figure.series.push(Series::point_with_error(
            SERIAL_LABEL,
            ErrorPoint::new(AVERAGE_X, summary.serial.mean, summary.serial.std_dev),
        ));
        figure.series.push(Series::point_with_error(
            PARALLEL_LABEL,
            ErrorPoint::new(AVERAGE_X, summary.parallel.mean, summary.parallel.std_dev),
        ));
        figure.include_x = vec![AVERAGE_X - 0.1, AVERAGE_X + 0.1];
        figure
    }

    /// Every serial and parallel sample against its measurement index.
    pub fn absolute_time(table: &TimingTable, size: FigureSize) -> Self {
        let mut figure = Self::new("Absolute data", "Number of samples", "Time (s)", size);
        figure
            .series
            .push(Series::line(SERIAL_LABEL, &table.measurement, &table.serial));
        figure
            .series
            .push(Series::line(PARALLEL_LABEL, &table.measurement, &table.parallel));
        figure
    }

    pub fn speedup(table: &SpeedupTable, size: FigureSize) -> Self {
        let mut figure = Self::new("Speedup", "Number of cores", "Speedup", size);
        figure.series.push(Series::line_with_errors(
            "Speedup",
            &table.cores,
            &table.avg_speedup,
            &table.stdev_speedup,
        ));
        figure
    }

    pub fn efficiency(table: &SpeedupTable, size: FigureSize) -> Self {
        let mut figure = Self::new("Efficiency", "Number of cores", "Efficiency", size);
        figure.series.push(Series::line_with_errors(
            "Efficiency",
            &table.cores,
            &table.avg_efficiency,
            &table.stdev_efficiency,
        ));
        figure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Summary;

    const WIDE: FigureSize = FigureSize::new(12.0, 4.0);
    const NARROW: FigureSize = FigureSize::new(1.0, 4.0);

    fn single_row_speedup() -> SpeedupTable {
        SpeedupTable {
            cores: vec![4.0],
            avg_speedup: vec![3.5],
            stdev_speedup: vec![0.2],
            avg_efficiency: vec![0.87],
            stdev_efficiency: vec![0.05],
        }
    }

    #[test]
    fn test_efficiency_single_point() {
        let figure = Figure::efficiency(&single_row_speedup(), WIDE);

        assert_eq!(figure.series.len(), 1);
        let series = &figure.series[0];
        assert_eq!(series.mark, Mark::LineWithErrors);
        assert_eq!(series.points, vec![ErrorPoint::new(4.0, 0.87, 0.05)]);
        assert_eq!(figure.x_label, "Number of cores");
        assert_eq!(figure.y_label, "Efficiency");
    }

    #[test]
    fn test_speedup_uses_speedup_columns() {
        let figure = Figure::speedup(&single_row_speedup(), WIDE);
        assert_eq!(figure.series[0].points, vec![ErrorPoint::new(4.0, 3.5, 0.2)]);
        assert_eq!(figure.series[0].name, "Speedup");
    }

    #[test]
    fn test_average_time_marks() {
        let summary = TimingSummary {
            serial: Summary {
                count: 2,
                mean: 3.0,
                std_dev: 1.0,
            },
            parallel: Summary {
                count: 2,
                mean: 1.5,
                std_dev: 0.5,
            },
        };

        let figure = Figure::average_time(&summary, NARROW);
        assert_eq!(figure.size, NARROW);
        assert_eq!(figure.series.len(), 2);
        assert_eq!(figure.series[0].name, SERIAL_LABEL);
        assert_eq!(figure.series[0].mark, Mark::PointWithError);
        assert_eq!(figure.series[0].points, vec![ErrorPoint::new(1.0, 3.0, 1.0)]);
        assert_eq!(figure.series[1].name, PARALLEL_LABEL);
        assert_eq!(figure.series[1].points, vec![ErrorPoint::new(1.0, 1.5, 0.5)]);
    }

    #[test]
    fn test_absolute_time_follows_measurement_order() {
        let table = TimingTable {
            measurement: vec![1.0, 2.0, 3.0],
            serial: vec![2.0, 4.0, 3.0],
            parallel: vec![1.0, 2.0, 1.5],
        };

        let figure = Figure::absolute_time(&table, WIDE);
        let serial: Vec<[f64; 2]> = figure.series[0]
            .points
            .iter()
            .map(|p| [p.x, p.y])
            .collect();
        assert_eq!(serial, vec![[1.0, 2.0], [2.0, 4.0], [3.0, 3.0]]);
        assert!(!figure.series[0].mark.has_error_bars());
        assert_eq!(figure.series[1].points[2], ErrorPoint::new(3.0, 1.5, 0.0));
    }
}
