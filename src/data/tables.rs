//! Benchmark Tables Module
//! Typed views over the two benchmark CSV files.

use super::loader::{DataLoader, LoaderError};
use polars::prelude::DataFrame;
use std::path::Path;

/// Column names of the timing file.
pub const MEASUREMENT_COL: &str = "measurement";
pub const SERIAL_COL: &str = "Ts";
pub const PARALLEL_COL: &str = "Tp";

/// Column names of the speedup file.
pub const CORES_COL: &str = "Cores";
pub const AVG_SPEEDUP_COL: &str = "avgSpeedup";
pub const STDEV_SPEEDUP_COL: &str = "stdevSpeedup";
pub const AVG_EFFICIENCY_COL: &str = "avgEfficiency";
pub const STDEV_EFFICIENCY_COL: &str = "stdevEfficiency";

/// Serial vs. parallel execution times, one entry per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingTable {
    /// Ordinal sample index
    pub measurement: Vec<f64>,
    /// Serial time in seconds
    pub serial: Vec<f64>,
    /// Parallel time in seconds
    pub parallel: Vec<f64>,
}

impl TimingTable {
    /// Read `measurement,Ts,Tp` from a CSV file.
    pub fn load(path: &Path) -> Result<Self, LoaderError> {
        let mut loader = DataLoader::new();
        loader.load_csv(path)?;
        Self::from_loader(&loader)
    }

    pub fn from_dataframe(df: DataFrame) -> Result<Self, LoaderError> {
        let mut loader = DataLoader::new();
        loader.set_dataframe(df);
        Self::from_loader(&loader)
    }

    fn from_loader(loader: &DataLoader) -> Result<Self, LoaderError> {
        Ok(Self {
            measurement: loader.numeric_column(MEASUREMENT_COL)?,
            serial: loader.numeric_column(SERIAL_COL)?,
            parallel: loader.numeric_column(PARALLEL_COL)?,
        })
    }

    pub fn len(&self) -> usize {
        self.measurement.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurement.is_empty()
    }
}

/// Speedup and efficiency per core count.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedupTable {
    pub cores: Vec<f64>,
    pub avg_speedup: Vec<f64>,
    pub stdev_speedup: Vec<f64>,
    pub avg_efficiency: Vec<f64>,
    pub stdev_efficiency: Vec<f64>,
}

impl SpeedupTable {
    /// Read `Cores,avgSpeedup,stdevSpeedup,avgEfficiency,stdevEfficiency` from a CSV file.
    pub fn load(path: &Path) -> Result<Self, LoaderError> {
        let mut loader = DataLoader::new();
        loader.load_csv(path)?;
        Self::from_loader(&loader)
    }

    pub fn from_dataframe(df: DataFrame) -> Result<Self, LoaderError> {
        let mut loader = DataLoader::new();
        loader.set_dataframe(df);
        Self::from_loader(&loader)
    }

    fn from_loader(loader: &DataLoader) -> Result<Self, LoaderError> {
        Ok(Self {
            cores: loader.numeric_column(CORES_COL)?,
            avg_speedup: loader.numeric_column(AVG_SPEEDUP_COL)?,
            stdev_speedup: loader.numeric_column(STDEV_SPEEDUP_COL)?,
            avg_efficiency: loader.numeric_column(AVG_EFFICIENCY_COL)?,
            stdev_efficiency: loader.numeric_column(STDEV_EFFICIENCY_COL)?,
        })
    }

    pub fn len(&self) -> usize {
        self.cores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_timing_table_from_dataframe() {
        let df = df!(
            "measurement" => [1i64, 2],
            "Ts" => [2.0, 4.0],
            "Tp" => [1.0, 2.0]
        )
        .unwrap();

        let table = TimingTable::from_dataframe(df).unwrap();
        assert_eq!(table.measurement, vec![1.0, 2.0]);
        assert_eq!(table.serial, vec![2.0, 4.0]);
        assert_eq!(table.parallel, vec![1.0, 2.0]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_header_only_tables_are_empty() {
        let timing = df!(
            "measurement" => Vec::<i64>::new(),
            "Ts" => Vec::<f64>::new(),
            "Tp" => Vec::<f64>::new()
        )
        .unwrap();
        let speedup = df!(
            "Cores" => Vec::<i64>::new(),
            "avgSpeedup" => Vec::<f64>::new(),
            "stdevSpeedup" => Vec::<f64>::new(),
            "avgEfficiency" => Vec::<f64>::new(),
            "stdevEfficiency" => Vec::<f64>::new()
        )
        .unwrap();

        assert!(TimingTable::from_dataframe(timing).unwrap().is_empty());
        assert!(SpeedupTable::from_dataframe(speedup).unwrap().is_empty());
    }

    #[test]
    fn test_timing_table_ignores_extra_columns() {
        let df = df!(
            "measurement" => [1i64],
            "Ts" => [2.0],
            "Tp" => [1.0],
            "host" => ["node01"]
        )
        .unwrap();

        let table = TimingTable::from_dataframe(df).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_timing_table_without_ts_fails() {
        let df = df!(
            "measurement" => [1i64, 2],
            "Tp" => [1.0, 2.0]
        )
        .unwrap();

        let err = TimingTable::from_dataframe(df).unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn { ref column } if column == SERIAL_COL));
    }

    #[test]
    fn test_speedup_table_from_dataframe() {
        let df = df!(
            "Cores" => [4i64],
            "avgSpeedup" => [3.5],
            "stdevSpeedup" => [0.2],
            "avgEfficiency" => [0.87],
            "stdevEfficiency" => [0.05]
        )
        .unwrap();

        let table = SpeedupTable::from_dataframe(df).unwrap();
        assert_eq!(table.cores, vec![4.0]);
        assert_eq!(table.avg_speedup, vec![3.5]);
        assert_eq!(table.stdev_speedup, vec![0.2]);
        assert_eq!(table.avg_efficiency, vec![0.87]);
        assert_eq!(table.stdev_efficiency, vec![0.05]);
    }

    #[test]
    fn test_speedup_table_without_efficiency_fails() {
        let df = df!(
            "Cores" => [4i64],
            "avgSpeedup" => [3.5],
            "stdevSpeedup" => [0.2]
        )
        .unwrap();

        assert!(matches!(
            SpeedupTable::from_dataframe(df),
            Err(LoaderError::MissingColumn { .. })
        ));
    }
}
