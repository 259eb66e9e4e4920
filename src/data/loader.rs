//! CSV Data Loader Module
//! Handles CSV file loading and numeric column extraction using Polars.

use log::{debug, info};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV {}: {source}", path.display())]
    CsvError {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("No data loaded")]
    NoData,
    #[error("Column `{column}` not found")]
    MissingColumn { column: String },
    #[error("Column `{column}` of type {dtype} is not numeric")]
    NotNumeric { column: String, dtype: String },
    #[error("Column `{column}` has a missing or non-numeric value at row {row}")]
    NonNumericValue { column: String, row: usize },
}

/// Loads one CSV file with Polars and hands out its columns as `f64` arrays.
pub struct DataLoader {
    df: Option<DataFrame>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self { df: None }
    }

    /// Load a CSV file using Polars.
    ///
    /// Parse errors are not ignored: a malformed file fails the load.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<&DataFrame, LoaderError> {
        let to_error = |source| LoaderError::CsvError {
            path: file_path.to_path_buf(),
            source,
        };
        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .finish()
            .map_err(to_error)?
            .collect()
            .map_err(to_error)?;

        info!(
            "Loaded {} ({} rows, {} columns)",
            file_path.display(),
            df.height(),
            df.width()
        );

        Ok(&*self.df.insert(df))
    }

    /// Set DataFrame directly (used when the frame is built in memory)
    pub fn set_dataframe(&mut self, df: DataFrame) {
        self.df = Some(df);
    }

    /// Extract a column as `f64` values in row order.
    ///
    /// Integer columns are widened. A missing column, a non-numeric column or
    /// a null cell is an error; no default is ever substituted.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, LoaderError> {
        let df = self.df.as_ref().ok_or(LoaderError::NoData)?;

        let column = df
            .column(name)
            .map_err(|_| LoaderError::MissingColumn {
                column: name.to_string(),
            })?;

        let dtype = column.dtype().clone();
        let castable = matches!(
            dtype,
            DataType::Float32
                | DataType::Float64
                | DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
                | DataType::String
        );
        if !castable {
            return Err(LoaderError::NotNumeric {
                column: name.to_string(),
                dtype: dtype.to_string(),
            });
        }

        let not_numeric = |_| LoaderError::NotNumeric {
            column: name.to_string(),
            dtype: dtype.to_string(),
        };
        let values_f64 = column.cast(&DataType::Float64).map_err(not_numeric)?;
        let values_ca = values_f64.f64().map_err(not_numeric)?;

        let values = values_ca
            .into_iter()
            .enumerate()
            .map(|(row, v)| {
                v.ok_or_else(|| LoaderError::NonNumericValue {
                    column: name.to_string(),
                    row,
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        debug!("Column `{}`: {} values", name, values.len());
        Ok(values)
    }
}
