use crate::error::{EvocastError, Result};
use polars::prelude::*;

pub struct DataValidator;

impl DataValidator {
    /// Validate that a loaded DataFrame is usable for forecasting.
    ///
    /// Structural problems (missing columns, non-numeric types, too few
    /// points, non-finite values) are hard errors; nulls and year gaps are
    /// logged and tolerated.
    pub fn validate_series(df: &DataFrame, min_points: usize) -> Result<()> {
        Self::validate_columns(df)?;
        Self::validate_minimum_points(df, min_points)?;

        let null_report = Self::check_nulls(df)?;
        if !null_report.is_empty() {
            log::warn!("Null values detected: {:?}", null_report);
        }

        Self::validate_finite_values(df)?;
        Self::check_year_gaps(df)?;

        Ok(())
    }

    fn validate_columns(df: &DataFrame) -> Result<()> {
        for (name, expected) in [("year", "integer"), ("value", "numeric")] {
            let column = df.column(name).map_err(|_| {
                EvocastError::DataLoading(format!("Missing required column: {}", name))
            })?;

            let numeric = matches!(
                column.dtype(),
                DataType::Float64
                    | DataType::Float32
                    | DataType::Int64
                    | DataType::Int32
                    | DataType::UInt64
                    | DataType::UInt32
            );
            if !numeric {
                return Err(EvocastError::DataLoading(format!(
                    "Column '{}' must be {}, found {:?}",
                    name,
                    expected,
                    column.dtype()
                )));
            }
        }
        Ok(())
    }

    /// Check for minimum required observations
    pub fn validate_minimum_points(df: &DataFrame, min_points: usize) -> Result<()> {
        if df.height() < min_points {
            return Err(EvocastError::DataLoading(format!(
                "Insufficient data: {} points, minimum {} required",
                df.height(),
                min_points
            )));
        }
        Ok(())
    }

    /// Check for null values in any column
    pub fn check_nulls(df: &DataFrame) -> Result<Vec<(String, usize)>> {
        let mut null_report = Vec::new();

        for col_name in df.get_column_names() {
            let column = df.column(col_name)?;
            let null_count = column.null_count();
            if null_count > 0 {
                null_report.push((col_name.to_string(), null_count));
            }
        }

        Ok(null_report)
    }

    fn validate_finite_values(df: &DataFrame) -> Result<()> {
        let value = df.column("value")?.cast(&DataType::Float64)?;
        let value = value.f64()?;

        for (i, v) in value.into_iter().enumerate() {
            if let Some(v) = v {
                if !v.is_finite() {
                    return Err(EvocastError::DataLoading(format!(
                        "Non-finite value at row {}: {}",
                        i, v
                    )));
                }
            }
        }
        Ok(())
    }

    fn check_year_gaps(df: &DataFrame) -> Result<()> {
        let year = df.column("year")?.cast(&DataType::Int32)?;
        let year = year.i32()?;

        let years: Vec<i32> = year.into_iter().flatten().collect();
        for window in years.windows(2) {
            if window[1] != window[0] + 1 {
                log::warn!(
                    "Year sequence is not consecutive between {} and {}",
                    window[0],
                    window[1]
                );
            }
        }
        Ok(())
    }
}
