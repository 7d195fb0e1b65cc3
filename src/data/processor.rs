//! Data Processor Module
//! Handles data cleaning and transformation of sales record sets.

use polars::prelude::*;
use thiserror::Error;
use tracing::info;

use super::schema::{SalesFrame, PRICE, QUANTITY, TOTAL_AMOUNT};

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Handles data cleaning and transformation operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Drop every row holding a null in any column. Float NaN counts as missing.
    ///
    /// Surviving rows keep their relative order.
    pub fn drop_incomplete_rows(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let mut mask = BooleanChunked::full("complete".into(), true, df.height());

        for column in df.get_columns() {
            mask = &mask & &column.is_not_null();
            if matches!(column.dtype(), DataType::Float32 | DataType::Float64) {
                let not_nan = column.as_materialized_series().is_not_nan()?;
                mask = &mask & &not_nan;
            }
        }

        Ok(df.filter(&mask)?)
    }

    /// Append `total_amount = quantity * price`.
    ///
    /// An existing `total_amount` column is replaced in place.
    pub fn with_total_amount(df: DataFrame) -> Result<DataFrame, ProcessorError> {
        let df = df
            .lazy()
            .with_column((col(QUANTITY) * col(PRICE)).alias(TOTAL_AMOUNT))
            .collect()?;
        Ok(df)
    }
}

/// Clean and transform a sales record set. The input is left untouched.
pub fn transform_sales_data(frame: &SalesFrame) -> Result<DataFrame, ProcessorError> {
    let input = frame.dataframe();
    let cleaned = DataProcessor::drop_incomplete_rows(input)?;
    let dropped = input.height() - cleaned.height();
    let transformed = DataProcessor::with_total_amount(cleaned)?;

    info!(
        rows_in = input.height(),
        rows_out = transformed.height(),
        dropped,
        "transformed sales data"
    );
    Ok(transformed)
}
