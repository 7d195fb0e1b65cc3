//! Sales Schema Module
//! Typed view over a loaded sales DataFrame.

use polars::prelude::*;
use thiserror::Error;

use super::loader::is_numeric;

pub const QUANTITY: &str = "quantity";
pub const PRICE: &str = "price";
pub const TOTAL_AMOUNT: &str = "total_amount";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("Column '{column}' must be numeric, found {dtype}")]
    NotNumeric {
        column: &'static str,
        dtype: DataType,
    },
    #[error("Failed to cast column '{column}': {message}")]
    Cast {
        column: &'static str,
        message: String,
    },
}

/// Dtypes of the columns the sales transform depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSchema {
    pub quantity: DataType,
    pub price: DataType,
}

/// Check that `name` exists and is numeric, returning its dtype.
///
/// A column holding only nulls carries no type evidence: CSV inference
/// leaves it as `str`, so it is cast to `Float64` in place.
fn numeric_column(df: &mut DataFrame, name: &'static str) -> Result<DataType, SchemaError> {
    let column = df
        .column(name)
        .map_err(|_| SchemaError::MissingColumn(name))?;
    let dtype = column.dtype().clone();
    if is_numeric(&dtype) {
        return Ok(dtype);
    }
    if column.null_count() != column.len() {
        return Err(SchemaError::NotNumeric {
            column: name,
            dtype,
        });
    }

    let cast_err = |err: PolarsError| SchemaError::Cast {
        column: name,
        message: err.to_string(),
    };
    let cast = column.cast(&DataType::Float64).map_err(cast_err)?;
    df.with_column(cast).map_err(cast_err)?;
    Ok(DataType::Float64)
}

/// A sales record set whose schema has been checked.
///
/// Other columns pass through untouched.
#[derive(Debug, Clone)]
pub struct SalesFrame {
    df: DataFrame,
    schema: SalesSchema,
}

impl SalesFrame {
    pub fn schema(&self) -> &SalesSchema {
        &self.schema
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }
}

impl TryFrom<DataFrame> for SalesFrame {
    type Error = SchemaError;

    fn try_from(mut df: DataFrame) -> Result<Self, Self::Error> {
        let schema = SalesSchema {
            quantity: numeric_column(&mut df, QUANTITY)?,
            price: numeric_column(&mut df, PRICE)?,
        };
        Ok(Self { df, schema })
    }
}
