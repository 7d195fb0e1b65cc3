//! Data module - CSV loading, schema checks and processing

mod loader;
mod processor;
mod schema;

pub use loader::{column_names, numeric_column_names, CsvOptions, DataLoader, LoaderError};
pub use processor::transform_sales_data;
pub use schema::{SalesFrame, SchemaError};
