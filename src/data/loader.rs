//! CSV Data Loader Module
//! Handles CSV file loading and column extraction using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("CSV file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to parse CSV: {0}")]
    Parse(#[from] PolarsError),
}

/// How a CSV file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// First line holds the column names.
    pub header: bool,
    /// Infer column types from the values; otherwise every column is a string.
    pub infer_types: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            header: true,
            infer_types: true,
        }
    }
}

impl CsvOptions {
    /// Rows scanned for type inference. `None` scans the whole file,
    /// `Some(0)` reads every column as a string.
    fn infer_schema_length(&self) -> Option<usize> {
        if self.infer_types {
            None
        } else {
            Some(0)
        }
    }
}

/// Handles CSV file loading with Polars.
pub struct DataLoader {
    options: CsvOptions,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new(CsvOptions::default())
    }
}

impl DataLoader {
    pub fn new(options: CsvOptions) -> Self {
        Self { options }
    }

    /// Load a CSV file using Polars.
    pub fn load_csv(&self, file_path: &Path) -> Result<DataFrame, LoaderError> {
        if !file_path.exists() {
            return Err(LoaderError::NotFound(file_path.to_path_buf()));
        }

        debug!(path = %file_path.display(), options = ?self.options, "reading csv");

        let df = LazyCsvReader::new(file_path)
            .with_has_header(self.options.header)
            .with_infer_schema_length(self.options.infer_schema_length())
            .finish()?
            .collect()?;

        info!(
            path = %file_path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded csv"
        );
        Ok(df)
    }
}

/// Column names of a DataFrame, in schema order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Whether a dtype takes part in arithmetic.
pub fn is_numeric(dtype: &DataType) -> bool {
    matches!(
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
    )
}

/// Names of the numeric columns of a DataFrame.
pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| is_numeric(col.dtype()))
        .map(|col| col.name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_with_header_infers_types() {
        let file = csv_file("id,product,quantity,price\n1,pen,2,3.0\n2,ink,,5.0\n3,pad,4,2.5\n");
        let df = DataLoader::default().load_csv(file.path()).unwrap();

        assert_eq!(df.height(), 3);
        assert_eq!(column_names(&df), vec!["id", "product", "quantity", "price"]);
        assert_eq!(df.column("quantity").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("price").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("product").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("quantity").unwrap().null_count(), 1);
        assert_eq!(numeric_column_names(&df), vec!["id", "quantity", "price"]);
    }

    #[test]
    fn test_inference_scans_past_leading_rows() {
        let mut content = String::from("quantity,price\n");
        for _ in 0..200 {
            content.push_str("1,2\n");
        }
        content.push_str("3,4.5\n");
        let file = csv_file(&content);

        let df = DataLoader::default().load_csv(file.path()).unwrap();
        assert_eq!(df.height(), 201);
        assert_eq!(df.column("price").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn test_load_without_inference_reads_strings() {
        let file = csv_file("quantity,price\n2,3.0\n");
        let options = CsvOptions {
            header: true,
            infer_types: false,
        };
        let df = DataLoader::new(options).load_csv(file.path()).unwrap();

        assert_eq!(df.column("quantity").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("price").unwrap().dtype(), &DataType::String);
        assert!(numeric_column_names(&df).is_empty());
    }

    #[test]
    fn test_load_without_header_keeps_first_line_as_data() {
        let file = csv_file("2,3.0\n4,2.5\n");
        let options = CsvOptions {
            header: false,
            infer_types: true,
        };
        let df = DataLoader::new(options).load_csv(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let err = DataLoader::default().load_csv(&path).unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(p) if p == path));
    }

    #[test]
    fn test_ragged_row_is_parse_error() {
        let file = csv_file("quantity,price\n2,3.0\n4,2.5,9,9\n");

        let err = DataLoader::default().load_csv(file.path()).unwrap_err();
        assert!(matches!(err, LoaderError::Parse(_)));
    }
}
