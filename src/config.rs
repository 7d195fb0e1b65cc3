//! Run configuration.
//!
//! Every field has a default, so an absent config file runs the job as-is.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::data::CsvOptions;
use crate::report::PreviewOptions;

/// Looked up in the working directory.
pub const CONFIG_FILE: &str = "etl.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EtlConfig {
    pub app_name: String,
    pub input_path: PathBuf,
    pub header: bool,
    pub infer_types: bool,
    pub preview_rows: usize,
    pub truncate: usize,
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            app_name: "Sales ETL Project".to_string(),
            input_path: PathBuf::from("data/raw/sales.csv"),
            header: true,
            infer_types: true,
            preview_rows: 20,
            truncate: 20,
        }
    }
}

impl EtlConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn csv_options(&self) -> CsvOptions {
        CsvOptions {
            header: self.header,
            infer_types: self.infer_types,
        }
    }

    pub fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            rows: self.preview_rows,
            truncate: self.truncate,
        }
    }
}
