//! Sales ETL pipeline: load, show, transform, show.

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use std::io::Write;
use tracing::debug;

use crate::config::EtlConfig;
use crate::data::{column_names, numeric_column_names, transform_sales_data, SalesFrame};
use crate::report::{self, RAW_TITLE, TRANSFORMED_TITLE};
use crate::session::Session;

/// Run the job on an open session, writing both previews to `out`.
///
/// Returns the transformed record set.
pub fn run<W: Write>(session: &Session, config: &EtlConfig, out: &mut W) -> Result<DataFrame> {
    let path = &config.input_path;
    let raw = session
        .read_csv(path, &config.csv_options())
        .with_context(|| format!("Failed to load {}", path.display()))?;
    debug!(
        app = session.app_name(),
        columns = ?column_names(&raw),
        numeric = ?numeric_column_names(&raw),
        "raw schema"
    );

    let sales = SalesFrame::try_from(raw)
        .with_context(|| format!("Unexpected schema in {}", path.display()))?;
    debug!(
        quantity = %sales.schema().quantity,
        price = %sales.schema().price,
        "sales columns checked"
    );

    let preview = config.preview_options();
    report::show(out, RAW_TITLE, sales.dataframe(), &preview)?;

    let transformed = transform_sales_data(&sales).context("Failed to transform sales data")?;

    report::show(out, TRANSFORMED_TITLE, &transformed, &preview)?;
    Ok(transformed)
}
