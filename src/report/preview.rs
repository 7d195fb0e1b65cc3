//! Bounded grid preview of a DataFrame.

use polars::prelude::*;
use prettytable::format::{Alignment, FormatBuilder, LinePosition, LineSeparator, TableFormat};
use prettytable::{Cell, Row, Table};
use std::io::{self, Write};
use thiserror::Error;

const MIN_COLUMN_WIDTH: usize = 3;
const ELLIPSIS: &str = "...";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Failed to write preview: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Leading rows shown.
    pub rows: usize,
    /// Cells longer than this many characters are cut. 0 disables truncation.
    pub truncate: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            rows: 20,
            truncate: 20,
        }
    }
}

/// Grid rendering of the first rows of a DataFrame.
pub struct Preview<'a> {
    df: &'a DataFrame,
    options: PreviewOptions,
}

impl<'a> Preview<'a> {
    pub fn new(df: &'a DataFrame, options: PreviewOptions) -> Self {
        Self { df, options }
    }

    pub fn render(&self) -> Result<String, ReportError> {
        let shown = self.options.rows.min(self.df.height());
        let columns = self.df.get_columns();

        let mut table = Table::new();
        table.set_format(grid_format());
        table.set_titles(Row::new(
            columns
                .iter()
                .map(|col| self.cell(col.name().to_string()))
                .collect(),
        ));

        for i in 0..shown {
            let mut cells = Vec::with_capacity(columns.len());
            for col in columns {
                cells.push(self.cell(format_value(col.get(i)?)));
            }
            table.add_row(Row::new(cells));
        }

        let mut out = table.to_string();
        if self.df.height() > shown {
            let noun = if shown == 1 { "row" } else { "rows" };
            out.push_str(&format!("only showing top {shown} {noun}\n"));
        }
        Ok(out)
    }

    /// Truncated, right-aligned cell at least `MIN_COLUMN_WIDTH` wide.
    fn cell(&self, text: String) -> Cell {
        let text = format!("{:>width$}", self.truncate(text), width = MIN_COLUMN_WIDTH);
        Cell::new_align(&text, Alignment::RIGHT)
    }

    fn truncate(&self, cell: String) -> String {
        let limit = self.options.truncate;
        if limit == 0 || cell.chars().count() <= limit {
            return cell;
        }
        if limit < ELLIPSIS.len() + 1 {
            return cell.chars().take(limit).collect();
        }
        let mut cut: String = cell.chars().take(limit - ELLIPSIS.len()).collect();
        cut.push_str(ELLIPSIS);
        cut
    }
}

fn format_value(value: AnyValue) -> String {
    match value {
        AnyValue::Null => "null".to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float32(v) if v.is_finite() && v.fract() == 0.0 => format!("{v:.1}"),
        AnyValue::Float32(v) => v.to_string(),
        AnyValue::Float64(v) if v.is_finite() && v.fract() == 0.0 => format!("{v:.1}"),
        AnyValue::Float64(v) => v.to_string(),
        other => other.to_string().trim_matches('"').to_string(),
    }
}

/// `+---+` borders around the header and the body, `|` between cells, no padding.
fn grid_format() -> TableFormat {
    let line = LineSeparator::new('-', '+', '+', '+');
    FormatBuilder::new()
        .column_separator('|')
        .borders('|')
        .separators(
            &[LinePosition::Top, LinePosition::Title, LinePosition::Bottom],
            line,
        )
        .padding(0, 0)
        .build()
}

/// Write a title line followed by the preview of `df`.
pub fn show<W: Write>(
    out: &mut W,
    title: &str,
    df: &DataFrame,
    options: &PreviewOptions,
) -> Result<(), ReportError> {
    let rendered = Preview::new(df, *options).render()?;
    writeln!(out, "{title}")?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
