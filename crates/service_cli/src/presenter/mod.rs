//! Presentation of experiment results.
//!
//! Commands produce [`Report`]s: a titled table of cells plus named summary
//! values. A [`Presenter`] renders reports to any writer. Three presenters
//! are available, selected by [`OutputFormat`]:
//!
//! | Format  | Presenter          | Output                               |
//! |---------|--------------------|--------------------------------------|
//! | `table` | [`TablePresenter`] | Aligned text tables for the terminal |
//! | `json`  | [`JsonPresenter`]  | One JSON array of reports            |
//! | `csv`   | [`CsvPresenter`]   | Header and rows per report           |

mod csv;
mod json;
mod table;

pub use self::csv::CsvPresenter;
pub use self::json::JsonPresenter;
pub use self::table::TablePresenter;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

use crate::Result;

/// One table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Partition or term count
    Count(usize),
    /// Floating-point value
    Value(f64),
    /// Free text
    Text(String),
    /// Missing or undefined value
    Empty,
}

impl Cell {
    /// Text cell from anything string-like.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Self::Count(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Empty, Into::into)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Count(n) => write!(f, "{}", n),
            Cell::Value(v) => write!(f, "{:.6e}", v),
            Cell::Text(s) => f.write_str(s),
            Cell::Empty => f.write_str("-"),
        }
    }
}

/// A titled result table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Report title
    pub title: String,
    /// Column headers
    pub columns: Vec<String>,
    /// Rows, each as long as `columns`
    pub rows: Vec<Vec<Cell>>,
}

impl Report {
    /// Empty report with the given headers.
    pub fn new(title: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            title: title.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row.
    ///
    /// # Panics
    /// If the row width differs from the number of columns.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        assert_eq!(
            row.len(),
            self.columns.len(),
            "row width must match column count in report '{}'",
            self.title
        );
        self.rows.push(row);
    }
}

/// Renders reports to a writer.
pub trait Presenter {
    /// Write every report to `out`.
    fn render<W: Write>(&self, reports: &[Report], out: &mut W) -> Result<()>;
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text tables
    #[default]
    Table,
    /// JSON
    Json,
    /// Comma-separated values
    Csv,
}

impl OutputFormat {
    /// Parse a format name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

impl Presenter for OutputFormat {
    fn render<W: Write>(&self, reports: &[Report], out: &mut W) -> Result<()> {
        match self {
            OutputFormat::Table => TablePresenter.render(reports, out),
            OutputFormat::Json => JsonPresenter.render(reports, out),
            OutputFormat::Csv => CsvPresenter.render(reports, out),
        }
    }
}
