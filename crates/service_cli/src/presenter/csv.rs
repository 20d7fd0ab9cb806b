//! CSV output.

use std::io::Write;

use super::{Cell, Presenter, Report};
use crate::Result;

/// Renders each report as a title line, a header row and data rows.
///
/// Floating-point values are written with full round-trip precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvPresenter;

fn field(cell: &Cell) -> String {
    match cell {
        Cell::Value(v) => format!("{:e}", v),
        Cell::Empty => String::new(),
        other => other.to_string(),
    }
}

impl Presenter for CsvPresenter {
    fn render<W: Write>(&self, reports: &[Report], out: &mut W) -> Result<()> {
        let mut writer = ::csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(&mut *out);

        for report in reports {
            writer.write_record([format!("# {}", report.title)])?;
            writer.write_record(&report.columns)?;
            for row in &report.rows {
                writer.write_record(row.iter().map(field))?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}
