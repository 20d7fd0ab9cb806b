//! Aligned text tables.

use std::io::Write;

use super::{Presenter, Report};
use crate::Result;

/// Renders each report as a box-drawn table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TablePresenter;

impl TablePresenter {
    fn widths(report: &Report, cells: &[Vec<String>]) -> Vec<usize> {
        report
            .columns
            .iter()
            .enumerate()
            .map(|(i, header)| {
                cells
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn rule<W: Write>(out: &mut W, widths: &[usize], left: &str, mid: &str, right: &str) -> Result<()> {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        writeln!(out, "{}{}{}", left, segments.join(mid), right)?;
        Ok(())
    }

    fn line<W: Write>(out: &mut W, widths: &[usize], cells: &[String]) -> Result<()> {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!(" {:<width$} ", cell, width = width))
            .collect();
        writeln!(out, "│{}│", padded.join("│"))?;
        Ok(())
    }
}

impl Presenter for TablePresenter {
    fn render<W: Write>(&self, reports: &[Report], out: &mut W) -> Result<()> {
        for report in reports {
            let cells: Vec<Vec<String>> = report
                .rows
                .iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect();
            let widths = Self::widths(report, &cells);

            writeln!(out, "\n{}", report.title)?;
            Self::rule(out, &widths, "┌", "┬", "┐")?;
            Self::line(out, &widths, &report.columns)?;
            Self::rule(out, &widths, "├", "┼", "┤")?;
            for row in &cells {
                Self::line(out, &widths, row)?;
            }
            Self::rule(out, &widths, "└", "┴", "┘")?;
        }
        Ok(())
    }
}
