//! Harmonic command implementation
//!
//! Sums the harmonic series in ascending and descending order in the
//! configured precision and compares both with the double-precision
//! reference.

use numlab_analysis::sweep::{geometric_counts, run_dual_sweep, Direction, ParameterSweep};
use numlab_core::methods::SummationOrder;
use numlab_core::problems::HarmonicSeries;
use numlab_core::traits::Float;
use tracing::info;

use super::{order_cell, to_f64};
use crate::config::{HarmonicConfig, Precision};
use crate::presenter::{Cell, Report};
use crate::Result;

/// Run the harmonic command
pub fn run(config: &HarmonicConfig) -> Result<Vec<Report>> {
    info!(precision = ?config.precision, "Starting harmonic summation");
    let reports = match config.precision {
        Precision::Single => compare_orders::<f32>(config, "f32"),
        Precision::Double => compare_orders::<f64>(config, "f64"),
    }?;
    info!("Harmonic summation complete");
    Ok(reports)
}

fn compare_orders<T>(config: &HarmonicConfig, precision: &str) -> Result<Vec<Report>>
where
    T: Float,
{
    let problem = HarmonicSeries::<T>::new();

    let counts = ParameterSweep::new(config.counts.clone(), Direction::Increasing)?;
    let dual = run_dual_sweep(
        &problem,
        &SummationOrder::Ascending,
        &SummationOrder::Descending,
        &counts,
    );
    let mut table = Report::new(
        format!("harmonic sums in {}", precision),
        &[
            "terms",
            "sum_up",
            "sum_down",
            "reference",
            "up_error",
            "down_error",
            "relative_difference",
        ],
    );
    for ((up, down), difference) in dual.rows().zip(dual.relative_differences()) {
        table.push_row(vec![
            up.parameter.into(),
            to_f64(up.approximation).into(),
            to_f64(down.approximation).into(),
            to_f64(up.reference).into(),
            to_f64(up.error).into(),
            to_f64(down.error).into(),
            to_f64(difference).into(),
        ]);
    }

    let grid = &config.grid;
    let sweep = geometric_counts(grid.start_exp, grid.end_exp, grid.count, grid.collapse)?;
    if sweep.is_collapsed() {
        info!(
            requested = sweep.requested(),
            actual = sweep.len(),
            "Duplicate term counts removed from sweep"
        );
    }
    let swept = run_dual_sweep(
        &problem,
        &SummationOrder::Ascending,
        &SummationOrder::Descending,
        &sweep,
    );
    let mut summary = Report::new(
        format!("harmonic error sweep in {}", precision),
        &["order", "points", "requested", "order_fit", "final_error"],
    );
    for result in [swept.first(), swept.second()] {
        let label = result.label();
        let final_error = result.records().last().map(|r| to_f64(r.error));
        summary.push_row(vec![
            Cell::text(label),
            result.len().into(),
            sweep.requested().into(),
            order_cell(label, result.fit_order().map(|f| f.order)),
            final_error.into(),
        ]);
    }

    Ok(vec![table, summary])
}
