//! Differentiate command implementation
//!
//! Sweeps the finite-difference step over a geometric grid and compares
//! forward and central differences: error per step, optimal step and
//! empirical order.

use numlab_analysis::convergence::{reference_line, MIDPOINT_OFFSET};
use numlab_analysis::sweep::{geometric_steps, run_dual_sweep, SweepResult};
use numlab_core::methods::DifferenceScheme;
use numlab_core::problems::DerivativeProblem;
use tracing::info;

use super::order_cell;
use crate::config::{DerivativeConfig, DerivativeFunction};
use crate::presenter::{Cell, Report};
use crate::Result;

/// Run the differentiate command
pub fn run(config: &DerivativeConfig) -> Result<Vec<Report>> {
    info!(
        function = ?config.function,
        point = config.point,
        steps = config.count,
        "Starting finite-difference sweep"
    );

    let problem = match config.function {
        DerivativeFunction::Quadratic => DerivativeProblem::quadratic_at(config.point)?,
        DerivativeFunction::Exponential => DerivativeProblem::exponential_at(config.point)?,
    };
    let steps = geometric_steps::<f64>(config.start_exp, config.end_exp, config.count)?;
    let dual = run_dual_sweep(
        &problem,
        &DifferenceScheme::Forward,
        &DifferenceScheme::Central,
        &steps,
    );

    let first_order = reference_line(steps.values(), 1.0, 1.0);
    let second_order = reference_line(steps.values(), 1.0, 2.0);

    let mut errors = Report::new(
        format!("finite differences at x = {}", problem.point()),
        &[
            "step",
            "forward",
            "forward_error",
            "central",
            "central_error",
            "first_order_guide",
            "second_order_guide",
        ],
    );
    for (i, (forward, central)) in dual.rows().enumerate() {
        errors.push_row(vec![
            forward.parameter.into(),
            forward.approximation.into(),
            forward.error.into(),
            central.approximation.into(),
            central.error.into(),
            first_order[i].into(),
            second_order[i].into(),
        ]);
    }

    let mut summary = Report::new(
        format!("derivative reference {}", problem.reference_value()),
        &[
            "scheme",
            "optimal_step",
            "min_error",
            "order_midpoint",
            "order_fit",
            "r_squared",
        ],
    );
    for result in [dual.first(), dual.second()] {
        summary.push_row(summary_row(result, config));
    }

    info!("Finite-difference sweep complete");
    Ok(vec![errors, summary])
}

fn summary_row(result: &SweepResult<f64, f64>, config: &DerivativeConfig) -> Vec<Cell> {
    let label = result.label();
    let (optimal_step, min_error) = match result.optimal() {
        Ok(best) => (Cell::Value(best.parameter), Cell::Value(best.error)),
        Err(_) => (Cell::Empty, Cell::Empty),
    };
    let fit = match (config.fit_lower, config.fit_upper) {
        (None, None) => result.fit_order(),
        (lower, upper) => result.fit_order_within(
            lower.unwrap_or(f64::MIN_POSITIVE),
            upper.unwrap_or(f64::MAX),
        ),
    };
    let r_squared = fit.as_ref().map(|f| f.r_squared).ok();

    vec![
        Cell::text(label),
        optimal_step,
        min_error,
        order_cell(label, result.order_at_midpoint(MIDPOINT_OFFSET)),
        order_cell(label, fit.map(|f| f.order)),
        r_squared.into(),
    ]
}
