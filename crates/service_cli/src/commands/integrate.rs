//! Integrate command implementation
//!
//! Compares the left-rectangle and trapezoid rules over a list of partition
//! counts, fits the order against the step `h = (b - a) / N`, and
//! optionally probes how many partitions fit in a wall-clock budget.

use std::time::Duration;

use numlab_analysis::convergence::{fit_order, MIDPOINT_OFFSET};
use numlab_analysis::sweep::{run_dual_sweep, Direction, ParameterSweep, SweepResult};
use numlab_analysis::timing::{probe_max_partitions, TimingBudget};
use numlab_core::methods::QuadratureRule;
use numlab_core::problems::IntegralProblem;
use tracing::info;

use super::order_cell;
use crate::config::{IntegralConfig, Integrand};
use crate::presenter::{Cell, Report};
use crate::Result;

/// Run the integrate command
pub fn run(config: &IntegralConfig, timing: bool) -> Result<Vec<Report>> {
    info!(
        function = ?config.function,
        lower = config.lower,
        upper = config.upper,
        "Starting quadrature sweep"
    );

    let problem = match config.function {
        Integrand::Semicircle => IntegralProblem::semicircle_on(config.lower, config.upper)?,
        Integrand::Exponential => IntegralProblem::exponential_on(config.lower, config.upper)?,
    };
    let counts = ParameterSweep::new(config.counts.clone(), Direction::Increasing)?;
    let dual = run_dual_sweep(
        &problem,
        &QuadratureRule::LeftRectangle,
        &QuadratureRule::Trapezoid,
        &counts,
    );

    let exact = problem.reference_value();
    let mut table = Report::new(
        format!("quadrature on [{}, {}]", config.lower, config.upper),
        &[
            "partitions",
            "step",
            "rectangle",
            "trapezoid",
            "exact",
            "rectangle_error",
            "trapezoid_error",
        ],
    );
    for (rectangle, trapezoid) in dual.rows() {
        table.push_row(vec![
            rectangle.parameter.into(),
            problem.step(rectangle.parameter).into(),
            rectangle.approximation.into(),
            trapezoid.approximation.into(),
            exact.into(),
            rectangle.error.into(),
            trapezoid.error.into(),
        ]);
    }

    let steps: Vec<f64> = counts.values().iter().map(|&n| problem.step(n)).collect();
    let mut summary = Report::new(
        "quadrature convergence",
        &["rule", "order_vs_step", "order_midpoint_vs_count", "r_squared"],
    );
    for result in [dual.first(), dual.second()] {
        summary.push_row(summary_row(result, &steps));
    }

    let mut reports = vec![table, summary];
    if timing {
        reports.push(timing_report(&problem, config));
    }

    info!("Quadrature sweep complete");
    Ok(reports)
}

fn summary_row(result: &SweepResult<usize, f64>, steps: &[f64]) -> Vec<Cell> {
    let label = result.label();
    let fit = fit_order(steps, &result.errors());
    let r_squared = fit.as_ref().map(|f| f.r_squared).ok();
    vec![
        Cell::text(label),
        order_cell(label, fit.map(|f| f.order)),
        order_cell(label, result.order_at_midpoint(MIDPOINT_OFFSET)),
        r_squared.into(),
    ]
}

fn timing_report(problem: &IntegralProblem<f64, fn(f64) -> f64>, config: &IntegralConfig) -> Report {
    let budget = TimingBudget {
        budget: Duration::from_millis(config.time_budget_ms),
        initial: TimingBudget::default().initial,
        max_doublings: config.max_doublings,
    };
    info!(budget_ms = config.time_budget_ms, "Probing partition count within budget");
    let probe = probe_max_partitions(problem, &QuadratureRule::ALL, &budget);

    let mut report = Report::new(
        format!("largest partition count within {} ms", config.time_budget_ms),
        &["rule", "partitions", "doublings", "last_elapsed_s", "cap_reached"],
    );
    for (label, elapsed) in &probe.timings {
        report.push_row(vec![
            Cell::text(*label),
            probe.partitions.into(),
            (probe.doublings as usize).into(),
            elapsed.as_secs_f64().into(),
            Cell::text(probe.exhausted.to_string()),
        ]);
    }
    report
}
