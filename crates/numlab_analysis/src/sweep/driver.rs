//! Sweep drivers.
//!
//! A driver evaluates one method at every parameter of a sweep and pairs
//! each result with the problem's reference value. Evaluations are
//! independent, so the parallel driver produces records identical to the
//! serial one, in the same order.

use numlab_core::metrics::relative_error;
use numlab_core::traits::{Float, Method, Problem};
use tracing::debug;

use super::grid::ParameterSweep;
use super::record::{DualSweep, ErrorRecord, SweepResult};
use crate::parallel::{ordered_map, ParallelConfig};

#[inline]
fn evaluate<T, Pb, M>(problem: &Pb, method: &M, parameter: Pb::Parameter) -> ErrorRecord<Pb::Parameter, T>
where
    T: Float,
    Pb: Problem<T>,
    M: Method<T, Pb>,
{
    let approximation = method.approximate(problem, parameter);
    let reference = problem.reference(parameter);
    ErrorRecord {
        parameter,
        approximation,
        reference,
        error: relative_error(approximation, reference),
    }
}

/// Evaluate `method` on `problem` at every sweep parameter, serially.
///
/// # Examples
/// ```
/// use numlab_analysis::sweep::{geometric_steps, run_sweep};
/// use numlab_core::methods::DifferenceScheme;
/// use numlab_core::problems::DerivativeProblem;
///
/// let problem = DerivativeProblem::quadratic_at(1.0_f64).unwrap();
/// let steps = geometric_steps::<f64>(-14.0, -2.0, 13).unwrap();
/// let result = run_sweep(&problem, &DifferenceScheme::Forward, &steps);
///
/// assert_eq!(result.len(), 13);
/// assert!(result.records().iter().all(|r| r.error >= 0.0));
/// ```
pub fn run_sweep<T, Pb, M>(
    problem: &Pb,
    method: &M,
    sweep: &ParameterSweep<Pb::Parameter>,
) -> SweepResult<Pb::Parameter, T>
where
    T: Float,
    Pb: Problem<T>,
    M: Method<T, Pb>,
{
    debug!(method = method.label(), points = sweep.len(), "running sweep");
    let records = sweep
        .values()
        .iter()
        .map(|&parameter| evaluate(problem, method, parameter))
        .collect();
    SweepResult::new(method.label(), records)
}

/// Evaluate a sweep, going parallel when `config` allows it.
///
/// Records come back in sweep order either way.
pub fn run_sweep_with<T, Pb, M>(
    problem: &Pb,
    method: &M,
    sweep: &ParameterSweep<Pb::Parameter>,
    config: &ParallelConfig,
) -> SweepResult<Pb::Parameter, T>
where
    T: Float + Send,
    Pb: Problem<T> + Sync,
    M: Method<T, Pb> + Sync,
{
    debug!(
        method = method.label(),
        points = sweep.len(),
        parallel = config.should_parallelize(sweep.len()),
        "running sweep"
    );
    let records = ordered_map(sweep.values(), config, |&parameter| {
        evaluate(problem, method, parameter)
    });
    SweepResult::new(method.label(), records)
}

/// Evaluate every sweep parameter on the rayon pool.
///
/// Equivalent to [`run_sweep`] record for record.
#[cfg(feature = "parallel")]
pub fn run_sweep_parallel<T, Pb, M>(
    problem: &Pb,
    method: &M,
    sweep: &ParameterSweep<Pb::Parameter>,
) -> SweepResult<Pb::Parameter, T>
where
    T: Float + Send,
    Pb: Problem<T> + Sync,
    M: Method<T, Pb> + Sync,
{
    run_sweep_with(problem, method, sweep, &ParallelConfig::always())
}

/// Evaluate two methods over the same sweep.
///
/// # Examples
/// ```
/// use numlab_analysis::sweep::{run_dual_sweep, typical_counts};
/// use numlab_core::methods::QuadratureRule;
/// use numlab_core::problems::IntegralProblem;
///
/// let problem: IntegralProblem<f64, _> = IntegralProblem::semicircle();
/// let dual = run_dual_sweep(
///     &problem,
///     &QuadratureRule::LeftRectangle,
///     &QuadratureRule::Trapezoid,
///     &typical_counts(),
/// );
/// assert_eq!(dual.len(), 4);
/// assert_eq!(dual.first().label(), "rectangle");
/// ```
pub fn run_dual_sweep<T, Pb, M1, M2>(
    problem: &Pb,
    first: &M1,
    second: &M2,
    sweep: &ParameterSweep<Pb::Parameter>,
) -> DualSweep<Pb::Parameter, T>
where
    T: Float,
    Pb: Problem<T>,
    M1: Method<T, Pb>,
    M2: Method<T, Pb>,
{
    DualSweep::new(
        run_sweep(problem, first, sweep),
        run_sweep(problem, second, sweep),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::{geometric_counts, geometric_steps, typical_counts, CollapsePolicy};
    use numlab_core::methods::{DifferenceScheme, QuadratureRule, SummationOrder};
    use numlab_core::problems::{DerivativeProblem, HarmonicSeries, IntegralProblem};

    #[test]
    fn test_run_sweep_records_are_index_aligned() {
        let problem = DerivativeProblem::quadratic_at(1.0_f64).unwrap();
        let steps = geometric_steps::<f64>(-14.0, -2.0, 13).unwrap();
        let result = run_sweep(&problem, &DifferenceScheme::Central, &steps);

        assert_eq!(result.label(), "central");
        for (record, step) in result.records().iter().zip(steps.values()) {
            assert_eq!(record.parameter, *step);
            assert_eq!(record.reference, 1.0);
            assert!(record.error >= 0.0);
        }
    }

    #[test]
    fn test_run_sweep_with_matches_serial() {
        let problem: IntegralProblem<f64, _> = IntegralProblem::semicircle();
        let counts = geometric_counts(1.0, 4.0, 30, CollapsePolicy::Deduplicate).unwrap();

        let serial = run_sweep(&problem, &QuadratureRule::Trapezoid, &counts);
        let parallel = run_sweep_with(
            &problem,
            &QuadratureRule::Trapezoid,
            &counts,
            &ParallelConfig::always(),
        );
        assert_eq!(serial, parallel);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_run_sweep_parallel_matches_serial() {
        let problem = DerivativeProblem::exponential_at(1.0_f64).unwrap();
        let steps = geometric_steps::<f64>(-8.0, -3.0, 21).unwrap();

        let serial = run_sweep(&problem, &DifferenceScheme::Forward, &steps);
        let parallel = run_sweep_parallel(&problem, &DifferenceScheme::Forward, &steps);
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_run_dual_sweep_harmonic_orders() {
        let problem = HarmonicSeries::<f32>::new();
        let dual = run_dual_sweep(
            &problem,
            &SummationOrder::Ascending,
            &SummationOrder::Descending,
            &typical_counts(),
        );

        assert_eq!(dual.len(), 4);
        assert_eq!(dual.first().label(), "sum_up");
        assert_eq!(dual.second().label(), "sum_down");
        assert!(dual.rows().all(|(up, down)| up.parameter == down.parameter));
        assert!(dual.relative_differences().iter().all(|d| *d >= 0.0));
    }
}
