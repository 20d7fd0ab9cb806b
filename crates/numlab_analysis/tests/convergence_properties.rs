//! Convergence behaviour of the shipped methods on the shipped problems.
//!
//! These tests pin down measured IEEE-754 double behaviour: orders are
//! checked with tolerances wide enough for rounding noise, and regime
//! boundaries (where rounding overtakes truncation) are located by the
//! sweep windows chosen below.

use numlab_analysis::convergence::{fit_order, MIDPOINT_OFFSET};
use numlab_analysis::optimal::select_optimal;
use numlab_analysis::sweep::{
    geometric_counts, geometric_steps, run_dual_sweep, run_sweep, run_sweep_with, typical_counts,
    CollapsePolicy, ParameterSweep,
};
use numlab_analysis::parallel::ParallelConfig;
use numlab_core::methods::{DifferenceScheme, QuadratureRule, SeriesForm, SummationOrder};
use numlab_core::problems::{
    AlternatingRatioSeries, DerivativeProblem, HarmonicSeries, IntegralProblem,
};
use proptest::prelude::*;

// ========================================
// Finite differences
// ========================================

#[test]
fn test_forward_difference_optimal_step_is_interior() {
    let problem = DerivativeProblem::quadratic_at(1.0_f64).unwrap();
    let steps = geometric_steps::<f64>(-14.0, -2.0, 13).unwrap();
    let result = run_sweep(&problem, &DifferenceScheme::Forward, &steps);

    let best = result.optimal().unwrap();
    assert!(best.is_interior(result.len()));
    assert!((best.parameter / 1e-8 - 1.0).abs() < 1e-9);
}

#[test]
fn test_forward_difference_truncation_regime_is_first_order() {
    // Quadratic: (f(1+δ) - f(1)) / δ = 1 + δ, so the error is δ itself
    let problem = DerivativeProblem::quadratic_at(1.0_f64).unwrap();
    let steps = geometric_steps::<f64>(-6.0, -2.0, 9).unwrap();
    let result = run_sweep(&problem, &DifferenceScheme::Forward, &steps);

    let fit = result.fit_order().unwrap();
    assert!((fit.order - 1.0).abs() < 0.05);
}

#[test]
fn test_central_beats_forward_at_moderate_step() {
    let problem = DerivativeProblem::quadratic_at(1.0_f64).unwrap();
    let steps = ParameterSweep::from_values(vec![1e-5]).unwrap();
    let dual = run_dual_sweep(
        &problem,
        &DifferenceScheme::Forward,
        &DifferenceScheme::Central,
        &steps,
    );
    let (forward, central) = dual.rows().next().unwrap();
    assert!(central.error < forward.error);
}

#[test]
fn test_exponential_difference_orders() {
    let problem = DerivativeProblem::exponential_at(1.0_f64).unwrap();
    let steps = geometric_steps::<f64>(-8.0, -3.0, 21).unwrap();

    let forward = run_sweep(&problem, &DifferenceScheme::Forward, &steps);
    let central = run_sweep(&problem, &DifferenceScheme::Central, &steps);

    let forward_fit = forward.fit_order().unwrap();
    assert!((forward_fit.order - 1.0).abs() < 0.3);

    // Below 1e-4 the central scheme is already rounding-dominated
    let central_fit = central.fit_order_within(1e-4, 1e-3).unwrap();
    assert!((central_fit.order - 2.0).abs() < 0.3);

    let central_best = central.optimal().unwrap();
    assert!(central_best.is_interior(central.len()));
    assert!(central_best.error < forward.optimal().unwrap().error);
}

#[test]
fn test_difference_order_at_midpoint() {
    let problem = DerivativeProblem::exponential_at(0.5_f64).unwrap();
    let steps = geometric_steps::<f64>(-6.0, -2.0, 9).unwrap();
    let forward = run_sweep(&problem, &DifferenceScheme::Forward, &steps);
    let order = forward.order_at_midpoint(MIDPOINT_OFFSET).unwrap();
    assert!((order - 1.0).abs() < 0.1);
}

// ========================================
// Quadrature
// ========================================

#[test]
fn test_semicircle_trapezoid_order_is_three_halves() {
    let problem: IntegralProblem<f64, _> = IntegralProblem::semicircle();
    let result = run_sweep(&problem, &QuadratureRule::Trapezoid, &typical_counts());

    // Error against N; against h = 2/N the sign flips
    let fit = result.fit_order().unwrap();
    assert!((fit.order + 1.5).abs() < 0.05);
    assert!(result.errors().windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn test_semicircle_rules_coincide() {
    let problem: IntegralProblem<f64, _> = IntegralProblem::semicircle();
    let counts = geometric_counts(1.0, 3.0, 20, CollapsePolicy::Deduplicate).unwrap();
    let dual = run_dual_sweep(
        &problem,
        &QuadratureRule::LeftRectangle,
        &QuadratureRule::Trapezoid,
        &counts,
    );
    for (rectangle, trapezoid) in dual.rows() {
        assert_eq!(rectangle.approximation, trapezoid.approximation);
    }
}

#[test]
fn test_smooth_integrand_orders() {
    let problem = IntegralProblem::exponential_on(0.0_f64, 1.0).unwrap();
    let counts = typical_counts();

    let rectangle = run_sweep(&problem, &QuadratureRule::LeftRectangle, &counts);
    let trapezoid = run_sweep(&problem, &QuadratureRule::Trapezoid, &counts);

    assert!((rectangle.fit_order().unwrap().order + 1.0).abs() < 0.1);
    assert!((trapezoid.fit_order().unwrap().order + 2.0).abs() < 0.1);
}

// ========================================
// Summation and series
// ========================================

#[test]
fn test_single_precision_descending_sum_is_more_accurate() {
    let problem = HarmonicSeries::<f32>::new();
    let counts = ParameterSweep::from_values(vec![10_000_000_usize]).unwrap();
    let dual = run_dual_sweep(
        &problem,
        &SummationOrder::Ascending,
        &SummationOrder::Descending,
        &counts,
    );
    let (up, down) = dual.rows().next().unwrap();
    assert!(down.error < up.error);
    assert!(dual.relative_differences()[0] > 1e-2);
}

#[test]
fn test_double_precision_sum_orders_nearly_agree() {
    let problem = HarmonicSeries::<f64>::new();
    let dual = run_dual_sweep(
        &problem,
        &SummationOrder::Ascending,
        &SummationOrder::Descending,
        &typical_counts(),
    );
    assert!(dual.relative_differences().iter().all(|d| *d < 1e-13));
}

#[test]
fn test_series_forms_converge_to_limit() {
    let problem = AlternatingRatioSeries::<f64>::new();
    let limit = problem.limit();
    let counts = typical_counts();

    for form in SeriesForm::ALL {
        let result = run_sweep(&problem, &form, &counts);
        let last = result.records().last().unwrap();
        assert!((last.approximation - limit).abs() < 1e-4);
    }
}

// ========================================
// Property-based tests
// ========================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_parallel_sweep_preserves_order(
        exponents in prop::collection::btree_set(-120_i32..-10, 1..24),
    ) {
        let steps: Vec<f64> = exponents.iter().map(|e| 10f64.powf(*e as f64 / 10.0)).collect();
        let sweep = ParameterSweep::from_values(steps.clone()).unwrap();
        let problem = DerivativeProblem::exponential_at(1.0_f64).unwrap();

        let serial = run_sweep(&problem, &DifferenceScheme::Central, &sweep);
        let parallel = run_sweep_with(
            &problem,
            &DifferenceScheme::Central,
            &sweep,
            &ParallelConfig::always(),
        );

        prop_assert_eq!(serial.parameters(), steps);
        prop_assert_eq!(serial, parallel);
    }

    #[test]
    fn prop_optimum_matches_minimum_error(
        exponents in prop::collection::btree_set(-140_i32..-10, 2..20),
    ) {
        let steps: Vec<f64> = exponents.iter().map(|e| 10f64.powf(*e as f64 / 10.0)).collect();
        let sweep = ParameterSweep::from_values(steps).unwrap();
        let problem = DerivativeProblem::quadratic_at(1.0_f64).unwrap();
        let result = run_sweep(&problem, &DifferenceScheme::Forward, &sweep);

        let best = select_optimal(&result.parameters(), &result.errors()).unwrap();
        let min = result.errors().into_iter().fold(f64::INFINITY, f64::min);
        prop_assert_eq!(best.error, min);
    }

    #[test]
    fn prop_fit_slope_sign_for_quadrature(
        start in 1.0_f64..2.0,
    ) {
        let counts = geometric_counts(start, start + 2.0, 6, CollapsePolicy::Deduplicate).unwrap();
        let problem = IntegralProblem::exponential_on(0.0_f64, 1.0).unwrap();
        let result = run_sweep(&problem, &QuadratureRule::Trapezoid, &counts);
        let fit = fit_order(&result.parameters(), &result.errors()).unwrap();
        prop_assert!(fit.order < -1.5);
    }
}
