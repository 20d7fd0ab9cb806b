//! Criterion benchmarks for numlab_analysis sweep drivers.
//!
//! Compares serial and rayon-backed sweeps, and the cost of the
//! least-squares order fit on a finished sweep.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numlab_analysis::parallel::ParallelConfig;
use numlab_analysis::sweep::{geometric_counts, geometric_steps, run_sweep, run_sweep_with, CollapsePolicy};
use numlab_core::methods::{DifferenceScheme, QuadratureRule};
use numlab_core::problems::{DerivativeProblem, IntegralProblem};

/// Serial vs parallel quadrature sweep over a dense count grid.
fn bench_quadrature_sweeps(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadrature_sweep");
    let problem: IntegralProblem<f64, _> = IntegralProblem::semicircle();

    for points in [10, 40] {
        let counts = match geometric_counts(1.0, 5.0, points, CollapsePolicy::Deduplicate) {
            Ok(counts) => counts,
            Err(e) => panic!("invalid benchmark grid: {}", e),
        };
        group.bench_with_input(BenchmarkId::new("serial", points), &counts, |b, counts| {
            b.iter(|| run_sweep(black_box(&problem), &QuadratureRule::Trapezoid, counts));
        });
        group.bench_with_input(BenchmarkId::new("parallel", points), &counts, |b, counts| {
            b.iter(|| {
                run_sweep_with(
                    black_box(&problem),
                    &QuadratureRule::Trapezoid,
                    counts,
                    &ParallelConfig::always(),
                )
            });
        });
    }

    group.finish();
}

/// Order fit over a finite-difference step sweep.
fn bench_order_fit(c: &mut Criterion) {
    let problem = DerivativeProblem::exponential_at(1.0_f64).unwrap();
    let steps = geometric_steps::<f64>(-8.0, -3.0, 21).unwrap();
    let result = run_sweep(&problem, &DifferenceScheme::Forward, &steps);

    c.bench_function("fit_order_21_points", |b| {
        b.iter(|| black_box(&result).fit_order());
    });
}

criterion_group!(benches, bench_quadrature_sweeps, bench_order_fit);
criterion_main!(benches);
