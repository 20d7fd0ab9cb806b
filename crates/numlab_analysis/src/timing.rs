//! Wall-clock probe for count-parameterised methods.
//!
//! Starting from a small partition count, the probe doubles `N` until every
//! method takes longer than the budget for a single evaluation, then
//! reports the last count that fit. Timings are machine-dependent, so the
//! probe is a diagnostic, not a reproducible measurement.

use std::hint::black_box;
use std::time::{Duration, Instant};

use numlab_core::traits::{Float, Method, Problem};
use tracing::{debug, info};

/// Budget and limits for [`probe_max_partitions`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingBudget {
    /// Wall-clock budget per single evaluation.
    pub budget: Duration,
    /// First partition count tried.
    pub initial: usize,
    /// Maximum number of doublings before giving up.
    pub max_doublings: u32,
}

impl Default for TimingBudget {
    fn default() -> Self {
        Self {
            budget: Duration::from_secs(1),
            initial: 10,
            max_doublings: 30,
        }
    }
}

impl TimingBudget {
    /// Budget of `budget` with the default start and cap.
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }
}

/// Outcome of a timing probe.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingReport {
    /// Largest partition count evaluated within budget.
    ///
    /// When the budget was exceeded this is half the count that exceeded
    /// it; when the doubling cap was hit first it is the last count tried.
    pub partitions: usize,
    /// Number of doublings performed.
    pub doublings: u32,
    /// `true` when the cap stopped the probe before the budget did.
    pub exhausted: bool,
    /// Time per method at the last count tried.
    pub timings: Vec<(&'static str, Duration)>,
}

/// Find roughly the largest `N` every method evaluates within `budget`.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use numlab_analysis::timing::{probe_max_partitions, TimingBudget};
/// use numlab_core::methods::QuadratureRule;
/// use numlab_core::problems::IntegralProblem;
///
/// let problem: IntegralProblem<f64, _> = IntegralProblem::semicircle();
/// let budget = TimingBudget {
///     budget: Duration::from_secs(3600),
///     initial: 10,
///     max_doublings: 3,
/// };
/// let report = probe_max_partitions(&problem, &QuadratureRule::ALL, &budget);
/// assert!(report.exhausted);
/// assert_eq!(report.partitions, 80);
/// ```
pub fn probe_max_partitions<T, Pb, M>(
    problem: &Pb,
    methods: &[M],
    budget: &TimingBudget,
) -> TimingReport
where
    T: Float,
    Pb: Problem<T, Parameter = usize>,
    M: Method<T, Pb>,
{
    let mut partitions = budget.initial.max(1);
    let mut doublings = 0;

    loop {
        let timings: Vec<(&'static str, Duration)> = methods
            .iter()
            .map(|method| {
                let start = Instant::now();
                black_box(method.approximate(problem, black_box(partitions)));
                (method.label(), start.elapsed())
            })
            .collect();
        debug!(partitions, ?timings, "timed evaluation");

        if timings.iter().all(|(_, elapsed)| *elapsed > budget.budget) {
            let partitions = partitions / 2;
            info!(partitions, doublings, "timing budget reached");
            return TimingReport {
                partitions,
                doublings,
                exhausted: false,
                timings,
            };
        }

        if doublings >= budget.max_doublings {
            info!(partitions, doublings, "doubling cap reached before budget");
            return TimingReport {
                partitions,
                doublings,
                exhausted: true,
                timings,
            };
        }

        partitions = partitions.saturating_mul(2);
        doublings += 1;
    }
}
