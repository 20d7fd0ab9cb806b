//! Sweep results.

use numlab_core::metrics::relative_difference;
use numlab_core::traits::{Discretization, Float};
use numlab_core::types::ConvergenceError;

use crate::convergence::{self, OrderFit};
use crate::optimal::{select_optimal, Optimum};

/// One sweep sample: the parameter, the method's result and its error.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorRecord<P, T> {
    /// Discretization parameter.
    pub parameter: P,
    /// Value returned by the method.
    pub approximation: T,
    /// Reference value at this parameter.
    pub reference: T,
    /// Relative error of `approximation` against `reference`.
    pub error: T,
}

/// The records of one method over one sweep, in sweep order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepResult<P, T> {
    label: &'static str,
    records: Vec<ErrorRecord<P, T>>,
}

impl<P: Discretization, T: Float> SweepResult<P, T> {
    pub(crate) fn new(label: &'static str, records: Vec<ErrorRecord<P, T>>) -> Self {
        Self { label, records }
    }

    /// Label of the method that produced the records.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The records, index-aligned with the sweep.
    #[inline]
    pub fn records(&self) -> &[ErrorRecord<P, T>] {
        &self.records
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parameters in sweep order.
    pub fn parameters(&self) -> Vec<P> {
        self.records.iter().map(|r| r.parameter).collect()
    }

    /// Relative errors in sweep order.
    pub fn errors(&self) -> Vec<T> {
        self.records.iter().map(|r| r.error).collect()
    }

    /// Least-squares order over the whole sweep.
    pub fn fit_order(&self) -> Result<OrderFit<T>, ConvergenceError> {
        convergence::fit_order(&self.parameters(), &self.errors())
    }

    /// Least-squares order over parameters in `[lower, upper]`.
    pub fn fit_order_within(&self, lower: P, upper: P) -> Result<OrderFit<T>, ConvergenceError> {
        convergence::fit_order_within(&self.parameters(), &self.errors(), lower, upper)
    }

    /// Two-point order between the middle record and `offset` before it.
    pub fn order_at_midpoint(&self, offset: usize) -> Result<T, ConvergenceError> {
        convergence::order_at_midpoint(&self.parameters(), &self.errors(), offset)
    }

    /// Neighbour-to-neighbour order profile.
    pub fn local_orders(&self) -> Vec<Result<T, ConvergenceError>> {
        convergence::local_orders(&self.parameters(), &self.errors())
    }

    /// Record with the smallest error.
    pub fn optimal(&self) -> Result<Optimum<P, T>, ConvergenceError> {
        select_optimal(&self.parameters(), &self.errors())
    }
}

/// Two sweeps of the same problem over the same parameters.
///
/// Records at the same index always share a parameter, so rows can be
/// printed side by side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DualSweep<P, T> {
    first: SweepResult<P, T>,
    second: SweepResult<P, T>,
}

impl<P: Discretization, T: Float> DualSweep<P, T> {
    pub(crate) fn new(first: SweepResult<P, T>, second: SweepResult<P, T>) -> Self {
        debug_assert_eq!(first.parameters(), second.parameters());
        Self { first, second }
    }

    /// Results of the first method.
    #[inline]
    pub fn first(&self) -> &SweepResult<P, T> {
        &self.first
    }

    /// Results of the second method.
    #[inline]
    pub fn second(&self) -> &SweepResult<P, T> {
        &self.second
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.first.len()
    }

    /// Whether there are no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Index-aligned record pairs.
    pub fn rows(&self) -> impl Iterator<Item = (&ErrorRecord<P, T>, &ErrorRecord<P, T>)> + '_ {
        self.first.records.iter().zip(&self.second.records)
    }

    /// Relative difference between the two methods' results at each row.
    ///
    /// Useful where the methods should agree exactly in real arithmetic,
    /// e.g. ascending and descending summation.
    pub fn relative_differences(&self) -> Vec<T> {
        self.rows()
            .map(|(a, b)| relative_difference(a.approximation, b.approximation))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(parameter: f64, error: f64) -> ErrorRecord<f64, f64> {
        ErrorRecord {
            parameter,
            approximation: 1.0 + error,
            reference: 1.0,
            error,
        }
    }

    #[test]
    fn test_sweep_result_accessors() {
        let result = SweepResult::new(
            "forward",
            vec![record(1e-3, 1e-3), record(1e-2, 1e-2), record(1e-1, 1e-1)],
        );
        assert_eq!(result.label(), "forward");
        assert_eq!(result.len(), 3);
        assert_eq!(result.parameters(), vec![1e-3, 1e-2, 1e-1]);
        assert!((result.fit_order().unwrap().order - 1.0).abs() < 1e-10);
        assert_eq!(result.optimal().unwrap().index, 0);
        assert_eq!(result.local_orders().len(), 2);
    }

    #[test]
    fn test_dual_sweep_rows_and_differences() {
        let first = SweepResult::new("a", vec![record(1.0, 0.0), record(2.0, 0.5)]);
        let second = SweepResult::new("b", vec![record(1.0, 0.0), record(2.0, 0.0)]);
        let dual = DualSweep::new(first, second);

        assert_eq!(dual.len(), 2);
        assert!(dual.rows().all(|(a, b)| a.parameter == b.parameter));
        let diffs = dual.relative_differences();
        assert_eq!(diffs[0], 0.0);
        // |1.5 - 1.0| / 1.25
        assert!((diffs[1] - 0.4).abs() < 1e-15);
    }
}
