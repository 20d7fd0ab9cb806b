//! Approximation methods.
//!
//! Each family is an enum implementing [`Method`](crate::traits::Method) for
//! one problem type, backed by a free function that can be called directly:
//!
//! | Family | Variants | Problem | Parameter |
//! |--------|----------|---------|-----------|
//! | [`DifferenceScheme`] | `Forward`, `Central` | [`DerivativeProblem`](crate::problems::DerivativeProblem) | step `δ` |
//! | [`QuadratureRule`] | `LeftRectangle`, `Trapezoid` | [`IntegralProblem`](crate::problems::IntegralProblem) | partitions `N` |
//! | [`SummationOrder`] | `Ascending`, `Descending` | [`HarmonicSeries`](crate::problems::HarmonicSeries) | terms `N` |
//! | [`SeriesForm`] | `Alternating`, `SplitDifference`, `Direct` | [`AlternatingRatioSeries`](crate::problems::AlternatingRatioSeries) | terms `N` |
//!
//! All methods are pure and never panic for a positive parameter. No guard
//! against a zero parameter is added; plain IEEE division applies.
//!
//! ## Accumulation order
//!
//! The summation kernels accumulate into a single running sum in a fixed
//! index order. That order is what the experiments measure, so the loops
//! must not be replaced by pairwise, compensated, or parallel reductions.

mod difference;
mod quadrature;
mod series;
mod summation;

pub use difference::{central_difference, forward_difference, DifferenceScheme};
pub use quadrature::{left_rectangle, trapezoid, QuadratureRule};
pub use series::{alternating_ratio_sum, direct_ratio_sum, split_ratio_sum, SeriesForm};
pub use summation::{harmonic_sum, SummationOrder};

use num_traits::Float;

/// Convert an index or count into the working precision.
///
/// Exact for every count below `2^24` in `f32` and `2^53` in `f64`.
#[inline]
pub(crate) fn count<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}
