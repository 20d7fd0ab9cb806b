//! Problem and method abstractions.

use num_traits::Float;
use std::fmt::Debug;

/// A discretization parameter: a step size or a partition/term count.
///
/// [`magnitude`](Discretization::magnitude) maps the parameter onto the
/// positive real axis so that log-log slopes can be taken regardless of
/// whether it is a real step or an integer count.
pub trait Discretization: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// The parameter as a real number.
    fn magnitude(self) -> f64;
}

impl Discretization for f64 {
    #[inline]
    fn magnitude(self) -> f64 {
        self
    }
}

impl Discretization for f32 {
    #[inline]
    fn magnitude(self) -> f64 {
        self as f64
    }
}

impl Discretization for usize {
    #[inline]
    fn magnitude(self) -> f64 {
        self as f64
    }
}

/// An immutable problem instance that knows its own reference value.
///
/// For derivatives and integrals the reference is computed once at
/// construction and does not depend on the parameter. For partial sums the
/// reference is the exact value of the sum with `parameter` terms.
pub trait Problem<T: Float> {
    /// The discretization parameter accepted by methods for this problem.
    type Parameter: Discretization;

    /// The exact (or designated ground-truth) value at `parameter`.
    fn reference(&self, parameter: Self::Parameter) -> T;
}

/// A numerical scheme approximating a problem at a given resolution.
///
/// # Invariants
/// - `approximate` is pure: identical inputs give bit-identical output
/// - `approximate` never panics for a strictly positive parameter; it may
///   return an inaccurate or non-finite value when rounding dominates
///
/// # Examples
/// ```
/// use numlab_core::methods::DifferenceScheme;
/// use numlab_core::problems::DerivativeProblem;
/// use numlab_core::traits::{Method, Problem};
///
/// let problem = DerivativeProblem::quadratic_at(1.0_f64).unwrap();
/// let approx = DifferenceScheme::Central.approximate(&problem, 1e-5);
/// assert!((approx - problem.reference(1e-5)).abs() < 1e-8);
/// ```
pub trait Method<T: Float, P: Problem<T>>: Labelled {
    /// Approximate the problem at the given discretization parameter.
    fn approximate(&self, problem: &P, parameter: P::Parameter) -> T;
}

/// Short human-readable name used by presenters and logs.
pub trait Labelled {
    /// The name, e.g. `"central"` or `"sum_down"`.
    fn label(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_of_counts_and_steps() {
        assert_eq!(10_usize.magnitude(), 10.0);
        assert_eq!(0.5_f32.magnitude(), 0.5);
        assert_eq!(1e-8_f64.magnitude(), 1e-8);
    }
}
