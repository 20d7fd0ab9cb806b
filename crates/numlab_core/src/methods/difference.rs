//! Finite-difference differentiation.

use crate::problems::DerivativeProblem;
use crate::traits::{Discretization, Labelled, Method, ScalarFunction};
use num_traits::Float;

/// Finite-difference scheme for a first derivative.
///
/// - `Forward`: `(f(x + δ) - f(x)) / δ`, truncation error `O(δ)`
/// - `Central`: `(f(x + δ) - f(x - δ)) / (2δ)`, truncation error `O(δ²)`
///
/// Both lose accuracy to cancellation as `δ` shrinks: the numerator is a
/// difference of nearly equal values, so rounding error grows like `ε/δ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DifferenceScheme {
    /// One-sided difference to the right.
    Forward,
    /// Symmetric difference about the point.
    Central,
}

impl DifferenceScheme {
    /// Both schemes, forward first.
    pub const ALL: [DifferenceScheme; 2] = [DifferenceScheme::Forward, DifferenceScheme::Central];

    /// Theoretical order of the truncation error.
    pub fn theoretical_order(&self) -> u32 {
        match self {
            DifferenceScheme::Forward => 1,
            DifferenceScheme::Central => 2,
        }
    }
}

/// Forward difference `(f(x + δ) - f(x)) / δ`.
///
/// # Examples
/// ```
/// use numlab_core::methods::forward_difference;
///
/// let d = forward_difference(&|x: f64| x * x, 1.0, 1e-3);
/// assert!((d - 2.001).abs() < 1e-9);
/// ```
#[inline]
pub fn forward_difference<T: Float, F: ScalarFunction<T>>(f: &F, x: T, delta: T) -> T {
    (f.eval(x + delta) - f.eval(x)) / delta
}

/// Central difference `(f(x + δ) - f(x - δ)) / (2δ)`.
///
/// # Examples
/// ```
/// use numlab_core::methods::central_difference;
///
/// let d = central_difference(&|x: f64| x * x, 1.0, 1e-3);
/// assert!((d - 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn central_difference<T: Float, F: ScalarFunction<T>>(f: &F, x: T, delta: T) -> T {
    let two = T::one() + T::one();
    (f.eval(x + delta) - f.eval(x - delta)) / (two * delta)
}

impl<T: Float + Discretization, F: ScalarFunction<T>> Method<T, DerivativeProblem<T, F>>
    for DifferenceScheme
{
    #[inline]
    fn approximate(&self, problem: &DerivativeProblem<T, F>, delta: T) -> T {
        match self {
            DifferenceScheme::Forward => forward_difference(problem.function(), problem.point(), delta),
            DifferenceScheme::Central => central_difference(problem.function(), problem.point(), delta),
        }
    }
}

impl Labelled for DifferenceScheme {
    fn label(&self) -> &'static str {
        match self {
            DifferenceScheme::Forward => "forward",
            DifferenceScheme::Central => "central",
        }
    }
}
