//! Equal-width quadrature rules.

use super::count;
use crate::problems::IntegralProblem;
use crate::traits::{Labelled, Method, ScalarFunction};
use num_traits::Float;

/// Composite quadrature rule on `N` equal partitions.
///
/// - `LeftRectangle`: `h Σ_{i=0}^{N-1} f(a + ih)`, first order for smooth `f`
/// - `Trapezoid`: `h [(f(a) + f(b))/2 + Σ_{i=1}^{N-1} f(a + ih)]`, second order
///   for smooth `f`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuadratureRule {
    /// Left-endpoint rectangle rule.
    LeftRectangle,
    /// Composite trapezoid rule.
    Trapezoid,
}

impl QuadratureRule {
    /// Both rules, rectangle first.
    pub const ALL: [QuadratureRule; 2] = [QuadratureRule::LeftRectangle, QuadratureRule::Trapezoid];

    /// Theoretical order for a smooth integrand.
    pub fn theoretical_order(&self) -> u32 {
        match self {
            QuadratureRule::LeftRectangle => 1,
            QuadratureRule::Trapezoid => 2,
        }
    }
}

/// Left-rectangle rule with `n` partitions of `[a, b]`.
///
/// # Examples
/// ```
/// use numlab_core::methods::left_rectangle;
///
/// // Σ_{i=0}^{3} (i/4) / 4 = 6/16
/// let area = left_rectangle(&|x: f64| x, 0.0, 1.0, 4);
/// assert_eq!(area, 0.375);
/// ```
pub fn left_rectangle<T: Float, F: ScalarFunction<T>>(f: &F, a: T, b: T, n: usize) -> T {
    let h = (b - a) / count::<T>(n);
    let mut result = T::zero();
    for i in 0..n {
        result = result + f.eval(a + count::<T>(i) * h);
    }
    result * h
}

/// Trapezoid rule with `n` partitions of `[a, b]`.
///
/// # Examples
/// ```
/// use numlab_core::methods::trapezoid;
///
/// // Exact for linear integrands
/// let area = trapezoid(&|x: f64| x, 0.0, 1.0, 4);
/// assert_eq!(area, 0.5);
/// ```
pub fn trapezoid<T: Float, F: ScalarFunction<T>>(f: &F, a: T, b: T, n: usize) -> T {
    let h = (b - a) / count::<T>(n);
    let half = T::one() / (T::one() + T::one());
    let mut result = half * (f.eval(a) + f.eval(b));
    for i in 1..n {
        result = result + f.eval(a + count::<T>(i) * h);
    }
    result * h
}

impl<T: Float, F: ScalarFunction<T>> Method<T, IntegralProblem<T, F>> for QuadratureRule {
    fn approximate(&self, problem: &IntegralProblem<T, F>, partitions: usize) -> T {
        let (a, b) = problem.bounds();
        let f = |x: T| problem.eval(x);
        match self {
            QuadratureRule::LeftRectangle => left_rectangle(&f, a, b, partitions),
            QuadratureRule::Trapezoid => trapezoid(&f, a, b, partitions),
        }
    }
}

impl Labelled for QuadratureRule {
    fn label(&self) -> &'static str {
        match self {
            QuadratureRule::LeftRectangle => "rectangle",
            QuadratureRule::Trapezoid => "trapezoid",
        }
    }
}
