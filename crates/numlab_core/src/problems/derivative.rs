//! Pointwise derivative problems.

use crate::oracle;
use crate::traits::{Discretization, Problem, ScalarFunction};
use crate::types::{Domain, DomainError};
use num_traits::Float;

/// Derivative of a scalar function at a fixed point.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
/// * `F` - Test function
///
/// # Example
///
/// ```
/// use numlab_core::problems::DerivativeProblem;
/// use numlab_core::types::Domain;
///
/// let problem = DerivativeProblem::new(
///     |x: f64| x.sin(),
///     |x: f64| x.cos(),
///     0.0,
///     Domain::real_line(),
/// )
/// .unwrap();
/// assert_eq!(problem.reference_value(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct DerivativeProblem<T: Float, F> {
    function: F,
    point: T,
    reference: T,
}

impl<T: Float, F: ScalarFunction<T>> DerivativeProblem<T, F> {
    /// Build a problem from a function, its analytic derivative and a point.
    ///
    /// The derivative is evaluated once here and cached.
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::OutsideDomain)` - `point` is not in `domain`
    /// * `Err(DomainError::NonFiniteReference)` - derivative is NaN or infinite at `point`
    pub fn new<D>(function: F, derivative: D, point: T, domain: Domain<T>) -> Result<Self, DomainError>
    where
        D: ScalarFunction<T>,
    {
        let point = domain.check(point)?;
        let reference = derivative.eval(point);
        if !reference.is_finite() {
            return Err(DomainError::NonFiniteReference {
                value: reference.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            function,
            point,
            reference,
        })
    }

    /// Evaluate the test function at `x`.
    #[inline]
    pub fn eval(&self, x: T) -> T {
        self.function.eval(x)
    }

    /// The point at which the derivative is taken.
    #[inline]
    pub fn point(&self) -> T {
        self.point
    }

    /// Cached analytic derivative at [`point`](Self::point).
    #[inline]
    pub fn reference_value(&self) -> T {
        self.reference
    }

    /// Borrow the test function.
    pub fn function(&self) -> &F {
        &self.function
    }
}

impl<T: Float> DerivativeProblem<T, fn(T) -> T> {
    /// `f(x) = x(x - 1)` at `point`, with `f'(x) = 2x - 1`.
    ///
    /// At `x = 1` the reference is exactly `1.0`. Central differences are
    /// free of truncation error for this quadratic, so their error is pure
    /// rounding.
    pub fn quadratic_at(point: T) -> Result<Self, DomainError> {
        Self::new(
            oracle::quadratic::<T> as fn(T) -> T,
            oracle::quadratic_derivative::<T>,
            point,
            Domain::real_line(),
        )
    }

    /// `f(x) = eˣ` at `point`, with `f'(x) = eˣ`.
    pub fn exponential_at(point: T) -> Result<Self, DomainError> {
        Self::new(
            oracle::exponential::<T> as fn(T) -> T,
            oracle::exponential::<T>,
            point,
            Domain::real_line(),
        )
    }
}

impl<T: Float + Discretization, F: ScalarFunction<T>> Problem<T> for DerivativeProblem<T, F> {
    type Parameter = T;

    #[inline]
    fn reference(&self, _step: T) -> T {
        self.reference
    }
}
