//! Definite integral problems.

use crate::methods::count;
use crate::oracle;
use crate::traits::{Problem, ScalarFunction};
use crate::types::{Domain, DomainError};
use num_traits::Float;

/// Definite integral of a scalar function over `[lower, upper]`.
///
/// The discretization parameter is the partition count `N`; the
/// corresponding step is `h = (upper - lower) / N`.
///
/// # Example
///
/// ```
/// use numlab_core::problems::IntegralProblem;
///
/// let problem: IntegralProblem<f64, _> = IntegralProblem::semicircle();
/// assert_eq!(problem.bounds(), (-1.0, 1.0));
/// assert!((problem.reference_value() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
/// assert_eq!(problem.step(4), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct IntegralProblem<T: Float, F> {
    function: F,
    lower: T,
    upper: T,
    reference: T,
}

impl<T: Float, F: ScalarFunction<T>> IntegralProblem<T, F> {
    /// Build a problem from a function, bounds and the known exact value.
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::InvalidInterval)` - bounds not finite or `lower >= upper`
    /// * `Err(DomainError::OutsideDomain)` - a bound lies outside `domain`
    /// * `Err(DomainError::NonFiniteReference)` - `exact` is NaN or infinite
    pub fn new(function: F, lower: T, upper: T, exact: T, domain: Domain<T>) -> Result<Self, DomainError> {
        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            return Err(DomainError::InvalidInterval {
                lower: lower.to_f64().unwrap_or(f64::NAN),
                upper: upper.to_f64().unwrap_or(f64::NAN),
            });
        }
        domain.check(lower)?;
        domain.check(upper)?;
        if !exact.is_finite() {
            return Err(DomainError::NonFiniteReference {
                value: exact.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            function,
            lower,
            upper,
            reference: exact,
        })
    }

    /// Build a problem whose exact value is `G(upper) - G(lower)`.
    pub fn with_antiderivative<G>(
        function: F,
        antiderivative: G,
        lower: T,
        upper: T,
        domain: Domain<T>,
    ) -> Result<Self, DomainError>
    where
        G: ScalarFunction<T>,
    {
        let exact = antiderivative.eval(upper) - antiderivative.eval(lower);
        Self::new(function, lower, upper, exact, domain)
    }

    /// Evaluate the integrand at `x`.
    #[inline]
    pub fn eval(&self, x: T) -> T {
        self.function.eval(x)
    }

    /// Integration bounds `(lower, upper)`.
    #[inline]
    pub fn bounds(&self) -> (T, T) {
        (self.lower, self.upper)
    }

    /// Step size `(upper - lower) / partitions`.
    #[inline]
    pub fn step(&self, partitions: usize) -> T {
        (self.upper - self.lower) / count::<T>(partitions)
    }

    /// Cached exact value of the integral.
    #[inline]
    pub fn reference_value(&self) -> T {
        self.reference
    }
}

impl<T: Float> IntegralProblem<T, fn(T) -> T> {
    /// `∫_{-1}^{1} √(1 - x²) dx = π/2`.
    ///
    /// The integrand vanishes at both bounds and its derivative is singular
    /// there, which limits every equal-width rule to order 3/2.
    pub fn semicircle() -> Self {
        let one = T::one();
        let half_pi = T::from(std::f64::consts::FRAC_PI_2).unwrap_or_else(T::nan);
        Self {
            function: oracle::semicircle::<T>,
            lower: -one,
            upper: one,
            reference: half_pi,
        }
    }

    /// `∫_a^b √(1 - x²) dx` for `-1 <= a < b <= 1`.
    pub fn semicircle_on(lower: T, upper: T) -> Result<Self, DomainError> {
        Self::with_antiderivative(
            oracle::semicircle::<T> as fn(T) -> T,
            oracle::semicircle_antiderivative::<T>,
            lower,
            upper,
            Domain::new(-T::one(), T::one()),
        )
    }

    /// `∫_a^b eˣ dx = e^b - e^a`, a smooth integrand.
    pub fn exponential_on(lower: T, upper: T) -> Result<Self, DomainError> {
        Self::with_antiderivative(
            oracle::exponential::<T> as fn(T) -> T,
            oracle::exponential::<T>,
            lower,
            upper,
            Domain::real_line(),
        )
    }
}

impl<T: Float, F: ScalarFunction<T>> Problem<T> for IntegralProblem<T, F> {
    type Parameter = usize;

    #[inline]
    fn reference(&self, _partitions: usize) -> T {
        self.reference
    }
}
