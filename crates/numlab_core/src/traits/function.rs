//! Narrow functional interface for test functions.

use num_traits::Float;

/// A pure single-argument, single-return numeric function.
///
/// Problem instances accept any `ScalarFunction`; every `Fn(T) -> T`
/// closure or function item implements it automatically.
///
/// # Invariants
/// - Evaluation must be deterministic and free of side effects
/// - Outside its domain the function may return NaN but must not panic
///
/// # Examples
/// ```
/// use numlab_core::traits::ScalarFunction;
///
/// fn square(x: f64) -> f64 {
///     x * x
/// }
///
/// assert_eq!(square.eval(3.0), 9.0);
/// assert_eq!((|x: f64| x + 1.0).eval(1.0), 2.0);
/// ```
pub trait ScalarFunction<T: Float> {
    /// Evaluate the function at `x`.
    fn eval(&self, x: T) -> T;
}

impl<T, F> ScalarFunction<T> for F
where
    T: Float,
    F: Fn(T) -> T,
{
    #[inline]
    fn eval(&self, x: T) -> T {
        self(x)
    }
}
