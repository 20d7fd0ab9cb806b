//! Core traits for test functions, problems and approximation methods.
//!
//! This module defines fundamental abstractions for:
//! - Generic floating-point operations (`Float` trait)
//! - Single-argument test functions (`ScalarFunction` trait)
//! - Discretization parameters (`Discretization` trait)
//! - Problem instances carrying a reference value (`Problem` trait)
//! - Approximation schemes (`Method` and `Labelled` traits)
//!
//! Methods are designed for static dispatch (enum-based): each method
//! family is an enum implementing [`Method`] for one problem type.
//!
//! ## Important
//! Do NOT box methods behind `dyn Method`; the sweep driver is generic over
//! the concrete method so every evaluation inlines down to the scheme.

/// Generic floating-point trait for numeric computations.
///
/// This trait provides a unified interface for the working precision of an
/// experiment. Running the same method in `f32` and `f64` is how rounding
/// behaviour is compared across precisions.
///
/// # Examples
/// ```
/// use numlab_core::traits::Float;
///
/// fn central<T: Float>(f: impl Fn(T) -> T, x: T, h: T) -> T {
///     (f(x + h) - f(x - h)) / (h + h)
/// }
///
/// let d: f64 = central(|x: f64| x * x, 3.0, 1e-4);
/// assert!((d - 6.0).abs() < 1e-8);
/// ```
pub use num_traits::Float;

pub mod function;
pub mod method;

pub use function::ScalarFunction;
pub use method::{Discretization, Labelled, Method, Problem};
