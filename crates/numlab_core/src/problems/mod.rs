//! Immutable problem instances.
//!
//! A problem bundles a test function, where it is evaluated, and the
//! reference value approximations are measured against:
//!
//! - [`DerivativeProblem`]: `f'(x)` at a point, step size `δ` as parameter
//! - [`IntegralProblem`]: `∫_a^b f(x) dx`, partition count `N` as parameter
//! - [`HarmonicSeries`]: `H_N = Σ 1/n`, term count `N` as parameter
//! - [`AlternatingRatioSeries`]: `Σ 1/(2n(2n+1))`, term count `N` as parameter
//!
//! Construction validates the domain and evaluates the reference once.
//! Accessors never mutate.

mod derivative;
mod integral;
mod series;

pub use derivative::DerivativeProblem;
pub use integral::IntegralProblem;
pub use series::{AlternatingRatioSeries, HarmonicSeries};
