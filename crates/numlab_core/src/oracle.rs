//! Reference oracle: closed-form values for the shipped test problems.
//!
//! Every function here is the analytic counterpart of a test function in
//! [`problems`](crate::problems). Values are computed in the caller's
//! precision except [`harmonic_number`], which is always evaluated in `f64`
//! so that it can serve as ground truth for `f32` experiments.

use num_traits::Float;

/// Euler–Mascheroni constant γ.
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Term count below which [`harmonic_number`] sums directly.
const HARMONIC_DIRECT_LIMIT: usize = 1000;

/// Quadratic test function `f(x) = x(x - 1)`.
#[inline]
pub fn quadratic<T: Float>(x: T) -> T {
    x * (x - T::one())
}

/// Analytic derivative of [`quadratic`]: `f'(x) = 2x - 1`.
#[inline]
pub fn quadratic_derivative<T: Float>(x: T) -> T {
    (x + x) - T::one()
}

/// Semicircle integrand `f(x) = √(1 - x²)`, NaN for `|x| > 1`.
#[inline]
pub fn semicircle<T: Float>(x: T) -> T {
    (T::one() - x * x).sqrt()
}

/// Antiderivative of [`semicircle`]: `F(x) = (x√(1 - x²) + asin x) / 2`.
///
/// `F(1) - F(-1) = π/2`.
#[inline]
pub fn semicircle_antiderivative<T: Float>(x: T) -> T {
    let half = T::one() / (T::one() + T::one());
    half * (x * semicircle(x) + x.asin())
}

/// Exponential test function, its own derivative and antiderivative.
#[inline]
pub fn exponential<T: Float>(x: T) -> T {
    x.exp()
}

/// Harmonic number `H_n = Σ_{k=1}^{n} 1/k` in double precision.
///
/// Small `n` is summed directly in descending order; larger `n` uses the
/// Euler–Maclaurin expansion
///
/// ```text
/// H_n ≈ ln n + γ + 1/(2n) - 1/(12n²) + 1/(120n⁴)
/// ```
///
/// whose truncation error is below `1/(252 n⁶)`, far under `f64` rounding
/// for `n >= 1000`. `H_0 = 0`.
///
/// # Examples
/// ```
/// use numlab_core::oracle::harmonic_number;
///
/// assert_eq!(harmonic_number(1), 1.0);
/// assert!((harmonic_number(4) - 25.0 / 12.0).abs() < 1e-15);
/// ```
pub fn harmonic_number(n: usize) -> f64 {
    if n < HARMONIC_DIRECT_LIMIT {
        return (1..=n).rev().map(|k| 1.0 / k as f64).sum();
    }
    let n = n as f64;
    let n2 = n * n;
    n.ln() + EULER_GAMMA + 1.0 / (2.0 * n) - 1.0 / (12.0 * n2) + 1.0 / (120.0 * n2 * n2)
}

/// Limit of `Σ_{n>=1} 1/(2n(2n+1))`, equal to `1 - ln 2`.
#[inline]
pub fn alternating_ratio_limit<T: Float>() -> T {
    let two = T::one() + T::one();
    T::one() - two.ln()
}
