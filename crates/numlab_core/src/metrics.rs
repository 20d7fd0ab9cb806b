//! Error metrics between an approximation and its reference.
//!
//! ## Zero-reference convention
//!
//! [`relative_error`] returns `0.0` when the reference is exactly zero
//! instead of dividing by zero. This keeps the metric finite and
//! non-negative, but it is a convention rather than a measure of accuracy:
//! an approximation of a zero reference reports zero error however far off
//! it is. Use [`absolute_error`] where that distinction matters.

use num_traits::Float;

/// Relative error `|approx - exact| / |exact|`.
///
/// Returns zero when `exact == 0`. No clamping or log transform is applied;
/// a NaN approximation propagates as NaN.
///
/// # Examples
/// ```
/// use numlab_core::metrics::relative_error;
///
/// assert_eq!(relative_error(1.1_f64, 1.0), (1.1_f64 - 1.0).abs());
/// assert_eq!(relative_error(0.5_f64, 0.0), 0.0);
/// ```
#[inline]
pub fn relative_error<T: Float>(approx: T, exact: T) -> T {
    if exact == T::zero() {
        return T::zero();
    }
    ((approx - exact) / exact).abs()
}

/// Absolute error `|approx - exact|`.
#[inline]
pub fn absolute_error<T: Float>(approx: T, exact: T) -> T {
    (approx - exact).abs()
}

/// Relative difference `|a - b| / |(a + b) / 2|` between two competing results.
///
/// Used where neither value is privileged as ground truth, e.g. ascending
/// versus descending summation. Returns zero when the mean is zero.
///
/// # Examples
/// ```
/// use numlab_core::metrics::relative_difference;
///
/// assert_eq!(relative_difference(2.0_f64, 2.0), 0.0);
/// assert!((relative_difference(1.0_f64, 3.0) - 1.0).abs() < 1e-15);
/// ```
#[inline]
pub fn relative_difference<T: Float>(a: T, b: T) -> T {
    let two = T::one() + T::one();
    let mean = (a + b) / two;
    if mean == T::zero() {
        return T::zero();
    }
    (a - b).abs() / mean.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_relative_error_exact_match() {
        assert_eq!(relative_error(2.5_f64, 2.5), 0.0);
    }

    #[test]
    fn test_relative_error_negative_reference() {
        let err = relative_error(-0.9_f64, -1.0);
        assert!((err - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_relative_error_zero_reference_convention() {
        assert_eq!(relative_error(1e300_f64, 0.0), 0.0);
        assert_eq!(relative_error(-3.0_f64, -0.0), 0.0);
    }

    #[test]
    fn test_relative_error_propagates_nan() {
        assert!(relative_error(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_absolute_error() {
        assert_eq!(absolute_error(1.5_f64, 2.0), 0.5);
        assert_eq!(absolute_error(0.5_f64, 0.0), 0.5);
    }

    #[test]
    fn test_relative_difference_zero_mean() {
        assert_eq!(relative_difference(1.0_f64, -1.0), 0.0);
    }

    #[test]
    fn test_relative_difference_symmetric() {
        assert_eq!(
            relative_difference(16.69_f64, 15.40),
            relative_difference(15.40_f64, 16.69)
        );
    }

    proptest! {
        #[test]
        fn prop_relative_error_non_negative(
            approx in -1e12_f64..1e12,
            exact in -1e12_f64..1e12,
        ) {
            prop_assert!(relative_error(approx, exact) >= 0.0);
        }

        #[test]
        fn prop_relative_error_zero_when_reference_zero(approx in -1e12_f64..1e12) {
            prop_assert_eq!(relative_error(approx, 0.0), 0.0);
        }

        #[test]
        fn prop_relative_error_scale_invariant(
            approx in 0.5_f64..2.0,
            exact in 0.5_f64..2.0,
        ) {
            let scaled = relative_error(approx * 1024.0, exact * 1024.0);
            prop_assert_eq!(scaled, relative_error(approx, exact));
        }
    }
}
