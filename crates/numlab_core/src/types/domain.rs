//! Closed real intervals.

use super::DomainError;
use num_traits::Float;

/// Closed interval `[lower, upper]` on which a test function is defined.
///
/// Either bound may be infinite; [`Domain::real_line`] covers every finite
/// input.
///
/// # Example
///
/// ```
/// use numlab_core::types::Domain;
///
/// let unit: Domain<f64> = Domain::new(-1.0, 1.0);
/// assert!(unit.contains(0.5));
/// assert!(!unit.contains(1.5));
/// assert!(unit.check(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain<T: Float> {
    lower: T,
    upper: T,
}

impl<T: Float> Domain<T> {
    /// Create the closed interval `[lower, upper]`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper` or either bound is NaN.
    pub fn new(lower: T, upper: T) -> Self {
        assert!(lower <= upper, "domain lower bound must not exceed upper bound");
        Self { lower, upper }
    }

    /// The whole real line.
    pub fn real_line() -> Self {
        Self {
            lower: T::neg_infinity(),
            upper: T::infinity(),
        }
    }

    /// Lower bound.
    #[inline]
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Upper bound.
    #[inline]
    pub fn upper(&self) -> T {
        self.upper
    }

    /// True if `x` is finite and lies in the closed interval.
    #[inline]
    pub fn contains(&self, x: T) -> bool {
        x.is_finite() && x >= self.lower && x <= self.upper
    }

    /// Return `x` unchanged, or `DomainError::OutsideDomain` if it is not contained.
    pub fn check(&self, x: T) -> Result<T, DomainError> {
        if self.contains(x) {
            Ok(x)
        } else {
            Err(DomainError::OutsideDomain {
                point: x.to_f64().unwrap_or(f64::NAN),
                lower: self.lower.to_f64().unwrap_or(f64::NAN),
                upper: self.upper.to_f64().unwrap_or(f64::NAN),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        let d: Domain<f64> = Domain::new(-1.0, 1.0);
        assert!(d.contains(-1.0));
        assert!(d.contains(1.0));
        assert!(!d.contains(1.0 + f64::EPSILON));
    }

    #[test]
    fn test_real_line_rejects_non_finite() {
        let d: Domain<f64> = Domain::real_line();
        assert!(d.contains(1e300));
        assert!(!d.contains(f64::INFINITY));
        assert!(!d.contains(f64::NAN));
    }

    #[test]
    fn test_check_reports_bounds() {
        let d: Domain<f64> = Domain::new(0.0, 2.0);
        match d.check(-0.5) {
            Err(DomainError::OutsideDomain {
                point,
                lower,
                upper,
            }) => {
                assert_eq!(point, -0.5);
                assert_eq!(lower, 0.0);
                assert_eq!(upper, 2.0);
            }
            other => panic!("Expected OutsideDomain, got {:?}", other),
        }
        assert_eq!(d.check(1.0), Ok(1.0));
    }

    #[test]
    #[should_panic(expected = "domain lower bound")]
    fn test_reversed_domain_panics() {
        let _ = Domain::new(1.0_f64, -1.0);
    }

    #[test]
    fn test_with_f32() {
        let d: Domain<f32> = Domain::new(-1.0, 1.0);
        assert!(d.contains(0.25_f32));
    }
}
