//! Error types for structured error handling.
//!
//! This module provides:
//! - `DomainError`: Problem construction outside the test function's domain
//! - `ConvergenceError`: Order-of-convergence estimation failures
//! - `SweepError`: Invalid or collapsed discretization parameter sweeps
//!
//! A zero reference value is deliberately absent from this taxonomy: it is
//! absorbed by [`relative_error`](crate::metrics::relative_error), which
//! reports `0.0` in that case.

use thiserror::Error;

/// Problem construction errors.
///
/// Raised when an evaluation point or interval lies outside the domain of
/// the test function, or when the analytic reference cannot be represented.
/// Fatal to the problem instance being built.
///
/// # Examples
/// ```
/// use numlab_core::types::DomainError;
///
/// let err = DomainError::OutsideDomain { point: 1.5, lower: -1.0, upper: 1.0 };
/// assert_eq!(format!("{}", err), "Point 1.5 outside function domain [-1, 1]");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DomainError {
    /// Evaluation point outside the closed domain of the test function.
    #[error("Point {point} outside function domain [{lower}, {upper}]")]
    OutsideDomain {
        /// The rejected point
        point: f64,
        /// Lower bound of the domain
        lower: f64,
        /// Upper bound of the domain
        upper: f64,
    },

    /// Integration bounds are reversed, equal, or not finite.
    #[error("Invalid interval [{lower}, {upper}]: bounds must be finite with lower < upper")]
    InvalidInterval {
        /// Lower bound supplied
        lower: f64,
        /// Upper bound supplied
        upper: f64,
    },

    /// Analytic reference evaluated to NaN or infinity.
    #[error("Reference value {value} is not finite")]
    NonFiniteReference {
        /// The offending value
        value: f64,
    },
}

/// Order-of-convergence estimation errors.
///
/// `UndefinedOrder` is the signal for a zero-error sample: the logarithm of
/// zero has no finite value and the estimator refuses to coerce it into
/// zero or infinity.
///
/// # Examples
/// ```
/// use numlab_core::types::ConvergenceError;
///
/// let err = ConvergenceError::UndefinedOrder { index: 3 };
/// assert!(format!("{}", err).contains("index 3"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvergenceError {
    /// Error sample is zero (or not strictly positive), so its logarithm is undefined.
    #[error("Convergence order undefined: error at index {index} is not strictly positive")]
    UndefinedOrder {
        /// Index of the offending sample
        index: usize,
    },

    /// Discretization parameter is zero, negative, or not finite.
    #[error("Parameter {value} at index {index} must be strictly positive")]
    NonPositiveParameter {
        /// Index of the offending sample
        index: usize,
        /// The offending parameter
        value: f64,
    },

    /// The two samples share the same parameter, so the slope has no run.
    #[error("Parameters at indices {i} and {j} coincide")]
    CoincidentParameters {
        /// First index
        i: usize,
        /// Second index
        j: usize,
    },

    /// Requested index is past the end of the sample.
    #[error("Index {index} out of range for {len} samples")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of samples available
        len: usize,
    },

    /// Parameter and error slices differ in length.
    #[error("Length mismatch: {params} parameters but {errors} errors")]
    LengthMismatch {
        /// Number of parameters
        params: usize,
        /// Number of errors
        errors: usize,
    },

    /// Not enough samples for the requested estimate.
    #[error("Insufficient samples: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of samples provided
        got: usize,
        /// Minimum number required
        need: usize,
    },
}

/// Sweep construction errors.
///
/// # Examples
/// ```
/// use numlab_core::types::SweepError;
///
/// let err = SweepError::Collapsed { requested: 50, actual: 37 };
/// assert!(format!("{}", err).contains("50"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepError {
    /// A sweep needs at least one parameter.
    #[error("Sweep is empty")]
    Empty,

    /// Parameter at `index` breaks the requested ordering or repeats its predecessor.
    #[error("Sweep is not strictly monotonic at index {index}")]
    NonMonotonic {
        /// Index of the first offending parameter
        index: usize,
    },

    /// Parameter is zero, negative, or not finite.
    #[error("Sweep parameter {value} at index {index} must be strictly positive")]
    NonPositiveParameter {
        /// Index of the offending parameter
        index: usize,
        /// The offending value
        value: f64,
    },

    /// Deduplication left fewer points than requested and the policy rejects it.
    #[error("Sweep collapsed from {requested} requested points to {actual} distinct points")]
    Collapsed {
        /// Number of points requested
        requested: usize,
        /// Number of distinct points after deduplication
        actual: usize,
    },

    /// Geometric grid needs at least one point.
    #[error("Invalid point count {0}: must be at least 1")]
    InvalidCount(usize),

    /// Exponent range is not finite.
    #[error("Invalid exponent range [{start}, {end}]")]
    InvalidRange {
        /// First decade exponent
        start: f64,
        /// Last decade exponent
        end: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display() {
        let err = DomainError::InvalidInterval {
            lower: 1.0,
            upper: -1.0,
        };
        assert!(err.to_string().contains("[1, -1]"));

        let err = DomainError::NonFiniteReference { value: f64::NAN };
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_convergence_error_display() {
        let err = ConvergenceError::CoincidentParameters { i: 1, j: 4 };
        assert_eq!(err.to_string(), "Parameters at indices 1 and 4 coincide");

        let err = ConvergenceError::LengthMismatch {
            params: 3,
            errors: 2,
        };
        assert!(err.to_string().contains("3 parameters but 2 errors"));
    }

    #[test]
    fn test_sweep_error_display() {
        assert_eq!(SweepError::Empty.to_string(), "Sweep is empty");
        assert!(SweepError::NonMonotonic { index: 2 }
            .to_string()
            .contains("index 2"));
        assert!(SweepError::InvalidCount(0).to_string().contains('0'));
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(
            ConvergenceError::UndefinedOrder { index: 0 },
            ConvergenceError::UndefinedOrder { index: 0 }
        );
        assert_ne!(
            SweepError::Collapsed {
                requested: 5,
                actual: 4
            },
            SweepError::Collapsed {
                requested: 5,
                actual: 3
            }
        );
    }
}
