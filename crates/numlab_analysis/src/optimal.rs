//! Optimal discretization parameter.
//!
//! Finite-difference error curves are U-shaped: truncation error falls as
//! the step shrinks until cancellation in `f(x + δ) - f(x)` takes over. The
//! bottom of the U is the best step a scheme can achieve in a given
//! precision.

use numlab_core::traits::Float;
use numlab_core::types::ConvergenceError;

/// The sample with the smallest error in a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Optimum<P, T> {
    /// Position of the sample in the sweep.
    pub index: usize,
    /// The minimising parameter.
    pub parameter: P,
    /// The minimum error.
    pub error: T,
}

impl<P, T> Optimum<P, T> {
    /// Whether the minimum lies strictly inside a sweep of `len` samples.
    ///
    /// A minimum at either end means the sweep did not bracket the
    /// turning point.
    #[inline]
    pub fn is_interior(&self, len: usize) -> bool {
        self.index > 0 && self.index + 1 < len
    }
}

/// Parameter minimising the error.
///
/// Ties go to the first occurrence in sweep order. NaN errors never win.
///
/// # Examples
/// ```
/// use numlab_analysis::optimal::select_optimal;
///
/// let steps = [1e-12, 1e-8, 1e-4];
/// let errors = [1e-4, 1e-9, 1e-4];
/// let best = select_optimal(&steps, &errors).unwrap();
/// assert_eq!(best.parameter, 1e-8);
/// assert!(best.is_interior(steps.len()));
/// ```
///
/// # Errors
/// - `LengthMismatch` when the slices differ in length
/// - `InsufficientData` when there is no comparable error sample
pub fn select_optimal<P, T>(params: &[P], errors: &[T]) -> Result<Optimum<P, T>, ConvergenceError>
where
    P: Copy,
    T: Float,
{
    if params.len() != errors.len() {
        return Err(ConvergenceError::LengthMismatch {
            params: params.len(),
            errors: errors.len(),
        });
    }

    let mut best: Option<(usize, T)> = None;
    for (index, &error) in errors.iter().enumerate() {
        if error.is_nan() {
            continue;
        }
        match best {
            Some((_, current)) if !(error < current) => {}
            _ => best = Some((index, error)),
        }
    }

    best.map(|(index, error)| Optimum {
        index,
        parameter: params[index],
        error,
    })
    .ok_or(ConvergenceError::InsufficientData { got: 0, need: 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_select_optimal_interior_minimum() {
        let steps = [1e-10, 1e-9, 1e-8, 1e-7, 1e-6];
        let errors = [1e-5, 1e-7, 5e-9, 1e-7, 1e-6];
        let best = select_optimal(&steps, &errors).unwrap();
        assert_eq!(best.index, 2);
        assert_eq!(best.parameter, 1e-8);
        assert_eq!(best.error, 5e-9);
        assert!(best.is_interior(steps.len()));
    }

    #[test]
    fn test_select_optimal_tie_goes_to_first() {
        let counts = [10_usize, 20, 40];
        let errors = [0.5, 0.1, 0.1];
        let best = select_optimal(&counts, &errors).unwrap();
        assert_eq!(best.parameter, 20);
    }

    #[test]
    fn test_select_optimal_boundary() {
        let steps = [1e-3, 1e-2];
        let errors = [1e-6, 1e-4];
        let best = select_optimal(&steps, &errors).unwrap();
        assert_eq!(best.index, 0);
        assert!(!best.is_interior(steps.len()));
    }

    #[test]
    fn test_select_optimal_skips_nan() {
        let steps = [1e-17, 1e-8, 1e-2];
        let errors = [f64::NAN, 1e-8, 1e-2];
        assert_eq!(select_optimal(&steps, &errors).unwrap().index, 1);
    }

    #[test]
    fn test_select_optimal_errors() {
        assert_eq!(
            select_optimal::<f64, f64>(&[], &[]),
            Err(ConvergenceError::InsufficientData { got: 0, need: 1 })
        );
        assert_eq!(
            select_optimal(&[1.0, 2.0], &[f64::NAN, f64::NAN]),
            Err(ConvergenceError::InsufficientData { got: 0, need: 1 })
        );
        assert_eq!(
            select_optimal(&[1.0], &[1.0, 2.0]),
            Err(ConvergenceError::LengthMismatch {
                params: 1,
                errors: 2
            })
        );
    }

    proptest! {
        #[test]
        fn prop_optimum_is_a_lower_bound(errors in prop::collection::vec(0.0_f64..1.0, 1..40)) {
            let params: Vec<usize> = (1..=errors.len()).collect();
            let best = select_optimal(&params, &errors).unwrap();
            prop_assert!(errors.iter().all(|e| best.error <= *e));
            prop_assert!(errors[..best.index].iter().all(|e| *e > best.error));
            prop_assert_eq!(best.parameter, params[best.index]);
        }
    }
}
