//! Partial-sum problems for infinite series.

use crate::methods::{direct_ratio_sum, SeriesForm};
use crate::oracle;
use crate::traits::Problem;
use num_traits::Float;
use std::marker::PhantomData;

/// The harmonic series `H_N = Σ_{n=1}^{N} 1/n`.
///
/// The reference for `N` terms is [`oracle::harmonic_number`], computed in
/// `f64` and then rounded into the working precision, so an `f32`
/// experiment is measured against a value more accurate than anything `f32`
/// summation can produce.
///
/// # Example
///
/// ```
/// use numlab_core::problems::HarmonicSeries;
/// use numlab_core::traits::Problem;
///
/// let series = HarmonicSeries::<f32>::new();
/// assert_eq!(series.reference(1), 1.0_f32);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HarmonicSeries<T: Float> {
    _precision: PhantomData<T>,
}

impl<T: Float> HarmonicSeries<T> {
    /// Harmonic series evaluated in precision `T`.
    pub fn new() -> Self {
        Self {
            _precision: PhantomData,
        }
    }
}

impl<T: Float> Problem<T> for HarmonicSeries<T> {
    type Parameter = usize;

    fn reference(&self, terms: usize) -> T {
        T::from(oracle::harmonic_number(terms)).unwrap_or_else(T::nan)
    }
}

/// The series `Σ_{n=1}^{∞} 1/(2n(2n+1)) = 1 - ln 2`.
///
/// Three algebraically equivalent partial sums of it are compared by
/// [`SeriesForm`]. The reference for `N` is the directly summed,
/// cancellation-free form `S3(N)`; [`limit`](Self::limit) gives the value
/// of the infinite sum.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AlternatingRatioSeries<T: Float> {
    _precision: PhantomData<T>,
}

impl<T: Float> AlternatingRatioSeries<T> {
    /// Series evaluated in precision `T`.
    pub fn new() -> Self {
        Self {
            _precision: PhantomData,
        }
    }

    /// Closed-form value of the infinite sum.
    pub fn limit(&self) -> T {
        oracle::alternating_ratio_limit()
    }

    /// The form designated as ground truth.
    pub fn reference_form(&self) -> SeriesForm {
        SeriesForm::Direct
    }
}

impl<T: Float> Problem<T> for AlternatingRatioSeries<T> {
    type Parameter = usize;

    fn reference(&self, terms: usize) -> T {
        direct_ratio_sum(terms)
    }
}
