//! Order-sensitive summation of the harmonic series.

use super::count;
use crate::problems::HarmonicSeries;
use crate::traits::{Labelled, Method};
use num_traits::Float;

/// Index traversal order of a running sum.
///
/// In exact arithmetic the order is irrelevant. In floating point,
/// `Ascending` adds ever smaller terms to an ever larger total and loses
/// their low-order bits; `Descending` builds the total from the small terms
/// first and is the more accurate of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SummationOrder {
    /// `n = 1, 2, ..., N`.
    Ascending,
    /// `n = N, N - 1, ..., 1`.
    Descending,
}

impl SummationOrder {
    /// Both orders, ascending first.
    pub const ALL: [SummationOrder; 2] = [SummationOrder::Ascending, SummationOrder::Descending];
}

/// Partial harmonic sum `Σ_{n=1}^{N} 1/n` accumulated in the given order.
///
/// # Examples
/// ```
/// use numlab_core::methods::{harmonic_sum, SummationOrder};
///
/// let up: f64 = harmonic_sum(4, SummationOrder::Ascending);
/// let down: f64 = harmonic_sum(4, SummationOrder::Descending);
/// assert!((up - 25.0 / 12.0).abs() < 1e-15);
/// assert!((down - 25.0 / 12.0).abs() < 1e-15);
/// ```
pub fn harmonic_sum<T: Float>(terms: usize, order: SummationOrder) -> T {
    let mut sum = T::zero();
    match order {
        SummationOrder::Ascending => {
            for n in 1..=terms {
                sum = sum + T::one() / count::<T>(n);
            }
        }
        SummationOrder::Descending => {
            for n in (1..=terms).rev() {
                sum = sum + T::one() / count::<T>(n);
            }
        }
    }
    sum
}

impl<T: Float> Method<T, HarmonicSeries<T>> for SummationOrder {
    #[inline]
    fn approximate(&self, _problem: &HarmonicSeries<T>, terms: usize) -> T {
        harmonic_sum(terms, *self)
    }
}

impl Labelled for SummationOrder {
    fn label(&self) -> &'static str {
        match self {
            SummationOrder::Ascending => "sum_up",
            SummationOrder::Descending => "sum_down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{relative_difference, relative_error};
    use crate::traits::Problem;

    #[test]
    fn test_empty_sum_is_zero() {
        assert_eq!(harmonic_sum::<f64>(0, SummationOrder::Ascending), 0.0);
        assert_eq!(harmonic_sum::<f64>(0, SummationOrder::Descending), 0.0);
    }

    #[test]
    fn test_small_sums_agree() {
        for order in SummationOrder::ALL {
            let sum: f64 = harmonic_sum(10, order);
            assert!((sum - 7381.0 / 2520.0).abs() < 1e-14);
        }
    }

    #[test]
    fn test_orders_diverge_in_double_precision() {
        let n = 10_000_000;
        let up: f64 = harmonic_sum(n, SummationOrder::Ascending);
        let down: f64 = harmonic_sum(n, SummationOrder::Descending);
        assert_ne!(up, down);
        assert!(relative_difference(up, down) > 0.0);
    }

    #[test]
    fn test_descending_more_accurate_in_single_precision() {
        let n = 10_000_000;
        let series = HarmonicSeries::<f32>::new();
        let exact = series.reference(n);
        let up = SummationOrder::Ascending.approximate(&series, n);
        let down = SummationOrder::Descending.approximate(&series, n);

        let up_err = relative_error(up, exact);
        let down_err = relative_error(down, exact);

        // Ascending stalls near 15.40 once 1/n falls below half an ulp of the total
        assert!(up < 15.5, "ascending f32 sum {}", up);
        assert!(up_err > 0.05, "ascending error {}", up_err);
        assert!(down_err < 1e-3, "descending error {}", down_err);
        assert!(down_err < up_err);
    }

    #[test]
    fn test_labels() {
        let label = SummationOrder::Descending.label();
        assert_eq!(label, "sum_down");
    }
}
