//! Three equivalent partial sums of `Σ 1/(2n(2n+1))`.

use super::count;
use crate::problems::AlternatingRatioSeries;
use crate::traits::{Labelled, Method};
use num_traits::Float;

/// Algebraic form used to evaluate the partial sum with `N` paired terms.
///
/// ```text
/// S1(N) = Σ_{n=1}^{2N} (-1)^n n/(n+1)
/// S2(N) = -Σ_{n=1}^{N} (2n-1)/(2n) + Σ_{n=1}^{N} 2n/(2n+1)
/// S3(N) = Σ_{n=1}^{N} 1/(2n(2n+1))
/// ```
///
/// The three agree in exact arithmetic. `S2` accumulates two sums of size
/// about `N` and subtracts them, so it loses the most accuracy; `S1` keeps
/// its running sum bounded; `S3` adds only small positive terms and serves
/// as the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeriesForm {
    /// `S1`: alternating terms `(-1)^n n/(n+1)` over `2N` indices.
    Alternating,
    /// `S2`: difference of the odd-numerator and even-numerator sums.
    SplitDifference,
    /// `S3`: combined positive terms `1/(2n(2n+1))`.
    Direct,
}

impl SeriesForm {
    /// All three forms in `S1, S2, S3` order.
    pub const ALL: [SeriesForm; 3] = [
        SeriesForm::Alternating,
        SeriesForm::SplitDifference,
        SeriesForm::Direct,
    ];
}

/// `S1(N) = Σ_{n=1}^{2N} (-1)^n n/(n+1)`.
pub fn alternating_ratio_sum<T: Float>(terms: usize) -> T {
    let mut result = T::zero();
    for n in 1..=2 * terms {
        let ratio = count::<T>(n) / count::<T>(n + 1);
        result = if n % 2 == 0 { result + ratio } else { result - ratio };
    }
    result
}

/// `S2(N) = -Σ (2n-1)/(2n) + Σ 2n/(2n+1)`, both sums accumulated side by side.
pub fn split_ratio_sum<T: Float>(terms: usize) -> T {
    let mut odd = T::zero();
    let mut even = T::zero();
    for n in 1..=terms {
        odd = odd + count::<T>(2 * n - 1) / count::<T>(2 * n);
        even = even + count::<T>(2 * n) / count::<T>(2 * n + 1);
    }
    -odd + even
}

/// `S3(N) = Σ_{n=1}^{N} 1/(2n(2n+1))`.
///
/// # Examples
/// ```
/// use numlab_core::methods::direct_ratio_sum;
///
/// let s: f64 = direct_ratio_sum(1);
/// assert_eq!(s, 1.0 / 6.0);
/// ```
pub fn direct_ratio_sum<T: Float>(terms: usize) -> T {
    let mut result = T::zero();
    for n in 1..=terms {
        let m = 2 * n;
        result = result + T::one() / (count::<T>(m) * count::<T>(m + 1));
    }
    result
}

impl<T: Float> Method<T, AlternatingRatioSeries<T>> for SeriesForm {
    fn approximate(&self, _problem: &AlternatingRatioSeries<T>, terms: usize) -> T {
        match self {
            SeriesForm::Alternating => alternating_ratio_sum(terms),
            SeriesForm::SplitDifference => split_ratio_sum(terms),
            SeriesForm::Direct => direct_ratio_sum(terms),
        }
    }
}

impl Labelled for SeriesForm {
    fn label(&self) -> &'static str {
        match self {
            SeriesForm::Alternating => "S1",
            SeriesForm::SplitDifference => "S2",
            SeriesForm::Direct => "S3",
        }
    }
}
