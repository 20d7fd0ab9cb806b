//! Geometric parameter grids.
//!
//! Step sizes and partition counts are spread evenly in log space so that
//! every decade receives the same number of samples. Count grids are
//! truncated to integers, which collapses neighbouring points in the low
//! decades; [`CollapsePolicy`] decides whether that is reported or rejected.

use numlab_core::traits::{Discretization, Float};
use numlab_core::types::SweepError;
use tracing::debug;

/// Ordering of a sweep's parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Parameters strictly increase.
    Increasing,
    /// Parameters strictly decrease.
    Decreasing,
}

impl Direction {
    #[inline]
    fn holds<P: PartialOrd>(self, previous: &P, next: &P) -> bool {
        match self {
            Direction::Increasing => previous < next,
            Direction::Decreasing => previous > next,
        }
    }
}

/// What to do when integer truncation merges requested grid points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CollapsePolicy {
    /// Keep the distinct points and record the shortfall.
    #[default]
    Deduplicate,
    /// Fail with [`SweepError::Collapsed`].
    Reject,
}

/// An ordered, validated sequence of discretization parameters.
///
/// # Invariants
/// - Non-empty
/// - Strictly monotonic in [`direction`](Self::direction)
/// - Every parameter has a finite, strictly positive magnitude
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSweep<P: Discretization> {
    values: Vec<P>,
    direction: Direction,
    requested: usize,
}

impl<P: Discretization> ParameterSweep<P> {
    /// Validate `values` against the given ordering.
    ///
    /// # Errors
    /// - `SweepError::Empty` for an empty vector
    /// - `SweepError::NonPositiveParameter` for a zero, negative or non-finite value
    /// - `SweepError::NonMonotonic` at the first value breaking `direction`
    pub fn new(values: Vec<P>, direction: Direction) -> Result<Self, SweepError> {
        if values.is_empty() {
            return Err(SweepError::Empty);
        }
        for (index, value) in values.iter().enumerate() {
            let magnitude = value.magnitude();
            if !(magnitude > 0.0 && magnitude.is_finite()) {
                return Err(SweepError::NonPositiveParameter {
                    index,
                    value: magnitude,
                });
            }
        }
        if let Some(index) = values
            .windows(2)
            .position(|pair| !direction.holds(&pair[0], &pair[1]))
        {
            return Err(SweepError::NonMonotonic { index: index + 1 });
        }
        let requested = values.len();
        Ok(Self {
            values,
            direction,
            requested,
        })
    }

    /// Validate `values`, taking the direction from the first pair.
    ///
    /// A single value is treated as increasing.
    pub fn from_values(values: Vec<P>) -> Result<Self, SweepError> {
        let direction = match values.as_slice() {
            [first, second, ..] if first > second => Direction::Decreasing,
            _ => Direction::Increasing,
        };
        Self::new(values, direction)
    }

    /// The parameters, in sweep order.
    #[inline]
    pub fn values(&self) -> &[P] {
        &self.values
    }

    /// Number of parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a constructed sweep.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Ordering of the parameters.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of points the grid generator was asked for.
    ///
    /// Equal to [`len`](Self::len) unless a count grid was deduplicated.
    #[inline]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Whether deduplication removed any requested points.
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.requested > self.values.len()
    }
}

/// Exponents `start, ..., end` spaced evenly, both ends included.
fn linspace(start: f64, end: f64, count: usize) -> Result<Vec<f64>, SweepError> {
    if count == 0 {
        return Err(SweepError::InvalidCount(count));
    }
    if !(start.is_finite() && end.is_finite()) {
        return Err(SweepError::InvalidRange { start, end });
    }
    if count == 1 {
        return Ok(vec![start]);
    }
    let step = (end - start) / (count - 1) as f64;
    Ok((0..count)
        .map(|i| {
            if i == count - 1 {
                end
            } else {
                start + i as f64 * step
            }
        })
        .collect())
}

fn direction_of(start: f64, end: f64) -> Direction {
    if end < start {
        Direction::Decreasing
    } else {
        Direction::Increasing
    }
}

/// `count` step sizes from `10^start_exp` to `10^end_exp`, log-spaced.
///
/// # Examples
/// ```
/// use numlab_analysis::sweep::geometric_steps;
///
/// let deltas = geometric_steps::<f64>(-14.0, -2.0, 13).unwrap();
/// assert_eq!(deltas.len(), 13);
/// assert!((deltas.values()[6] / 1e-8 - 1.0).abs() < 1e-12);
/// ```
///
/// # Errors
/// - `SweepError::InvalidCount` for `count == 0`
/// - `SweepError::InvalidRange` for non-finite exponents
/// - `SweepError::NonMonotonic` when `start_exp == end_exp` and `count > 1`
pub fn geometric_steps<T>(
    start_exp: f64,
    end_exp: f64,
    count: usize,
) -> Result<ParameterSweep<T>, SweepError>
where
    T: Float + Discretization,
{
    let values = linspace(start_exp, end_exp, count)?
        .into_iter()
        .map(|e| T::from(10f64.powf(e)).unwrap_or_else(T::nan))
        .collect();
    ParameterSweep::new(values, direction_of(start_exp, end_exp))
}

/// `count` partition counts from `10^start_exp` to `10^end_exp`,
/// log-spaced then truncated to integers.
///
/// Neighbouring points that truncate to the same integer are merged. The
/// sweep records how many points were requested so the shortfall stays
/// visible; under [`CollapsePolicy::Reject`] any shortfall is an error.
///
/// # Examples
/// ```
/// use numlab_analysis::sweep::{geometric_counts, CollapsePolicy};
///
/// let counts = geometric_counts(1.0, 4.0, 50, CollapsePolicy::Deduplicate).unwrap();
/// assert_eq!(counts.values()[0], 10);
/// assert_eq!(*counts.values().last().unwrap(), 10_000);
/// assert_eq!(counts.requested(), 50);
/// ```
///
/// # Errors
/// - `SweepError::InvalidCount` for `count == 0`
/// - `SweepError::InvalidRange` for non-finite exponents
/// - `SweepError::NonPositiveParameter` when a point truncates to zero
/// - `SweepError::Collapsed` under `CollapsePolicy::Reject` when points merge
pub fn geometric_counts(
    start_exp: f64,
    end_exp: f64,
    count: usize,
    policy: CollapsePolicy,
) -> Result<ParameterSweep<usize>, SweepError> {
    let mut values: Vec<usize> = Vec::with_capacity(count);
    for (index, exponent) in linspace(start_exp, end_exp, count)?.into_iter().enumerate() {
        let value = 10f64.powf(exponent).floor();
        if !(value >= 1.0 && value <= usize::MAX as f64) {
            return Err(SweepError::NonPositiveParameter { index, value });
        }
        values.push(value as usize);
    }
    values.dedup();

    let actual = values.len();
    if actual < count {
        debug!(requested = count, actual, "count grid collapsed");
        if policy == CollapsePolicy::Reject {
            return Err(SweepError::Collapsed {
                requested: count,
                actual,
            });
        }
    }

    let mut sweep = ParameterSweep::new(values, direction_of(start_exp, end_exp))?;
    sweep.requested = count;
    Ok(sweep)
}

/// The fixed count sweep used for quick tables: 10, 100, 1000, 10000.
pub fn typical_counts() -> ParameterSweep<usize> {
    ParameterSweep {
        values: vec![10, 100, 1_000, 10_000],
        direction: Direction::Increasing,
        requested: 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Validation
    // ========================================

    #[test]
    fn test_new_accepts_increasing_and_decreasing() {
        let up = ParameterSweep::new(vec![1e-3, 1e-2, 1e-1], Direction::Increasing).unwrap();
        assert_eq!(up.len(), 3);
        let down = ParameterSweep::new(vec![100_usize, 10, 1], Direction::Decreasing).unwrap();
        assert_eq!(down.direction(), Direction::Decreasing);
        assert!(!down.is_collapsed());
    }

    #[test]
    fn test_new_rejects_empty() {
        let result = ParameterSweep::<f64>::new(vec![], Direction::Increasing);
        assert_eq!(result, Err(SweepError::Empty));
    }

    #[test]
    fn test_new_rejects_repeats_and_wrong_order() {
        let repeated = ParameterSweep::new(vec![1.0, 2.0, 2.0], Direction::Increasing);
        assert_eq!(repeated, Err(SweepError::NonMonotonic { index: 2 }));

        let reversed = ParameterSweep::new(vec![1.0, 0.5], Direction::Increasing);
        assert_eq!(reversed, Err(SweepError::NonMonotonic { index: 1 }));
    }

    #[test]
    fn test_new_rejects_non_positive() {
        let zero = ParameterSweep::new(vec![0_usize, 1, 2], Direction::Increasing);
        assert!(matches!(
            zero,
            Err(SweepError::NonPositiveParameter { index: 0, .. })
        ));

        let nan = ParameterSweep::new(vec![1.0, f64::NAN], Direction::Increasing);
        assert!(matches!(
            nan,
            Err(SweepError::NonPositiveParameter { index: 1, .. })
        ));
    }

    #[test]
    fn test_from_values_infers_direction() {
        let down = ParameterSweep::from_values(vec![1e-2, 1e-4]).unwrap();
        assert_eq!(down.direction(), Direction::Decreasing);
        let single = ParameterSweep::from_values(vec![5_usize]).unwrap();
        assert_eq!(single.direction(), Direction::Increasing);
    }

    // ========================================
    // Geometric grids
    // ========================================

    #[test]
    fn test_geometric_steps_endpoints() {
        let sweep = geometric_steps::<f64>(-8.0, -3.0, 21).unwrap();
        assert_eq!(sweep.len(), 21);
        assert_relative_eq!(sweep.values()[0], 1e-8, max_relative = 1e-12);
        assert_relative_eq!(sweep.values()[20], 1e-3, max_relative = 1e-12);
        assert_relative_eq!(sweep.values()[4], 1e-7, max_relative = 1e-12);
    }

    #[test]
    fn test_geometric_steps_decreasing_range() {
        let sweep = geometric_steps::<f32>(-1.0, -4.0, 4).unwrap();
        assert_eq!(sweep.direction(), Direction::Decreasing);
        assert!(sweep.values()[3] < sweep.values()[0]);
    }

    #[test]
    fn test_geometric_steps_invalid_input() {
        assert_eq!(
            geometric_steps::<f64>(-8.0, -3.0, 0),
            Err(SweepError::InvalidCount(0))
        );
        assert!(matches!(
            geometric_steps::<f64>(f64::NAN, -3.0, 5),
            Err(SweepError::InvalidRange { .. })
        ));
        assert_eq!(
            geometric_steps::<f64>(-3.0, -3.0, 2),
            Err(SweepError::NonMonotonic { index: 1 })
        );
    }

    #[test]
    fn test_geometric_counts_collapse_reported() {
        let sweep = geometric_counts(0.0, 2.0, 50, CollapsePolicy::Deduplicate).unwrap();
        assert_eq!(sweep.requested(), 50);
        assert!(sweep.is_collapsed());
        assert!(sweep.len() < 50);
        assert_eq!(sweep.values()[0], 1);
        assert_eq!(*sweep.values().last().unwrap(), 100);
        assert!(sweep.values().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_geometric_counts_collapse_rejected() {
        let result = geometric_counts(0.0, 2.0, 50, CollapsePolicy::Reject);
        match result {
            Err(SweepError::Collapsed { requested, actual }) => {
                assert_eq!(requested, 50);
                assert!(actual < 50);
            }
            other => panic!("expected collapse, got {:?}", other),
        }
    }

    #[test]
    fn test_geometric_counts_without_collapse() {
        let sweep = geometric_counts(1.0, 4.0, 4, CollapsePolicy::Reject).unwrap();
        assert_eq!(sweep.values(), &[10, 100, 1_000, 10_000]);
        assert!(!sweep.is_collapsed());
    }

    #[test]
    fn test_geometric_counts_below_one_rejected() {
        let result = geometric_counts(-1.0, 1.0, 3, CollapsePolicy::Deduplicate);
        assert!(matches!(
            result,
            Err(SweepError::NonPositiveParameter { index: 0, .. })
        ));
    }

    #[test]
    fn test_typical_counts() {
        let sweep = typical_counts();
        assert_eq!(sweep.values(), &[10, 100, 1_000, 10_000]);
        assert_eq!(sweep.requested(), 4);
    }
}
