//! Empirical order of convergence.
//!
//! For an error model `err ≈ C · p^k` the order `k` is the slope of
//! `log(err)` against `log(p)`. This module offers the two-point slope
//! ([`estimate_order`]), a least-squares slope over a whole sweep or a
//! window of it ([`fit_order`], [`fit_order_within`]), a profile of
//! neighbour slopes ([`local_orders`]) and the reference lines `C · p^k`
//! drawn next to measured errors ([`reference_line`]).
//!
//! A zero error sample makes the logarithm undefined. Every estimator
//! reports it as [`ConvergenceError::UndefinedOrder`] rather than return a
//! misleading finite or infinite slope.

use numlab_core::traits::{Discretization, Float};
use numlab_core::types::ConvergenceError;

/// Index distance used by [`order_at_midpoint`] in the standard reports.
pub const MIDPOINT_OFFSET: usize = 2;

/// Least-squares fit of `log(err) = k · log(p) + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderFit<T> {
    /// Fitted order `k`.
    pub order: T,
    /// Fitted intercept `c`, so `C = exp(c)`.
    pub intercept: T,
    /// Coefficient of determination of the fit in log-log space.
    pub r_squared: T,
    /// Number of samples used.
    pub samples: usize,
}

impl<T: Float> OrderFit<T> {
    /// The error constant `C = exp(intercept)`.
    #[inline]
    pub fn constant(&self) -> T {
        self.intercept.exp()
    }
}

fn check_lengths(params: usize, errors: usize) -> Result<(), ConvergenceError> {
    if params != errors {
        return Err(ConvergenceError::LengthMismatch { params, errors });
    }
    Ok(())
}

/// `ln` of the parameter magnitude, validated.
fn log_parameter<P: Discretization, T: Float>(
    params: &[P],
    index: usize,
) -> Result<T, ConvergenceError> {
    let magnitude = params[index].magnitude();
    if !(magnitude > 0.0 && magnitude.is_finite()) {
        return Err(ConvergenceError::NonPositiveParameter {
            index,
            value: magnitude,
        });
    }
    Ok(T::from(magnitude).unwrap_or_else(T::nan).ln())
}

/// `ln` of the error sample, validated.
fn log_error<T: Float>(errors: &[T], index: usize) -> Result<T, ConvergenceError> {
    let error = errors[index];
    if !(error > T::zero() && error.is_finite()) {
        return Err(ConvergenceError::UndefinedOrder { index });
    }
    Ok(error.ln())
}

/// Order of convergence between samples `i` and `j`.
///
/// Computes `ln(err_i / err_j) / ln(p_i / p_j)`.
///
/// # Examples
/// ```
/// use numlab_analysis::convergence::estimate_order;
///
/// // err = 3 p²
/// let params = [0.1_f64, 0.01];
/// let errors = [3e-2_f64, 3e-4];
/// let order = estimate_order(&params, &errors, 0, 1).unwrap();
/// assert!((order - 2.0).abs() < 1e-12);
/// ```
///
/// # Errors
/// - `LengthMismatch` when the slices differ in length
/// - `IndexOutOfRange` when `i` or `j` is past the end
/// - `CoincidentParameters` when `p_i == p_j`
/// - `NonPositiveParameter` for a parameter without a logarithm
/// - `UndefinedOrder` when either error sample is zero
pub fn estimate_order<P, T>(
    params: &[P],
    errors: &[T],
    i: usize,
    j: usize,
) -> Result<T, ConvergenceError>
where
    P: Discretization,
    T: Float,
{
    check_lengths(params.len(), errors.len())?;
    let len = params.len();
    for index in [i, j] {
        if index >= len {
            return Err(ConvergenceError::IndexOutOfRange { index, len });
        }
    }
    let log_pi: T = log_parameter(params, i)?;
    let log_pj: T = log_parameter(params, j)?;
    if i == j || log_pi == log_pj {
        return Err(ConvergenceError::CoincidentParameters { i, j });
    }
    let log_ei = log_error(errors, i)?;
    let log_ej = log_error(errors, j)?;
    Ok((log_ei - log_ej) / (log_pi - log_pj))
}

/// Order estimated between the middle sample and the one `offset`
/// positions before it.
///
/// # Errors
/// `InsufficientData` when the sweep has fewer than `2 · offset` samples,
/// otherwise as [`estimate_order`].
pub fn order_at_midpoint<P, T>(
    params: &[P],
    errors: &[T],
    offset: usize,
) -> Result<T, ConvergenceError>
where
    P: Discretization,
    T: Float,
{
    check_lengths(params.len(), errors.len())?;
    let mid = params.len() / 2;
    let Some(lower) = mid.checked_sub(offset) else {
        return Err(ConvergenceError::InsufficientData {
            got: params.len(),
            need: 2 * offset,
        });
    };
    estimate_order(params, errors, mid, lower)
}

/// Slope between each pair of neighbouring samples.
///
/// Entry `i` is the order between samples `i` and `i + 1`; a zero error
/// only invalidates the entries that touch it.
pub fn local_orders<P, T>(params: &[P], errors: &[T]) -> Vec<Result<T, ConvergenceError>>
where
    P: Discretization,
    T: Float,
{
    if let Err(e) = check_lengths(params.len(), errors.len()) {
        return vec![Err(e)];
    }
    (1..params.len())
        .map(|i| estimate_order(params, errors, i - 1, i))
        .collect()
}

/// Least-squares order over every sample.
///
/// # Examples
/// ```
/// use numlab_analysis::convergence::fit_order;
///
/// let params = [1e-1_f64, 1e-2, 1e-3, 1e-4];
/// let errors: Vec<f64> = params.iter().map(|h| 0.5 * h * h).collect();
/// let fit = fit_order(&params, &errors).unwrap();
/// assert!((fit.order - 2.0).abs() < 1e-10);
/// assert!((fit.constant() - 0.5).abs() < 1e-8);
/// ```
///
/// # Errors
/// - `InsufficientData` with fewer than two samples
/// - `CoincidentParameters` when all parameters are equal
/// - `NonPositiveParameter` / `UndefinedOrder` as [`estimate_order`]
pub fn fit_order<P, T>(params: &[P], errors: &[T]) -> Result<OrderFit<T>, ConvergenceError>
where
    P: Discretization,
    T: Float,
{
    check_lengths(params.len(), errors.len())?;
    let indices: Vec<usize> = (0..params.len()).collect();
    fit_indices(params, errors, &indices)
}

/// Least-squares order over the samples whose parameter lies in
/// `[lower, upper]`.
///
/// Used to measure the truncation-dominated regime of a difference scheme
/// without the rounding-dominated small steps pulling the slope down.
///
/// # Errors
/// `InsufficientData` when fewer than two samples fall in the window,
/// otherwise as [`fit_order`].
pub fn fit_order_within<P, T>(
    params: &[P],
    errors: &[T],
    lower: P,
    upper: P,
) -> Result<OrderFit<T>, ConvergenceError>
where
    P: Discretization,
    T: Float,
{
    check_lengths(params.len(), errors.len())?;
    let indices: Vec<usize> = params
        .iter()
        .enumerate()
        .filter(|(_, p)| **p >= lower && **p <= upper)
        .map(|(i, _)| i)
        .collect();
    fit_indices(params, errors, &indices)
}

fn fit_indices<P, T>(
    params: &[P],
    errors: &[T],
    indices: &[usize],
) -> Result<OrderFit<T>, ConvergenceError>
where
    P: Discretization,
    T: Float,
{
    if indices.len() < 2 {
        return Err(ConvergenceError::InsufficientData {
            got: indices.len(),
            need: 2,
        });
    }

    let mut xs = Vec::with_capacity(indices.len());
    let mut ys = Vec::with_capacity(indices.len());
    for &index in indices {
        xs.push(log_parameter::<P, T>(params, index)?);
        ys.push(log_error(errors, index)?);
    }

    let n = T::from(indices.len()).unwrap_or_else(T::nan);
    let mean_x = xs.iter().fold(T::zero(), |acc, &x| acc + x) / n;
    let mean_y = ys.iter().fold(T::zero(), |acc, &y| acc + y) / n;

    let mut sxx = T::zero();
    let mut sxy = T::zero();
    let mut syy = T::zero();
    for (&x, &y) in xs.iter().zip(&ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx = sxx + dx * dx;
        sxy = sxy + dx * dy;
        syy = syy + dy * dy;
    }
    if sxx == T::zero() {
        return Err(ConvergenceError::CoincidentParameters {
            i: indices[0],
            j: indices[indices.len() - 1],
        });
    }

    let order = sxy / sxx;
    let intercept = mean_y - order * mean_x;
    let r_squared = if syy == T::zero() {
        T::one()
    } else {
        (sxy * sxy) / (sxx * syy)
    };

    Ok(OrderFit {
        order,
        intercept,
        r_squared,
        samples: indices.len(),
    })
}

/// Reference values `scale · p^order` for each parameter.
///
/// # Examples
/// ```
/// use numlab_analysis::convergence::reference_line;
///
/// let guide: Vec<f64> = reference_line(&[10_usize, 100], 1.0, -2.0);
/// assert!((guide[1] - 1e-4).abs() < 1e-18);
/// ```
pub fn reference_line<P, T>(params: &[P], scale: T, order: T) -> Vec<T>
where
    P: Discretization,
    T: Float,
{
    params
        .iter()
        .map(|p| scale * T::from(p.magnitude()).unwrap_or_else(T::nan).powf(order))
        .collect()
}
