//! CLI command implementations
//!
//! Each submodule runs one experiment and returns its reports; rendering
//! is left to the caller's presenter.

pub mod check;
pub mod differentiate;
pub mod harmonic;
pub mod integrate;
pub mod series;

use numlab_core::traits::Float;
use numlab_core::types::ConvergenceError;
use tracing::warn;

use crate::presenter::Cell;

/// Cell for an estimated order; an undefined order is shown, not raised.
pub(crate) fn order_cell<T: Float>(label: &str, order: Result<T, ConvergenceError>) -> Cell {
    match order {
        Ok(order) => Cell::Value(to_f64(order)),
        Err(e) => {
            warn!(method = label, error = %e, "order not available");
            Cell::text("undefined")
        }
    }
}

/// Widen a working-precision value for presentation.
#[inline]
pub(crate) fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
