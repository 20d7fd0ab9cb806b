//! Core error and domain types.
//!
//! This module provides:
//! - `error`: Structured error types for problem construction, convergence
//!   estimation and sweep generation
//! - `domain`: Closed real intervals describing where a test function is defined
//!
//! # Re-exports
//!
//! - [`DomainError`], [`ConvergenceError`], [`SweepError`] from `error`
//! - [`Domain`] from `domain`

pub mod domain;
pub mod error;

pub use domain::Domain;
pub use error::{ConvergenceError, DomainError, SweepError};
