//! CLI error types.

use numlab_core::types::{ConvergenceError, DomainError, SweepError};
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Problem construction failed
    #[error("Problem error: {0}")]
    Domain(#[from] DomainError),

    /// Parameter sweep could not be built
    #[error("Sweep error: {0}")]
    Sweep(#[from] SweepError),

    /// Convergence analysis failed
    #[error("Convergence error: {0}")]
    Convergence(#[from] ConvergenceError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV rendering error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
