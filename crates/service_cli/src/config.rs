//! Experiment configuration management.
//!
//! Handles loading of the experiment settings from a TOML file with
//! environment variable override support. Every section falls back to the
//! settings of the classic exercises, so an empty file (or none at all)
//! reproduces them.
//!
//! ```toml
//! log_level = "info"
//! format = "table"
//!
//! [derivative]
//! function = "quadratic"
//! point = 1.0
//! start_exp = -14.0
//! end_exp = -2.0
//! count = 13
//!
//! [integral]
//! function = "semicircle"
//! lower = -1.0
//! upper = 1.0
//! counts = [10, 100, 1000, 10000]
//! ```

use numlab_analysis::sweep::CollapsePolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::presenter::OutputFormat;

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "numlab.toml";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Test function for the differentiation experiment
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DerivativeFunction {
    /// f(x) = x(x - 1)
    #[default]
    Quadratic,
    /// f(x) = e^x
    Exponential,
}

/// Integrand for the quadrature experiment
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Integrand {
    /// f(x) = sqrt(1 - x^2)
    #[default]
    Semicircle,
    /// f(x) = e^x
    Exponential,
}

/// Working precision of the harmonic summation
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// IEEE-754 binary32
    #[default]
    Single,
    /// IEEE-754 binary64
    Double,
}

/// Finite-difference experiment settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DerivativeConfig {
    /// Test function
    pub function: DerivativeFunction,
    /// Evaluation point
    pub point: f64,
    /// Decade exponent of the first step
    pub start_exp: f64,
    /// Decade exponent of the last step
    pub end_exp: f64,
    /// Number of steps
    pub count: usize,
    /// Smallest step included in the order fit
    pub fit_lower: Option<f64>,
    /// Largest step included in the order fit
    pub fit_upper: Option<f64>,
}

impl Default for DerivativeConfig {
    fn default() -> Self {
        Self {
            function: DerivativeFunction::default(),
            point: 1.0,
            start_exp: -14.0,
            end_exp: -2.0,
            count: 13,
            fit_lower: None,
            fit_upper: None,
        }
    }
}

/// Quadrature experiment settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct IntegralConfig {
    /// Integrand
    pub function: Integrand,
    /// Lower integration bound
    pub lower: f64,
    /// Upper integration bound
    pub upper: f64,
    /// Partition counts
    pub counts: Vec<usize>,
    /// Per-evaluation wall-clock budget of the timing probe, in milliseconds
    pub time_budget_ms: u64,
    /// Doubling cap of the timing probe
    pub max_doublings: u32,
}

impl Default for IntegralConfig {
    fn default() -> Self {
        Self {
            function: Integrand::default(),
            lower: -1.0,
            upper: 1.0,
            counts: typical_counts(),
            time_budget_ms: 1_000,
            max_doublings: 30,
        }
    }
}

/// Log-spaced integer count grid
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CountGrid {
    /// Decade exponent of the first count
    pub start_exp: f64,
    /// Decade exponent of the last count
    pub end_exp: f64,
    /// Number of points requested
    pub count: usize,
    /// Handling of points merged by integer truncation
    pub collapse: CollapsePolicy,
}

impl Default for CountGrid {
    fn default() -> Self {
        Self {
            start_exp: 1.0,
            end_exp: 4.0,
            count: 50,
            collapse: CollapsePolicy::Deduplicate,
        }
    }
}

/// Summation-order experiment settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct HarmonicConfig {
    /// Working precision
    pub precision: Precision,
    /// Term counts for the table
    pub counts: Vec<usize>,
    /// Term counts for the error sweep
    pub grid: CountGrid,
}

impl Default for HarmonicConfig {
    fn default() -> Self {
        Self {
            precision: Precision::default(),
            counts: typical_counts(),
            grid: CountGrid::default(),
        }
    }
}

/// Series-form experiment settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeriesConfig {
    /// Term counts for the table
    pub counts: Vec<usize>,
    /// Term counts for the error sweep
    pub grid: CountGrid,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            counts: typical_counts(),
            grid: CountGrid {
                start_exp: 0.0,
                ..CountGrid::default()
            },
        }
    }
}

fn typical_counts() -> Vec<usize> {
    numlab_analysis::sweep::typical_counts().values().to_vec()
}

/// Complete experiment configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LabConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// Output format used when `--format` is absent
    pub format: OutputFormat,
    /// Finite-difference experiment
    pub derivative: DerivativeConfig,
    /// Quadrature experiment
    pub integral: IntegralConfig,
    /// Summation-order experiment
    pub harmonic: HarmonicConfig,
    /// Series-form experiment
    pub series: SeriesConfig,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: OutputFormat::default(),
            derivative: DerivativeConfig::default(),
            integral: IntegralConfig::default(),
            harmonic: HarmonicConfig::default(),
            series: SeriesConfig::default(),
        }
    }
}

impl LabConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load the given file, or [`DEFAULT_CONFIG_PATH`] if present, or defaults
    ///
    /// An explicitly requested file must exist; the default file is optional.
    pub fn resolve(path: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match path {
            Some(path) => Ok((Self::load(path)?, Some(path.to_path_buf()))),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Ok((Self::load(&default_path)?, Some(default_path)))
                } else {
                    Ok((Self::default(), None))
                }
            }
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(log_level) = std::env::var("NUMLAB_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(format) = std::env::var("NUMLAB_FORMAT") {
            if let Some(format) = OutputFormat::parse(&format) {
                self.format = format;
            }
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        // Derivative sweep
        let d = &self.derivative;
        if !d.point.is_finite() {
            errors.push(format!("derivative.point {} must be finite", d.point));
        }
        if !(d.start_exp.is_finite() && d.end_exp.is_finite()) || d.start_exp == d.end_exp {
            errors.push(format!(
                "derivative exponents [{}, {}] must be finite and distinct",
                d.start_exp, d.end_exp
            ));
        }
        if d.count < 2 {
            errors.push("derivative.count must be at least 2".to_string());
        }
        if let (Some(lower), Some(upper)) = (d.fit_lower, d.fit_upper) {
            if !(lower > 0.0 && lower < upper) {
                errors.push(format!(
                    "derivative fit window [{}, {}] must satisfy 0 < fit_lower < fit_upper",
                    lower, upper
                ));
            }
        }

        // Quadrature
        let i = &self.integral;
        if !(i.lower.is_finite() && i.upper.is_finite() && i.lower < i.upper) {
            errors.push(format!(
                "integral bounds [{}, {}] must be finite with lower < upper",
                i.lower, i.upper
            ));
        }
        validate_counts("integral.counts", &i.counts, &mut errors);
        if i.time_budget_ms == 0 {
            errors.push("integral.time_budget_ms must be greater than 0".to_string());
        }
        if i.max_doublings > 40 {
            errors.push(format!(
                "integral.max_doublings {} exceeds maximum allowed (40)",
                i.max_doublings
            ));
        }

        // Summation
        validate_counts("harmonic.counts", &self.harmonic.counts, &mut errors);
        validate_grid("harmonic.grid", &self.harmonic.grid, &mut errors);
        validate_counts("series.counts", &self.series.counts, &mut errors);
        validate_grid("series.grid", &self.series.grid, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

fn validate_counts(name: &str, counts: &[usize], errors: &mut Vec<String>) {
    if counts.is_empty() {
        errors.push(format!("{} cannot be empty", name));
    } else if counts.contains(&0) {
        errors.push(format!("{} must be greater than 0", name));
    } else if counts.windows(2).any(|w| w[0] >= w[1]) {
        errors.push(format!("{} must be strictly increasing", name));
    }
}

fn validate_grid(name: &str, grid: &CountGrid, errors: &mut Vec<String>) {
    if !(grid.start_exp >= 0.0 && grid.start_exp < grid.end_exp && grid.end_exp <= 9.0) {
        errors.push(format!(
            "{} exponents [{}, {}] must satisfy 0 <= start_exp < end_exp <= 9",
            name, grid.start_exp, grid.end_exp
        ));
    }
    if grid.count < 2 {
        errors.push(format!("{}.count must be at least 2", name));
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
