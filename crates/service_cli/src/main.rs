//! numlab CLI - Approximation and Convergence Experiments
//!
//! This is the operational entry point for the numlab engine.
//!
//! # Commands
//!
//! - `numlab differentiate` - Forward vs central differences over a step sweep
//! - `numlab integrate [--timing]` - Rectangle vs trapezoid over partition counts
//! - `numlab harmonic` - Ascending vs descending harmonic sums
//! - `numlab series` - Three equivalent forms of one series
//! - `numlab check` - Show the effective configuration
//!
//! # Configuration
//!
//! Settings come from `numlab.toml` (or `--config <file>`), then the
//! `NUMLAB_LOG_LEVEL` and `NUMLAB_FORMAT` environment variables, then the
//! command-line flags. `RUST_LOG` takes precedence over every log level.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod presenter;

use config::{DerivativeFunction, Integrand, LabConfig, Precision};
pub use error::{CliError, Result};
use presenter::{OutputFormat, Presenter};

/// numlab approximation experiments CLI
#[derive(Parser)]
#[command(name = "numlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./numlab.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare forward and central differences over a step sweep
    Differentiate {
        /// Test function
        #[arg(long, value_enum)]
        function: Option<DerivativeFunction>,

        /// Evaluation point
        #[arg(short, long, allow_negative_numbers = true)]
        point: Option<f64>,

        /// Decade exponent of the first step (e.g. -14)
        #[arg(long, allow_negative_numbers = true)]
        start_exp: Option<f64>,

        /// Decade exponent of the last step (e.g. -2)
        #[arg(long, allow_negative_numbers = true)]
        end_exp: Option<f64>,

        /// Number of steps
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Compare left-rectangle and trapezoid quadrature
    Integrate {
        /// Integrand
        #[arg(long, value_enum)]
        function: Option<Integrand>,

        /// Lower integration bound
        #[arg(long, allow_negative_numbers = true)]
        lower: Option<f64>,

        /// Upper integration bound
        #[arg(long, allow_negative_numbers = true)]
        upper: Option<f64>,

        /// Probe the largest partition count within the time budget
        #[arg(long)]
        timing: bool,

        /// Time budget per evaluation in milliseconds
        #[arg(long)]
        budget_ms: Option<u64>,
    },

    /// Compare ascending and descending harmonic summation
    Harmonic {
        /// Working precision
        #[arg(short, long, value_enum)]
        precision: Option<Precision>,
    },

    /// Compare three algebraically equivalent series forms
    Series,

    /// Check configuration
    Check,
}

impl Commands {
    /// Fold command-line overrides into the configuration
    fn apply_overrides(&self, config: &mut LabConfig) {
        match self {
            Commands::Differentiate {
                function,
                point,
                start_exp,
                end_exp,
                count,
            } => {
                let d = &mut config.derivative;
                d.function = function.unwrap_or(d.function);
                d.point = point.unwrap_or(d.point);
                d.start_exp = start_exp.unwrap_or(d.start_exp);
                d.end_exp = end_exp.unwrap_or(d.end_exp);
                d.count = count.unwrap_or(d.count);
            }
            Commands::Integrate {
                function,
                lower,
                upper,
                budget_ms,
                ..
            } => {
                let i = &mut config.integral;
                i.function = function.unwrap_or(i.function);
                i.lower = lower.unwrap_or(i.lower);
                i.upper = upper.unwrap_or(i.upper);
                i.time_budget_ms = budget_ms.unwrap_or(i.time_budget_ms);
            }
            Commands::Harmonic { precision } => {
                config.harmonic.precision = precision.unwrap_or(config.harmonic.precision);
            }
            Commands::Series | Commands::Check => {}
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = LabConfig::resolve(cli.config.as_deref())?;
    config = config.with_env_override();
    cli.command.apply_overrides(&mut config);
    if let Some(format) = cli.format {
        config.format = format;
    }
    config.validate()?;

    // Initialise tracing; logs go to stderr so stdout stays machine-readable
    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.to_lowercase()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let reports = match &cli.command {
        Commands::Differentiate { .. } => commands::differentiate::run(&config.derivative)?,
        Commands::Integrate { timing, .. } => commands::integrate::run(&config.integral, *timing)?,
        Commands::Harmonic { .. } => commands::harmonic::run(&config.harmonic)?,
        Commands::Series => commands::series::run(&config.series)?,
        Commands::Check => commands::check::run(&config, source.as_deref())?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    config.format.render(&reports, &mut out)?;
    out.flush()?;
    Ok(())
}
