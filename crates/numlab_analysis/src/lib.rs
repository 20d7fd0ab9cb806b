//! # numlab_analysis: Sweeps and Convergence Analysis
//!
//! ## Layer 2 (Analysis) Role
//!
//! numlab_analysis drives the methods of numlab_core across ranges of
//! discretization parameters and interprets the resulting errors:
//! - Validated parameter sweeps and geometric grids (`sweep::grid`)
//! - Serial, parallel and paired sweep drivers (`sweep::driver`)
//! - Empirical order of convergence, two-point and least-squares (`convergence`)
//! - Optimal step selection for U-shaped error curves (`optimal`)
//! - Wall-clock probe for the largest affordable partition count (`timing`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use numlab_analysis::sweep::{geometric_steps, run_sweep};
//! use numlab_core::methods::DifferenceScheme;
//! use numlab_core::problems::DerivativeProblem;
//!
//! let problem = DerivativeProblem::exponential_at(1.0_f64).unwrap();
//! let steps = geometric_steps::<f64>(-6.0, -3.0, 13).unwrap();
//! let forward = run_sweep(&problem, &DifferenceScheme::Forward, &steps);
//!
//! let fit = forward.fit_order().unwrap();
//! assert!((fit.order - 1.0).abs() < 0.1);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): Rayon-backed `run_sweep_parallel`
//! - `serde`: Serialisation for records, fits and optima

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod convergence;
pub mod optimal;
pub mod parallel;
pub mod sweep;
pub mod timing;
