//! # numlab_core: Approximation Methods and Error Metrics
//!
//! ## Layer 1 (Foundation) Role
//!
//! numlab_core is the bottom layer of the numlab workspace, providing:
//! - Narrow abstractions for test functions, problems and methods (`traits`)
//! - Immutable problem instances with cached reference values (`problems`)
//! - Closed-form reference values for the shipped test functions (`oracle`)
//! - Finite-difference, quadrature and summation schemes (`methods`)
//! - Relative error with a documented zero-reference convention (`metrics`)
//! - Error types: `DomainError`, `ConvergenceError`, `SweepError` (`types::error`)
//!
//! ## Minimal Dependencies
//!
//! Layer 1 has no dependencies on other numlab crates:
//! - num-traits: Generic floating-point code, so every method runs in `f32` and `f64`
//! - thiserror: Structured error enums
//! - serde: Serialisation of method identifiers (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use numlab_core::methods::DifferenceScheme;
//! use numlab_core::metrics::relative_error;
//! use numlab_core::problems::DerivativeProblem;
//! use numlab_core::traits::{Method, Problem};
//!
//! // f(x) = x(x - 1) at x = 1, where f'(1) = 1
//! let problem = DerivativeProblem::quadratic_at(1.0_f64).unwrap();
//!
//! let forward = DifferenceScheme::Forward.approximate(&problem, 1e-5);
//! let central = DifferenceScheme::Central.approximate(&problem, 1e-5);
//!
//! let exact = problem.reference(1e-5);
//! assert!(relative_error(central, exact) < relative_error(forward, exact));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for method enums and error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod methods;
pub mod metrics;
pub mod oracle;
pub mod problems;
pub mod traits;
pub mod types;
