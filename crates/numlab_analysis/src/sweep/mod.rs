//! Parameter sweeps and the drivers that evaluate methods over them.
//!
//! - [`grid`]: validated, monotonic parameter sequences and geometric generators
//! - [`driver`]: serial, parallel and paired evaluation of a sweep
//! - [`record`]: error records and the convergence queries built on them

pub mod driver;
pub mod grid;
pub mod record;

pub use driver::{run_dual_sweep, run_sweep, run_sweep_with};
#[cfg(feature = "parallel")]
pub use driver::run_sweep_parallel;
pub use grid::{
    geometric_counts, geometric_steps, typical_counts, CollapsePolicy, Direction, ParameterSweep,
};
pub use record::{DualSweep, ErrorRecord, SweepResult};
