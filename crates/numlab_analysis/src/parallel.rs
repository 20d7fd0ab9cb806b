//! Rayon-based parallelisation utilities.
//!
//! Sweep points are independent, so a sweep can be evaluated with a
//! parallel map. Results are collected back into sweep order; rayon's
//! indexed `collect` guarantees this regardless of scheduling.
//!
//! Small sweeps stay serial: for a handful of step sizes the thread-pool
//! hand-off costs more than the evaluation.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default minimum number of sweep points before going parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 16;

/// Order-preserving map over sweep points.
///
/// Runs on the rayon pool when the `parallel` feature is enabled and
/// `config` says the input is large enough; serially otherwise.
///
/// # Arguments
///
/// * `items` - Slice of items to process
/// * `config` - Threshold for switching to parallel execution
/// * `mapper` - Function to apply to each item
///
/// # Returns
///
/// Vector of mapped results, index-aligned with `items`.
pub fn ordered_map<T, R, F>(items: &[T], config: &ParallelConfig, mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(mapper).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = config;

    items.iter().map(mapper).collect()
}

/// Configuration for parallel execution.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// Always parallel, whatever the input size.
    pub fn always() -> Self {
        Self {
            parallel_threshold: 0,
        }
    }

    /// Never parallel.
    pub fn serial() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}
