//! Parallelism configuration for the CPU client
//!
//! A [`ParallelismConfig`] is the execution context injected into a
//! [`CpuClient`](super::CpuClient). It selects the worker thread count, the
//! minimum number of indices a single task handles, and how reduction
//! partials are combined.

use crate::ops::ReductionOrder;

/// Default chunk size: inputs at or below this length run serially
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Environment variable read by [`ParallelismConfig::from_env`] for the thread count
pub const ENV_NUM_THREADS: &str = "ARANYA_NUM_THREADS";
/// Environment variable read by [`ParallelismConfig::from_env`] for the chunk size
pub const ENV_CHUNK_SIZE: &str = "ARANYA_CHUNK_SIZE";
/// Environment variable read by [`ParallelismConfig::from_env`] for the reduction order
pub const ENV_REDUCTION: &str = "ARANYA_REDUCTION";

/// Upper bound on dedicated pool threads per available core
pub const MAX_THREADS_PER_CORE: usize = 4;

/// Largest dedicated pool size a config will request
///
/// [`MAX_THREADS_PER_CORE`] times `std::thread::available_parallelism()`
/// (one core if that cannot be determined).
pub fn max_num_threads() -> usize {
    let cores = std::thread::available_parallelism().map_or(1, |n| n.get());
    cores.saturating_mul(MAX_THREADS_PER_CORE)
}

/// Thread count, chunking and reduction policy for kernel dispatch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParallelismConfig {
    num_threads: Option<usize>,
    chunk_size: Option<usize>,
    reduction: ReductionOrder,
}

impl ParallelismConfig {
    /// Create a config
    ///
    /// * `num_threads` - Dedicated pool size; `None` (or `Some(0)`) uses rayon's global pool.
    ///   Requests above [`max_num_threads`] are clamped to it.
    /// * `chunk_size` - Minimum indices per task; `None` uses [`DEFAULT_CHUNK_SIZE`]
    pub fn new(num_threads: Option<usize>, chunk_size: Option<usize>) -> Self {
        let num_threads = num_threads.filter(|&n| n > 0).map(|n| {
            let max = max_num_threads();
            if n > max {
                log::warn!("clamping requested {n} kernel threads to {max}");
            }
            n.min(max)
        });
        Self {
            num_threads,
            chunk_size: chunk_size.filter(|&n| n > 0),
            reduction: ReductionOrder::default(),
        }
    }

    /// Set the reduction combination order
    pub fn with_reduction_order(mut self, order: ReductionOrder) -> Self {
        self.reduction = order;
        self
    }

    /// Build a config from `ARANYA_NUM_THREADS`, `ARANYA_CHUNK_SIZE` and `ARANYA_REDUCTION`
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (see [`ParallelismConfig::from_env`])
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse = |key: &str| {
            lookup(key).and_then(|v| match v.trim().parse::<usize>() {
                Ok(n) => Some(n),
                Err(_) => {
                    log::warn!("ignoring {key}={v:?}: not a non-negative integer");
                    None
                }
            })
        };

        let reduction = match lookup(ENV_REDUCTION).as_deref().map(str::trim) {
            Some("pairwise") => ReductionOrder::Pairwise,
            Some("unordered") | None => ReductionOrder::Unordered,
            Some(other) => {
                log::warn!(
                    "ignoring {ENV_REDUCTION}={other:?}: expected 'pairwise' or 'unordered'"
                );
                ReductionOrder::Unordered
            }
        };

        Self::new(parse(ENV_NUM_THREADS), parse(ENV_CHUNK_SIZE)).with_reduction_order(reduction)
    }

    /// Requested dedicated pool size, if any
    pub fn num_threads(&self) -> Option<usize> {
        self.num_threads
    }

    /// Effective chunk size (always at least 1)
    pub fn chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE)
    }

    /// Reduction combination order
    pub fn reduction_order(&self) -> ReductionOrder {
        self.reduction
    }
}
