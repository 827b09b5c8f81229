//! CPU client: the execution context every kernel call runs in

use super::parallelism::ParallelismConfig;
use crate::error::{Error, Result};
use crate::ops::ReductionOrder;
#[cfg(feature = "rayon")]
use std::sync::Arc;

/// CPU client for kernel dispatch
///
/// Holds the [`ParallelismConfig`] and, when a thread count was requested, a
/// dedicated rayon pool. Cloning is cheap and clones share the pool.
#[derive(Clone, Debug, Default)]
pub struct CpuClient {
    parallelism: ParallelismConfig,
    #[cfg(feature = "rayon")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl CpuClient {
    /// Create a client that runs in rayon's global pool with default chunking
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the parallelism config, falling back to the global pool if the
    /// dedicated pool cannot be built
    pub fn with_parallelism(self, config: ParallelismConfig) -> Self {
        match self.try_with_parallelism(config) {
            Ok(client) => client,
            Err(err) => Self::global_fallback(config, &err),
        }
    }

    /// Client for `config` that runs in the global pool after `err`
    fn global_fallback(config: ParallelismConfig, err: &Error) -> Self {
        log::warn!("{err}; using the global rayon pool instead");
        Self {
            parallelism: config,
            #[cfg(feature = "rayon")]
            pool: None,
        }
    }

    /// Replace the parallelism config
    ///
    /// # Errors
    ///
    /// - `Backend` if the dedicated rayon pool cannot be built
    pub fn try_with_parallelism(self, config: ParallelismConfig) -> Result<Self> {
        #[cfg(feature = "rayon")]
        {
            let pool = match config.num_threads() {
                Some(n) => {
                    let pool = rayon::ThreadPoolBuilder::new()
                        .num_threads(n)
                        .thread_name(|i| format!("aranya-prime-{i}"))
                        .build()
                        .map_err(|e| {
                            Error::Backend(format!("failed to build {n}-thread pool: {e}"))
                        })?;
                    log::debug!(
                        "built {n}-thread kernel pool (chunk_size={}, reduction={:?})",
                        config.chunk_size(),
                        config.reduction_order()
                    );
                    Some(Arc::new(pool))
                }
                None => None,
            };
            Ok(Self {
                parallelism: config,
                pool,
            })
        }

        #[cfg(not(feature = "rayon"))]
        {
            if let Some(n) = config.num_threads().filter(|&n| n > 1) {
                log::debug!("rayon feature disabled; ignoring request for {n} threads");
            }
            Ok(Self {
                parallelism: config,
            })
        }
    }

    /// Current parallelism config
    pub fn parallelism(&self) -> &ParallelismConfig {
        &self.parallelism
    }

    /// Minimum number of indices a single task handles
    #[inline]
    pub fn chunk_size_hint(&self) -> usize {
        self.parallelism.chunk_size()
    }

    /// Reduction combination order
    #[inline]
    pub fn reduction_order(&self) -> ReductionOrder {
        self.parallelism.reduction_order()
    }

    /// Number of worker threads kernels will run on
    pub fn num_threads(&self) -> usize {
        #[cfg(feature = "rayon")]
        {
            match &self.pool {
                Some(pool) => pool.current_num_threads(),
                None => rayon::current_num_threads(),
            }
        }

        #[cfg(not(feature = "rayon"))]
        {
            1
        }
    }

    /// Run `f` inside this client's pool (or the caller's context if none)
    #[inline]
    pub(crate) fn install_parallelism<R, F>(&self, f: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        #[cfg(feature = "rayon")]
        if let Some(pool) = &self.pool {
            return pool.install(f);
        }

        f()
    }
}
