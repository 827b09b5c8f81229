//! CPU runtime implementation
//!
//! The CPU runtime is the only backend. A [`CpuClient`] carries the
//! execution context (thread pool, chunk size, reduction order) and
//! implements the safe operation traits; [`kernels`] holds the raw-pointer
//! implementations shared with the C entry points.
//!
//! # Parallelism
//!
//! With the `rayon` feature (default) every kernel splits `[0, n)` into
//! chunks of [`ParallelismConfig::chunk_size`] indices and spreads them over
//! the client's pool. Inputs of one chunk or less run inline on the caller.

mod client;
pub(crate) mod helpers;
pub mod kernels;
mod parallelism;

pub use client::CpuClient;
pub use parallelism::{
    DEFAULT_CHUNK_SIZE, ENV_CHUNK_SIZE, ENV_NUM_THREADS, ENV_REDUCTION, MAX_THREADS_PER_CORE,
    ParallelismConfig, max_num_threads,
};
