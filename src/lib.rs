//! # aranya-prime
//!
//! **Parallel flat-array `f64` kernels behind a stable C ABI.**
//!
//! aranya-prime is a small native kernel library for a host language to call
//! for bulk numeric work: element-wise arithmetic, trigonometry, polynomial
//! evaluation, dot product, magnitude, normalization, scaling and 2D rotation.
//! Every kernel is stateless and data-parallel over caller-owned buffers.
//!
//! ## Two surfaces
//!
//! - [`ffi`]: `prime_*` `extern "C"` functions taking `(n, res.., inputs.., scalars..)`.
//!   They trust the caller's length and never report errors.
//! - The safe slice API: [`ElementwiseOps`](ops::ElementwiseOps),
//!   [`ReduceOps`](ops::ReduceOps) and [`TransformOps`](ops::TransformOps),
//!   implemented by [`CpuClient`](runtime::cpu::CpuClient). These check
//!   lengths and return [`Result`](error::Result).
//!
//! ## Quick Start
//!
//! ```rust
//! use aranya_prime::prelude::*;
//!
//! let client = CpuClient::new().with_parallelism(ParallelismConfig::new(Some(2), None));
//!
//! let a = [3.0, 4.0];
//! assert_eq!(client.magnitude(&a), 5.0);
//!
//! let mut unit = [0.0; 2];
//! client.normalize(&a, &mut unit)?;
//! assert_eq!(unit, [0.6, 0.8]);
//! # Ok::<(), aranya_prime::error::Error>(())
//! ```
//!
//! ## Numerics
//!
//! Results follow IEEE-754: division by zero yields `±inf` or NaN, and NaN
//! inputs propagate. The one deliberate override is `normalize`, which
//! writes zeros when the magnitude is exactly zero.
//!
//! Reductions combine per-task partial sums. By default the combination
//! order is unspecified, so the last bits of `dot`/`magnitude` may vary with
//! the thread count. Select [`ReductionOrder::Pairwise`](ops::ReductionOrder)
//! for results that are bit-identical across thread counts.
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded kernels. Without it everything runs serially.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ffi;
pub mod ops;
pub mod runtime;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::ops::{ElementwiseOps, ReduceOps, ReductionOrder, TransformOps};
    pub use crate::runtime::cpu::{CpuClient, ParallelismConfig};
}
