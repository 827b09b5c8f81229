//! CPU kernel implementations
//!
//! This module provides the low-level raw-pointer kernels behind both the
//! safe slice API and the C entry points. Every kernel is `unsafe`, trusts the
//! length it is given and runs to completion on the calling thread's rayon
//! context (see [`CpuClient::install_parallelism`](super::CpuClient)).
//!
//! # Aliasing
//!
//! Elementwise kernels never materialize `&mut [f64]` over their output.
//! They read every same-index input through raw pointers before writing, so
//! `out == a` (or `out == b`) is sound. Reductions only read and may use
//! shared slices.

#![allow(unsafe_op_in_unsafe_fn)] // Kernels are already marked unsafe, inner unsafe is redundant

pub mod binary;
pub mod norm;
pub(crate) mod parallel;
pub mod polynomial;
pub mod reduce;
pub mod scalar;
pub mod transform;
pub mod unary;

pub use binary::binary_op_kernel;
pub use norm::normalize_kernel;
pub use polynomial::polyval_kernel;
pub use reduce::{dot_kernel, magnitude_kernel, sum_squares_kernel};
pub use scalar::scalar_op_kernel;
pub use transform::rotate_2d_kernel;
pub use unary::unary_op_kernel;
