//! Operation traits for slice operations.
//!
//! Implementations are in `ops/cpu/`.

mod elementwise;
mod reduce;
mod transform;

pub use elementwise::ElementwiseOps;
pub use reduce::ReduceOps;
pub use transform::TransformOps;
