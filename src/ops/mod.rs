//! Kernel operations
//!
//! Operations are defined as traits implemented by [`CpuClient`], so every
//! call carries its execution context explicitly.
//!
//! ```text
//! CpuClient
//!   ├── implements ElementwiseOps
//!   │     ├── add, sub, mul, div     (binary arithmetic)
//!   │     ├── scale                  (scalar multiply)
//!   │     ├── poly, polyval          (polynomials)
//!   │     └── sin, cos, tan          (trigonometry)
//!   ├── implements ReduceOps
//!   │     └── dot, magnitude, normalize
//!   └── implements TransformOps
//!         └── rotate_2d
//! ```
//!
//! Every operation that writes a fresh buffer has an `_inplace` twin that
//! reuses its first input as the output.
//!
//! [`CpuClient`]: crate::runtime::cpu::CpuClient

mod arithmetic;
pub mod common;
mod cpu;
mod reduce;
pub mod traits;

pub use arithmetic::{BinaryOp, UnaryOp};
pub use reduce::ReductionOrder;
pub use traits::{ElementwiseOps, ReduceOps, TransformOps};
