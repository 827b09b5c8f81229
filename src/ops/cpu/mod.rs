//! CPU implementations of the operation traits.

mod elementwise;
mod reduce;
mod transform;
