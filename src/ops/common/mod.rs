//! Common validation logic shared by the safe operation API.

pub mod validation;

pub use validation::{validate_len, validate_same_len};
