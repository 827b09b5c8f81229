//! Error types for aranya-prime
//!
//! Only the safe slice API reports errors. The C entry points in [`crate::ffi`]
//! have no error channel: numeric edge cases surface as NaN/Inf, and length
//! contract violations are the caller's responsibility.

use thiserror::Error;

/// Result type alias using aranya-prime's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kernel operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Buffer length does not match the operation's length
    #[error("Length mismatch in '{op}' for '{arg}': expected {expected}, got {got}")]
    LengthMismatch {
        /// The operation name
        op: &'static str,
        /// The offending buffer argument
        arg: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Backend-specific error (thread pool construction)
    #[error("Backend error: {0}")]
    Backend(String),
}

impl Error {
    /// Create a length mismatch error
    pub fn length_mismatch(
        op: &'static str,
        arg: &'static str,
        expected: usize,
        got: usize,
    ) -> Self {
        Self::LengthMismatch {
            op,
            arg,
            expected,
            got,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
