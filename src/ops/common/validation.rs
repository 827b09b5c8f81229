//! Length validation for slice-based operations.
//!
//! The raw kernels trust the caller's length. The safe API checks every
//! buffer against the length of the first input before dispatching.

use crate::error::{Error, Result};

/// Check that `got` equals the operation length `expected`.
///
/// # Errors
///
/// - `LengthMismatch` naming `op` and `arg` if the lengths differ
#[inline]
pub fn validate_len(
    op: &'static str,
    arg: &'static str,
    expected: usize,
    got: usize,
) -> Result<()> {
    if expected != got {
        return Err(Error::length_mismatch(op, arg, expected, got));
    }
    Ok(())
}

/// Check that every `(name, len)` pair matches `expected`.
pub fn validate_same_len(
    op: &'static str,
    expected: usize,
    args: &[(&'static str, usize)],
) -> Result<()> {
    for &(arg, got) in args {
        validate_len(op, arg, expected, got)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_same_len_reports_first_mismatch() {
        let err = validate_same_len("sub", 3, &[("b", 3), ("out", 2), ("x", 1)]).unwrap_err();
        assert_eq!(err, Error::length_mismatch("sub", "out", 3, 2));
    }

    #[test]
    fn test_validate_same_len_ok() {
        assert!(validate_same_len("dot", 0, &[("b", 0)]).is_ok());
    }
}
