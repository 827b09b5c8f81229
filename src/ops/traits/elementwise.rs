//! Element-wise operations trait.

use crate::error::Result;

/// Element-wise operations on `f64` slices.
///
/// Every index is computed independently from the same-index inputs. All
/// buffers must have the length of the first input.
///
/// # Errors
///
/// Methods returning `Result` fail with `LengthMismatch` when a buffer's
/// length differs from the first input's. Numeric edge cases (division by
/// zero, NaN inputs) are never errors; they follow IEEE-754.
///
/// # Example
///
/// ```
/// use aranya_prime::prelude::*;
///
/// let client = CpuClient::new();
/// let mut out = [0.0; 3];
/// client.sub(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &mut out)?;
/// assert_eq!(out, [-3.0, -3.0, -3.0]);
/// # Ok::<(), aranya_prime::error::Error>(())
/// ```
pub trait ElementwiseOps {
    /// Element-wise addition: `out[i] = a[i] + b[i]`
    fn add(&self, a: &[f64], b: &[f64], out: &mut [f64]) -> Result<()>;

    /// Element-wise subtraction: `out[i] = a[i] - b[i]`
    fn sub(&self, a: &[f64], b: &[f64], out: &mut [f64]) -> Result<()>;

    /// Element-wise multiplication: `out[i] = a[i] * b[i]`
    fn mul(&self, a: &[f64], b: &[f64], out: &mut [f64]) -> Result<()>;

    /// Element-wise division: `out[i] = a[i] / b[i]`
    ///
    /// `x / 0.0` is `±inf` and `0.0 / 0.0` is NaN.
    fn div(&self, a: &[f64], b: &[f64], out: &mut [f64]) -> Result<()>;

    /// In-place addition: `a[i] += b[i]`
    fn add_inplace(&self, a: &mut [f64], b: &[f64]) -> Result<()>;

    /// In-place subtraction: `a[i] -= b[i]`
    fn sub_inplace(&self, a: &mut [f64], b: &[f64]) -> Result<()>;

    /// In-place multiplication: `a[i] *= b[i]`
    fn mul_inplace(&self, a: &mut [f64], b: &[f64]) -> Result<()>;

    /// In-place division: `a[i] /= b[i]`
    fn div_inplace(&self, a: &mut [f64], b: &[f64]) -> Result<()>;

    /// Scale by a constant: `out[i] = a[i] * scalar`
    fn scale(&self, a: &[f64], scalar: f64, out: &mut [f64]) -> Result<()>;

    /// In-place scale: `a[i] *= scalar`
    fn scale_inplace(&self, a: &mut [f64], scalar: f64);

    /// Fixed cubic: `out[i] = x[i]^3 + x[i]^2 + x[i]`
    fn poly(&self, x: &[f64], out: &mut [f64]) -> Result<()>;

    /// In-place fixed cubic
    fn poly_inplace(&self, x: &mut [f64]);

    /// General polynomial `Σ coeffs[k] * x^k` (ascending order, Horner's method)
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `coeffs` is empty
    /// - `LengthMismatch` if `out.len() != x.len()`
    fn polyval(&self, coeffs: &[f64], x: &[f64], out: &mut [f64]) -> Result<()>;

    /// In-place general polynomial
    fn polyval_inplace(&self, coeffs: &[f64], x: &mut [f64]) -> Result<()>;

    /// Sine
    fn sin(&self, x: &[f64], out: &mut [f64]) -> Result<()>;

    /// Cosine
    fn cos(&self, x: &[f64], out: &mut [f64]) -> Result<()>;

    /// Tangent
    ///
    /// Near odd multiples of π/2 the result is very large but finite.
    fn tan(&self, x: &[f64], out: &mut [f64]) -> Result<()>;

    /// In-place sine
    fn sin_inplace(&self, x: &mut [f64]);

    /// In-place cosine
    fn cos_inplace(&self, x: &mut [f64]);

    /// In-place tangent
    fn tan_inplace(&self, x: &mut [f64]);
}
