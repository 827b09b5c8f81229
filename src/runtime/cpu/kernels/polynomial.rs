//! Polynomial evaluation kernels
//!
//! The fixed cubic `x^3 + x^2 + x` is [`UnaryOp::Poly`](crate::ops::UnaryOp)
//! and runs through [`unary_op_kernel`](super::unary_op_kernel). This module
//! holds the general coefficient-driven form.

use super::parallel::for_each_chunk;

/// Evaluate `p(x) = c₀ + c₁x + … + cₖxᵏ` element-wise using Horner's method
///
/// ```text
/// result = cₖ
/// for i in (k-1)..=0:
///     result = result * x + cᵢ
/// ```
///
/// An empty coefficient slice is the zero polynomial.
///
/// # Safety
/// - `x` and `out` must be valid pointers to `len` elements
/// - `out` may equal `x`, but must not partially overlap it
/// - `coeffs` must not overlap `out`
#[inline]
pub unsafe fn polyval_kernel(
    coeffs: &[f64],
    x: *const f64,
    out: *mut f64,
    len: usize,
    chunk: usize,
) {
    let x_addr = x as usize;
    let out_addr = out as usize;

    for_each_chunk(len, chunk, |start, end| unsafe {
        let x = x_addr as *const f64;
        let out = out_addr as *mut f64;
        let Some((&leading, rest)) = coeffs.split_last() else {
            for i in start..end {
                *out.add(i) = 0.0;
            }
            return;
        };
        for i in start..end {
            let xi = *x.add(i);
            let mut acc = leading;
            for &c in rest.iter().rev() {
                acc = acc * xi + c;
            }
            *out.add(i) = acc;
        }
    });
}
