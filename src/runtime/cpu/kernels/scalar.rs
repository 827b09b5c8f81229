//! Scalar operation kernels

use super::parallel::for_each_chunk;
use crate::ops::BinaryOp;

/// Binary operation with a scalar: `out[i] = a[i] op scalar`
///
/// `scale` is `BinaryOp::Mul`.
///
/// # Safety
/// - `a` and `out` must be valid pointers to `len` elements
/// - `out` may equal `a`, but must not partially overlap it
#[inline]
pub unsafe fn scalar_op_kernel(
    op: BinaryOp,
    a: *const f64,
    scalar: f64,
    out: *mut f64,
    len: usize,
    chunk: usize,
) {
    let a_addr = a as usize;
    let out_addr = out as usize;

    for_each_chunk(len, chunk, |start, end| unsafe {
        let a = a_addr as *const f64;
        let out = out_addr as *mut f64;
        for i in start..end {
            *out.add(i) = op.apply(*a.add(i), scalar);
        }
    });
}
