//! Binary operations kernels

use super::parallel::for_each_chunk;
use crate::ops::BinaryOp;

/// Execute a binary operation element-wise: `out[i] = a[i] op b[i]`
///
/// Chunks of `chunk` indices are spread over the current rayon pool.
/// Division by zero follows IEEE-754 (`±inf` or NaN).
///
/// # Safety
/// - `a`, `b`, and `out` must be valid pointers to `len` elements
/// - `out` may equal `a` or `b`, but must not partially overlap either
#[inline]
pub unsafe fn binary_op_kernel(
    op: BinaryOp,
    a: *const f64,
    b: *const f64,
    out: *mut f64,
    len: usize,
    chunk: usize,
) {
    let a_addr = a as usize;
    let b_addr = b as usize;
    let out_addr = out as usize;

    for_each_chunk(len, chunk, |start, end| unsafe {
        let a = a_addr as *const f64;
        let b = b_addr as *const f64;
        let out = out_addr as *mut f64;
        match op {
            BinaryOp::Add => binary_range(a, b, out, start, end, |x, y| x + y),
            BinaryOp::Sub => binary_range(a, b, out, start, end, |x, y| x - y),
            BinaryOp::Mul => binary_range(a, b, out, start, end, |x, y| x * y),
            BinaryOp::Div => binary_range(a, b, out, start, end, |x, y| x / y),
        }
    });
}

#[inline(always)]
unsafe fn binary_range<F>(
    a: *const f64,
    b: *const f64,
    out: *mut f64,
    start: usize,
    end: usize,
    f: F,
) where
    F: Fn(f64, f64) -> f64,
{
    for i in start..end {
        let x = *a.add(i);
        let y = *b.add(i);
        *out.add(i) = f(x, y);
    }
}
