//! Normalization kernel

use super::parallel::for_each_chunk;
use super::reduce::magnitude_kernel;
use crate::ops::ReductionOrder;

/// Normalize to unit length: `out[i] = a[i] / |a|`
///
/// The magnitude is computed over all of `a` before any output is written, so
/// `out == a` is sound. If the magnitude is exactly `0.0` (all zeros, or
/// `len == 0`) every output element is set to `0.0` instead of NaN.
///
/// # Safety
/// - `a` and `out` must be valid pointers to `len` elements
/// - `out` may equal `a`, but must not partially overlap it
#[inline]
pub unsafe fn normalize_kernel(
    a: *const f64,
    out: *mut f64,
    len: usize,
    chunk: usize,
    order: ReductionOrder,
) {
    let mag = magnitude_kernel(a, len, chunk, order);

    let a_addr = a as usize;
    let out_addr = out as usize;

    if mag == 0.0 {
        for_each_chunk(len, chunk, |start, end| unsafe {
            let out = out_addr as *mut f64;
            for i in start..end {
                *out.add(i) = 0.0;
            }
        });
        return;
    }

    for_each_chunk(len, chunk, |start, end| unsafe {
        let a = a_addr as *const f64;
        let out = out_addr as *mut f64;
        for i in start..end {
            *out.add(i) = *a.add(i) / mag;
        }
    });
}
