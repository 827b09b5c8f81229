//! Reduction kernels
//!
//! Each chunk is summed sequentially, left to right. Chunk sums are combined
//! according to [`ReductionOrder`]: with `Unordered` the low bits of the
//! result may change with the thread count, with `Pairwise` they do not.

use super::parallel::sum_chunks;
use crate::ops::ReductionOrder;

/// Dot product: `Σ a[i] * b[i]`
///
/// Returns `0.0` for `len == 0`.
///
/// # Safety
/// - `a` and `b` must be valid pointers to `len` elements (they may alias)
#[inline]
pub unsafe fn dot_kernel(
    a: *const f64,
    b: *const f64,
    len: usize,
    chunk: usize,
    order: ReductionOrder,
) -> f64 {
    if len == 0 {
        return 0.0;
    }
    let a = std::slice::from_raw_parts(a, len);
    let b = std::slice::from_raw_parts(b, len);

    sum_chunks(len, chunk, order, |start, end| {
        a[start..end]
            .iter()
            .zip(&b[start..end])
            .fold(0.0f64, |acc, (&x, &y)| acc + x * y)
    })
}

/// Sum of squares: `Σ a[i]²`
///
/// # Safety
/// - `a` must be a valid pointer to `len` elements
#[inline]
pub unsafe fn sum_squares_kernel(
    a: *const f64,
    len: usize,
    chunk: usize,
    order: ReductionOrder,
) -> f64 {
    if len == 0 {
        return 0.0;
    }
    let a = std::slice::from_raw_parts(a, len);

    sum_chunks(len, chunk, order, |start, end| {
        a[start..end].iter().fold(0.0f64, |acc, &x| acc + x * x)
    })
}

/// Euclidean norm: `sqrt(Σ a[i]²)`
///
/// Returns `0.0` for `len == 0`. No rescaling is applied, so inputs whose
/// squares overflow give `inf`.
///
/// # Safety
/// - `a` must be a valid pointer to `len` elements
#[inline]
pub unsafe fn magnitude_kernel(
    a: *const f64,
    len: usize,
    chunk: usize,
    order: ReductionOrder,
) -> f64 {
    sum_squares_kernel(a, len, chunk, order).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_small() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        let r = unsafe { dot_kernel(a.as_ptr(), b.as_ptr(), 3, 4096, ReductionOrder::Unordered) };
        assert_eq!(r, 32.0);
    }

    #[test]
    fn test_empty_reductions_are_zero() {
        let null = std::ptr::null();
        let r = unsafe { dot_kernel(null, null, 0, 8, ReductionOrder::Pairwise) };
        assert_eq!(r, 0.0);
        let m = unsafe { magnitude_kernel(std::ptr::null(), 0, 8, ReductionOrder::Unordered) };
        assert_eq!(m, 0.0);
    }

    #[test]
    fn test_magnitude_345() {
        let a = [3.0, 4.0];
        let m = unsafe { magnitude_kernel(a.as_ptr(), 2, 1, ReductionOrder::Pairwise) };
        assert_eq!(m, 5.0);
    }

    #[test]
    fn test_chunked_orders_agree_on_integers() {
        // Integer-valued products sum exactly, so every combination order agrees.
        let a: Vec<f64> = (0..10_000).map(|i| (i % 17) as f64).collect();
        let b: Vec<f64> = (0..10_000).map(|i| (i % 5) as f64).collect();
        let expected: f64 = a.iter().zip(&b).map(|(x, y)| x * y).sum();
        for order in [ReductionOrder::Unordered, ReductionOrder::Pairwise] {
            let r = unsafe { dot_kernel(a.as_ptr(), b.as_ptr(), a.len(), 64, order) };
            assert_eq!(r, expected);
        }
    }
}
