//! Unary operation kernels (trigonometry and the fixed cubic)

use super::parallel::for_each_chunk;
use crate::ops::UnaryOp;

/// Execute a unary operation element-wise: `out[i] = op(a[i])`
///
/// Transcendentals are the standard library's, so domain and NaN behavior
/// pass straight through (e.g. `tan` near odd multiples of π/2 is large but
/// finite).
///
/// # Safety
/// - `a` and `out` must be valid pointers to `len` elements
/// - `out` may equal `a`, but must not partially overlap it
#[inline]
pub unsafe fn unary_op_kernel(op: UnaryOp, a: *const f64, out: *mut f64, len: usize, chunk: usize) {
    let a_addr = a as usize;
    let out_addr = out as usize;

    for_each_chunk(len, chunk, |start, end| unsafe {
        let a = a_addr as *const f64;
        let out = out_addr as *mut f64;
        match op {
            UnaryOp::Sin => unary_range(a, out, start, end, f64::sin),
            UnaryOp::Cos => unary_range(a, out, start, end, f64::cos),
            UnaryOp::Tan => unary_range(a, out, start, end, f64::tan),
            UnaryOp::Poly => unary_range(a, out, start, end, |x| UnaryOp::Poly.apply(x)),
        }
    });
}

#[inline(always)]
unsafe fn unary_range<F>(a: *const f64, out: *mut f64, start: usize, end: usize, f: F)
where
    F: Fn(f64) -> f64,
{
    for i in start..end {
        *out.add(i) = f(*a.add(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn run(op: UnaryOp, a: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; a.len()];
        unsafe { unary_op_kernel(op, a.as_ptr(), out.as_mut_ptr(), a.len(), 16) };
        out
    }

    #[test]
    fn test_trig_matches_std() {
        let x: Vec<f64> = (0..200).map(|i| (i as f64 - 100.0) * 0.173).collect();
        let sin = run(UnaryOp::Sin, &x);
        let cos = run(UnaryOp::Cos, &x);
        let tan = run(UnaryOp::Tan, &x);
        for i in 0..x.len() {
            assert_eq!(sin[i], x[i].sin());
            assert_eq!(cos[i], x[i].cos());
            assert_eq!(tan[i], x[i].tan());
        }
    }

    #[test]
    fn test_special_values() {
        let out = run(UnaryOp::Sin, &[0.0, PI, f64::NAN, f64::INFINITY]);
        assert_eq!(out[0], 0.0);
        assert!(out[1].abs() < 1e-15);
        assert!(out[2].is_nan());
        assert!(out[3].is_nan());

        let tan = run(UnaryOp::Tan, &[FRAC_PI_2]);
        assert!(tan[0].is_finite());
        assert!(tan[0].abs() > 1e15);
    }
}
