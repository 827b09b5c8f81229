//! Helper functions for CPU slice operations
//!
//! Shared by the `ElementwiseOps`, `ReduceOps` and `TransformOps`
//! implementations: validate lengths, then dispatch the raw kernel inside the
//! client's pool.

use super::{CpuClient, kernels};
use crate::error::{Error, Result};
use crate::ops::common::validate_same_len;
use crate::ops::{BinaryOp, UnaryOp};

/// `out = a op b`
pub fn binary_op_impl(
    client: &CpuClient,
    op: BinaryOp,
    a: &[f64],
    b: &[f64],
    out: &mut [f64],
) -> Result<()> {
    let len = a.len();
    validate_same_len(op.name(), len, &[("b", b.len()), ("out", out.len())])?;
    log::trace!("{} over {len} elements", op.name());

    let chunk = client.chunk_size_hint();
    let (a, b, out) = (a.as_ptr() as usize, b.as_ptr() as usize, out.as_mut_ptr() as usize);
    client.install_parallelism(|| unsafe {
        kernels::binary_op_kernel(
            op,
            a as *const f64,
            b as *const f64,
            out as *mut f64,
            len,
            chunk,
        );
    });
    Ok(())
}

/// `a = a op b`
pub fn binary_op_inplace_impl(
    client: &CpuClient,
    op: BinaryOp,
    a: &mut [f64],
    b: &[f64],
) -> Result<()> {
    let len = a.len();
    validate_same_len(op.name(), len, &[("b", b.len())])?;
    log::trace!("{} (in place) over {len} elements", op.name());

    let chunk = client.chunk_size_hint();
    let (a, b) = (a.as_mut_ptr() as usize, b.as_ptr() as usize);
    client.install_parallelism(|| unsafe {
        kernels::binary_op_kernel(op, a as *const f64, b as *const f64, a as *mut f64, len, chunk);
    });
    Ok(())
}

/// `out = a op scalar`
pub fn scalar_op_impl(
    client: &CpuClient,
    op: BinaryOp,
    a: &[f64],
    scalar: f64,
    out: &mut [f64],
) -> Result<()> {
    let len = a.len();
    validate_same_len(op.name(), len, &[("out", out.len())])?;

    let chunk = client.chunk_size_hint();
    let (a, out) = (a.as_ptr() as usize, out.as_mut_ptr() as usize);
    client.install_parallelism(|| unsafe {
        kernels::scalar_op_kernel(op, a as *const f64, scalar, out as *mut f64, len, chunk);
    });
    Ok(())
}

/// `a = a op scalar`
pub fn scalar_op_inplace_impl(client: &CpuClient, op: BinaryOp, a: &mut [f64], scalar: f64) {
    let len = a.len();
    let chunk = client.chunk_size_hint();
    let a = a.as_mut_ptr() as usize;
    client.install_parallelism(|| unsafe {
        kernels::scalar_op_kernel(op, a as *const f64, scalar, a as *mut f64, len, chunk);
    });
}

/// `out = op(a)`
pub fn unary_op_impl(client: &CpuClient, op: UnaryOp, a: &[f64], out: &mut [f64]) -> Result<()> {
    let len = a.len();
    validate_same_len(op.name(), len, &[("out", out.len())])?;
    log::trace!("{} over {len} elements", op.name());

    let chunk = client.chunk_size_hint();
    let (a, out) = (a.as_ptr() as usize, out.as_mut_ptr() as usize);
    client.install_parallelism(|| unsafe {
        kernels::unary_op_kernel(op, a as *const f64, out as *mut f64, len, chunk);
    });
    Ok(())
}

/// `a = op(a)`
pub fn unary_op_inplace_impl(client: &CpuClient, op: UnaryOp, a: &mut [f64]) {
    let len = a.len();
    let chunk = client.chunk_size_hint();
    let a = a.as_mut_ptr() as usize;
    client.install_parallelism(|| unsafe {
        kernels::unary_op_kernel(op, a as *const f64, a as *mut f64, len, chunk);
    });
}

/// Reject the empty coefficient list for the safe `polyval`
pub fn validate_polynomial_coeffs(coeffs: &[f64]) -> Result<()> {
    if coeffs.is_empty() {
        return Err(Error::invalid_argument(
            "coeffs",
            "polynomial must have at least one coefficient",
        ));
    }
    Ok(())
}
