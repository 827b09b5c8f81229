//! CPU implementation of element-wise operations.

use crate::error::Result;
use crate::ops::{BinaryOp, ElementwiseOps, UnaryOp};
use crate::ops::common::validate_len;
use crate::runtime::cpu::{
    CpuClient,
    helpers::{
        binary_op_impl, binary_op_inplace_impl, scalar_op_impl, scalar_op_inplace_impl,
        unary_op_impl, unary_op_inplace_impl, validate_polynomial_coeffs,
    },
    kernels,
};

/// ElementwiseOps implementation for CPU runtime.
impl ElementwiseOps for CpuClient {
    fn add(&self, a: &[f64], b: &[f64], out: &mut [f64]) -> Result<()> {
        binary_op_impl(self, BinaryOp::Add, a, b, out)
    }

    fn sub(&self, a: &[f64], b: &[f64], out: &mut [f64]) -> Result<()> {
        binary_op_impl(self, BinaryOp::Sub, a, b, out)
    }

    fn mul(&self, a: &[f64], b: &[f64], out: &mut [f64]) -> Result<()> {
        binary_op_impl(self, BinaryOp::Mul, a, b, out)
    }

    fn div(&self, a: &[f64], b: &[f64], out: &mut [f64]) -> Result<()> {
        binary_op_impl(self, BinaryOp::Div, a, b, out)
    }

    fn add_inplace(&self, a: &mut [f64], b: &[f64]) -> Result<()> {
        binary_op_inplace_impl(self, BinaryOp::Add, a, b)
    }

    fn sub_inplace(&self, a: &mut [f64], b: &[f64]) -> Result<()> {
        binary_op_inplace_impl(self, BinaryOp::Sub, a, b)
    }

    fn mul_inplace(&self, a: &mut [f64], b: &[f64]) -> Result<()> {
        binary_op_inplace_impl(self, BinaryOp::Mul, a, b)
    }

    fn div_inplace(&self, a: &mut [f64], b: &[f64]) -> Result<()> {
        binary_op_inplace_impl(self, BinaryOp::Div, a, b)
    }

    fn scale(&self, a: &[f64], scalar: f64, out: &mut [f64]) -> Result<()> {
        scalar_op_impl(self, BinaryOp::Mul, a, scalar, out)
    }

    fn scale_inplace(&self, a: &mut [f64], scalar: f64) {
        scalar_op_inplace_impl(self, BinaryOp::Mul, a, scalar)
    }

    fn poly(&self, x: &[f64], out: &mut [f64]) -> Result<()> {
        unary_op_impl(self, UnaryOp::Poly, x, out)
    }

    fn poly_inplace(&self, x: &mut [f64]) {
        unary_op_inplace_impl(self, UnaryOp::Poly, x)
    }

    fn polyval(&self, coeffs: &[f64], x: &[f64], out: &mut [f64]) -> Result<()> {
        validate_polynomial_coeffs(coeffs)?;
        let len = x.len();
        validate_len("polyval", "out", len, out.len())?;

        let chunk = self.chunk_size_hint();
        let (x, out) = (x.as_ptr() as usize, out.as_mut_ptr() as usize);
        self.install_parallelism(|| unsafe {
            kernels::polyval_kernel(coeffs, x as *const f64, out as *mut f64, len, chunk);
        });
        Ok(())
    }

    fn polyval_inplace(&self, coeffs: &[f64], x: &mut [f64]) -> Result<()> {
        validate_polynomial_coeffs(coeffs)?;
        let len = x.len();
        let chunk = self.chunk_size_hint();
        let x = x.as_mut_ptr() as usize;
        self.install_parallelism(|| unsafe {
            kernels::polyval_kernel(coeffs, x as *const f64, x as *mut f64, len, chunk);
        });
        Ok(())
    }

    fn sin(&self, x: &[f64], out: &mut [f64]) -> Result<()> {
        unary_op_impl(self, UnaryOp::Sin, x, out)
    }

    fn cos(&self, x: &[f64], out: &mut [f64]) -> Result<()> {
        unary_op_impl(self, UnaryOp::Cos, x, out)
    }

    fn tan(&self, x: &[f64], out: &mut [f64]) -> Result<()> {
        unary_op_impl(self, UnaryOp::Tan, x, out)
    }

    fn sin_inplace(&self, x: &mut [f64]) {
        unary_op_inplace_impl(self, UnaryOp::Sin, x)
    }

    fn cos_inplace(&self, x: &mut [f64]) {
        unary_op_inplace_impl(self, UnaryOp::Cos, x)
    }

    fn tan_inplace(&self, x: &mut [f64]) {
        unary_op_inplace_impl(self, UnaryOp::Tan, x)
    }
}
