//! CPU implementation of reduction operations.

use crate::error::Result;
use crate::ops::ReduceOps;
use crate::ops::common::validate_len;
use crate::runtime::cpu::{CpuClient, kernels};

/// ReduceOps implementation for CPU runtime.
impl ReduceOps for CpuClient {
    fn dot(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        let len = a.len();
        validate_len("dot", "b", len, b.len())?;

        let (chunk, order) = (self.chunk_size_hint(), self.reduction_order());
        let (a, b) = (a.as_ptr() as usize, b.as_ptr() as usize);
        Ok(self.install_parallelism(|| unsafe {
            kernels::dot_kernel(a as *const f64, b as *const f64, len, chunk, order)
        }))
    }

    fn magnitude(&self, a: &[f64]) -> f64 {
        let len = a.len();
        let (chunk, order) = (self.chunk_size_hint(), self.reduction_order());
        let a = a.as_ptr() as usize;
        self.install_parallelism(|| unsafe {
            kernels::magnitude_kernel(a as *const f64, len, chunk, order)
        })
    }

    fn normalize(&self, a: &[f64], out: &mut [f64]) -> Result<()> {
        let len = a.len();
        validate_len("normalize", "out", len, out.len())?;

        let (chunk, order) = (self.chunk_size_hint(), self.reduction_order());
        let (a, out) = (a.as_ptr() as usize, out.as_mut_ptr() as usize);
        self.install_parallelism(|| unsafe {
            kernels::normalize_kernel(a as *const f64, out as *mut f64, len, chunk, order);
        });
        Ok(())
    }

    fn normalize_inplace(&self, a: &mut [f64]) {
        let len = a.len();
        let (chunk, order) = (self.chunk_size_hint(), self.reduction_order());
        let a = a.as_mut_ptr() as usize;
        self.install_parallelism(|| unsafe {
            kernels::normalize_kernel(a as *const f64, a as *mut f64, len, chunk, order);
        });
    }
}
