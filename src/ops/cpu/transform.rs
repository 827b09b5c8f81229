//! CPU implementation of geometric transforms.

use crate::error::Result;
use crate::ops::TransformOps;
use crate::ops::common::{validate_len, validate_same_len};
use crate::runtime::cpu::{CpuClient, kernels};

/// TransformOps implementation for CPU runtime.
impl TransformOps for CpuClient {
    fn rotate_2d(
        &self,
        x: &[f64],
        y: &[f64],
        angle: f64,
        out_x: &mut [f64],
        out_y: &mut [f64],
    ) -> Result<()> {
        let len = x.len();
        validate_same_len(
            "rotate_2d",
            len,
            &[("y", y.len()), ("out_x", out_x.len()), ("out_y", out_y.len())],
        )?;

        let chunk = self.chunk_size_hint();
        let (x, y) = (x.as_ptr() as usize, y.as_ptr() as usize);
        let (out_x, out_y) = (out_x.as_mut_ptr() as usize, out_y.as_mut_ptr() as usize);
        self.install_parallelism(|| unsafe {
            kernels::rotate_2d_kernel(
                x as *const f64,
                y as *const f64,
                out_x as *mut f64,
                out_y as *mut f64,
                len,
                angle,
                chunk,
            );
        });
        Ok(())
    }

    fn rotate_2d_inplace(&self, x: &mut [f64], y: &mut [f64], angle: f64) -> Result<()> {
        let len = x.len();
        validate_len("rotate_2d", "y", len, y.len())?;

        let chunk = self.chunk_size_hint();
        let (x, y) = (x.as_mut_ptr() as usize, y.as_mut_ptr() as usize);
        self.install_parallelism(|| unsafe {
            kernels::rotate_2d_kernel(
                x as *const f64,
                y as *const f64,
                x as *mut f64,
                y as *mut f64,
                len,
                angle,
                chunk,
            );
        });
        Ok(())
    }
}
