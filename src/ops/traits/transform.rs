//! Geometric transform operations trait.

use crate::error::Result;

/// 2D transforms over paired coordinate slices.
pub trait TransformOps {
    /// Rotate each point `(x[i], y[i])` by `angle` radians
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` if any of `y`, `out_x`, `out_y` differs in length from `x`
    fn rotate_2d(
        &self,
        x: &[f64],
        y: &[f64],
        angle: f64,
        out_x: &mut [f64],
        out_y: &mut [f64],
    ) -> Result<()>;

    /// Rotate in place: `x` and `y` are overwritten with the rotated points
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` if `y.len() != x.len()`
    fn rotate_2d_inplace(&self, x: &mut [f64], y: &mut [f64], angle: f64) -> Result<()>;
}
