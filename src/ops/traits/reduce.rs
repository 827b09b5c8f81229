//! Reduction operations trait.

use crate::error::Result;

/// Reductions over `f64` slices.
///
/// Results depend on the client's [`ReductionOrder`](crate::ops::ReductionOrder):
/// with the default unordered combination the last bits may vary with the
/// thread count; with `Pairwise` they are reproducible.
pub trait ReduceOps {
    /// Dot product `Σ a[i] * b[i]` (`0.0` for empty input)
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` if `b.len() != a.len()`
    fn dot(&self, a: &[f64], b: &[f64]) -> Result<f64>;

    /// Euclidean norm `sqrt(Σ a[i]²)` (`0.0` for empty input)
    fn magnitude(&self, a: &[f64]) -> f64;

    /// Unit vector: `out[i] = a[i] / magnitude(a)`
    ///
    /// If the magnitude is exactly zero every output is `0.0`, not NaN.
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` if `out.len() != a.len()`
    fn normalize(&self, a: &[f64], out: &mut [f64]) -> Result<()>;

    /// In-place normalize
    fn normalize_inplace(&self, a: &mut [f64]);
}
