//! Reduction configuration types

/// Order in which partial sums of a reduction are combined
///
/// # Determinism
///
/// With [`ReductionOrder::Unordered`] each worker accumulates its own partial
/// sum and the partials are combined in whatever order work stealing produces.
/// The result is within floating-point accumulation error of the exact sum,
/// but may differ in the last few ULPs between runs with different thread
/// counts.
///
/// [`ReductionOrder::Pairwise`] splits the input into fixed-size blocks and
/// combines block sums along a fixed binary tree. The tree depends only on the
/// length and the chunk size, so the result is bit-identical for any number
/// of threads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ReductionOrder {
    /// Per-worker partial sums, combined in unspecified order
    #[default]
    Unordered,
    /// Fixed pairwise tree over fixed-size blocks
    Pairwise,
}
