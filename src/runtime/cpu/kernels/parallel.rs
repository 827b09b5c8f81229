//! Chunked parallel-for and reduction drivers
//!
//! `[0, len)` is cut into `len.div_ceil(chunk)` fixed ranges. A single range
//! runs inline; more than one is spread over the current rayon pool.

use crate::ops::ReductionOrder;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

#[inline]
fn chunk_range(index: usize, chunk: usize, len: usize) -> (usize, usize) {
    let start = index * chunk;
    (start, (start + chunk).min(len))
}

/// Call `f(start, end)` once for every chunk of `[0, len)`.
///
/// Chunks are disjoint and their execution order is unspecified.
pub(crate) fn for_each_chunk<F>(len: usize, chunk: usize, f: F)
where
    F: Fn(usize, usize) + Send + Sync,
{
    if len == 0 {
        return;
    }
    let chunk = chunk.max(1);
    let chunks = len.div_ceil(chunk);

    #[cfg(feature = "rayon")]
    if chunks > 1 {
        (0..chunks).into_par_iter().for_each(|c| {
            let (start, end) = chunk_range(c, chunk, len);
            f(start, end);
        });
        return;
    }

    #[cfg(not(feature = "rayon"))]
    if chunks > 1 {
        for c in 0..chunks {
            let (start, end) = chunk_range(c, chunk, len);
            f(start, end);
        }
        return;
    }

    f(0, len);
}

/// Sum `f(start, end)` over every chunk of `[0, len)`.
///
/// `f` must return the sequential sum of its own range. How chunk sums are
/// combined is decided by `order`; see [`ReductionOrder`].
pub(crate) fn sum_chunks<F>(len: usize, chunk: usize, order: ReductionOrder, f: F) -> f64
where
    F: Fn(usize, usize) -> f64 + Send + Sync,
{
    if len == 0 {
        return 0.0;
    }
    let chunk = chunk.max(1);
    let chunks = len.div_ceil(chunk);
    if chunks == 1 {
        return f(0, len);
    }

    match order {
        ReductionOrder::Unordered => unordered_sum(len, chunk, chunks, &f),
        ReductionOrder::Pairwise => pairwise_sum(len, chunk, 0, chunks, &f),
    }
}

#[cfg(feature = "rayon")]
fn unordered_sum<F>(len: usize, chunk: usize, chunks: usize, f: &F) -> f64
where
    F: Fn(usize, usize) -> f64 + Send + Sync,
{
    (0..chunks)
        .into_par_iter()
        .fold(
            || 0.0f64,
            |acc, c| {
                let (start, end) = chunk_range(c, chunk, len);
                acc + f(start, end)
            },
        )
        .sum::<f64>()
}

#[cfg(not(feature = "rayon"))]
fn unordered_sum<F>(len: usize, chunk: usize, chunks: usize, f: &F) -> f64
where
    F: Fn(usize, usize) -> f64 + Send + Sync,
{
    (0..chunks)
        .map(|c| {
            let (start, end) = chunk_range(c, chunk, len);
            f(start, end)
        })
        .sum()
}

/// Fixed binary tree over chunks `[lo, hi)`; the shape depends only on `hi - lo`.
fn pairwise_sum<F>(len: usize, chunk: usize, lo: usize, hi: usize, f: &F) -> f64
where
    F: Fn(usize, usize) -> f64 + Send + Sync,
{
    if hi - lo == 1 {
        let (start, end) = chunk_range(lo, chunk, len);
        return f(start, end);
    }
    let mid = lo + (hi - lo) / 2;

    #[cfg(feature = "rayon")]
    let (left, right) = rayon::join(
        || pairwise_sum(len, chunk, lo, mid, f),
        || pairwise_sum(len, chunk, mid, hi, f),
    );
    #[cfg(not(feature = "rayon"))]
    let (left, right) = (
        pairwise_sum(len, chunk, lo, mid, f),
        pairwise_sum(len, chunk, mid, hi, f),
    );

    left + right
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_for_each_chunk_covers_range_once() {
        let seen = Mutex::new(Vec::new());
        for_each_chunk(10, 3, |start, end| seen.lock().unwrap().push((start, end)));
        let mut seen = seen.into_inner().unwrap();
        seen.sort();
        assert_eq!(seen, vec![(0, 3), (3, 6), (6, 9), (9, 10)]);
    }

    #[test]
    fn test_for_each_chunk_empty_is_noop() {
        for_each_chunk(0, 4, |_, _| panic!("no chunk expected"));
    }

    #[test]
    fn test_sum_chunks_counts_indices() {
        let count = |start: usize, end: usize| (end - start) as f64;
        for order in [ReductionOrder::Unordered, ReductionOrder::Pairwise] {
            assert_eq!(sum_chunks(0, 4, order, count), 0.0);
            assert_eq!(sum_chunks(3, 4, order, count), 3.0);
            assert_eq!(sum_chunks(1001, 7, order, count), 1001.0);
        }
    }

    #[test]
    fn test_zero_chunk_is_treated_as_one() {
        let count = |start: usize, end: usize| (end - start) as f64;
        assert_eq!(sum_chunks(5, 0, ReductionOrder::Pairwise, count), 5.0);
    }
}
