//! Common test utilities
#![allow(dead_code)]

use aranya_prime::ops::ReductionOrder;
use aranya_prime::runtime::cpu::{CpuClient, ParallelismConfig};

/// Route `log` output through the test harness (`RUST_LOG=debug` to see it)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create a CPU client on the global pool with default chunking
pub fn create_cpu_client() -> CpuClient {
    CpuClient::new()
}

/// Create a CPU client with a dedicated pool and a small chunk size, so that
/// modest inputs already take the parallel path
pub fn create_parallel_client(threads: usize, chunk: usize) -> CpuClient {
    CpuClient::new().with_parallelism(ParallelismConfig::new(Some(threads), Some(chunk)))
}

/// Same as [`create_parallel_client`] with the pairwise reduction order
pub fn create_pairwise_client(threads: usize, chunk: usize) -> CpuClient {
    CpuClient::new().with_parallelism(
        ParallelismConfig::new(Some(threads), Some(chunk))
            .with_reduction_order(ReductionOrder::Pairwise),
    )
}

/// Deterministic pseudo-random values in `[lo, hi)` (LCG, no external RNG)
pub fn lcg_values(n: usize, seed: u64, lo: f64, hi: f64) -> Vec<f64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            lo + unit * (hi - lo)
        })
        .collect()
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two scalars are close within a relative tolerance
pub fn assert_close_rel(a: f64, b: f64, rtol: f64, msg: &str) {
    let tol = rtol * b.abs().max(f64::MIN_POSITIVE);
    assert!((a - b).abs() <= tol, "{}: {} vs {} (tol={})", msg, a, b, tol);
}
