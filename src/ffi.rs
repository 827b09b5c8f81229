//! C ABI entry points.
//!
//! These are the `prime_*` symbols a host language loads from the shared
//! library. Every kernel takes a signed 64-bit length first, then output
//! pointer(s), then input pointer(s), then any scalar parameters, and returns
//! nothing. Scalar results are written to `res[0]`.
//!
//! # Calling Convention
//!
//! All functions use the C calling convention and are `no_mangle`, which
//! gives the same exported symbol on every target.
//!
//! # Contract
//!
//! - `n <= 0` is a no-op (reductions still write `0.0` to `res[0]`).
//! - Every buffer must hold at least `n` values. This is not checked.
//! - Outputs may alias the same-position input (`res == a`).
//! - A null pointer with `n > 0` is logged and the call returns without
//!   writing.
//!
//! Kernels run on a process-wide default [`CpuClient`], configured from
//! [`ParallelismConfig::from_env`] on first use and replaceable through
//! [`prime_set_num_threads`].

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::ops::{BinaryOp, UnaryOp};
use crate::runtime::cpu::{CpuClient, ParallelismConfig, kernels};

/// C ABI version
pub const ABI_VERSION: u32 = 1;

static DEFAULT_CLIENT: OnceLock<RwLock<CpuClient>> = OnceLock::new();

fn default_client() -> &'static RwLock<CpuClient> {
    DEFAULT_CLIENT.get_or_init(|| {
        let config = ParallelismConfig::from_env();
        log::debug!("initializing default kernel client with {config:?}");
        RwLock::new(CpuClient::new().with_parallelism(config))
    })
}

/// Snapshot of the default client; the lock is not held while kernels run.
fn client() -> CpuClient {
    default_client().read().clone()
}

#[inline]
fn len_of(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

#[inline]
fn has_null(name: &'static str, ptrs: &[*const f64]) -> bool {
    if ptrs.iter().any(|p| p.is_null()) {
        log::warn!("{name}: null buffer pointer, skipping call");
        return true;
    }
    false
}

/// Run `f`, keeping any panic from unwinding into the host.
#[inline]
fn guard<F: FnOnce()>(name: &'static str, f: F) {
    if catch_unwind(AssertUnwindSafe(f)).is_err() {
        log::error!("{name}: kernel panicked; output buffers may be partially written");
    }
}

unsafe fn binary_entry(
    name: &'static str,
    op: BinaryOp,
    n: i64,
    res: *mut f64,
    a: *const f64,
    b: *const f64,
) {
    let len = len_of(n);
    if len == 0 || has_null(name, &[res.cast_const(), a, b]) {
        return;
    }
    let client = client();
    let chunk = client.chunk_size_hint();
    let (res, a, b) = (res as usize, a as usize, b as usize);
    guard(name, || {
        client.install_parallelism(|| unsafe {
            kernels::binary_op_kernel(
                op,
                a as *const f64,
                b as *const f64,
                res as *mut f64,
                len,
                chunk,
            );
        })
    });
}

unsafe fn unary_entry(name: &'static str, op: UnaryOp, n: i64, res: *mut f64, x: *const f64) {
    let len = len_of(n);
    if len == 0 || has_null(name, &[res.cast_const(), x]) {
        return;
    }
    let client = client();
    let chunk = client.chunk_size_hint();
    let (res, x) = (res as usize, x as usize);
    guard(name, || {
        client.install_parallelism(|| unsafe {
            kernels::unary_op_kernel(op, x as *const f64, res as *mut f64, len, chunk);
        })
    });
}

// ============================================================================
// Array Ops
// ============================================================================

/// Element-wise addition: `res[i] = a[i] + b[i]`
///
/// # Safety
///
/// `res`, `a` and `b` must be valid for `n` values; `res` may equal `a` or `b`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn prime_math_sum(n: i64, res: *mut f64, a: *const f64, b: *const f64) {
    unsafe { binary_entry("prime_math_sum", BinaryOp::Add, n, res, a, b) };
}

/// Element-wise subtraction: `res[i] = a[i] - b[i]`
///
/// # Safety
///
/// `res`, `a` and `b` must be valid for `n` values; `res` may equal `a` or `b`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn prime_sub(n: i64, res: *mut f64, a: *const f64, b: *const f64) {
    unsafe { binary_entry("prime_sub", BinaryOp::Sub, n, res, a, b) };
}

/// Element-wise multiplication: `res[i] = a[i] * b[i]`
///
/// # Safety
///
/// `res`, `a` and `b` must be valid for `n` values; `res` may equal `a` or `b`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn prime_mul(n: i64, res: *mut f64, a: *const f64, b: *const f64) {
    unsafe { binary_entry("prime_mul", BinaryOp::Mul, n, res, a, b) };
}

/// Element-wise division: `res[i] = a[i] / b[i]` (IEEE-754 on zero divisors)
///
/// # Safety
///
/// `res`, `a` and `b` must be valid for `n` values; `res` may equal `a` or `b`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn prime_div(n: i64, res: *mut f64, a: *const f64, b: *const f64) {
    unsafe { binary_entry("prime_div", BinaryOp::Div, n, res, a, b) };
}

// ============================================================================
// Linear Algebra
// ============================================================================

/// Dot product: `res[0] = Σ a[i] * b[i]`
///
/// Exact bits may vary with the thread count unless the default client uses
/// the pairwise reduction order.
///
/// # Safety
///
/// `a` and `b` must be valid for `n` values and `res` for one.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn prime_dot(n: i64, res: *mut f64, a: *const f64, b: *const f64) {
    if res.is_null() {
        log::warn!("prime_dot: null result pointer, skipping call");
        return;
    }
    let len = len_of(n);
    if len > 0 && has_null("prime_dot", &[a, b]) {
        return;
    }
    let client = client();
    let (chunk, order) = (client.chunk_size_hint(), client.reduction_order());
    let (res, a, b) = (res as usize, a as usize, b as usize);
    guard("prime_dot", || {
        let sum = client.install_parallelism(|| unsafe {
            kernels::dot_kernel(a as *const f64, b as *const f64, len, chunk, order)
        });
        unsafe { *(res as *mut f64) = sum };
    });
}

/// Magnitude: `res[0] = sqrt(Σ a[i]²)`
///
/// # Safety
///
/// `a` must be valid for `n` values and `res` for one.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn prime_mag(n: i64, res: *mut f64, a: *const f64) {
    if res.is_null() {
        log::warn!("prime_mag: null result pointer, skipping call");
        return;
    }
    let len = len_of(n);
    if len > 0 && has_null("prime_mag", &[a]) {
        return;
    }
    let client = client();
    let (chunk, order) = (client.chunk_size_hint(), client.reduction_order());
    let (res, a) = (res as usize, a as usize);
    guard("prime_mag", || {
        let mag = client.install_parallelism(|| unsafe {
            kernels::magnitude_kernel(a as *const f64, len, chunk, order)
        });
        unsafe { *(res as *mut f64) = mag };
    });
}

/// Normalize: `res[i] = a[i] / |a|`, or `0.0` everywhere when `|a| == 0`
///
/// # Safety
///
/// `res` and `a` must be valid for `n` values; `res` may equal `a`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn prime_normalize(n: i64, res: *mut f64, a: *const f64) {
    let len = len_of(n);
    if len == 0 || has_null("prime_normalize", &[res.cast_const(), a]) {
        return;
    }
    let client = client();
    let (chunk, order) = (client.chunk_size_hint(), client.reduction_order());
    let (res, a) = (res as usize, a as usize);
    guard("prime_normalize", || {
        client.install_parallelism(|| unsafe {
            kernels::normalize_kernel(a as *const f64, res as *mut f64, len, chunk, order);
        })
    });
}

// ============================================================================
// Polynomials
// ============================================================================

/// Fixed cubic: `res[i] = x[i]^3 + x[i]^2 + x[i]`
///
/// # Safety
///
/// `res` and `x` must be valid for `n` values; `res` may equal `x`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn prime_poly(n: i64, res: *mut f64, x: *const f64) {
    unsafe { unary_entry("prime_poly", UnaryOp::Poly, n, res, x) };
}

/// General polynomial: `res[i] = Σ coeffs[k] * x[i]^k` with `n_coeffs` ascending coefficients
///
/// `n_coeffs <= 0` is the zero polynomial.
///
/// # Safety
///
/// `res` and `x` must be valid for `n` values; `res` may equal `x`.
/// `coeffs` must be valid for `n_coeffs` values and must not overlap `res`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn prime_polyval(
    n: i64,
    res: *mut f64,
    x: *const f64,
    coeffs: *const f64,
    n_coeffs: i64,
) {
    let len = len_of(n);
    let n_coeffs = len_of(n_coeffs);
    if len == 0 || has_null("prime_polyval", &[res.cast_const(), x]) {
        return;
    }
    if n_coeffs > 0 && has_null("prime_polyval", &[coeffs]) {
        return;
    }
    let coeffs: &[f64] = if n_coeffs == 0 {
        &[]
    } else {
        unsafe { std::slice::from_raw_parts(coeffs, n_coeffs) }
    };
    let client = client();
    let chunk = client.chunk_size_hint();
    let (res, x) = (res as usize, x as usize);
    guard("prime_polyval", || {
        client.install_parallelism(|| unsafe {
            kernels::polyval_kernel(coeffs, x as *const f64, res as *mut f64, len, chunk);
        })
    });
}

// ============================================================================
// Trigonometry
// ============================================================================

/// Sine: `res[i] = sin(x[i])`
///
/// # Safety
///
/// `res` and `x` must be valid for `n` values; `res` may equal `x`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn prime_sin(n: i64, res: *mut f64, x: *const f64) {
    unsafe { unary_entry("prime_sin", UnaryOp::Sin, n, res, x) };
}

/// Cosine: `res[i] = cos(x[i])`
///
/// # Safety
///
/// `res` and `x` must be valid for `n` values; `res` may equal `x`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn prime_cos(n: i64, res: *mut f64, x: *const f64) {
    unsafe { unary_entry("prime_cos", UnaryOp::Cos, n, res, x) };
}

/// Tangent: `res[i] = tan(x[i])`
///
/// # Safety
///
/// `res` and `x` must be valid for `n` values; `res` may equal `x`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn prime_tan(n: i64, res: *mut f64, x: *const f64) {
    unsafe { unary_entry("prime_tan", UnaryOp::Tan, n, res, x) };
}

// ============================================================================
// Transforms
// ============================================================================

/// Scale: `res[i] = a[i] * scalar`
///
/// # Safety
///
/// `res` and `a` must be valid for `n` values; `res` may equal `a`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn prime_scale(n: i64, res: *mut f64, a: *const f64, scalar: f64) {
    let len = len_of(n);
    if len == 0 || has_null("prime_scale", &[res.cast_const(), a]) {
        return;
    }
    let client = client();
    let chunk = client.chunk_size_hint();
    let (res, a) = (res as usize, a as usize);
    guard("prime_scale", || {
        client.install_parallelism(|| unsafe {
            kernels::scalar_op_kernel(
                BinaryOp::Mul,
                a as *const f64,
                scalar,
                res as *mut f64,
                len,
                chunk,
            );
        })
    });
}

/// 2D rotation by `angle` radians
///
/// `res_x[i] = x*cos - y*sin`, `res_y[i] = x*sin + y*cos`.
///
/// # Safety
///
/// All four buffers must be valid for `n` values. `res_x` may equal `in_x` and
/// `res_y` may equal `in_y`; `res_x` must not overlap `in_y` (nor `res_y` `in_x`).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn prime_rotate_2d(
    n: i64,
    res_x: *mut f64,
    res_y: *mut f64,
    in_x: *const f64,
    in_y: *const f64,
    angle: f64,
) {
    let len = len_of(n);
    let buffers = [res_x.cast_const(), res_y.cast_const(), in_x, in_y];
    if len == 0 || has_null("prime_rotate_2d", &buffers) {
        return;
    }
    let client = client();
    let chunk = client.chunk_size_hint();
    let (res_x, res_y) = (res_x as usize, res_y as usize);
    let (in_x, in_y) = (in_x as usize, in_y as usize);
    guard("prime_rotate_2d", || {
        client.install_parallelism(|| unsafe {
            kernels::rotate_2d_kernel(
                in_x as *const f64,
                in_y as *const f64,
                res_x as *mut f64,
                res_y as *mut f64,
                len,
                angle,
                chunk,
            );
        })
    });
}

// ============================================================================
// Runtime Configuration
// ============================================================================

/// Resize the default client's worker pool
///
/// `n <= 0` returns to rayon's global pool, and `n` above
/// [`max_num_threads`](crate::runtime::cpu::max_num_threads) is clamped to
/// it. Chunk size and reduction order are kept. Calls already running finish
/// on the pool they started with.
#[unsafe(no_mangle)]
pub extern "C" fn prime_set_num_threads(n: i64) {
    guard("prime_set_num_threads", || {
        let current = *default_client().read().parallelism();
        let threads = Some(len_of(n)).filter(|&t| t > 0);
        let config = ParallelismConfig::new(threads, Some(current.chunk_size()))
            .with_reduction_order(current.reduction_order());
        log::debug!("reconfiguring default kernel client: {config:?}");

        // The pool is built before the lock is taken; kernel calls keep
        // snapshotting the old client meanwhile.
        let replacement = CpuClient::new().with_parallelism(config);
        *default_client().write() = replacement;
    });
}

/// Number of worker threads the default client runs kernels on
#[unsafe(no_mangle)]
pub extern "C" fn prime_get_num_threads() -> i64 {
    i64::try_from(client().num_threads()).unwrap_or(i64::MAX)
}

/// Get the C ABI version
///
/// Lets a host check that it was built against a compatible library.
#[unsafe(no_mangle)]
pub extern "C" fn prime_abi_version() -> u32 {
    ABI_VERSION
}
