//! Integration tests for the `prime_*` C entry points
//!
//! The entry points share a process-wide default client, so tests that
//! resize it only assert properties that hold for any pool size.

mod common;

use std::ptr;

use aranya_prime::ffi::*;
use aranya_prime::prelude::*;
use aranya_prime::runtime::cpu::max_num_threads;
use common::{assert_allclose_f64, assert_close_rel, create_cpu_client, init_logging, lcg_values};

#[test]
fn test_abi_version() {
    assert_eq!(prime_abi_version(), ABI_VERSION);
    assert_eq!(ABI_VERSION, 1);
}

#[test]
fn test_binary_entry_points_match_safe_api() {
    let client = create_cpu_client();
    let n = 20_011;
    let a = lcg_values(n, 31, -10.0, 10.0);
    let b = lcg_values(n, 32, 0.1, 10.0);
    let mut expected = vec![0.0; n];
    let mut res = vec![0.0; n];

    type BinaryFn = unsafe extern "C" fn(i64, *mut f64, *const f64, *const f64);
    let cases: [(&str, BinaryFn); 4] = [
        ("add", prime_math_sum),
        ("sub", prime_sub),
        ("mul", prime_mul),
        ("div", prime_div),
    ];

    for (name, f) in cases {
        match name {
            "add" => client.add(&a, &b, &mut expected).unwrap(),
            "sub" => client.sub(&a, &b, &mut expected).unwrap(),
            "mul" => client.mul(&a, &b, &mut expected).unwrap(),
            _ => client.div(&a, &b, &mut expected).unwrap(),
        }
        unsafe { f(n as i64, res.as_mut_ptr(), a.as_ptr(), b.as_ptr()) };
        assert_eq!(res, expected, "{name}");
    }
}

#[test]
fn test_concrete_scenarios() {
    let a = [1.0, 2.0, 3.0];
    let b = [4.0, 5.0, 6.0];
    let mut res = [0.0; 3];

    unsafe { prime_sub(3, res.as_mut_ptr(), a.as_ptr(), b.as_ptr()) };
    assert_eq!(res, [-3.0, -3.0, -3.0]);

    unsafe { prime_mul(3, res.as_mut_ptr(), a.as_ptr(), b.as_ptr()) };
    assert_eq!(res, [4.0, 10.0, 18.0]);

    let mut scalar = [f64::NAN];
    unsafe { prime_dot(3, scalar.as_mut_ptr(), a.as_ptr(), b.as_ptr()) };
    assert_eq!(scalar, [32.0]);

    unsafe { prime_mag(2, scalar.as_mut_ptr(), [3.0, 4.0].as_ptr()) };
    assert_eq!(scalar, [5.0]);

    let mut unit = [0.0; 2];
    unsafe { prime_normalize(2, unit.as_mut_ptr(), [3.0, 4.0].as_ptr()) };
    assert_eq!(unit, [0.6, 0.8]);

    let mut p = [0.0];
    unsafe { prime_poly(1, p.as_mut_ptr(), [2.0].as_ptr()) };
    assert_eq!(p, [14.0]);
}

#[test]
fn test_in_place_aliasing() {
    let a = lcg_values(9000, 33, -1.0, 1.0);
    let b = lcg_values(9000, 34, -1.0, 1.0);
    let mut buf = a.clone();
    let p = buf.as_mut_ptr();
    unsafe { prime_sub(9000, p, p, b.as_ptr()) };
    assert!(buf.iter().zip(a.iter().zip(&b)).all(|(r, (x, y))| *r == x - y));

    let mut buf = a.clone();
    let p = buf.as_mut_ptr();
    unsafe { prime_sin(9000, p, p) };
    assert!(buf.iter().zip(&a).all(|(r, x)| *r == x.sin()));

    let mut buf = a.clone();
    let p = buf.as_mut_ptr();
    unsafe { prime_scale(9000, p, p, 3.0) };
    assert!(buf.iter().zip(&a).all(|(r, x)| *r == x * 3.0));

    let mut buf = a.clone();
    let p = buf.as_mut_ptr();
    unsafe { prime_poly(9000, p, p) };
    assert!(buf.iter().zip(&a).all(|(r, x)| *r == x * x * x + x * x + x));

    let client = create_cpu_client();
    let mut expected = vec![0.0; a.len()];
    client.normalize(&a, &mut expected).unwrap();
    let mut buf = a.clone();
    let p = buf.as_mut_ptr();
    unsafe { prime_normalize(9000, p, p) };
    assert_allclose_f64(&buf, &expected, 1e-13, 0.0, "normalize in place");

    let mut zeros = vec![0.0; 9000];
    let p = zeros.as_mut_ptr();
    unsafe { prime_normalize(9000, p, p) };
    assert!(zeros.iter().all(|&v| v == 0.0));
}

#[test]
fn test_oversized_thread_request_is_clamped() {
    init_logging();
    prime_set_num_threads(1 << 20);
    let threads = prime_get_num_threads();
    assert!(threads >= 1);
    assert!(threads as usize <= max_num_threads(), "{threads} threads");

    let a = lcg_values(10_000, 40, -1.0, 1.0);
    let mut res = [0.0];
    unsafe { prime_mag(10_000, res.as_mut_ptr(), a.as_ptr()) };
    assert_close_rel(res[0], a.iter().map(|v| v * v).sum::<f64>().sqrt(), 1e-12, "mag");

    prime_set_num_threads(0);
}

#[test]
fn test_non_positive_length_is_noop() {
    let a = [1.0, 2.0];
    let mut res = [7.0, 7.0];
    for n in [0, -1, i64::MIN] {
        unsafe {
            prime_sub(n, res.as_mut_ptr(), a.as_ptr(), a.as_ptr());
            prime_cos(n, res.as_mut_ptr(), a.as_ptr());
            prime_poly(n, res.as_mut_ptr(), a.as_ptr());
            prime_normalize(n, res.as_mut_ptr(), a.as_ptr());
            prime_scale(n, res.as_mut_ptr(), a.as_ptr(), 2.0);
        }
        assert_eq!(res, [7.0, 7.0], "n={n}");
    }
}

#[test]
fn test_reductions_write_zero_for_empty_input() {
    let mut res = [f64::NAN];
    unsafe { prime_dot(0, res.as_mut_ptr(), ptr::null(), ptr::null()) };
    assert_eq!(res, [0.0]);

    let mut res = [f64::NAN];
    unsafe { prime_mag(-5, res.as_mut_ptr(), ptr::null()) };
    assert_eq!(res, [0.0]);
}

#[test]
fn test_null_pointers_are_skipped() {
    init_logging();
    let a = [1.0, 2.0];
    unsafe {
        prime_sub(2, ptr::null_mut(), a.as_ptr(), a.as_ptr());
        prime_dot(2, ptr::null_mut(), a.as_ptr(), a.as_ptr());
        prime_rotate_2d(2, ptr::null_mut(), ptr::null_mut(), a.as_ptr(), a.as_ptr(), 1.0);
    }

    let mut res = [7.0];
    unsafe { prime_mag(2, res.as_mut_ptr(), ptr::null()) };
    assert_eq!(res, [7.0]);
}

#[test]
fn test_polyval_entry_point() {
    let x = [0.0, 1.0, 2.0, -1.0];
    let coeffs = [1.0, -1.0, 2.0];
    let mut res = [0.0; 4];
    unsafe { prime_polyval(4, res.as_mut_ptr(), x.as_ptr(), coeffs.as_ptr(), 3) };
    assert_eq!(res, [1.0, 2.0, 7.0, 4.0]);

    // no coefficients: the zero polynomial
    let mut res = [9.0; 4];
    unsafe { prime_polyval(4, res.as_mut_ptr(), x.as_ptr(), ptr::null(), 0) };
    assert_eq!(res, [0.0; 4]);
}

#[test]
fn test_rotate_entry_point_matches_safe_api() {
    let client = create_cpu_client();
    let x = lcg_values(5000, 35, -1.0, 1.0);
    let y = lcg_values(5000, 36, -1.0, 1.0);
    let (mut ex, mut ey) = (vec![0.0; 5000], vec![0.0; 5000]);
    client.rotate_2d(&x, &y, 2.0, &mut ex, &mut ey).unwrap();

    let (mut rx, mut ry) = (x.clone(), y.clone());
    let (px, py) = (rx.as_mut_ptr(), ry.as_mut_ptr());
    unsafe { prime_rotate_2d(5000, px, py, px, py, 2.0) };
    assert_eq!(rx, ex);
    assert_eq!(ry, ey);
}

#[test]
fn test_trig_entry_points() {
    let x = lcg_values(100, 37, 0.0, 1.0);
    let mut res = vec![0.0; 100];

    unsafe { prime_cos(100, res.as_mut_ptr(), x.as_ptr()) };
    assert_allclose_f64(&res, &x.iter().map(|v| v.cos()).collect::<Vec<_>>(), 0.0, 0.0, "cos");

    unsafe { prime_tan(100, res.as_mut_ptr(), x.as_ptr()) };
    assert_allclose_f64(&res, &x.iter().map(|v| v.tan()).collect::<Vec<_>>(), 0.0, 0.0, "tan");
}

#[test]
fn test_set_num_threads_keeps_results_stable() {
    init_logging();
    let n = 300_007;
    let a = lcg_values(n, 38, -1.0, 1.0);
    let b = lcg_values(n, 39, -1.0, 1.0);
    let mut reference = [0.0];
    unsafe { prime_dot(n as i64, reference.as_mut_ptr(), a.as_ptr(), b.as_ptr()) };

    for threads in [1, 3, 0] {
        prime_set_num_threads(threads);
        assert!(prime_get_num_threads() >= 1);

        let mut res = [0.0];
        unsafe { prime_dot(n as i64, res.as_mut_ptr(), a.as_ptr(), b.as_ptr()) };
        assert_close_rel(res[0], reference[0], 1e-9, &format!("threads={threads}"));
    }
}
